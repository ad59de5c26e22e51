use crate::convert::{CaptureError, ConverterRegistry};

/// Behaviour to bind an explicit generic type T from raw `&str` values.
///
/// We use this at the bottom of the binding object graph so the compiler can
/// maintain each field's type.
pub trait GenericBindable<'a, T> {
    /// Declare that the field's descriptor has been matched in the parse result.
    fn matched(&mut self);

    /// Convert a raw value and write it into the field.
    fn capture(&mut self, registry: &ConverterRegistry, token: &str) -> Result<(), CaptureError>;
}

/// Behaviour to bind an implicit generic type T from raw `&str` values.
///
/// We use this at the middle/top of the binding object graph so that fields of
/// differing types may all be driven by a single binding engine.
pub(crate) trait AnonymousBindable {
    /// Declare that the field's descriptor has been matched in the parse result.
    fn matched(&mut self);

    /// Convert a raw value anonymously and write it into the field.
    fn capture(&mut self, registry: &ConverterRegistry, token: &str) -> Result<(), CaptureError>;
}

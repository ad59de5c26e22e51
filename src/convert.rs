use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;

/// A conversion failure at the bottom of the binding graph.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The raw token could not be coerced into the field type.
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidConversion {
        /// The offending raw token.
        token: String,
        /// The declared field type.
        type_name: &'static str,
    },

    /// The field type has neither a built-in coercion nor a registered converter.
    #[error("no converter registered for {type_name}.")]
    UnsupportedType {
        /// The declared field type.
        type_name: &'static str,
    },
}

type AnyConverter = Box<dyn Fn(&str) -> Result<Box<dyn Any>, String>>;

/// The process-lifetime mapping from a field type to its converter.
///
/// Populated during the single-threaded setup phase and read-only afterwards.
/// A registered converter takes precedence over the built-in [`FromStr`]
/// coercion, which is the hook by which enum-like or custom types are
/// supported.
///
/// ### Example
/// ```
/// use contour::ConverterRegistry;
///
/// let mut registry = ConverterRegistry::default();
/// registry.register::<u32, _>(|token| {
///     token
///         .trim_start_matches('#')
///         .parse::<u32>()
///         .map_err(|e| e.to_string())
/// });
///
/// let value: u32 = registry.convert("#5").unwrap();
/// assert_eq!(value, 5);
/// ```
#[derive(Default)]
pub struct ConverterRegistry {
    converters: HashMap<TypeId, AnyConverter>,
}

impl std::fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("registered", &self.converters.len())
            .finish()
    }
}

impl ConverterRegistry {
    /// Register a converter for the type `T`.
    /// Expected to be called before any binding occurs.
    /// If repeated for the same `T`, only the final converter will apply.
    pub fn register<T, F>(&mut self, convert: F)
    where
        T: 'static,
        F: Fn(&str) -> Result<T, String> + 'static,
    {
        self.converters.insert(
            TypeId::of::<T>(),
            Box::new(move |token| convert(token).map(|value| Box::new(value) as Box<dyn Any>)),
        );
    }

    /// Convert a raw token into `T`.
    /// A registered converter wins; otherwise fall back to `T::from_str`.
    pub fn convert<T: FromStr + 'static>(&self, token: &str) -> Result<T, CaptureError> {
        match self.lookup::<T>(token)? {
            Some(value) => Ok(value),
            None => T::from_str(token).map_err(|_| CaptureError::InvalidConversion {
                token: token.to_string(),
                type_name: std::any::type_name::<T>(),
            }),
        }
    }

    /// Convert a raw token into `T` through the registry only.
    /// Used for field types without a built-in coercion.
    pub fn convert_registered<T: 'static>(&self, token: &str) -> Result<T, CaptureError> {
        match self.lookup::<T>(token)? {
            Some(value) => Ok(value),
            None => Err(CaptureError::UnsupportedType {
                type_name: std::any::type_name::<T>(),
            }),
        }
    }

    fn lookup<T: 'static>(&self, token: &str) -> Result<Option<T>, CaptureError> {
        match self.converters.get(&TypeId::of::<T>()) {
            Some(converter) => {
                let any = converter(token).map_err(|_| CaptureError::InvalidConversion {
                    token: token.to_string(),
                    type_name: std::any::type_name::<T>(),
                })?;
                let value = any
                    .downcast::<T>()
                    .expect("internal error - converter must produce its registered type");
                Ok(Some(*value))
            }
            None => Ok(None),
        }
    }
}

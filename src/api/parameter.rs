use crate::api::capture::{AnonymousBindable, GenericBindable};
use crate::convert::{CaptureError, ConverterRegistry};
use crate::metadata::{ArgumentDescriptor, ArgumentsDescriptor, OptionDescriptor};

// We need a (dyn .. [ignoring T] ..) here in order to put all the fields of
// varying types T under one collection.  The bottom of the object graph keeps
// the types T; up here we work across all T.
pub(crate) struct AnonymousCapture<'a, T: 'a> {
    field: Box<dyn GenericBindable<'a, T> + 'a>,
}

impl<'a, T> AnonymousCapture<'a, T> {
    pub(crate) fn bind(field: impl GenericBindable<'a, T> + 'a) -> Self {
        Self {
            field: Box::new(field),
        }
    }
}

impl<'a, T> AnonymousBindable for AnonymousCapture<'a, T> {
    fn matched(&mut self) {
        self.field.matched();
    }

    fn capture(&mut self, registry: &ConverterRegistry, token: &str) -> Result<(), CaptureError> {
        self.field.capture(registry, token)
    }
}

/// An option descriptor paired with the capture capability for its target field.
pub struct OptionBinding<'a> {
    pub(crate) descriptor: OptionDescriptor,
    pub(crate) sink: Box<dyn AnonymousBindable + 'a>,
}

impl<'a> OptionBinding<'a> {
    /// Pair a descriptor with a field capture.
    pub fn new<T: 'a>(
        descriptor: OptionDescriptor,
        field: impl GenericBindable<'a, T> + 'a,
    ) -> Self {
        Self {
            descriptor,
            sink: Box::new(AnonymousCapture::bind(field)),
        }
    }
}

impl<'a> std::fmt::Debug for OptionBinding<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OptionBinding[{:?}]", self.descriptor)
    }
}

/// An ordered-argument descriptor paired with its field capture.
pub struct ArgumentBinding<'a> {
    pub(crate) descriptor: ArgumentDescriptor,
    pub(crate) sink: Box<dyn AnonymousBindable + 'a>,
}

impl<'a> ArgumentBinding<'a> {
    /// Pair a descriptor with a field capture.
    pub fn new<T: 'a>(
        descriptor: ArgumentDescriptor,
        field: impl GenericBindable<'a, T> + 'a,
    ) -> Self {
        Self {
            descriptor,
            sink: Box::new(AnonymousCapture::bind(field)),
        }
    }
}

impl<'a> std::fmt::Debug for ArgumentBinding<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ArgumentBinding[{:?}]", self.descriptor)
    }
}

/// A catch-all descriptor paired with its field capture.
pub struct RemainderBinding<'a> {
    pub(crate) descriptor: ArgumentsDescriptor,
    pub(crate) sink: Box<dyn AnonymousBindable + 'a>,
}

impl<'a> RemainderBinding<'a> {
    /// Pair a descriptor with a field capture.
    pub fn new<T: 'a>(
        descriptor: ArgumentsDescriptor,
        field: impl GenericBindable<'a, T> + 'a,
    ) -> Self {
        Self {
            descriptor,
            sink: Box::new(AnonymousCapture::bind(field)),
        }
    }
}

impl<'a> std::fmt::Debug for RemainderBinding<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RemainderBinding[{:?}]", self.descriptor)
    }
}

/// Every binding declared by one target type, in declaration order.
///
/// This is the binder-side view of a command: the descriptor table discovered
/// at registration time, with each descriptor's field-setter capability
/// attached.
#[derive(Default, Debug)]
pub struct CommandBindings<'a> {
    pub(crate) options: Vec<OptionBinding<'a>>,
    pub(crate) arguments: Vec<ArgumentBinding<'a>>,
    pub(crate) remainders: Vec<RemainderBinding<'a>>,
}

impl<'a> CommandBindings<'a> {
    /// Declare an option binding.
    pub fn option(&mut self, binding: OptionBinding<'a>) -> &mut Self {
        self.options.push(binding);
        self
    }

    /// Declare an ordered-argument binding.
    pub fn argument(&mut self, binding: ArgumentBinding<'a>) -> &mut Self {
        self.arguments.push(binding);
        self
    }

    /// Declare a catch-all binding.  Only the first declaration is honored.
    pub fn remainder(&mut self, binding: RemainderBinding<'a>) -> &mut Self {
        self.remainders.push(binding);
        self
    }
}

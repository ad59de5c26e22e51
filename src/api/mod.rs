mod capture;
mod field;
mod parameter;

pub use capture::GenericBindable;
pub use field::{Collection, Custom, Optional, Scalar, Switch};
pub use parameter::{ArgumentBinding, CommandBindings, OptionBinding, RemainderBinding};

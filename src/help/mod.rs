//! Help rendering: a width-aware indented writer plus the renderer that
//! assembles usage, option, argument, and command sections from the
//! registered descriptors.
mod renderer;
mod writer;

pub use renderer::{get_help_text, HelpLine, HelpRenderer};
pub use writer::IndentedWriter;

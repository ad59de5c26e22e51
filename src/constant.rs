// Rendering constants for the help subsystem.

/// Wrap width used when the terminal width is unknown.
pub(crate) const DEFAULT_LINE_WIDTH: usize = 60;

/// Number of spaces a tab stop expands to.
pub(crate) const TAB_WIDTH: usize = 4;

pub(crate) const USAGE_TITLE: &str = "Usage:";
pub(crate) const OPTIONS_TITLE: &str = "Available options:";
pub(crate) const ARGUMENTS_TITLE: &str = "Available arguments:";
pub(crate) const COMMANDS_TITLE: &str = "Available commands:";

/// Fallback title for a catch-all positional in the arguments section.
pub(crate) const REMAINDER_TITLE: &str = "arguments";

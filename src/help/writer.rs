use crate::constant::{DEFAULT_LINE_WIDTH, TAB_WIDTH};

/// A stateful text buffer that wraps appended text at a configured column
/// width, respects an indent level, and never splits inside a word when the
/// break range contains whitespace.
///
/// The cursor always equals the number of characters written since the last
/// newline, so wrap decisions are relative to the true current column,
/// including after indent changes.
///
/// ### Example
/// ```
/// use contour::help::IndentedWriter;
///
/// let mut writer = IndentedWriter::new(20);
/// writer.write_line("the quick brown fox jumps");
/// assert_eq!(writer.get_string(), "the quick brown fox\njumps\n");
/// ```
#[derive(Debug)]
pub struct IndentedWriter {
    buffer: String,
    line_width: usize,
    indent_level: usize,
    cursor: usize,
}

impl Default for IndentedWriter {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_WIDTH)
    }
}

impl IndentedWriter {
    /// Create a writer that wraps at `line_width` display columns.
    pub fn new(line_width: usize) -> Self {
        Self {
            buffer: String::default(),
            line_width,
            indent_level: 0,
            cursor: 0,
        }
    }

    /// Write the given fragment to the current line, wrapping as needed.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        if self.cursor + text.len() <= self.line_width {
            self.buffer.push_str(text);
            self.cursor += text.len();
            return;
        }

        let mut break_point = self.line_width.saturating_sub(self.cursor);

        if break_point == 0 {
            // No room on the current line at all.
            self.newline();
            if self.cursor >= self.line_width {
                // The indent alone fills the width; give up on wrapping.
                self.buffer.push_str(text);
                self.cursor += text.len();
                return;
            }
            self.write(text);
            return;
        }

        // Scan backward for the nearest whitespace so we don't split a word.
        // If the range has none, the raw offset stands as a fallback.
        while !text.is_char_boundary(break_point) {
            break_point -= 1;
        }
        for index in (1..=break_point).rev() {
            if text.is_char_boundary(index)
                && text[index..]
                    .chars()
                    .next()
                    .map(char::is_whitespace)
                    .unwrap_or(false)
            {
                break_point = index;
                break;
            }
        }

        let prefix = &text[..break_point];
        self.buffer.push_str(prefix);
        self.cursor += prefix.len();
        self.newline();

        let remainder = text[break_point..].trim_start().to_string();
        self.write(&remainder);
    }

    /// Write the given fragment and start a new indented line at the end.
    pub fn write_line(&mut self, text: &str) {
        self.write(text);
        self.newline();
    }

    /// Start a new indented line.
    pub fn newline(&mut self) {
        self.buffer.push('\n');

        if self.indent_level == 0 {
            self.cursor = 0;
            return;
        }

        let chars = self.indent_level * TAB_WIDTH;
        for _ in 0..chars {
            self.buffer.push(' ');
        }
        self.cursor = chars;
    }

    /// Deepen the indent by one level and apply it immediately.
    pub fn increment_indent(&mut self) {
        self.indent_level += 1;
        self.newline();
    }

    /// Shallow the indent by one level (saturating at 0) and apply it immediately.
    pub fn decrement_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
        self.newline();
    }

    /// The accumulated text; non-destructive and repeatable.
    pub fn get_string(&self) -> &str {
        &self.buffer
    }
}

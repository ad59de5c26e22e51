use std::collections::HashSet;

use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::help::writer::IndentedWriter;
use crate::metadata::{CommandDescriptor, Metadata, OptionDescriptor, Positional};
use crate::model::{DescriptorId, Scope};
use crate::parse::ParseResult;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// One rendered display line: literal text, or a blank-line marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpLine {
    /// A literal line of text.  Embedded tabs expand to the 4-column stop
    /// during final assembly.
    Text(String),
    /// A blank line.
    Blank,
}

impl HelpLine {
    fn text(text: impl Into<String>) -> Self {
        HelpLine::Text(text.into())
    }
}

/// Assembles help text from the process-lifetime [`Metadata`] and the current
/// [`ParseResult`].
///
/// A pure function of its inputs: `help_lines` produces the ordered line
/// sequence, and `help_text` word-wraps it through an [`IndentedWriter`].
/// The renderer never fails on sparse metadata; empty collections degrade to
/// empty sections.
pub struct HelpRenderer<'a> {
    meta: &'a Metadata,
    result: &'a ParseResult,
    line_width: usize,
}

impl<'a> HelpRenderer<'a> {
    /// Create a renderer with the default wrap width.
    pub fn new(meta: &'a Metadata, result: &'a ParseResult) -> Self {
        Self::with_width(meta, result, DEFAULT_LINE_WIDTH)
    }

    /// Create a renderer with an explicit wrap width.
    pub fn with_width(meta: &'a Metadata, result: &'a ParseResult, line_width: usize) -> Self {
        Self {
            meta,
            result,
            line_width,
        }
    }

    /// Create a renderer sized from the attached terminal, falling back to
    /// the default wrap width.
    pub fn terminal(meta: &'a Metadata, result: &'a ParseResult) -> Self {
        let line_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            terminal_width as usize
        } else {
            DEFAULT_LINE_WIDTH
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Selecting help wrap width: {line_width}.");
        }

        Self::with_width(meta, result, line_width)
    }

    /// Produce the final help text: every line word-wrapped and joined.
    pub fn help_text(&self) -> String {
        let mut writer = IndentedWriter::new(self.line_width);

        for line in self.help_lines() {
            match line {
                HelpLine::Text(text) => {
                    writer.write_line(&text.replace('\t', &" ".repeat(TAB_WIDTH)))
                }
                HelpLine::Blank => writer.newline(),
            }
        }

        writer.get_string().to_string()
    }

    /// Create the ordered help lines for whatever has been requested.
    pub fn help_lines(&self) -> Vec<HelpLine> {
        if self.meta.single_command_mode {
            return self.single_command_help();
        }

        if self.result.arguments.is_empty() {
            return self.summary_help();
        }

        self.focused_help()
    }

    fn single_command_help(&self) -> Vec<HelpLine> {
        let command = self.single_command_name();
        let mut lines = self.preamble();
        lines.extend(self.options_section(command.as_deref()));
        lines.push(HelpLine::Blank);
        if let Some(command) = command {
            lines.extend(self.arguments_section(&command));
        }
        lines
    }

    fn summary_help(&self) -> Vec<HelpLine> {
        let mut lines = self.preamble();
        lines.extend(self.options_section(None));
        lines.push(HelpLine::Blank);
        lines.extend(self.commands_section(
            self.meta
                .command_names
                .iter()
                .filter_map(|(_, descriptor)| descriptor.as_ref()),
        ));
        lines
    }

    /// Help for the command or group the parse result resolved.
    /// Falls back to the summary when neither resolves to anything registered.
    fn focused_help(&self) -> Vec<HelpLine> {
        if let Some(group) = self.result.group.as_deref() {
            if self.meta.group_commands(group).is_some() {
                match self.result.command.as_deref() {
                    Some(command) if self.meta.is_command(command) => {
                        return self.command_help(command);
                    }
                    _ => return self.group_help(group),
                }
            }
        }

        if let Some(command) = self.result.command.as_deref() {
            if self.meta.is_command(command) {
                return self.command_help(command);
            }
        }

        self.summary_help()
    }

    fn command_help(&self, command: &str) -> Vec<HelpLine> {
        let mut lines = self.preamble();
        lines.extend(self.options_section(Some(command)));
        lines.push(HelpLine::Blank);
        lines.extend(self.arguments_section(command));
        lines
    }

    fn group_help(&self, group: &str) -> Vec<HelpLine> {
        let mut lines = self.preamble();
        lines.extend(self.options_section(None));
        lines.push(HelpLine::Blank);
        lines.extend(
            self.commands_section(self.meta.group_commands(group).unwrap_or(&[]).iter()),
        );
        lines
    }

    // Title, usage header and usage line; common to every mode.
    fn preamble(&self) -> Vec<HelpLine> {
        vec![
            HelpLine::text(format!(
                "{name}: {description}",
                name = self.meta.name,
                description = self.meta.description
            )),
            HelpLine::Blank,
            HelpLine::text(USAGE_TITLE),
            HelpLine::text(self.usage_line()),
            HelpLine::Blank,
        ]
    }

    /// Construct the usage line: program name, bracketed global options,
    /// the `<command>` token (multi-command mode only), and `[<args>]` when
    /// the active scope declares positional arguments.
    fn usage_line(&self) -> String {
        let mut builder = String::from("\t");
        builder.push_str(&self.meta.name);

        let mut seen: HashSet<DescriptorId> = HashSet::default();
        for option in &self.meta.global_options {
            if option.hidden || !seen.insert(option.id) {
                continue;
            }

            builder.push_str(" [");
            if option.names.len() > 1 {
                builder.push('(');
                builder.push_str(&option.names.join(" | "));
                builder.push(')');
            } else {
                builder.push_str(&option.names[0]);
            }

            let title = option.title.as_deref().unwrap_or("arg");
            if option.arity == 1 {
                builder.push_str(&format!(" <{title}>"));
            } else {
                for index in 0..option.arity {
                    builder.push_str(&format!(" <{title}{}>", index + 1));
                }
            }

            builder.push(']');
        }

        if !self.meta.single_command_mode {
            builder.push_str(" <command>");
        }

        if self.scope_declares_arguments() {
            builder.push_str(" [<args>]");
        }

        builder
    }

    fn scope_declares_arguments(&self) -> bool {
        if self.meta.single_command_mode {
            return true;
        }

        if let Some(group) = self.result.group.as_deref() {
            if let Some(commands) = self.meta.group_commands(group) {
                return commands.iter().any(|command| {
                    self.meta
                        .command_arguments
                        .get(&command.name)
                        .map(|positionals| !positionals.is_empty())
                        .unwrap_or(false)
                });
            }
        }

        if let Some(command) = self.result.command.as_deref() {
            if self.meta.is_command(command) {
                return self
                    .meta
                    .command_arguments
                    .get(command)
                    .map(|positionals| !positionals.is_empty())
                    .unwrap_or(false);
            }
        }

        self.meta
            .command_arguments
            .values()
            .any(|positionals| !positionals.is_empty())
    }

    /// The options section: global scope first, then the focused command's
    /// group- and command-scoped options.  Hidden descriptors are excluded;
    /// multi-alias descriptors render once (deduplicated by identity).
    fn options_section(&self, command: Option<&str>) -> Vec<HelpLine> {
        let command_options = command
            .and_then(|command| self.meta.command_options.get(command))
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        if self.meta.global_options.is_empty() && command_options.is_empty() {
            return Vec::default();
        }

        let mut lines = vec![HelpLine::text(OPTIONS_TITLE), HelpLine::Blank];
        let mut seen: HashSet<DescriptorId> = HashSet::default();

        for option in &self.meta.global_options {
            render_option(&mut lines, &mut seen, option);
        }

        // Group-scoped options surface only against a focused command; the
        // summary view omits the scope end-to-end.
        for scope in [Scope::Group, Scope::Command] {
            for option in command_options.iter().filter(|o| o.scope == scope) {
                render_option(&mut lines, &mut seen, option);
            }
        }

        lines
    }

    /// The arguments section for a focused command, in declaration order.
    /// Unnamed ordered arguments receive a synthetic `argN` title.
    fn arguments_section(&self, command: &str) -> Vec<HelpLine> {
        let positionals = match self.meta.command_arguments.get(command) {
            Some(positionals) if !positionals.is_empty() => positionals,
            _ => return Vec::default(),
        };

        let mut lines = vec![HelpLine::text(ARGUMENTS_TITLE), HelpLine::Blank];
        let mut count = 1;

        for positional in positionals {
            let (title, description) = match positional {
                Positional::Ordered(argument) => {
                    let title = match &argument.title {
                        Some(title) => title.clone(),
                        None => {
                            let title = format!("arg{count}");
                            count += 1;
                            title
                        }
                    };
                    (title, argument.description.clone())
                }
                Positional::Remainder(arguments) => (
                    arguments
                        .title
                        .clone()
                        .unwrap_or_else(|| REMAINDER_TITLE.to_string()),
                    arguments.description.clone(),
                ),
            };

            lines.push(HelpLine::text(format!("\t<{title}>")));
            lines.push(HelpLine::text(format!(
                "\t\t{}",
                description.unwrap_or_default()
            )));
            lines.push(HelpLine::Blank);
        }

        lines
    }

    /// The commands listing: name + description per distinct descriptor.
    fn commands_section<'m>(
        &self,
        commands: impl Iterator<Item = &'m CommandDescriptor>,
    ) -> Vec<HelpLine> {
        let mut lines = vec![HelpLine::text(COMMANDS_TITLE), HelpLine::Blank];
        let mut seen: HashSet<DescriptorId> = HashSet::default();

        for command in commands {
            if !seen.insert(command.id) {
                continue;
            }

            lines.push(HelpLine::text(format!("\t{}", command.name)));
            lines.push(HelpLine::text(format!(
                "\t\t{}",
                command.description.clone().unwrap_or_default()
            )));
            lines.push(HelpLine::Blank);
        }

        lines
    }

    fn single_command_name(&self) -> Option<String> {
        self.meta
            .command_names
            .iter()
            .find(|(_, descriptor)| descriptor.is_some())
            .map(|(name, _)| name.clone())
    }
}

fn render_option(
    lines: &mut Vec<HelpLine>,
    seen: &mut HashSet<DescriptorId>,
    option: &OptionDescriptor,
) {
    if option.hidden || !seen.insert(option.id) {
        return;
    }

    lines.push(HelpLine::text(format!("\t{}", option.names.join(", "))));
    lines.push(HelpLine::text(format!(
        "\t\t{}",
        option.description.clone().unwrap_or_default()
    )));
    lines.push(HelpLine::Blank);
}

/// Produce a single newline-joined, word-wrapped block of help text suitable
/// for direct terminal output.
pub fn get_help_text(meta: &Metadata, result: &ParseResult) -> String {
    HelpRenderer::new(meta, result).help_text()
}

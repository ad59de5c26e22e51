use std::collections::HashMap;

use crate::model::{DescriptorId, Scope};

/// One declared option on a target type.
///
/// A descriptor carries display and resolution metadata only; the binding
/// destination is a separate capture capability (see
/// [`crate::OptionBinding`]).  Hidden descriptors remain bindable but are
/// excluded from rendered help.
#[derive(Debug, Clone)]
pub struct OptionDescriptor {
    pub(crate) id: DescriptorId,
    pub(crate) names: Vec<String>,
    pub(crate) scope: Scope,
    pub(crate) arity: u8,
    pub(crate) required: bool,
    pub(crate) hidden: bool,
    pub(crate) allowed_values: Vec<String>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
}

impl OptionDescriptor {
    /// Create an option descriptor with the given scope and ordered aliases.
    /// Defaults: arity 1, not required, not hidden, no allowed-values set.
    pub fn new<I, S>(scope: Scope, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        assert!(
            !names.is_empty(),
            "an option descriptor requires at least one name"
        );
        Self {
            id: DescriptorId::next(),
            names,
            scope,
            arity: 1,
            required: false,
            hidden: false,
            allowed_values: Vec::default(),
            title: None,
            description: None,
        }
    }

    /// Declare the value count: `0` = presence flag, `1` = scalar, `N` = fixed multi-value.
    pub fn arity(mut self, arity: u8) -> Self {
        self.arity = arity;
        self
    }

    /// Mark the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Exclude the option from rendered help.  It remains bindable.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Restrict accepted raw values to a closed set of literals.
    pub fn allowed<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Document the display title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title.replace(title.into());
        self
    }

    /// Document the help description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// The stable identity of this descriptor; survives `Clone`.
    pub fn id(&self) -> DescriptorId {
        self.id
    }

    /// The ordered aliases.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The scope partition this option reads from.
    pub fn scope(&self) -> Scope {
        self.scope
    }
}

/// One declared positional argument, bound by zero-based `order`.
#[derive(Debug, Clone)]
pub struct ArgumentDescriptor {
    pub(crate) id: DescriptorId,
    pub(crate) order: usize,
    pub(crate) required: bool,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
}

impl ArgumentDescriptor {
    /// Create an argument descriptor for the given positional index.
    pub fn new(order: usize) -> Self {
        Self {
            id: DescriptorId::next(),
            order,
            required: false,
            title: None,
            description: None,
        }
    }

    /// Mark the argument as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Document the display title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title.replace(title.into());
        self
    }

    /// Document the help description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// The stable identity of this descriptor; survives `Clone`.
    pub fn id(&self) -> DescriptorId {
        self.id
    }

    /// The zero-based index into the positional token list.
    pub fn order(&self) -> usize {
        self.order
    }
}

/// The catch-all positional descriptor, binding the remainder of the
/// positional token list after every ordered argument.
///
/// At most one is honored per target type; extra declarations are ignored
/// (first-match wins).
#[derive(Debug, Clone, Default)]
pub struct ArgumentsDescriptor {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
}

impl ArgumentsDescriptor {
    /// Create a catch-all descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Document the display title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title.replace(title.into());
        self
    }

    /// Document the help description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }
}

/// A command display descriptor: name plus help description.
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    pub(crate) id: DescriptorId,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
}

impl CommandDescriptor {
    /// Create a command descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: DescriptorId::next(),
            name: name.into(),
            description: None,
        }
    }

    /// Document the help description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// The command name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A positional declaration for a command: either an ordered argument or the
/// catch-all remainder.  Declaration order is preserved for rendering.
#[derive(Debug, Clone)]
pub enum Positional {
    /// Bound by zero-based index.
    Ordered(ArgumentDescriptor),
    /// Bound to the positional remainder.
    Remainder(ArgumentsDescriptor),
}

/// The process-lifetime aggregate of every registered descriptor.
///
/// Built once at registration time, then shared read-only by every parse
/// invocation.  The binder does not consult it; only the help renderer does.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) single_command_mode: bool,
    pub(crate) global_options: Vec<OptionDescriptor>,
    pub(crate) command_options: HashMap<String, Vec<OptionDescriptor>>,
    pub(crate) command_arguments: HashMap<String, Vec<Positional>>,
    // Ordered; a `None` descriptor marks a synthetic entry such as the help keyword.
    pub(crate) command_names: Vec<(String, Option<CommandDescriptor>)>,
    pub(crate) command_groups: Vec<(String, Vec<CommandDescriptor>)>,
}

impl Metadata {
    /// Create the metadata aggregate for a program.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            single_command_mode: false,
            global_options: Vec::default(),
            command_options: HashMap::default(),
            command_arguments: HashMap::default(),
            command_names: Vec::default(),
            command_groups: Vec::default(),
        }
    }

    /// Declare that the tool exposes exactly one command, eliding the
    /// `<command>` token from usage.
    pub fn single_command_mode(mut self) -> Self {
        self.single_command_mode = true;
        self
    }

    /// Register a global option.
    pub fn global_option(&mut self, descriptor: OptionDescriptor) {
        self.global_options.push(descriptor);
    }

    /// Register a command, optionally under a group.
    pub fn command(&mut self, descriptor: CommandDescriptor, group: Option<&str>) {
        self.command_names
            .push((descriptor.name.clone(), Some(descriptor.clone())));

        if let Some(group) = group {
            match self.command_groups.iter_mut().find(|(g, _)| g == group) {
                Some((_, commands)) => commands.push(descriptor),
                None => self
                    .command_groups
                    .push((group.to_string(), vec![descriptor])),
            }
        }
    }

    /// Register a synthetic command-name entry with no display descriptor,
    /// e.g. the help keyword.  The commands listing skips it.
    pub fn help_keyword(&mut self, keyword: impl Into<String>) {
        self.command_names.push((keyword.into(), None));
    }

    /// Register an option (group- or command-scoped) against a command.
    pub fn command_option(&mut self, command: &str, descriptor: OptionDescriptor) {
        self.command_options
            .entry(command.to_string())
            .or_default()
            .push(descriptor);
    }

    /// Register a positional declaration against a command.
    pub fn command_argument(&mut self, command: &str, positional: Positional) {
        self.command_arguments
            .entry(command.to_string())
            .or_default()
            .push(positional);
    }

    pub(crate) fn is_command(&self, name: &str) -> bool {
        self.command_names
            .iter()
            .any(|(n, descriptor)| n == name && descriptor.is_some())
    }

    pub(crate) fn group_commands(&self, group: &str) -> Option<&[CommandDescriptor]> {
        self.command_groups
            .iter()
            .find(|(g, _)| g == group)
            .map(|(_, commands)| commands.as_slice())
    }
}

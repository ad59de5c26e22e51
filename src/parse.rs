use std::collections::HashMap;

/// A multimap from option name to the ordered raw values supplied under it.
///
/// A name may repeat on the command line; occurrence order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionValues(HashMap<String, Vec<String>>);

impl OptionValues {
    /// Append a raw value under `name`.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.entry(name.into()).or_default().push(value.into());
    }

    /// The raw values recorded under `name`, in occurrence order.
    pub fn values(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any value was recorded under any name.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

/// The output of the external tokenizer, consumed read-only by the binder and
/// the help renderer.
///
/// Constructed once per invocation; the three option partitions correspond to
/// the [`crate::Scope`] an option was matched under.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// The resolved command name, if any.
    pub command: Option<String>,
    /// The resolved group name, if any.
    pub group: Option<String>,
    /// Raw values for global-scoped options.
    pub global_options: OptionValues,
    /// Raw values for group-scoped options.
    pub group_options: OptionValues,
    /// Raw values for command-scoped options.
    pub command_options: OptionValues,
    /// The ordered positional tokens.
    pub arguments: Vec<String>,
}

impl ParseResult {
    /// Append a positional token.
    pub fn argument(&mut self, token: impl Into<String>) {
        self.arguments.push(token.into());
    }
}

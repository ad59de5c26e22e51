use thiserror::Error;

use crate::api::{ArgumentBinding, CommandBindings, OptionBinding, RemainderBinding};
use crate::convert::{CaptureError, ConverterRegistry};
use crate::model::Scope;
use crate::parse::{OptionValues, ParseResult};

/// A failure while resolving a parse result onto typed fields.
///
/// Every variant is fatal to the current bind: the engine fails fast and does
/// not roll back earlier successful bindings, so callers must discard a
/// partially-bound instance on any failure.
#[derive(Debug, Error)]
pub enum BindError {
    /// A required option had no raw value under any of its aliases.
    #[error("missing required option '{names}'.")]
    MissingRequiredOption {
        /// The comma-joined aliases of the option.
        names: String,
    },

    /// A required ordered argument had no positional token at its order.
    #[error("missing required argument <{title}> at position {order}.")]
    MissingRequiredArgument {
        /// The zero-based positional index.
        order: usize,
        /// The display title of the argument.
        title: String,
    },

    /// The number of collected raw values does not fit the declared arity.
    #[error("'{name}' expects {expected} value(s), got {actual}.")]
    ArityMismatch {
        /// The primary name of the descriptor.
        name: String,
        /// The declared arity.
        expected: u8,
        /// The number of raw values collected.
        actual: usize,
    },

    /// A raw value fell outside the descriptor's closed set of accepted literals.
    #[error("value '{token}' is not allowed for '{name}' (allowed: {allowed}).")]
    ValueNotAllowed {
        /// The primary name of the descriptor.
        name: String,
        /// The offending raw token.
        token: String,
        /// The comma-joined closed set.
        allowed: String,
    },

    /// Conversion into the field type failed, or no converter exists for it.
    #[error("cannot bind '{name}': {source}")]
    Capture {
        /// The display name of the field being bound.
        name: String,
        /// The underlying conversion failure.
        #[source]
        source: CaptureError,
    },
}

/// Resolve a parse result onto the fields declared by `bindings`.
///
/// Resolution proceeds in three strictly ordered phases: options, then
/// ordered arguments, then the positional remainder.  Later phases never
/// re-touch fields bound by earlier phases.  Fields whose source is empty are
/// left untouched; callers bind onto freshly-initialized instances, so an
/// untouched field holds its zero value.
///
/// Consumes the bindings: the field borrows they carry end with the call, so
/// the caller may read the bound fields immediately.  Re-binding the same
/// inputs onto the same fields (through fresh bindings) is idempotent.
///
/// ### Example
/// ```
/// use contour::{
///     bind, ArgumentBinding, ArgumentDescriptor, CommandBindings, ConverterRegistry,
///     ParseResult, Scalar,
/// };
///
/// let mut path: String = String::default();
/// let mut bindings = CommandBindings::default();
/// bindings.argument(ArgumentBinding::new(
///     ArgumentDescriptor::new(0).required().title("path"),
///     Scalar::new(&mut path),
/// ));
///
/// let mut result = ParseResult::default();
/// result.argument("/tmp/file");
///
/// bind(bindings, &result, &ConverterRegistry::default()).unwrap();
/// assert_eq!(path, "/tmp/file");
/// ```
pub fn bind(
    mut bindings: CommandBindings<'_>,
    result: &ParseResult,
    registry: &ConverterRegistry,
) -> Result<(), BindError> {
    bind_options(&mut bindings.options, result, registry)?;
    let watermark = bind_ordered_arguments(&mut bindings.arguments, result, registry)?;
    bind_remainder(&mut bindings.remainders, result, registry, watermark)
}

fn bind_options(
    options: &mut [OptionBinding<'_>],
    result: &ParseResult,
    registry: &ConverterRegistry,
) -> Result<(), BindError> {
    for binding in options.iter_mut() {
        let descriptor = &binding.descriptor;
        let source = match descriptor.scope {
            Scope::Global => &result.global_options,
            Scope::Group => &result.group_options,
            Scope::Command => &result.command_options,
        };

        // Union across aliases: alias-declaration order, then occurrence order.
        let values = collect_values(source, &descriptor.names);

        if values.is_empty() {
            if descriptor.required {
                return Err(BindError::MissingRequiredOption {
                    names: descriptor.names.join(", "),
                });
            }

            // Leave the field untouched.
            continue;
        }

        let name = primary_name(&descriptor.names);

        if !descriptor.allowed_values.is_empty() {
            for token in &values {
                if !descriptor.allowed_values.iter().any(|v| v == *token) {
                    return Err(BindError::ValueNotAllowed {
                        name: name.clone(),
                        token: (*token).clone(),
                        allowed: descriptor.allowed_values.join(", "),
                    });
                }
            }
        }

        // Arity 0 is presence-only; otherwise the collected count must match
        // the declared shape exactly.
        if descriptor.arity > 0 && values.len() != descriptor.arity as usize {
            return Err(BindError::ArityMismatch {
                name,
                expected: descriptor.arity,
                actual: values.len(),
            });
        }

        binding.sink.matched();

        if descriptor.arity > 0 {
            for token in values {
                binding
                    .sink
                    .capture(registry, token)
                    .map_err(|source| BindError::Capture {
                        name: name.clone(),
                        source,
                    })?;
            }
        }
    }

    Ok(())
}

/// Bind every ordered argument; the returned watermark is the first
/// positional index not consumed by an ordered argument (`0` when none bound).
fn bind_ordered_arguments(
    arguments: &mut [ArgumentBinding<'_>],
    result: &ParseResult,
    registry: &ConverterRegistry,
) -> Result<usize, BindError> {
    let mut max_order_bound: Option<usize> = None;

    for binding in arguments.iter_mut() {
        let descriptor = &binding.descriptor;

        if descriptor.order >= result.arguments.len() {
            if descriptor.required {
                return Err(BindError::MissingRequiredArgument {
                    order: descriptor.order,
                    title: argument_title(descriptor.title.as_deref(), descriptor.order),
                });
            }

            // Skipped arguments do not raise the watermark.
            continue;
        }

        binding.sink.matched();
        binding
            .sink
            .capture(registry, &result.arguments[descriptor.order])
            .map_err(|source| BindError::Capture {
                name: argument_title(descriptor.title.as_deref(), descriptor.order),
                source,
            })?;

        max_order_bound = Some(match max_order_bound {
            Some(max) => std::cmp::max(max, descriptor.order),
            None => descriptor.order,
        });
    }

    Ok(max_order_bound.map(|max| max + 1).unwrap_or(0))
}

fn bind_remainder(
    remainders: &mut [RemainderBinding<'_>],
    result: &ParseResult,
    registry: &ConverterRegistry,
    watermark: usize,
) -> Result<(), BindError> {
    // First-match wins; extra catch-all declarations are ignored.
    if let Some(binding) = remainders.first_mut() {
        let remaining = &result.arguments[std::cmp::min(watermark, result.arguments.len())..];

        binding.sink.matched();

        for token in remaining {
            binding
                .sink
                .capture(registry, token)
                .map_err(|source| BindError::Capture {
                    name: binding
                        .descriptor
                        .title
                        .clone()
                        .unwrap_or_else(|| crate::constant::REMAINDER_TITLE.to_string()),
                    source,
                })?;
        }
    }

    Ok(())
}

fn collect_values<'r>(source: &'r OptionValues, names: &[String]) -> Vec<&'r String> {
    let mut values = Vec::default();

    for name in names {
        values.extend(source.values(name).iter());
    }

    values
}

fn primary_name(names: &[String]) -> String {
    names
        .first()
        .expect("internal error - descriptor must carry at least one name")
        .clone()
}

fn argument_title(title: Option<&str>, order: usize) -> String {
    match title {
        Some(title) => title.to_string(),
        None => format!("arg{}", order + 1),
    }
}

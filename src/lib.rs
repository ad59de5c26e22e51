//! `contour` is a declarative command line binding framework for Rust.
//!
//! Callers describe a command's options, positional arguments, and grouping
//! structure as descriptors, and `contour` resolves scope-partitioned raw
//! values (a [`ParseResult`], produced by an external tokenizer) onto typed
//! fields.  The same descriptors drive a width-aware help renderer.
//!
//! The crate deliberately stops at two seams:
//! * It consumes a [`ParseResult`]; it does not tokenize `argv` itself.
//! * It mutates fields through per-descriptor capture capabilities; it does
//! not discover fields via reflection.
//!
//! # Binding
//! Declare descriptors, pair each with a field capture, and bind:
//! ```
//! use contour::{
//!     bind, CommandBindings, ConverterRegistry, OptionBinding, OptionDescriptor, ParseResult,
//!     Scalar, Scope, Switch,
//! };
//!
//! let mut verbose: bool = false;
//! let mut count: u32 = 0;
//!
//! let mut bindings = CommandBindings::default();
//! bindings.option(OptionBinding::new(
//!     OptionDescriptor::new(Scope::Global, ["-v", "--verbose"]).arity(0),
//!     Switch::new(&mut verbose, true),
//! ));
//! bindings.option(OptionBinding::new(
//!     OptionDescriptor::new(Scope::Command, ["-c"]),
//!     Scalar::new(&mut count),
//! ));
//!
//! let mut result = ParseResult::default();
//! result.global_options.push("--verbose", "");
//! result.command_options.push("-c", "5");
//!
//! bind(bindings, &result, &ConverterRegistry::default()).unwrap();
//! assert!(verbose);
//! assert_eq!(count, 5);
//! ```
//!
//! # Help
//! The renderer consumes the process-lifetime [`Metadata`] aggregate plus the
//! same [`ParseResult`], and produces wrapped help text via
//! [`help::IndentedWriter`].
#![deny(missing_docs)]
mod api;
mod binder;
mod constant;
mod convert;
pub mod help;
mod metadata;
mod model;
mod parse;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use binder::{bind, BindError};
pub use convert::{CaptureError, ConverterRegistry};
pub use help::{get_help_text, HelpLine, HelpRenderer};
pub use metadata::{
    ArgumentDescriptor, ArgumentsDescriptor, CommandDescriptor, Metadata, OptionDescriptor,
    Positional,
};
pub use model::{DescriptorId, Scope};
pub use parse::{OptionValues, ParseResult};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

//! Code generation core for typed_regex.
//!
//! Turns a regular expression into a matcher type with one accessor per
//! capture group. Generation runs in two stages:
//!
//! 1. [`resolve`] compiles the pattern with its [`RegexOptions`] and lists
//!    every capture group as a [`GroupDescriptor`], deriving each accessor
//!    name with [`legalize_identifier`].
//! 2. [`Synthesizer`] validates those names and emits the type.
//!
//! Both the `#[typed_regex]` attribute and the build-script [`Builder`]
//! drive the same two stages.
//!
//! # Example
//!
//! ```ignore
//! use typed_regex_codegen::{PatternSpec, generate};
//!
//! let spec = PatternSpec::new("Digits", r"(?<digits>(?<firstGroup>\d)\d+)");
//! let tokens = generate(&spec)?;
//! // `tokens` declares `Digits<'t>` with accessors `Digits()` and `FirstGroup()`.
//! ```

#[cfg(test)]
mod test;

mod builder;
mod doc;
mod error;
mod options;
mod pattern_spec;
mod resolver;
mod synthesizer;

pub use builder::Builder;
pub use error::{BuildError, DeclarationFailure, GenerateError};
pub use options::RegexOptions;
pub use pattern_spec::PatternSpec;
pub use resolver::{
    GroupDescriptor, NUMBERED_GROUP_PREFIX, ResolvedPattern, legalize_identifier, resolve,
};
pub use synthesizer::{DEFAULT_RUNTIME_PATH, Synthesizer};

use proc_macro2::TokenStream;

/// Resolve and emit one declaration with default settings.
pub fn generate(spec: &PatternSpec) -> Result<TokenStream, GenerateError> {
    let resolved = resolve(spec)?;
    Synthesizer::new(spec, &resolved).emit()
}

//! Support for generated code. Not part of the public API.

pub use regex::{Captures, Regex, RegexBuilder};

/// Build a pattern that already compiled once during generation.
pub fn compile(builder: &RegexBuilder) -> Regex {
    match builder.build() {
        Ok(regex) => regex,
        Err(err) => panic!("typed_regex: pattern accepted at generation time failed to build: {err}"),
    }
}

//! Procedural macros for typed_regex.
//!
//! Provides `#[typed_regex(...)]`, which turns a placeholder unit struct into
//! a matcher type with one accessor per capture group.
//!
//! # Arguments
//!
//! - the pattern, as a string literal (raw strings recommended)
//! - any number of option flags: `ignore_case`, `multi_line`,
//!   `dot_matches_new_line`, `ignore_whitespace`, `swap_greed`, `crlf`,
//!   `unicode`, `octal`; bare to enable, or `flag = true/false`
//!
//! # Example
//!
//! ```ignore
//! use typed_regex::typed_regex;
//!
//! /// Parse a ISO-8601 date
//! #[typed_regex(r"^(?<year>\d{4})-(?<month>\d{2})-(?<day>\d{2})$")]
//! pub struct IsoDate;
//!
//! if let Some(date) = IsoDate::find("2021-02-03") {
//!     println!("year={} month={} day={}", date.Year(), date.Month(), date.Day());
//! }
//! ```

use proc_macro::TokenStream;
use syn::{ItemStruct, parse_macro_input};


mod regex_attr;

use regex_attr::{RegexArgs, expand_typed_regex};

/// Generate a typed matcher from a regular expression.
///
/// The annotated item must be a unit struct without generics; it is replaced
/// by `Name<'t>`, keeping its visibility, docs and other attributes.
///
/// Invalid patterns and accessor names that collide (e.g. groups `foo` and
/// `Foo`) are compile errors pointing at the pattern.
#[proc_macro_attribute]
pub fn typed_regex(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as RegexArgs);
    let item = parse_macro_input!(item as ItemStruct);

    match expand_typed_regex(args, item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

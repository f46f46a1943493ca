//! Strongly-named capture group accessors for regular expressions.
//!
//! Put `#[typed_regex(...)]` on a unit struct and it becomes a matcher type
//! with one accessor per capture group:
//!
//! ```ignore
//! use typed_regex::typed_regex;
//!
//! #[typed_regex(r"^(?<year>\d{4})-(?<month>\d{2})-(?<day>\d{2})$")]
//! pub struct IsoDate;
//!
//! let date = IsoDate::find("2021-02-03").unwrap();
//! assert_eq!(date.Year().value(), "2021");
//! assert_eq!(date.Month(), "02");
//! ```
//!
//! # Generated surface
//!
//! - `is_match(text)`, `find(text)`, `try_match(text, &mut found)`,
//!   `matches(text)`
//! - `value()`, `range()`, `raw_match()`, `groups()` for the whole match
//! - one accessor per group returning a [`MatchGroup`]: named groups are
//!   capitalized (`year` → `Year()`), unnamed ones are numbered
//!   (`Group1()`)
//!
//! # Options
//!
//! Flags follow the pattern: `ignore_case`, `multi_line`,
//! `dot_matches_new_line`, `ignore_whitespace`, `swap_greed`, `crlf`,
//! `unicode`, `octal`. Each may be written bare (enables it) or as
//! `flag = bool`.
//!
//! ```ignore
//! #[typed_regex(r"^([a-z\d]+-)*[a-z\d]+$", ignore_case)]
//! pub struct GithubUsername;
//! ```

// Lets generated code name this crate as `::typed_regex` in its own tests.
extern crate self as typed_regex;

#[cfg(test)]
mod test;

mod match_group;
mod typed_match;

#[doc(hidden)]
pub mod __private;

pub use match_group::MatchGroup;
pub use regex;
pub use typed_match::{Matches, TypedMatch};
pub use typed_regex_derive::typed_regex;

//! Option flags applied to a pattern before it is compiled.
//!
//! Every flag maps onto one `regex::RegexBuilder` setting. The resolver
//! applies them with `configure`; the synthesizer replays the non-default
//! ones as builder calls inside the generated type. Both must stay in step
//! with `settings`.

use std::fmt;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use regex::RegexBuilder;

/// Independent boolean toggles for a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegexOptions {
    /// Letters match both upper and lower case.
    pub ignore_case: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,
    /// Free-spacing mode: whitespace is ignored and `#` starts a comment.
    pub ignore_whitespace: bool,
    /// Greedy and lazy quantifiers trade meaning.
    pub swap_greed: bool,
    /// `\r\n` counts as a line terminator in multi-line mode.
    pub crlf: bool,
    /// Unicode-aware classes (`\d`, `\w`, case folding).
    pub unicode: bool,
    /// Octal escapes such as `\7`.
    pub octal: bool,
}

impl Default for RegexOptions {
    fn default() -> Self {
        Self {
            ignore_case: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            swap_greed: false,
            crlf: false,
            unicode: true,
            octal: false,
        }
    }
}

/// One row of the option table: option name, builder method, current value.
struct Setting {
    name: &'static str,
    method: &'static str,
    value: bool,
    default: bool,
}

impl RegexOptions {
    /// Names accepted by [`RegexOptions::set`].
    pub const NAMES: [&'static str; 8] = [
        "ignore_case",
        "multi_line",
        "dot_matches_new_line",
        "ignore_whitespace",
        "swap_greed",
        "crlf",
        "unicode",
        "octal",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_case(mut self, yes: bool) -> Self {
        self.ignore_case = yes;
        self
    }

    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    pub fn ignore_whitespace(mut self, yes: bool) -> Self {
        self.ignore_whitespace = yes;
        self
    }

    /// Set a flag by name. Returns `false` when the name is unknown.
    pub fn set(&mut self, name: &str, value: bool) -> bool {
        let slot = match name {
            "ignore_case" => &mut self.ignore_case,
            "multi_line" => &mut self.multi_line,
            "dot_matches_new_line" => &mut self.dot_matches_new_line,
            "ignore_whitespace" => &mut self.ignore_whitespace,
            "swap_greed" => &mut self.swap_greed,
            "crlf" => &mut self.crlf,
            "unicode" => &mut self.unicode,
            "octal" => &mut self.octal,
            _ => return false,
        };
        *slot = value;
        true
    }

    fn settings(&self) -> [Setting; 8] {
        let defaults = Self::default();
        [
            Setting {
                name: "ignore_case",
                method: "case_insensitive",
                value: self.ignore_case,
                default: defaults.ignore_case,
            },
            Setting {
                name: "multi_line",
                method: "multi_line",
                value: self.multi_line,
                default: defaults.multi_line,
            },
            Setting {
                name: "dot_matches_new_line",
                method: "dot_matches_new_line",
                value: self.dot_matches_new_line,
                default: defaults.dot_matches_new_line,
            },
            Setting {
                name: "ignore_whitespace",
                method: "ignore_whitespace",
                value: self.ignore_whitespace,
                default: defaults.ignore_whitespace,
            },
            Setting {
                name: "swap_greed",
                method: "swap_greed",
                value: self.swap_greed,
                default: defaults.swap_greed,
            },
            Setting {
                name: "crlf",
                method: "crlf",
                value: self.crlf,
                default: defaults.crlf,
            },
            Setting {
                name: "unicode",
                method: "unicode",
                value: self.unicode,
                default: defaults.unicode,
            },
            Setting {
                name: "octal",
                method: "octal",
                value: self.octal,
                default: defaults.octal,
            },
        ]
    }

    /// Apply every flag to a builder.
    pub fn configure<'b>(&self, builder: &'b mut RegexBuilder) -> &'b mut RegexBuilder {
        builder
            .case_insensitive(self.ignore_case)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .swap_greed(self.swap_greed)
            .crlf(self.crlf)
            .unicode(self.unicode)
            .octal(self.octal)
    }

    /// One `builder.method(value);` statement for every flag that differs
    /// from its default.
    pub(crate) fn builder_calls(&self) -> Vec<TokenStream> {
        self.settings()
            .into_iter()
            .filter(|s| s.value != s.default)
            .map(|s| {
                let method = format_ident!("{}", s.method);
                let value = s.value;
                quote! { builder.#method(#value); }
            })
            .collect()
    }
}

impl fmt::Display for RegexOptions {
    /// Lists the flags that differ from their defaults, `none` otherwise.
    /// A disabled default-on flag renders as `!name`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for setting in self.settings() {
            if setting.value == setting.default {
                continue;
            }
            if !first {
                write!(f, " | ")?;
            }
            first = false;
            if setting.value {
                write!(f, "{}", setting.name)?;
            } else {
                write!(f, "!{}", setting.name)?;
            }
        }
        if first {
            write!(f, "none")?;
        }
        Ok(())
    }
}

//! Rustdoc text for generated items.
//!
//! The pattern is shown verbatim inside a fenced code block. The fence is
//! one backtick longer than the longest backtick run in the pattern, so no
//! pattern can close it early.

use crate::pattern_spec::PatternSpec;
use crate::resolver::GroupDescriptor;

pub(crate) fn code_fence(text: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in text.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

/// Documentation for the generated matcher type.
pub(crate) fn type_doc(spec: &PatternSpec) -> String {
    let fence = code_fence(&spec.pattern);
    format!(
        " Typed matches of the regular expression\n\n{fence}text\n{}\n{fence}\n\n Options: {}",
        spec.pattern, spec.options
    )
}

/// Documentation for one group accessor.
pub(crate) fn accessor_doc(group: &GroupDescriptor) -> String {
    if group.named {
        format!(" The capture group `{}` at index {}.", group.raw_name, group.index)
    } else {
        format!(" The unnamed capture group at index {}.", group.index)
    }
}

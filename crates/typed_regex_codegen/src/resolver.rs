//! Group resolution: compile the pattern and name every capture group.

use regex::{Regex, RegexBuilder};

use crate::error::GenerateError;
use crate::pattern_spec::PatternSpec;

/// Prefix for groups whose raw name is an ordinal.
pub const NUMBERED_GROUP_PREFIX: &str = "Group";

/// One capture group as reported by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GroupDescriptor {
    /// Ordinal assigned by the evaluator; 0 is the whole match.
    pub index: usize,
    /// User-given name, or the ordinal as a string for unnamed groups.
    pub raw_name: String,
    /// Whether `raw_name` came from the pattern rather than the ordinal.
    pub named: bool,
    /// Accessor identifier derived from `raw_name`.
    pub identifier: String,
}

/// A validated pattern together with its groups.
#[derive(Debug, Clone)]
pub struct ResolvedPattern {
    regex: Regex,
    groups: Vec<GroupDescriptor>,
}

impl ResolvedPattern {
    /// The compiled matcher used for validation.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Every group, group 0 included, in evaluator order.
    pub fn groups(&self) -> &[GroupDescriptor] {
        &self.groups
    }

    /// Groups that get an accessor: everything except group 0.
    pub fn accessor_groups(&self) -> &[GroupDescriptor] {
        &self.groups[1..]
    }
}

/// Compile `spec.pattern` under `spec.options` and describe its groups.
pub fn resolve(spec: &PatternSpec) -> Result<ResolvedPattern, GenerateError> {
    let mut builder = RegexBuilder::new(&spec.pattern);
    let regex = spec.options.configure(&mut builder).build()?;

    let groups: Vec<GroupDescriptor> = regex
        .capture_names()
        .enumerate()
        .map(|(index, name)| {
            let (raw_name, named) = match name {
                Some(name) => (name.to_owned(), true),
                None => (index.to_string(), false),
            };
            let identifier = legalize_identifier(&raw_name);
            GroupDescriptor {
                index,
                raw_name,
                named,
                identifier,
            }
        })
        .collect();

    tracing::debug!(
        type_name = %spec.type_name,
        groups = groups.len() - 1,
        "resolved capture groups"
    );

    Ok(ResolvedPattern { regex, groups })
}

/// Turn a raw group name into an accessor identifier.
///
/// Ordinal names get [`NUMBERED_GROUP_PREFIX`] (`"1"` becomes `"Group1"`);
/// anything else has its first character upper-cased (`"year"` becomes
/// `"Year"`).
pub fn legalize_identifier(raw_name: &str) -> String {
    if !raw_name.is_empty() && raw_name.bytes().all(|b| b.is_ascii_digit()) {
        return format!("{NUMBERED_GROUP_PREFIX}{raw_name}");
    }

    let mut chars = raw_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

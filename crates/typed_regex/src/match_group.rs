//! `MatchGroup`: a read-only view over one capture group of one match.

use std::fmt;
use std::ops::Range;

use regex::Match;

/// One capture group within one match.
///
/// A group that did not take part in the match (an untaken alternative, an
/// optional group that was skipped) has no capture: its [`value`] is `""`
/// and its [`capture_count`] is 0.
///
/// The `regex` engine keeps only the last capture of a group inside a
/// repetition, so [`values`] yields at most one item.
///
/// [`value`]: MatchGroup::value
/// [`values`]: MatchGroup::values
/// [`capture_count`]: MatchGroup::capture_count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchGroup<'t> {
    index: usize,
    name: Option<&'static str>,
    capture: Option<Match<'t>>,
}

impl<'t> MatchGroup<'t> {
    pub fn new(index: usize, name: Option<&'static str>, capture: Option<Match<'t>>) -> Self {
        Self {
            index,
            name,
            capture,
        }
    }

    /// Ordinal of the group in its pattern.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Name given in the pattern, `None` for unnamed groups.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// The captured text, or `""` when the group did not participate.
    pub fn value(&self) -> &'t str {
        self.capture.map_or("", |m| m.as_str())
    }

    /// Every capture taken by this group, oldest first.
    pub fn values(&self) -> impl Iterator<Item = &'t str> + use<'t> {
        self.capture.into_iter().map(|m| m.as_str())
    }

    pub fn capture_count(&self) -> usize {
        usize::from(self.capture.is_some())
    }

    /// Whether the group participated in the match.
    pub fn is_matched(&self) -> bool {
        self.capture.is_some()
    }

    /// Byte range of the capture within the searched text.
    pub fn range(&self) -> Option<Range<usize>> {
        self.capture.map(|m| m.range())
    }

    /// The underlying `regex` match, if the group participated.
    pub fn raw(&self) -> Option<Match<'t>> {
        self.capture
    }
}

impl fmt::Display for MatchGroup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl PartialEq<str> for MatchGroup<'_> {
    fn eq(&self, other: &str) -> bool {
        self.value() == other
    }
}

impl PartialEq<&str> for MatchGroup<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.value() == *other
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MatchGroup<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("MatchGroup", 4)?;
        state.serialize_field("index", &self.index)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("value", self.value())?;
        state.serialize_field("range", &self.range().map(|r| (r.start, r.end)))?;
        state.end()
    }
}

use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::Range;

use regex::{CaptureMatches, Captures, Regex};

use crate::match_group::MatchGroup;

/// Implemented by every type generated with `#[typed_regex]`.
///
/// Generated types also expose these operations as inherent methods, so the
/// trait only needs importing for generic code.
pub trait TypedMatch<'t>: Sized {
    /// The pattern the type was generated from.
    const PATTERN: &'static str;

    /// The compiled expression. Built once, shared by every call.
    fn regex() -> &'static Regex;

    /// Bind every capture group of a raw match.
    fn from_captures(captures: Captures<'t>) -> Self;

    fn captures(&self) -> &Captures<'t>;

    /// Accessor groups in pattern order, group 0 excluded.
    fn groups(&self) -> &[MatchGroup<'t>];

    fn is_match(text: &str) -> bool {
        Self::regex().is_match(text)
    }

    fn find(text: &'t str) -> Option<Self> {
        Self::regex().captures(text).map(Self::from_captures)
    }

    /// Two-channel form of [`find`](TypedMatch::find): `found` is `Some`
    /// exactly when `true` is returned.
    fn try_match(text: &'t str, found: &mut Option<Self>) -> bool {
        *found = Self::find(text);
        found.is_some()
    }

    fn matches(text: &'t str) -> Matches<'t, Self> {
        Matches::new(Self::regex().captures_iter(text))
    }

    /// The text matched by the whole expression.
    fn value(&self) -> &'t str {
        self.captures().get_match().as_str()
    }

    fn range(&self) -> Range<usize> {
        self.captures().get_match().range()
    }
}

/// Every non-overlapping match of a typed expression, left to right.
///
/// Each call to `matches` starts a fresh scan from the beginning of the text.
#[derive(Debug)]
pub struct Matches<'t, T> {
    inner: CaptureMatches<'static, 't>,
    _marker: PhantomData<fn() -> T>,
}

impl<'t, T: TypedMatch<'t>> Matches<'t, T> {
    pub fn new(inner: CaptureMatches<'static, 't>) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<'t, T: TypedMatch<'t>> Iterator for Matches<'t, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(T::from_captures)
    }
}

impl<'t, T: TypedMatch<'t>> FusedIterator for Matches<'t, T> {}

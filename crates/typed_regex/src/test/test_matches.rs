// Tests for the match operations shared by every generated type
use crate::{Matches, TypedMatch, typed_regex};

#[typed_regex(r"(?<digits>(?<firstGroup>\d)\d+)")]
struct Test1;

#[typed_regex(r"(?<word>[a-z]*)")]
struct MaybeEmpty;

#[typed_regex(r"(?<a>a)|(?<b>b)")]
struct Either;

// ==================== Operation agreement ====================

#[test]
fn test_is_match_agrees_with_find_and_try_match() {
    for text in ["", "42", "a42b", "aaaa11111", "no digits", "7", "1 2 3"] {
        let mut found = None;
        let tried = Test1::try_match(text, &mut found);

        assert_eq!(Test1::is_match(text), Test1::find(text).is_some(), "{text:?}");
        assert_eq!(Test1::is_match(text), tried, "{text:?}");
        assert_eq!(tried, found.is_some(), "{text:?}");
    }
}

#[test]
fn test_try_match_resets_output_on_failure() {
    let mut found = Test1::find("123");
    assert!(found.is_some());

    assert!(!Test1::try_match("none here", &mut found));
    assert!(found.is_none());
}

#[test]
fn test_try_match_populates_output() {
    let mut found = None;
    assert!(Test1::try_match("aaaa11111", &mut found));

    let m = found.unwrap();
    assert_eq!(m.FirstGroup(), "1");
    assert_eq!(m.value(), "11111");
}

// ==================== matches() ====================

#[test]
fn test_matches_left_to_right() {
    let found: Vec<(String, String)> = Test1::matches("ab42df55555x9y123")
        .map(|m| (m.value().to_string(), m.FirstGroup().value().to_string()))
        .collect();

    assert_eq!(
        found,
        [
            ("42".to_string(), "4".to_string()),
            ("55555".to_string(), "5".to_string()),
            ("123".to_string(), "1".to_string()),
        ]
    );
}

#[test]
fn test_matches_do_not_overlap() {
    let ranges: Vec<_> = Test1::matches("12 345 6789").map(|m| m.range()).collect();
    assert_eq!(ranges, [0..2, 3..6, 7..11]);
    for pair in ranges.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
}

#[test]
fn test_matches_is_restartable() {
    let text = "1 22 333 4444";
    let first: Vec<&str> = Test1::matches(text).map(|m| m.value()).collect();
    let second: Vec<&str> = Test1::matches(text).map(|m| m.value()).collect();

    assert_eq!(first, ["22", "333", "4444"]);
    assert_eq!(first, second);

    // Partially consuming one iterator does not affect a fresh one
    let mut partial = Test1::matches(text);
    assert_eq!(partial.next().map(|m| m.value()), Some("22"));
    assert_eq!(Test1::matches(text).count(), 3);
}

#[test]
fn test_matches_empty_when_no_match() {
    assert_eq!(Test1::matches("no digits at all").count(), 0);
    assert_eq!(Test1::matches("").count(), 0);
}

#[test]
fn test_matches_is_fused() {
    let mut iter = Test1::matches("12");
    assert!(iter.next().is_some());
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

#[test]
fn test_matches_advance_past_empty_matches() {
    // Empty matches must not stall the scan
    let words: Vec<&str> = MaybeEmpty::matches("ab-cd").map(|m| m.Word().value()).collect();
    assert!(words.contains(&"ab"));
    assert!(words.contains(&"cd"));
    assert!(words.len() <= 4);
}

#[test]
fn test_matches_through_trait() {
    fn values<'t, T: TypedMatch<'t>>(text: &'t str) -> Vec<&'t str> {
        T::matches(text).map(|m| m.value()).collect()
    }

    assert_eq!(values::<Test1<'_>>("1 22 333"), ["22", "333"]);
    let iter: Matches<'_, Test1<'_>> = Test1::matches("99");
    assert_eq!(iter.count(), 1);
}

// ==================== Group participation ====================

#[test]
fn test_alternation_groups() {
    let a = Either::find("xa").unwrap();
    assert_eq!(a.A(), "a");
    assert!(!a.B().is_matched());
    assert_eq!(a.B().value(), "");
    assert_eq!(a.B().capture_count(), 0);

    let kinds: Vec<(bool, bool)> = Either::matches("abba")
        .map(|m| (m.A().is_matched(), m.B().is_matched()))
        .collect();
    assert_eq!(kinds, [(true, false), (false, true), (false, true), (true, false)]);
}

// ==================== Concurrency ====================

#[test]
fn test_shared_matcher_across_threads() {
    let inputs = ["a1b22", "333", "x", "4444 55555"];

    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|text| scope.spawn(move || Test1::matches(text).count()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(counts, [1, 1, 0, 2]);
    assert!(std::ptr::eq(Test1::regex(), Test1::regex()));
}

// Tests for the captured group view
use crate::MatchGroup;
use regex::Regex;

// ==================== Participating groups ====================

#[test]
fn test_match_group_value_and_range() {
    let re = Regex::new(r"(?<word>[a-z]+)-(\d+)").unwrap();
    let caps = re.captures("id: abc-42").unwrap();

    let word = MatchGroup::new(1, Some("word"), caps.get(1));
    assert_eq!(word.value(), "abc");
    assert_eq!(word.index(), 1);
    assert_eq!(word.name(), Some("word"));
    assert_eq!(word.range(), Some(4..7));
    assert_eq!(word.capture_count(), 1);
    assert!(word.is_matched());

    let number = MatchGroup::new(2, None, caps.get(2));
    assert_eq!(number.value(), "42");
    assert_eq!(number.name(), None);
}

#[test]
fn test_match_group_values() {
    let re = Regex::new(r"(\w+)").unwrap();
    let caps = re.captures("hello").unwrap();
    let group = MatchGroup::new(1, None, caps.get(1));

    let values: Vec<&str> = group.values().collect();
    assert_eq!(values, ["hello"]);
}

#[test]
fn test_match_group_repeated_keeps_last_capture() {
    let re = Regex::new(r"^(?:(\d),)*(\d)$").unwrap();
    let caps = re.captures("1,2,3").unwrap();
    let group = MatchGroup::new(1, None, caps.get(1));

    assert_eq!(group.value(), "2");
    assert_eq!(group.values().collect::<Vec<_>>(), ["2"]);
    assert_eq!(group.capture_count(), 1);
}

// ==================== Non-participating groups ====================

#[test]
fn test_match_group_not_participating() {
    let re = Regex::new(r"(a)|(b)").unwrap();
    let caps = re.captures("b").unwrap();
    let group = MatchGroup::new(1, None, caps.get(1));

    assert_eq!(group.value(), "");
    assert_eq!(group.capture_count(), 0);
    assert_eq!(group.values().count(), 0);
    assert!(!group.is_matched());
    assert_eq!(group.range(), None);
    assert!(group.raw().is_none());
    assert_eq!(group.to_string(), "");
}

#[test]
fn test_match_group_empty_capture_participates() {
    let re = Regex::new(r"x(a*)y").unwrap();
    let caps = re.captures("xy").unwrap();
    let group = MatchGroup::new(1, None, caps.get(1));

    assert_eq!(group.value(), "");
    assert_eq!(group.capture_count(), 1);
    assert!(group.is_matched());
    assert_eq!(group.range(), Some(1..1));
}

// ==================== Conversions ====================

#[test]
fn test_match_group_display_and_eq() {
    let re = Regex::new(r"(\d+)").unwrap();
    let caps = re.captures("a42b").unwrap();
    let group = MatchGroup::new(1, None, caps.get(1));

    assert_eq!(format!("[{group}]"), "[42]");
    assert_eq!(group, "42");
    assert!(group == *"42");
    assert_ne!(group, "4");
    assert_eq!(group.raw().map(|m| m.as_str()), Some("42"));
}

#[cfg(feature = "serde")]
#[test]
fn test_match_group_serialize() {
    let re = Regex::new(r"(?<year>\d{4})|(x)").unwrap();
    let caps = re.captures("in 2021").unwrap();

    let year = MatchGroup::new(1, Some("year"), caps.get(1));
    assert_eq!(
        serde_json::to_value(year).unwrap(),
        serde_json::json!({ "index": 1, "name": "year", "value": "2021", "range": [3, 7] })
    );

    let missing = MatchGroup::new(2, None, caps.get(2));
    assert_eq!(
        serde_json::to_value(missing).unwrap(),
        serde_json::json!({ "index": 2, "name": null, "value": "", "range": null })
    );
}

// Test module organization
pub mod test_match_group;
pub mod test_matches;

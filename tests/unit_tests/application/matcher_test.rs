use doclens::application::services::{RollingHash, count_matches, fold_case, search};

const SENTENCE: &str = "The quick brown Fox jumps over the lazy dog.";

#[test]
fn given_sentence_with_mixed_case_when_searching_then_returns_ascending_positions() {
    let result = search(SENTENCE, "the");

    assert_eq!(result.positions(), &[0, 31]);
    assert_eq!(result.count(), 2);
    assert!(result.is_found());
    assert_eq!(result.pattern(), "the");
}

#[test]
fn given_uppercase_pattern_when_searching_then_matches_case_insensitively() {
    assert_eq!(search(SENTENCE, "FOX").positions(), &[16]);
}

#[test]
fn given_empty_pattern_when_searching_then_returns_no_positions() {
    assert!(search(SENTENCE, "").positions().is_empty());
}

#[test]
fn given_empty_text_when_searching_then_returns_no_positions() {
    assert!(search("", "the").positions().is_empty());
}

#[test]
fn given_pattern_longer_than_text_when_searching_then_returns_no_positions() {
    assert!(search("dog", "doghouse").positions().is_empty());
}

#[test]
fn given_pattern_equal_to_text_when_searching_then_matches_at_zero() {
    assert_eq!(search("Dog", "dOG").positions(), &[0]);
}

#[test]
fn given_absent_pattern_when_searching_then_is_not_found() {
    let result = search(SENTENCE, "cat");
    assert!(!result.is_found());
    assert_eq!(result.count(), 0);
}

#[test]
fn given_repeated_keyword_when_counting_then_counts_every_occurrence() {
    let text = "The dog sleeps. The dog dreams. the end";
    assert_eq!(count_matches(text, "the"), 3);
}

#[test]
fn given_demo_text_when_searching_then_finds_all_three_articles() {
    let text = "The quick brown fox jumps over the lazy dog. The dog sleeps.";
    assert_eq!(search(text, "the").positions(), &[0, 31, 45]);
}

#[test]
fn given_text_when_folding_case_then_keeps_character_count() {
    let text = "İstanbul ÇAĞ Straße";
    assert_eq!(fold_case(text).len(), text.chars().count());
}

#[test]
fn given_sliding_window_when_rolling_then_matches_fresh_hash() {
    let chars: Vec<char> = "abracadabra".chars().collect();
    let width = 4;
    let mut rolling = RollingHash::new(&chars[..width]);

    for start in 1..=chars.len() - width {
        rolling.roll(chars[start - 1], chars[start + width - 1]);
        assert_eq!(
            rolling.value(),
            RollingHash::new(&chars[start..start + width]).value(),
            "window starting at {start}"
        );
    }
}

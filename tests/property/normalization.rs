//! Normalization invariants.

use folio::normalize;
use proptest::prelude::*;

/// Latin text with a healthy share of accented and uppercase characters.
fn latin_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Zàáâäèéêëìíîïòóôöùúûüñçœ ]{0,24}").unwrap()
}

fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "café".to_string(),
        "naïve".to_string(),
        "résumé".to_string(),
        "über".to_string(),
        "tōkyō".to_string(),
        "harīṣh".to_string(),
        "tummalachērla".to_string(),
        "İstanbul".to_string(),
        "ﬁle".to_string(),
        "తెలుగు".to_string(),
    ])
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(text in latin_text_strategy()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_unicode_words_idempotent(word in unicode_word_strategy()) {
        let once = normalize(&word);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_keeps_spaces(text in latin_text_strategy()) {
        let spaces = text.chars().filter(|&c| c == ' ').count();
        prop_assert_eq!(normalize(&text).chars().filter(|&c| c == ' ').count(), spaces);
    }

    #[test]
    fn prop_normalize_ascii_is_lowercase(text in "[ -~]{0,32}") {
        prop_assert_eq!(normalize(&text), text.to_lowercase());
    }
}

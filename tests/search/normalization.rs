//! Case and diacritic folding on built indexes.

use crate::common::{portfolio_index, titles};
use folio::{match_query, normalize};

#[test]
fn test_accents_fold_both_ways() {
    let index = portfolio_index();
    let accented = match_query(&index, "café", 5);
    let plain = match_query(&index, "CAFE", 5);
    assert_eq!(titles(&accented), titles(&plain));
    assert_eq!(accented[0].title, "Café Résumé");
}

#[test]
fn test_prefix_of_accented_word() {
    let index = portfolio_index();
    let results = match_query(&index, "resu", 5);
    assert_eq!(titles(&results), vec!["Café Résumé"]);
}

#[test]
fn test_normalize_examples() {
    assert_eq!(normalize("Café"), "cafe");
    assert_eq!(normalize("Tummalachērla"), "tummalacherla");
    assert_eq!(normalize("naïve résumé"), "naive resume");
    assert_eq!(normalize("hello"), "hello");
}

#[test]
fn test_mixed_case_tokens() {
    let index = portfolio_index();
    let lower = match_query(&index, "python tutor", 5);
    let upper = match_query(&index, "PYTHON Tutor", 5);
    assert_eq!(titles(&lower), titles(&upper));
    assert!(!lower.is_empty());
}

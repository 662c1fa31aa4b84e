//! How the builder orders sites inside a prefix bucket.

use crate::common::{make_site, titles};
use folio::build::{build_index, SiteDocument};
use folio::{match_query, SearchIndex};

fn index_of(docs: &[SiteDocument], max_results: usize) -> SearchIndex {
    SearchIndex::from_data(build_index(docs, max_results)).unwrap()
}

#[test]
fn test_every_prefix_is_a_key() {
    let data = build_index(&[make_site("Rust", "/rust", "")], 10);
    for prefix in ["r", "ru", "rus", "rust"] {
        assert!(data.words.contains_key(prefix), "missing {}", prefix);
    }
    assert!(!data.words.contains_key(""));
}

#[test]
fn test_full_word_finds_every_document_containing_it() {
    let docs = vec![
        make_site("One", "/1", "shared"),
        make_site("Two", "/2", "shared"),
        make_site("Three", "/3", "shared"),
    ];
    let index = index_of(&docs, 10);
    assert_eq!(match_query(&index, "shared", 10).len(), 3);
}

#[test]
fn test_priority_breaks_ties() {
    let mut low = make_site("Beta", "/beta", "guitar");
    low.priority = 5;
    let high = make_site("Alpha", "/alpha", "guitar");
    let index = index_of(&[low, high], 10);

    let results = match_query(&index, "guitar", 2);
    assert_eq!(titles(&results), vec!["Alpha", "Beta"]);
}

#[test]
fn test_title_breaks_ties_at_equal_priority() {
    let docs = vec![make_site("Zulu", "/z", "piano"), make_site("Echo", "/e", "piano")];
    let index = index_of(&docs, 10);
    assert_eq!(titles(&match_query(&index, "piano", 2)), vec!["Echo", "Zulu"]);
}

#[test]
fn test_exact_word_beats_longer_word_at_its_prefix() {
    let docs = vec![
        make_site("Long", "/long", "programming programming"),
        make_site("Short", "/short", "prog prog"),
    ];
    let index = index_of(&docs, 10);
    assert_eq!(match_query(&index, "prog", 2)[0].title, "Short");
}

#[test]
fn test_max_results_caps_every_bucket() {
    let docs: Vec<SiteDocument> = (0..12)
        .map(|i| make_site(&format!("Page {:02}", i), &format!("/p/{}", i), "common"))
        .collect();
    let data = build_index(&docs, 4);
    assert!(data.score_confs.iter().all(|bucket| bucket.len() <= 4));

    let index = SearchIndex::from_data(data).unwrap();
    assert_eq!(match_query(&index, "common", 10).len(), 4);
}

#[test]
fn test_tags_are_searchable() {
    let mut doc = make_site("Projects", "/projects", "");
    doc.tags = vec!["LangGraph".to_string()];
    let index = index_of(&[doc, make_site("Other", "/other", "")], 10);
    assert_eq!(titles(&match_query(&index, "langg", 5)), vec!["Projects"]);
}

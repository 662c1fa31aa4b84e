//! Matching against hand-written indexes with known buckets.

use crate::common::{assert_no_duplicates, index_from_buckets, pets_index, titles};
use folio::{match_query, match_site_indices, SearchIndex};

#[test]
fn test_two_words_fill_three_slots() {
    let index = pets_index();
    assert_eq!(titles(&match_query(&index, "cat dog", 3)), vec!["A", "B", "C"]);
}

#[test]
fn test_capacity_one_stops_in_first_bucket() {
    let index = pets_index();
    assert_eq!(titles(&match_query(&index, "cat dog", 1)), vec!["A"]);
}

#[test]
fn test_shared_site_listed_once() {
    let index = pets_index();
    let sites = match_site_indices(&index, "cat dog", 10);
    assert_eq!(sites, vec![2, 5, 7]);
    assert_no_duplicates(&sites);
}

#[test]
fn test_repeated_token_adds_nothing() {
    let index = pets_index();
    assert_eq!(match_site_indices(&index, "cat cat cat", 10), vec![2, 5]);
}

#[test]
fn test_unknown_query_is_empty() {
    let index = pets_index();
    assert!(match_query(&index, "zebra", 5).is_empty());
}

#[test]
fn test_empty_query_is_empty() {
    let index = pets_index();
    assert!(match_query(&index, "", 5).is_empty());
}

#[test]
fn test_bucket_order_is_preserved() {
    let data = index_from_buckets(5, &[("rust", &[4, 0, 3])]);
    let index = SearchIndex::from_data(data).unwrap();
    assert_eq!(match_site_indices(&index, "rust", 5), vec![4, 0, 3]);
}

#[test]
fn test_prefix_chain_buckets() {
    let data = index_from_buckets(3, &[("p", &[2, 1]), ("py", &[2, 1]), ("pyt", &[2])]);
    let index = SearchIndex::from_data(data).unwrap();
    assert_eq!(index.buckets().len(), 3);
    assert_eq!(match_site_indices(&index, "py", 5), vec![2, 1]);
    assert_eq!(match_site_indices(&index, "pyt p", 5), vec![2, 1]);
}

#[test]
fn test_json_index_round_trip_through_matcher() {
    let json = r#"{
        "sites": [
            {"title": "Home", "path": "/"},
            {"title": "GitHub", "path": "https://github.com/example"}
        ],
        "score_confs": [[1, 0]],
        "words": {"g": 0, "gi": 0, "git": 0}
    }"#;
    let index = SearchIndex::from_json(json).unwrap();
    let results = match_query(&index, "Git", 2);
    assert_eq!(titles(&results), vec!["GitHub", "Home"]);
    assert!(results[0].is_external());
    assert!(!results[1].is_external());
}

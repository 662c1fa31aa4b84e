//! Matcher invariants over arbitrary well-formed indexes.

use std::collections::{BTreeMap, HashSet};

use folio::{match_site_indices, normalize, split_query, IndexData, SearchIndex, SiteRecord};
use proptest::prelude::*;

use crate::common::assert_no_duplicates;

/// A well-formed index over a small vocabulary, so queries hit often.
fn index_strategy() -> impl Strategy<Value = SearchIndex> {
    (1usize..12).prop_flat_map(|site_count| {
        let bucket = prop::collection::vec(0..site_count, 0..8);
        let buckets = prop::collection::vec(bucket, 1..6);
        buckets.prop_flat_map(move |score_confs| {
            let bucket_count = score_confs.len();
            let words = prop::collection::hash_map("[a-e]{1,3}", 0..bucket_count, 0..20);
            (Just(score_confs), words).prop_map(move |(score_confs, words)| {
                let sites = (0..site_count)
                    .map(|i| SiteRecord::new(format!("Site {}", i), format!("/site/{}", i)))
                    .collect();
                SearchIndex::from_data(IndexData {
                    sites,
                    score_confs,
                    words: words.into_iter().collect::<BTreeMap<_, _>>(),
                })
                .expect("strategy only produces in-bounds references")
            })
        })
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-eA-E]{0,3}", 0..5).prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #[test]
    fn prop_results_never_exceed_capacity(
        index in index_strategy(),
        query in query_strategy(),
        capacity in 0usize..8,
    ) {
        let sites = match_site_indices(&index, &query, capacity);
        prop_assert!(sites.len() <= capacity);
    }

    #[test]
    fn prop_results_have_no_duplicates(
        index in index_strategy(),
        query in query_strategy(),
        capacity in 0usize..16,
    ) {
        assert_no_duplicates(&match_site_indices(&index, &query, capacity));
    }

    #[test]
    fn prop_results_come_from_queried_buckets(
        index in index_strategy(),
        query in query_strategy(),
        capacity in 0usize..16,
    ) {
        let normalized = normalize(&query);
        let allowed: HashSet<usize> = split_query(&normalized)
            .filter_map(|token| index.bucket_for(token))
            .flatten()
            .copied()
            .collect();

        for site in match_site_indices(&index, &query, capacity) {
            prop_assert!(allowed.contains(&site));
        }
    }

    #[test]
    fn prop_larger_capacity_extends_smaller(
        index in index_strategy(),
        query in query_strategy(),
        capacity in 0usize..8,
    ) {
        let small = match_site_indices(&index, &query, capacity);
        let large = match_site_indices(&index, &query, capacity + 4);
        prop_assert_eq!(&large[..small.len()], &small[..]);
    }

    #[test]
    fn prop_result_is_filled_when_enough_matches(
        index in index_strategy(),
        query in query_strategy(),
        capacity in 0usize..8,
    ) {
        let normalized = normalize(&query);
        let distinct: HashSet<usize> = split_query(&normalized)
            .filter_map(|token| index.bucket_for(token))
            .flatten()
            .copied()
            .collect();

        let sites = match_site_indices(&index, &query, capacity);
        prop_assert_eq!(sites.len(), distinct.len().min(capacity));
    }
}

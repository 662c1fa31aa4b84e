// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index loading.
//!
//! Structured random indexes, most of them with dangling references. Loading
//! either fails cleanly or produces an index the matcher can query without
//! going out of bounds.

#![no_main]

use arbitrary::Arbitrary;
use folio::{match_site_indices, IndexData, SearchIndex, SiteRecord};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzIndex {
    site_count: u8,
    score_confs: Vec<Vec<u8>>,
    words: Vec<(String, u8)>,
    query: String,
    capacity: u8,
}

fuzz_target!(|input: FuzzIndex| {
    let data = IndexData {
        sites: (0..input.site_count)
            .map(|i| SiteRecord::new(format!("Site {}", i), format!("/site/{}", i)))
            .collect(),
        score_confs: input
            .score_confs
            .iter()
            .map(|bucket| bucket.iter().map(|&site| site as usize).collect())
            .collect(),
        words: input
            .words
            .into_iter()
            .map(|(word, bucket)| (word, bucket as usize))
            .collect(),
    };

    let Ok(index) = SearchIndex::from_data(data) else {
        return;
    };

    let capacity = input.capacity as usize;
    let sites = match_site_indices(&index, &input.query, capacity);
    assert!(sites.len() <= capacity);
    assert!(sites.iter().all(|&site| site < index.sites().len()));
});

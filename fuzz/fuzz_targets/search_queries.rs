// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Arbitrary bytes as the query and capacity against a built portfolio index.
//! The matcher must not panic, must respect capacity, and must never list a
//! site twice.

#![no_main]

use std::collections::HashSet;
use std::sync::OnceLock;

use folio::build::{build_index, DEFAULT_MAX_RESULTS};
use folio::testing::portfolio_sites;
use folio::{match_query, match_site_indices, render_slots, SearchIndex};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, &[u8])| {
    static INDEX: OnceLock<SearchIndex> = OnceLock::new();
    let index = INDEX.get_or_init(|| {
        SearchIndex::from_data(build_index(&portfolio_sites(), DEFAULT_MAX_RESULTS))
            .expect("portfolio index is well formed")
    });

    let (capacity, query) = input;
    let capacity = capacity as usize % 32;
    let query = String::from_utf8_lossy(query);

    let sites = match_site_indices(index, &query, capacity);

    // INVARIANT 1: bounded by capacity
    assert!(sites.len() <= capacity);

    // INVARIANT 2: no duplicates
    let unique: HashSet<_> = sites.iter().collect();
    assert_eq!(unique.len(), sites.len(), "duplicate site in {:?}", sites);

    // INVARIANT 3: valid site indices
    assert!(sites.iter().all(|&site| site < index.sites().len()));

    // INVARIANT 4: exactly `capacity` slots
    let results = match_query(index, &query, capacity);
    assert_eq!(render_slots(&results, capacity).len(), capacity);
});

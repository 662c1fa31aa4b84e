// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query matching against the prefix index.
//!
//! The heavy lifting happened at build time: every word and every word prefix
//! already maps to a ranked bucket of sites. At query time the job is a
//! single pass: normalize, split on spaces, look each token up, and union the
//! buckets in order until the result slots are full.
//!
//! ```text
//! "Café dog"  ──normalize──▶  "cafe dog"  ──split──▶  ["cafe", "dog"]
//!                                                        │       │
//!                                       words["cafe"] ◀──┘       └──▶ words["dog"]
//!                                            │                           │
//!                                    score_confs[b0]             score_confs[b1]
//!                                            └───────── union ───────────┘
//!                                                          │
//!                                            first `capacity` unique sites
//! ```
//!
//! Order is token order, then bucket order: earlier words and earlier-listed
//! sites win. There is no re-ranking across tokens.

pub mod dedup;

use crate::index::SearchIndex;
use crate::state::IndexState;
use crate::types::{ResultSlot, SiteRecord};
use crate::utils::{normalize, split_query};

use dedup::SiteAccumulator;

/// Result of a query against possibly-unloaded index state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// The index has not finished loading. Nothing was matched.
    Unavailable,
    /// Matches in display order, at most `capacity` long.
    Ready(Vec<&'a SiteRecord>),
}

impl<'a> SearchOutcome<'a> {
    /// Matches, or an empty list when the index was unavailable.
    pub fn results(&self) -> &[&'a SiteRecord] {
        match self {
            SearchOutcome::Ready(results) => results.as_slice(),
            SearchOutcome::Unavailable => &[],
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SearchOutcome::Ready(_))
    }
}

/// Site indices matching `query`, in display order, at most `capacity`.
///
/// Unknown tokens and empty tokens are skipped. Once `capacity` sites are
/// collected no further tokens are looked at.
pub fn match_site_indices(index: &SearchIndex, query: &str, capacity: usize) -> Vec<usize> {
    let mut acc = SiteAccumulator::new(capacity);
    if acc.is_full() {
        return acc.into_sites();
    }

    let normalized = normalize(query);
    for token in split_query(&normalized) {
        if token.is_empty() {
            continue;
        }
        let Some(sites) = index.bucket_for(token) else {
            continue;
        };
        if acc.extend_from(sites) {
            break;
        }
    }

    acc.into_sites()
}

/// Sites matching `query`, in display order, at most `capacity`.
pub fn match_query<'a>(index: &'a SearchIndex, query: &str, capacity: usize) -> Vec<&'a SiteRecord> {
    match_site_indices(index, query, capacity)
        .into_iter()
        .map(|site| index.site(site))
        .collect()
}

/// Match against index state that may not be loaded yet.
///
/// Before the index loads this returns [`SearchOutcome::Unavailable`] for any
/// query, without touching the query at all.
pub fn search<'a>(state: &'a IndexState, query: &str, capacity: usize) -> SearchOutcome<'a> {
    match state.index() {
        Some(index) => SearchOutcome::Ready(match_query(index, query, capacity)),
        None => SearchOutcome::Unavailable,
    }
}

/// Lay results out over exactly `capacity` display slots.
///
/// Slots beyond the last result are [`ResultSlot::Empty`]; results beyond
/// `capacity` are dropped.
pub fn render_slots(results: &[&SiteRecord], capacity: usize) -> Vec<ResultSlot> {
    (0..capacity)
        .map(|slot| {
            results
                .get(slot)
                .map_or(ResultSlot::Empty, |site| ResultSlot::from_site(site))
        })
        .collect()
}

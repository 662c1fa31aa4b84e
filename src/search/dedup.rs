// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Capped, insertion-ordered site accumulation.
//!
//! A site should appear at most once in a result list, and the list should
//! never be longer than the number of slots on screen. `SiteAccumulator`
//! owns both rules so the matcher loop only has to feed it site indices and
//! ask whether it is full.
//!
//! Deduplication is by site index alone. A site seen again under a later
//! token keeps its first position; there is no relevance merging.

use std::collections::HashSet;

/// Capacity comes from the caller; only this much is reserved up front.
const PREALLOCATE_LIMIT: usize = 64;

/// Insertion-ordered set of site indices with a hard capacity.
#[derive(Debug)]
pub struct SiteAccumulator {
    order: Vec<usize>,
    seen: HashSet<usize>,
    capacity: usize,
}

impl SiteAccumulator {
    pub fn new(capacity: usize) -> Self {
        let reserve = capacity.min(PREALLOCATE_LIMIT);
        Self {
            order: Vec::with_capacity(reserve),
            seen: HashSet::with_capacity(reserve),
            capacity,
        }
    }

    /// Append a site unless it is already present or the accumulator is full.
    ///
    /// Returns `true` when the site was appended.
    pub fn push(&mut self, site: usize) -> bool {
        if self.is_full() || !self.seen.insert(site) {
            return false;
        }
        self.order.push(site);
        true
    }

    /// Feed sites in order until full. Returns `true` once full.
    pub fn extend_from(&mut self, sites: &[usize]) -> bool {
        for &site in sites {
            if self.is_full() {
                break;
            }
            self.push(site);
        }
        self.is_full()
    }

    pub fn is_full(&self) -> bool {
        self.order.len() >= self.capacity
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.order.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[cfg(test)]
    fn contains(&self, site: usize) -> bool {
        self.seen.contains(&site)
    }

    /// Site indices in the order they were first seen.
    pub fn into_sites(self) -> Vec<usize> {
        self.order
    }
}

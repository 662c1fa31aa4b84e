// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validated, read-only search index.
//!
//! The raw [`IndexData`] is whatever came over the wire. `SearchIndex` wraps it
//! after checking that every bucket id a word points at exists and every site
//! index a bucket lists exists. Once constructed, lookups cannot go out of
//! bounds, so the matcher indexes directly.

use log::debug;

use crate::error::IndexError;
use crate::types::{IndexData, SiteRecord};

/// Search index whose cross references are known to be in bounds.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    data: IndexData,
}

impl SearchIndex {
    /// Validate raw index data.
    ///
    /// Fails on the first dangling reference, checking words in sorted order.
    pub fn from_data(data: IndexData) -> Result<Self, IndexError> {
        let bucket_count = data.score_confs.len();
        let site_count = data.sites.len();

        for (word, &bucket) in &data.words {
            if bucket >= bucket_count {
                return Err(IndexError::InvalidBucket {
                    word: word.clone(),
                    bucket,
                    bucket_count,
                });
            }
        }

        for (bucket, sites) in data.score_confs.iter().enumerate() {
            if let Some(&site) = sites.iter().find(|&&site| site >= site_count) {
                return Err(IndexError::InvalidSite {
                    bucket,
                    site,
                    site_count,
                });
            }
        }

        debug!(
            "loaded search index: {} sites, {} buckets, {} words",
            site_count,
            bucket_count,
            data.words.len()
        );

        Ok(Self { data })
    }

    /// Parse and validate an index JSON document.
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        let data: IndexData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Site indices for a normalized word, in bucket order.
    ///
    /// `None` when the word is not in the index.
    pub fn bucket_for(&self, word: &str) -> Option<&[usize]> {
        self.data
            .words
            .get(word)
            .map(|&bucket| self.data.score_confs[bucket].as_slice())
    }

    /// Site record by index. Panics on an index that did not come from this
    /// index's buckets.
    pub fn site(&self, site: usize) -> &SiteRecord {
        &self.data.sites[site]
    }

    pub fn sites(&self) -> &[SiteRecord] {
        &self.data.sites
    }

    pub fn buckets(&self) -> &[Vec<usize>] {
        &self.data.score_confs
    }

    pub fn word_count(&self) -> usize {
        self.data.words.len()
    }

    /// Borrow the underlying data (e.g. to re-serialize it).
    pub fn data(&self) -> &IndexData {
        &self.data
    }

    pub fn into_data(self) -> IndexData {
        self.data
    }
}

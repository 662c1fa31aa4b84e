// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types for the search index.
//!
//! `IndexData` is the wire shape: exactly what the builder writes and the page
//! fetches. Nothing here checks that bucket ids or site indices point
//! anywhere; that happens once in
//! [`SearchIndex::from_data`](crate::SearchIndex::from_data).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::is_external_path;

/// A page (or external link) that search can point at.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SiteRecord {
    pub title: String,
    /// Rooted site path (`/work/facephi`) or an external URL.
    pub path: String,
}

impl SiteRecord {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }

    /// True when the path leaves the site and should open in a new context.
    pub fn is_external(&self) -> bool {
        is_external_path(&self.path)
    }
}

/// Index document as stored on disk and served to the page.
///
/// ```json
/// { "sites": [{"title": "A", "path": "/a"}],
///   "score_confs": [[0]],
///   "words": {"a": 0} }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexData {
    /// Site directory, indexed by site index.
    pub sites: Vec<SiteRecord>,
    /// Score buckets: each is an ordered list of site indices.
    pub score_confs: Vec<Vec<usize>>,
    /// Normalized word (or word prefix) to score-bucket id. Sorted, so the
    /// serialized bytes depend only on the content.
    pub words: BTreeMap<String, usize>,
}

/// One display slot handed to the rendering layer.
///
/// The renderer always receives exactly `capacity` slots; slots past the end
/// of the result list are `Empty` so stale entries get cleared.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResultSlot {
    #[serde(rename_all = "camelCase")]
    Populated {
        title: String,
        path: String,
        is_external: bool,
    },
    Empty,
}

impl ResultSlot {
    pub fn from_site(site: &SiteRecord) -> Self {
        ResultSlot::Populated {
            title: site.title.clone(),
            path: site.path.clone(),
            is_external: site.is_external(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ResultSlot::Empty)
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page-lifetime index state.
//!
//! The index is fetched once at startup, and queries can arrive before the
//! fetch finishes. The state moves exactly once from `Unloaded` to
//! `Loaded` and never back, so a `OnceLock` is all the coordination needed:
//! readers either see nothing or see the final index.

use std::sync::{Arc, OnceLock};

use log::debug;

use crate::error::IndexError;
use crate::index::SearchIndex;

/// Snapshot of the index state, handed to the matcher.
#[derive(Debug, Clone)]
pub enum IndexState {
    Unloaded,
    Loaded(Arc<SearchIndex>),
}

impl IndexState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, IndexState::Loaded(_))
    }

    pub fn index(&self) -> Option<&SearchIndex> {
        match self {
            IndexState::Loaded(index) => Some(index),
            IndexState::Unloaded => None,
        }
    }
}

impl From<SearchIndex> for IndexState {
    fn from(index: SearchIndex) -> Self {
        IndexState::Loaded(Arc::new(index))
    }
}

/// Holder that transitions once from unloaded to loaded.
#[derive(Debug, Default)]
pub struct IndexCell {
    slot: OnceLock<Arc<SearchIndex>>,
}

impl IndexCell {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Install the index. A second call is refused and the first index stays.
    pub fn load(&self, index: SearchIndex) -> Result<(), IndexError> {
        self.slot
            .set(Arc::new(index))
            .map_err(|_| IndexError::AlreadyLoaded)?;
        debug!("search index ready");
        Ok(())
    }

    /// Parse, validate and install an index document.
    pub fn load_json(&self, json: &str) -> Result<(), IndexError> {
        if self.slot.get().is_some() {
            return Err(IndexError::AlreadyLoaded);
        }
        self.load(SearchIndex::from_json(json)?)
    }

    pub fn state(&self) -> IndexState {
        match self.slot.get() {
            Some(index) => IndexState::Loaded(Arc::clone(index)),
            None => IndexState::Unloaded,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.get().is_some()
    }
}

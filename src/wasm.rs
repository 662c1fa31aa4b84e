// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings.
//!
//! This is the browser-facing API. The page fetches `search.json` once at
//! startup and hands the text to `loadIndex`; every keystroke calls
//! `search(query, capacity)` and renders the returned slots. Keystrokes that
//! arrive before the fetch resolves get `status: "unavailable"` and no slots
//! filled, so the page never has to guard against a missing index itself.
//!
//! ```js
//! import init, { loadIndex, search } from './folio.js';
//!
//! await init();
//! fetch('/search.json').then(r => r.text()).then(loadIndex);
//!
//! input.addEventListener('input', () => {
//!     const { status, slots } = search(input.value, slotElements.length);
//!     slots.forEach((slot, i) => renderSlot(slotElements[i], slot));
//! });
//! ```
//!
//! Theme persistence stays in JavaScript (it owns `localStorage`); the
//! helpers here only decide what a stored value means.

use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::index::SearchIndex;
use crate::preferences::Theme;
use crate::search::{match_query, render_slots, search as search_state, SearchOutcome};
use crate::state::IndexCell;
use crate::types::ResultSlot;

/// Page-wide index, installed once by `loadIndex`.
static PAGE_INDEX: IndexCell = IndexCell::new();

/// Slot as JavaScript sees it: a record, or `null` for an empty slot.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSlot {
    title: String,
    path: String,
    is_external: bool,
}

#[derive(Serialize)]
struct JsSearchResponse {
    status: &'static str,
    slots: Vec<Option<JsSlot>>,
}

impl JsSearchResponse {
    fn new(status: &'static str, slots: Vec<ResultSlot>) -> Self {
        let slots = slots
            .into_iter()
            .map(|slot| match slot {
                ResultSlot::Populated {
                    title,
                    path,
                    is_external,
                } => Some(JsSlot {
                    title,
                    path,
                    is_external,
                }),
                ResultSlot::Empty => None,
            })
            .collect();
        Self { status, slots }
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Install the page-wide index from the fetched JSON text.
///
/// Throws on malformed JSON or when an index was already loaded.
#[wasm_bindgen(js_name = loadIndex)]
pub fn load_index(json: &str) -> Result<(), JsValue> {
    PAGE_INDEX
        .load_json(json)
        .map_err(|e| JsValue::from_str(&format!("Failed to load search index: {}", e)))
}

/// Whether `loadIndex` has completed.
#[wasm_bindgen(js_name = isIndexReady)]
pub fn is_index_ready() -> bool {
    PAGE_INDEX.is_loaded()
}

/// Match `query` against the page-wide index.
///
/// Always returns `capacity` slots. Before the index loads, every slot is
/// `null` and `status` is `"unavailable"`.
#[wasm_bindgen]
pub fn search(query: &str, capacity: usize) -> Result<JsValue, JsValue> {
    let state = PAGE_INDEX.state();
    let response = match search_state(&state, query, capacity) {
        SearchOutcome::Ready(results) => {
            JsSearchResponse::new("ready", render_slots(&results, capacity))
        }
        SearchOutcome::Unavailable => {
            JsSearchResponse::new("unavailable", render_slots(&[], capacity))
        }
    };
    to_js(&response)
}

/// Explicit index handle, for pages that manage more than one index.
#[wasm_bindgen]
pub struct SiteSearch {
    index: SearchIndex,
}

#[wasm_bindgen]
impl SiteSearch {
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str) -> Result<SiteSearch, JsValue> {
        let index = SearchIndex::from_json(json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse: {}", e)))?;
        Ok(SiteSearch { index })
    }

    /// Number of sites in the directory.
    #[wasm_bindgen(js_name = siteCount)]
    pub fn site_count(&self) -> usize {
        self.index.sites().len()
    }

    /// Matching slots, always `capacity` long.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, capacity: usize) -> Result<JsValue, JsValue> {
        let results = match_query(&self.index, query, capacity);
        to_js(&JsSearchResponse::new("ready", render_slots(&results, capacity)))
    }
}

/// Theme for a stored preference value (`null`, `"light"`, `"dark"`).
///
/// Missing or unrecognized values resolve to `fallback`, or dark when the
/// fallback itself is not a theme name.
#[wasm_bindgen(js_name = resolveTheme)]
pub fn resolve_theme(stored: Option<String>, fallback: &str) -> String {
    let fallback = fallback.parse().unwrap_or_default();
    stored
        .and_then(|value| value.parse::<Theme>().ok())
        .unwrap_or(fallback)
        .as_str()
        .to_string()
}

/// The other theme.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme(current: &str) -> String {
    current
        .parse::<Theme>()
        .unwrap_or_default()
        .toggle()
        .as_str()
        .to_string()
}

//! Prefix search for static portfolio sites.
//!
//! An offline builder scores every word of every page and expands the scores
//! over all word prefixes, so the browser only ever does hash lookups: no
//! tokenizer, no ranking, no fuzzy matching at query time.
//!
//! # Architecture
//!
//! ```text
//!   site generator output                         browser
//! ┌────────────────────┐                  ┌──────────────────────┐
//! │ manifest.json      │                  │ fetch("search.json") │
//! │ pages/*.json       │                  └──────────┬───────────┘
//! └─────────┬──────────┘                             ▼
//!           ▼                              ┌──────────────────────┐
//! ┌────────────────────┐   search.json     │ state.rs (IndexCell) │
//! │ build/ (trie.rs,   │ ────────────────▶ │ index.rs (validate)  │
//! │ document.rs, ...)  │                   └──────────┬───────────┘
//! └────────────────────┘                              ▼
//!                                          ┌──────────────────────┐
//!                                          │ search/ (normalize,  │
//!                                          │ union, dedup, slots) │
//!                                          └──────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use folio::{match_query, SearchIndex};
//!
//! let json = r#"{
//!     "sites": [{"title": "Tutor", "path": "/tutor"}],
//!     "score_confs": [[0]],
//!     "words": {"tu": 0, "tut": 0, "tutor": 0}
//! }"#;
//! let index = SearchIndex::from_json(json).unwrap();
//!
//! let results = match_query(&index, "Tut", 5);
//! assert_eq!(results[0].path, "/tutor");
//! ```

// Module declarations
pub mod build;
pub mod error;
mod index;
pub mod preferences;
mod search;
mod state;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use error::{BuildError, IndexError, StorageError};
pub use index::SearchIndex;
pub use preferences::{
    load_theme, save_theme, toggle_theme, FileStorage, MemoryStorage, Storage, Theme,
};
pub use search::dedup::SiteAccumulator;
pub use search::{match_query, match_site_indices, render_slots, search, SearchOutcome};
pub use state::{IndexCell, IndexState};
pub use types::{IndexData, ResultSlot, SiteRecord};
pub use utils::{is_external_path, normalize, split_query};

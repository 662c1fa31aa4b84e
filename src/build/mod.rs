// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Offline index construction.
//!
//! Reads the site generator's output (a manifest plus one JSON file per page),
//! scores every word of every page, expands the scores over all word prefixes
//! and writes the JSON index the page fetches at startup.

pub mod document;
pub mod manifest;
pub mod parallel;
pub mod trie;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::debug;

use crate::error::{BuildError, IndexError};
use crate::index::SearchIndex;
use crate::types::{IndexData, SiteRecord};

pub use document::*;
pub use manifest::*;
pub use parallel::*;
pub use trie::{FlatIndex, WordScoreTrie, WORD_TRIE_CONST};

/// Default number of sites kept per prefix.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Name of the unhashed copy of the index.
pub const INDEX_FILENAME: &str = "search.json";

/// A built index, serialized and ready to write.
pub struct BuiltIndex {
    pub bytes: Vec<u8>,
    pub site_count: usize,
    pub word_count: usize,
    pub bucket_count: usize,
}

impl BuiltIndex {
    /// Content-addressed filename, `search-<crc32>.json`.
    pub fn hashed_filename(&self) -> String {
        format!("search-{:08x}.json", crc32fast::hash(&self.bytes))
    }
}

/// Create a progress style for the build progress bars
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Build index data from site documents.
///
/// Site index `i` is `documents[i]`. Every non-empty prefix of every word
/// maps to the top `max_results` sites for that prefix.
pub fn build_index(documents: &[SiteDocument], max_results: usize) -> IndexData {
    // word -> site -> tf
    let mut postings: HashMap<String, HashMap<usize, f64>> = HashMap::new();
    for (site, doc) in documents.iter().enumerate() {
        for (word, tf) in doc.term_frequencies() {
            postings.entry(word).or_default().insert(site, tf);
        }
    }

    let mut trie = WordScoreTrie::new();
    for (word, tf_by_site) in &postings {
        trie.add(word, tf_by_site, documents.len());
    }
    debug!(
        "indexed {} distinct words into {} trie nodes",
        postings.len(),
        trie.node_count()
    );

    let flat = trie.flatten(documents, max_results);

    IndexData {
        sites: documents
            .iter()
            .map(|doc| SiteRecord::new(doc.title.clone(), doc.path.clone()))
            .collect(),
        score_confs: flat.score_confs,
        words: flat.words,
    }
}

/// Build, validate and serialize an index.
pub fn build_serialized(
    documents: &[SiteDocument],
    max_results: usize,
) -> Result<BuiltIndex, BuildError> {
    let index = SearchIndex::from_data(build_index(documents, max_results))?;
    let bytes = serde_json::to_vec(index.data()).map_err(IndexError::from)?;

    Ok(BuiltIndex {
        bytes,
        site_count: index.sites().len(),
        word_count: index.word_count(),
        bucket_count: index.buckets().len(),
    })
}

/// Run the full build: read `input_dir/manifest.json` and the documents it
/// lists, write `search-<hash>.json` and `search.json` into `output_dir`.
///
/// Returns the path of the hashed index file.
pub fn run_build(
    input_dir: &str,
    output_dir: &str,
    max_results: usize,
) -> Result<PathBuf, BuildError> {
    let input_path = Path::new(input_dir);
    let output_path = Path::new(output_dir);

    #[cfg(feature = "parallel")]
    let multi = MultiProgress::new();

    // 1. Read manifest
    let manifest_path = input_path.join("manifest.json");
    let manifest_content =
        fs::read_to_string(&manifest_path).map_err(|source| BuildError::Read {
            path: manifest_path.clone(),
            source,
        })?;
    let manifest: InputManifest =
        serde_json::from_str(&manifest_content).map_err(|source| BuildError::Parse {
            path: manifest_path.clone(),
            source,
        })?;

    // 2. Load documents
    #[cfg(feature = "parallel")]
    let load_pb = multi.add(ProgressBar::new(manifest.documents.len() as u64));
    #[cfg(feature = "parallel")]
    load_pb.set_style(create_progress_style());
    #[cfg(feature = "parallel")]
    load_pb.set_prefix("Loading");

    let documents = parallel::load_documents_with_progress(
        input_path,
        &manifest,
        #[cfg(feature = "parallel")]
        &load_pb,
    )?;

    #[cfg(feature = "parallel")]
    load_pb.finish_with_message(format!("loaded {} documents", documents.len()));

    if documents.is_empty() {
        eprintln!("⚠️  No documents listed; writing an empty index");
    }

    // 3. Build
    let built = build_serialized(&documents, max_results)?;

    // 4. Write hashed and stable copies
    fs::create_dir_all(output_path).map_err(|source| BuildError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    let hashed_path = output_path.join(built.hashed_filename());
    for path in [hashed_path.clone(), output_path.join(INDEX_FILENAME)] {
        fs::write(&path, &built.bytes).map_err(|source| BuildError::Write {
            path: path.clone(),
            source,
        })?;
        eprintln!("  ✓ {}", path.display());
    }

    eprintln!();
    eprintln!("✅ Build complete");
    eprintln!(
        "   {} sites │ {} words │ {} buckets │ {} bytes",
        built.site_count,
        built.word_count,
        built.bucket_count,
        built.bytes.len()
    );

    Ok(hashed_path)
}

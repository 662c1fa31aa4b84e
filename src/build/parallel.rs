// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel document loading.
//!
//! Reading and parsing one JSON file per page is the only part of the build
//! that touches the disk, and every file is independent. With the `parallel`
//! feature the files are loaded on the rayon pool; without it, one by one.
//! Either way the output keeps manifest order, because manifest position is
//! the site index.

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::BuildError;

use super::{InputManifest, SiteDocument};

/// Read and parse one site document.
pub fn load_document(input_dir: &Path, filename: &str) -> Result<SiteDocument, BuildError> {
    let path = input_dir.join(filename);
    let content = fs::read_to_string(&path).map_err(|source| BuildError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| BuildError::Parse { path, source })
}

/// Load all documents listed in the manifest, in manifest order.
#[cfg(feature = "parallel")]
pub fn load_documents(
    input_dir: &Path,
    manifest: &InputManifest,
) -> Result<Vec<SiteDocument>, BuildError> {
    manifest
        .documents
        .par_iter()
        .map(|filename| load_document(input_dir, filename))
        .collect()
}

/// Load all documents listed in the manifest, in manifest order.
#[cfg(not(feature = "parallel"))]
pub fn load_documents(
    input_dir: &Path,
    manifest: &InputManifest,
) -> Result<Vec<SiteDocument>, BuildError> {
    manifest
        .documents
        .iter()
        .map(|filename| load_document(input_dir, filename))
        .collect()
}

/// Load all documents in parallel, advancing `progress` as files complete.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
    progress: &ProgressBar,
) -> Result<Vec<SiteDocument>, BuildError> {
    let counter = AtomicUsize::new(0);
    let total = manifest.documents.len();

    manifest
        .documents
        .par_iter()
        .map(|filename| {
            let doc = load_document(input_dir, filename)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(doc)
        })
        .collect()
}

/// Non-parallel fallback (no progress display).
#[cfg(not(feature = "parallel"))]
pub fn load_documents_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
) -> Result<Vec<SiteDocument>, BuildError> {
    load_documents(input_dir, manifest)
}

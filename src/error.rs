// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! None of these reach the person typing into the search box. Index errors
//! surface once, when the index is loaded; storage errors are logged and
//! replaced by a fallback at the call site; build errors stop the CLI.

use std::path::PathBuf;

/// The index document could not be turned into a [`SearchIndex`](crate::SearchIndex).
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Not valid JSON, or not the expected shape.
    #[error("invalid index JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A word points at a bucket that does not exist.
    #[error("word '{word}' maps to bucket {bucket} but only {bucket_count} buckets exist")]
    InvalidBucket {
        word: String,
        bucket: usize,
        bucket_count: usize,
    },

    /// A bucket lists a site that does not exist.
    #[error("bucket {bucket} lists site {site} but only {site_count} sites exist")]
    InvalidSite {
        bucket: usize,
        site: usize,
        site_count: usize,
    },

    /// The page-wide index was already loaded once.
    #[error("index already loaded")]
    AlreadyLoaded,
}

/// Preference storage could not be read or written.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled or missing (private browsing, no config dir).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the backing file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("storage file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Building an index from site documents failed.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("built index failed validation: {0}")]
    Invalid(#[from] IndexError),
}

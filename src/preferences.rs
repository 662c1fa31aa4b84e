// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Persisted theme preference.
//!
//! Storage can fail for boring reasons: private browsing disables it, the
//! config directory is read-only, the file was hand-edited into garbage. None
//! of that should stop the page (or the CLI) from rendering. Storage returns
//! `Result`, and the theme helpers decide the fallback in plain sight: log a
//! warning, use the default, move on.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::warn;
use parking_lot::RwLock;

use crate::error::StorageError;

/// Storage key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected 'light' or 'dark')")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" | "l" => Ok(Theme::Light),
            "dark" | "d" => Ok(Theme::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

/// Key-value preference storage.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage, optionally simulating unavailable storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RwLock<BTreeMap<String, String>>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose every access fails, like a browser with storage disabled.
    pub fn unavailable() -> Self {
        Self {
            values: RwLock::new(BTreeMap::new()),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("storage disabled".to_string()));
        }
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-object file storage.
///
/// The whole file is read on every `get` and rewritten on every `set`; the
/// lock only serializes access from this process.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// `<config dir>/folio/preferences.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.read();
        Ok(self.read_all()?.remove(key))
    }

    /// Written through a sibling `.tmp` file renamed over the target. A
    /// corrupt file is replaced with a fresh object.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.write();
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(e @ StorageError::Corrupt { .. }) => {
                warn!("overwriting preferences: {}", e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source: std::io::Error| StorageError::Io { path, source }
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }
        let json = serde_json::to_string_pretty(&values).map_err(|source| {
            StorageError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);
        fs::write(&tmp_path, json).map_err(io_err(tmp_path.as_path()))?;
        fs::rename(&tmp_path, &self.path).map_err(io_err(self.path.as_path()))
    }
}

/// Stored theme, or `fallback` when storage fails or holds nothing usable.
pub fn load_theme(storage: &dyn Storage, fallback: Theme) -> Theme {
    match storage.get(THEME_KEY) {
        Ok(Some(value)) => match value.parse() {
            Ok(theme) => theme,
            Err(e) => {
                warn!("ignoring stored theme: {}", e);
                fallback
            }
        },
        Ok(None) => fallback,
        Err(e) => {
            warn!("could not read theme preference: {}", e);
            fallback
        }
    }
}

/// Persist `theme`. Returns `false` (after logging) when storage fails.
pub fn save_theme(storage: &dyn Storage, theme: Theme) -> bool {
    match storage.set(THEME_KEY, theme.as_str()) {
        Ok(()) => true,
        Err(e) => {
            warn!("could not save theme preference: {}", e);
            false
        }
    }
}

/// Flip the stored theme and persist it. Returns the new theme even when
/// saving fails, so the caller can still apply it for this session.
pub fn toggle_theme(storage: &dyn Storage, fallback: Theme) -> Theme {
    let theme = load_theme(storage, fallback).toggle();
    save_theme(storage, theme);
    theme
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Four subcommands: `index` builds the JSON index from the site generator's
//! output, `inspect` reports on a built index, `search` runs the same matcher
//! the page runs, and `theme` reads or flips the stored theme preference.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

use folio::build::DEFAULT_MAX_RESULTS;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Prefix search index builder for static portfolio sites",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build search index from directory of JSON files
    Index {
        /// Input directory containing manifest.json and document files
        #[arg(short, long)]
        input: String,

        /// Output directory for search.json and its hashed copy
        #[arg(short, long)]
        output: String,

        /// Sites kept per word prefix
        #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,
    },

    /// Inspect a built index file
    Inspect {
        /// Path to index JSON
        file: String,
    },

    /// Search an index file and display the result slots
    Search {
        /// Path to index JSON
        file: String,

        /// Search query
        query: String,

        /// Number of result slots to fill
        #[arg(short, long, default_value = "5")]
        capacity: usize,
    },

    /// Show or change the stored theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,

        /// Preferences file (defaults to the platform config directory)
        #[arg(long, env = "FOLIO_STORE", global = true)]
        store: Option<String>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ThemeAction {
    /// Print the stored theme
    Show,
    /// Flip between light and dark
    Toggle,
    /// Store a specific theme
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

#[derive(ValueEnum, Clone, Copy)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for folio::Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => folio::Theme::Light,
            ThemeArg::Dark => folio::Theme::Dark,
        }
    }
}

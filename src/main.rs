// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;

use folio::build::run_build;
use folio::{
    load_theme, match_query, render_slots, save_theme, toggle_theme, FileStorage, IndexData,
    ResultSlot, SearchIndex, Theme,
};

mod cli;
use cli::display::{self, *};
use cli::{Cli, Commands, ThemeAction};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Index {
            input,
            output,
            max_results,
        } => run_build(&input, &output, max_results)
            .map(|_| ())
            .map_err(anyhow::Error::from),
        Commands::Inspect { file } => inspect_index_file(&file),
        Commands::Search {
            file,
            query,
            capacity,
        } => search_index_file(&file, &query, capacity),
        Commands::Theme { action, store } => {
            run_theme(action.unwrap_or(ThemeAction::Show), store.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn read_index_text(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path))
}

fn brotli_size(bytes: &[u8]) -> Result<usize> {
    let mut compressed = Vec::new();
    {
        let mut writer = brotli::CompressorWriter::new(&mut compressed, 4096, 11, 22);
        writer.write_all(bytes)?;
        writer.flush()?;
    }
    Ok(compressed.len())
}

/// Report on a built index: sizes, counts, bucket histogram and validity.
fn inspect_index_file(path: &str) -> Result<()> {
    let text = read_index_text(path)?;
    let raw: IndexData =
        serde_json::from_str(&text).with_context(|| format!("{} is not an index document", path))?;

    let site_count = raw.sites.len();
    let bucket_count = raw.score_confs.len();
    let word_count = raw.words.len();
    let external = raw.sites.iter().filter(|site| site.is_external()).count();
    let compressed = brotli_size(text.as_bytes())?;
    let checksum = crc32fast::hash(text.as_bytes());

    // bucket size -> number of buckets
    let mut histogram: BTreeMap<usize, usize> = BTreeMap::new();
    for bucket in &raw.score_confs {
        *histogram.entry(bucket.len()).or_default() += 1;
    }
    let largest = histogram.values().copied().max().unwrap_or(0);

    let validation = SearchIndex::from_data(raw);
    debug!("inspected {} ({} bytes)", path, text.len());

    section_top("FILE");
    row(&format!(" Path        {}", path));
    row(&format!(" Size        {}", format_size(text.len())));
    row(&format!(
        " Brotli      {} ({})",
        format_size(compressed),
        savings_colored(text.len(), compressed)
    ));
    row(&format!(" CRC32       {:08x}", checksum));
    section_mid("CONTENTS");
    row(&format!(" Sites       {} ({} external)", site_count, external));
    row(&format!(" Words       {}", word_count));
    row(&format!(" Buckets     {}", bucket_count));
    section_mid("BUCKET SIZES");
    if histogram.is_empty() {
        row(&format!(" {}", empty_slot()));
    }
    for (size, count) in &histogram {
        row(&format!(
            " {:>4} sites  {:>6}  {}",
            size,
            count,
            bar(*count, largest, 40)
        ));
    }
    section_mid("VALIDITY");
    match &validation {
        Ok(_) => row(&format!(" {}", validity(true))),
        Err(e) => {
            row(&format!(" {}", validity(false)));
            row(&format!(" {}", e));
        }
    }
    section_bot();

    if let Err(e) = validation {
        bail!("{} failed validation: {}", path, e);
    }
    Ok(())
}

/// Run the page's matcher against an index file and print every slot.
fn search_index_file(path: &str, query: &str, capacity: usize) -> Result<()> {
    let index = SearchIndex::from_json(&read_index_text(path)?)
        .with_context(|| format!("failed to load {}", path))?;

    let results = match_query(&index, query, capacity);
    let slots = render_slots(&results, capacity);

    section_top(&format!("\"{}\"", query));
    for (i, slot) in slots.iter().enumerate() {
        let line = match slot {
            ResultSlot::Populated {
                title,
                path,
                is_external,
            } => format!(
                " {:>2}. {} {}  {}",
                i + 1,
                link_badge(*is_external),
                title,
                themed(GRAY, &[], path)
            ),
            ResultSlot::Empty => format!(" {:>2}. {}", i + 1, empty_slot()),
        };
        row(&line);
    }
    section_bot();
    println!("{} of {} slots filled", results.len(), capacity);
    Ok(())
}

fn run_theme(action: ThemeAction, store: Option<&str>) -> Result<()> {
    let path: PathBuf = display::store_path(store)
        .context("no preferences location; pass --store or set FOLIO_STORE")?;
    let storage = FileStorage::new(&path);
    debug!("theme preference at {}", path.display());

    let theme = match action {
        ThemeAction::Show => load_theme(&storage, Theme::default()),
        ThemeAction::Toggle => toggle_theme(&storage, Theme::default()),
        ThemeAction::Set { theme } => {
            let theme = Theme::from(theme);
            if !save_theme(&storage, theme) {
                bail!("could not write {}", path.display());
            }
            theme
        }
    };

    println!("{}", theme);
    Ok(())
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix trie that turns per-word scores into per-prefix site rankings.
//!
//! Search on the page is "type a few letters, see the top pages". To make that
//! a single hash lookup, every prefix of every word gets its own precomputed
//! ranking. The trie is how the rankings are computed:
//!
//! 1. Each word adds TF-IDF style scores at its leaf.
//! 2. A node's cumulative score is its own leaf score plus 80% of each child's
//!    cumulative score. Typing "prog" favors pages about "programming", with
//!    a page that literally says "prog" still winning.
//! 3. Flattening walks every node, keeps the top `max_results` sites, and
//!    stores each distinct ranking once in the bucket table.
//!
//! Buckets are shared. On a portfolio-sized site most prefixes collapse to a
//! handful of distinct rankings, which keeps the JSON small.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use super::SiteDocument;

/// Fixed-point scale applied to leaf scores before truncation to integers.
pub const WORD_TRIE_CONST: u64 = 1 << 16;

/// Child scores contribute this fraction to their parent prefix.
const PREFIX_DECAY: f64 = 0.8;

/// Scores at or below this are not propagated to parents.
const MIN_PROPAGATED_SCORE: u64 = 1;

/// Character trie with per-site scores.
#[derive(Debug, Default, Clone)]
pub struct WordScoreTrie {
    /// Ordered so that flattening is deterministic.
    children: BTreeMap<char, WordScoreTrie>,
    /// Scores of the word ending exactly at this node.
    leaf_scores: HashMap<usize, u64>,
    /// Cumulative scores (leaf + decayed children), valid when `!dirty`.
    totals: HashMap<usize, u64>,
    dirty: bool,
}

/// Output of [`WordScoreTrie::flatten`].
#[derive(Debug, Default)]
pub struct FlatIndex {
    pub words: BTreeMap<String, usize>,
    pub score_confs: Vec<Vec<usize>>,
}

impl WordScoreTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word with its per-site term frequencies.
    ///
    /// `tf_by_site` maps site index to the word's weighted term frequency in
    /// that site. Scores are TF-IDF with a smoothed IDF:
    /// `10000 * tf * (ln(total_docs / (1 + df)) + 1) * WORD_TRIE_CONST`.
    pub fn add(&mut self, word: &str, tf_by_site: &HashMap<usize, f64>, total_docs: usize) {
        let df = tf_by_site.len();
        let idf = (total_docs as f64 / (1 + df) as f64).ln() + 1.0;

        let mut node = self;
        node.dirty = true;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
            node.dirty = true;
        }

        for (&site, &tf) in tf_by_site {
            let score = (10000.0 * tf * idf * WORD_TRIE_CONST as f64) as u64;
            *node.leaf_scores.entry(site).or_insert(0) += score;
        }
    }

    /// Number of nodes below (and including) this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(WordScoreTrie::node_count).sum::<usize>()
    }

    /// Cumulative scores of this node, recomputing stale subtrees.
    pub fn scores(&mut self) -> &HashMap<usize, u64> {
        self.refresh();
        &self.totals
    }

    fn refresh(&mut self) {
        if !self.dirty {
            return;
        }
        let mut totals = self.leaf_scores.clone();
        for child in self.children.values_mut() {
            child.refresh();
            for (&site, &score) in &child.totals {
                if score <= MIN_PROPAGATED_SCORE {
                    continue;
                }
                *totals.entry(site).or_insert(0) += (score as f64 * PREFIX_DECAY) as u64;
            }
        }
        self.totals = totals;
        self.dirty = false;
    }

    /// Flatten every non-empty prefix into word → bucket and the bucket table.
    ///
    /// Sites are ranked by score (descending), then priority (ascending),
    /// then title, then site index. Identical rankings share one bucket;
    /// bucket ids are assigned in pre-order (shorter prefixes first along
    /// each path).
    pub fn flatten(&mut self, sites: &[SiteDocument], max_results: usize) -> FlatIndex {
        self.refresh();

        let mut out = FlatIndex::default();
        let mut bucket_ids: HashMap<Vec<usize>, usize> = HashMap::new();
        let mut prefix = String::new();

        for (&c, child) in &self.children {
            prefix.push(c);
            child.flatten_into(&mut prefix, sites, max_results, &mut bucket_ids, &mut out);
            prefix.pop();
        }
        out
    }

    fn flatten_into(
        &self,
        prefix: &mut String,
        sites: &[SiteDocument],
        max_results: usize,
        bucket_ids: &mut HashMap<Vec<usize>, usize>,
        out: &mut FlatIndex,
    ) {
        let ranking = rank_sites(&self.totals, sites, max_results);
        let bucket = match bucket_ids.get(&ranking) {
            Some(&bucket) => bucket,
            None => {
                let bucket = out.score_confs.len();
                out.score_confs.push(ranking.clone());
                bucket_ids.insert(ranking, bucket);
                bucket
            }
        };
        out.words.insert(prefix.clone(), bucket);

        for (&c, child) in &self.children {
            prefix.push(c);
            child.flatten_into(prefix, sites, max_results, bucket_ids, out);
            prefix.pop();
        }
    }
}

/// Top `max_results` site indices for a score map.
fn rank_sites(scores: &HashMap<usize, u64>, sites: &[SiteDocument], max_results: usize) -> Vec<usize> {
    let mut ranked: Vec<(usize, u64)> = scores.iter().map(|(&site, &score)| (site, score)).collect();
    ranked.sort_by(|&(a, score_a), &(b, score_b)| compare_sites(a, score_a, b, score_b, sites));
    ranked.truncate(max_results);
    ranked.into_iter().map(|(site, _)| site).collect()
}

fn compare_sites(a: usize, score_a: u64, b: usize, score_b: u64, sites: &[SiteDocument]) -> Ordering {
    score_b
        .cmp(&score_a)
        .then_with(|| sites[a].priority.cmp(&sites[b].priority))
        .then_with(|| sites[a].title.cmp(&sites[b].title))
        .then_with(|| a.cmp(&b))
}

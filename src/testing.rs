//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use std::collections::BTreeMap;

use crate::build::SiteDocument;
use crate::index::SearchIndex;
use crate::types::{IndexData, SiteRecord};

/// The small "cat/dog" index used throughout the tests.
///
/// - `words = {"cat": 0, "dog": 1}`
/// - `score_confs = [[2, 5], [5, 7]]`
/// - `sites[2] = A`, `sites[5] = B`, `sites[7] = C`, the rest are filler.
pub fn pets_index_data() -> IndexData {
    let mut sites: Vec<SiteRecord> = (0..8)
        .map(|i| SiteRecord::new(format!("Filler {}", i), format!("/filler/{}", i)))
        .collect();
    sites[2] = SiteRecord::new("A", "/a");
    sites[5] = SiteRecord::new("B", "https://example.com/b");
    sites[7] = SiteRecord::new("C", "/c");

    let mut words = BTreeMap::new();
    words.insert("cat".to_string(), 0);
    words.insert("dog".to_string(), 1);

    IndexData {
        sites,
        score_confs: vec![vec![2, 5], vec![5, 7]],
        words,
    }
}

/// [`pets_index_data`] as a validated index.
pub fn pets_index() -> SearchIndex {
    SearchIndex::from_data(pets_index_data()).expect("pets fixture is well formed")
}

/// Build index data from `(word, sites)` pairs, one bucket per word.
///
/// Sites are named `Site {i}` with paths `/site/{i}`.
pub fn index_from_buckets(site_count: usize, buckets: &[(&str, &[usize])]) -> IndexData {
    let sites = (0..site_count)
        .map(|i| SiteRecord::new(format!("Site {}", i), format!("/site/{}", i)))
        .collect();
    let score_confs = buckets.iter().map(|(_, sites)| sites.to_vec()).collect();
    let words = buckets
        .iter()
        .enumerate()
        .map(|(bucket, (word, _))| (word.to_string(), bucket))
        .collect();
    IndexData {
        sites,
        score_confs,
        words,
    }
}

/// Create a site document for builder tests.
pub fn make_site(title: &str, path: &str, text: &str) -> SiteDocument {
    SiteDocument {
        title: title.to_string(),
        path: path.to_string(),
        priority: 0,
        text: text.to_string(),
        tags: vec![],
    }
}

/// A handful of portfolio pages with overlapping vocabulary.
pub fn portfolio_sites() -> Vec<SiteDocument> {
    vec![
        SiteDocument {
            title: "AI Engineer".to_string(),
            path: "/work/facephi".to_string(),
            priority: 0,
            text: "Built several automation and data scraping tools leveraging AI agents."
                .to_string(),
            tags: vec!["Python".to_string(), "LangGraph".to_string()],
        },
        SiteDocument {
            title: "Software Engineer".to_string(),
            path: "/work/compliance_cms".to_string(),
            priority: 0,
            text: "Developed and maintained two full-stack web applications.".to_string(),
            tags: vec!["PHP".to_string(), "Vue.JS".to_string(), "SQL".to_string()],
        },
        SiteDocument {
            title: "Private Tutor".to_string(),
            path: "/work/tutoring".to_string(),
            priority: 1,
            text: "Programming lessons: algorithms, data structures and memory management."
                .to_string(),
            tags: vec!["C++".to_string(), "Java".to_string(), "Python".to_string()],
        },
        SiteDocument {
            title: "Café Résumé".to_string(),
            path: "https://example.com/cafe".to_string(),
            priority: 2,
            text: "Notes written at the café.".to_string(),
            tags: vec![],
        },
    ]
}

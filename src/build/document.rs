use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::{normalize, split_words};

/// Weight of a title or tag word relative to a body word.
pub const TITLE_WEIGHT: f64 = 3.0;

/// One site page (or external link) as written by the site generator.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SiteDocument {
    pub title: String,
    pub path: String,
    /// Lower sorts first among equally-scored sites.
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SiteDocument {
    /// Weighted term frequency of every normalized word in the document.
    ///
    /// Title and tag words count `TITLE_WEIGHT` times. Frequencies sum to 1
    /// unless the document has no words at all.
    pub fn term_frequencies(&self) -> HashMap<String, f64> {
        let mut weights: HashMap<String, f64> = HashMap::new();
        let mut total = 0.0;

        let mut add = |text: &str, weight: f64| {
            for word in split_words(&normalize(text)) {
                *weights.entry(word.to_string()).or_insert(0.0) += weight;
                total += weight;
            }
        };

        add(&self.title, TITLE_WEIGHT);
        for tag in &self.tags {
            add(tag, TITLE_WEIGHT);
        }
        add(&self.text, 1.0);

        if total > 0.0 {
            for weight in weights.values_mut() {
                *weight /= total;
            }
        }
        weights
    }
}

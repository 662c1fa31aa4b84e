//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use folio::build::{build_index, DEFAULT_MAX_RESULTS};
use folio::{SearchIndex, SiteRecord};

// Re-export canonical test utilities from folio::testing
pub use folio::testing::{index_from_buckets, make_site, pets_index, portfolio_sites};

/// Directory containing the build fixtures.
pub const BUILD_FIXTURES_DIR: &str = "data/build-fixtures";

/// Index built from [`portfolio_sites`].
pub fn portfolio_index() -> SearchIndex {
    SearchIndex::from_data(build_index(&portfolio_sites(), DEFAULT_MAX_RESULTS))
        .expect("built index should validate")
}

/// Titles of a result list, for compact assertions.
pub fn titles(results: &[&SiteRecord]) -> Vec<String> {
    results.iter().map(|site| site.title.clone()).collect()
}

/// Assert that no site appears twice in a result list.
pub fn assert_no_duplicates(sites: &[usize]) {
    let mut seen = std::collections::HashSet::new();
    for site in sites {
        assert!(seen.insert(*site), "site {} appears twice in {:?}", site, sites);
    }
}

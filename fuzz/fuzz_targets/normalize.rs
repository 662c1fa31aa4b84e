// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for normalization.
//!
//! The builder and the matcher both normalize; if the function were not
//! idempotent, a word normalized twice on one side would miss its key.

#![no_main]

use folio::normalize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let once = normalize(text);
    assert_eq!(normalize(&once), once, "normalize is not idempotent for {:?}", text);
    assert_eq!(once.matches(' ').count(), text.matches(' ').count());
});

//! Laying results out over fixed display slots.

use crate::common::pets_index;
use folio::{match_query, render_slots, ResultSlot};

#[test]
fn test_slot_count_always_matches_capacity() {
    let index = pets_index();
    for capacity in 0..6 {
        let results = match_query(&index, "cat dog", capacity);
        assert_eq!(render_slots(&results, capacity).len(), capacity);
    }
}

#[test]
fn test_unfilled_slots_are_empty() {
    let index = pets_index();
    let results = match_query(&index, "dog", 4);
    let slots = render_slots(&results, 4);

    assert!(!slots[0].is_empty());
    assert!(!slots[1].is_empty());
    assert_eq!(slots[2], ResultSlot::Empty);
    assert_eq!(slots[3], ResultSlot::Empty);
}

#[test]
fn test_no_results_clears_every_slot() {
    let slots = render_slots(&[], 3);
    assert!(slots.iter().all(ResultSlot::is_empty));
}

#[test]
fn test_slot_carries_link_kind() {
    let index = pets_index();
    let results = match_query(&index, "cat", 2);
    let slots = render_slots(&results, 2);

    assert_eq!(
        slots[1],
        ResultSlot::Populated {
            title: "B".to_string(),
            path: "https://example.com/b".to_string(),
            is_external: true,
        }
    );
}

#[test]
fn test_slot_json_shape() {
    let slot = ResultSlot::Populated {
        title: "A".to_string(),
        path: "/a".to_string(),
        is_external: false,
    };
    let json = serde_json::to_value(&slot).unwrap();
    assert_eq!(json["isExternal"], false);
    assert_eq!(json["path"], "/a");
}

#![cfg(not(feature = "hydrate"))]

use super::*;

const SLOT: StoredPreference<u32> = StoredPreference::new("folio_test_slot");

#[test]
fn slot_exposes_its_key() {
    assert_eq!(SLOT.key(), "folio_test_slot");
}

#[test]
fn server_side_slot_is_always_empty() {
    SLOT.save(&7);
    assert_eq!(SLOT.load(), None);
}

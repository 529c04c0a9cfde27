// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]
use colloquy_core::{MemoryStore, MemoryWrite, Node, NodeId};

#[test]
fn lenient_reads_yield_zero_values() {
    let store = MemoryStore::new();
    assert_eq!(store.get_int("missing"), 0);
    assert_eq!(store.get_text("missing"), "");
    assert!(!store.get_bool("missing"));
    assert!(!store.contains("missing"));
    assert_eq!(store.contains_with_value("missing"), None);
}

#[test]
fn setters_upsert_in_place() {
    let mut store = MemoryStore::new();
    store.set_int("gold", 3);
    store.set_int("gold", 12);
    assert_eq!(store.get_int("gold"), 12);
    assert_eq!(store.len(), 1);

    store.set_text("mood", "calm");
    store.set_text("mood", "angry");
    assert_eq!(store.get_text("mood"), "angry");

    store.set_bool("seen", false);
    store.set_bool("seen", true);
    assert!(store.get_bool("seen"));
    assert_eq!(store.len(), 3);
}

#[test]
fn same_key_coexists_across_kinds() {
    // No cross-type collision checking: the three mappings are independent.
    let mut store = MemoryStore::new();
    store.set_int("flag", 7);
    store.set_text("flag", "raised");
    store.set_bool("flag", true);

    assert_eq!(store.get_int("flag"), 7);
    assert_eq!(store.get_text("flag"), "raised");
    assert!(store.get_bool("flag"));
    assert_eq!(store.len(), 3);
}

#[test]
fn contains_checks_all_three_mappings() {
    let mut store = MemoryStore::new();
    store.set_int("a", 1);
    store.set_text("b", "x");
    store.set_bool("c", true);

    assert!(store.contains("a"));
    assert!(store.contains("b"));
    assert!(store.contains("c"));
    assert!(!store.contains("d"));
}

#[test]
fn contains_with_value_resolves_integer_then_text_then_boolean() {
    let mut store = MemoryStore::new();
    store.set_int("alias", 5);
    store.set_text("alias", "five");
    store.set_bool("alias", true);
    assert_eq!(store.contains_with_value("alias").as_deref(), Some("5"));

    let mut store = MemoryStore::new();
    store.set_text("alias", "five");
    store.set_bool("alias", true);
    assert_eq!(store.contains_with_value("alias").as_deref(), Some("five"));

    let mut store = MemoryStore::new();
    store.set_bool("alias", true);
    assert_eq!(store.contains_with_value("alias").as_deref(), Some("true"));
}

#[test]
fn apply_replays_writes_integer_then_text_then_boolean() {
    let mut node = Node::new(NodeId(1));
    node.int_writes.push(MemoryWrite::new("visits", 1));
    node.text_writes.push(MemoryWrite::new("last", "gate".to_string()));
    node.bool_writes.push(MemoryWrite::new("met", true));
    // A later write in the same list overwrites the earlier one.
    node.int_writes.push(MemoryWrite::new("visits", 2));

    let mut store = MemoryStore::new();
    store.apply(&node);

    assert_eq!(store.get_int("visits"), 2);
    assert_eq!(store.get_text("last"), "gate");
    assert!(store.get_bool("met"));
    assert_eq!(node.write_count(), 4);
}

// SPDX-License-Identifier: Apache-2.0
//! Typed key→value environment read by guards and written between
//! transitions.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// One authored value written into the store when its node is entered.
///
/// The resolver never applies these; the session (or host) replays them on
/// entry, before events are dispatched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryWrite<T> {
    /// Key the value is stored under.
    pub key: String,
    /// Value to upsert.
    pub value: T,
}

impl<T> MemoryWrite<T> {
    /// Creates a write of `value` under `key`.
    pub fn new(key: impl Into<String>, value: T) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Typed variable store backing condition evaluation.
///
/// Three independent mappings, one per supported kind. The same key string
/// may exist in more than one mapping; there is no cross-type collision
/// check, and [`MemoryStore::contains_with_value`] resolves the ambiguity
/// with a fixed integer, then text, then boolean search order.
///
/// Invariants
/// - Setters upsert: an existing key is overwritten in place, a new key is
///   added.
/// - Reads are lenient: a missing key yields the kind's zero value, never
///   an error.
/// - `BTreeMap` backing keeps whole-store serialization deterministic.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    ints: BTreeMap<String, i64>,
    texts: BTreeMap<String, String>,
    bools: BTreeMap<String, bool>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts an integer entry.
    pub fn set_int(&mut self, key: impl Into<String>, value: i64) {
        self.ints.insert(key.into(), value);
    }

    /// Upserts a text entry.
    pub fn set_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.texts.insert(key.into(), value.into());
    }

    /// Upserts a boolean entry.
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.bools.insert(key.into(), value);
    }

    /// Integer entry for `key`, `0` when absent.
    pub fn get_int(&self, key: &str) -> i64 {
        self.ints.get(key).copied().unwrap_or(0)
    }

    /// Text entry for `key`, empty when absent.
    pub fn get_text(&self, key: &str) -> String {
        self.texts.get(key).cloned().unwrap_or_default()
    }

    /// Boolean entry for `key`, `false` when absent.
    pub fn get_bool(&self, key: &str) -> bool {
        self.bools.get(key).copied().unwrap_or(false)
    }

    /// True when `key` exists in any of the three mappings.
    pub fn contains(&self, key: &str) -> bool {
        self.ints.contains_key(key)
            || self.texts.contains_key(key)
            || self.bools.contains_key(key)
    }

    /// Existence check that also yields the matched value's textual form.
    ///
    /// When a key exists in more than one mapping the integer entry wins,
    /// then text, then boolean. `None` when the key exists nowhere.
    pub fn contains_with_value(&self, key: &str) -> Option<String> {
        if let Some(n) = self.ints.get(key) {
            return Some(n.to_string());
        }
        if let Some(s) = self.texts.get(key) {
            return Some(s.clone());
        }
        self.bools.get(key).map(|b| b.to_string())
    }

    /// Replays a node's authored memory writes: the integer list, then
    /// text, then boolean, preserving authored order within each.
    pub fn apply(&mut self, node: &Node) {
        for w in &node.int_writes {
            self.set_int(w.key.clone(), w.value);
        }
        for w in &node.text_writes {
            self.set_text(w.key.clone(), w.value.clone());
        }
        for w in &node.bool_writes {
            self.set_bool(w.key.clone(), w.value);
        }
    }

    /// Number of entries across all three mappings.
    pub fn len(&self) -> usize {
        self.ints.len() + self.texts.len() + self.bools.len()
    }

    /// True when no mapping has any entry.
    pub fn is_empty(&self) -> bool {
        self.ints.is_empty() && self.texts.is_empty() && self.bools.is_empty()
    }
}

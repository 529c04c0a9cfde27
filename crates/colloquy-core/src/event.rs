// SPDX-License-Identifier: Apache-2.0
//! Trigger descriptors and the per-node dispatch sequence.
//!
//! The engine only decides which keys fire and with what parameter.
//! Mapping a key to zero or more application callbacks is the dispatch
//! collaborator's job; the engine has no visibility into whether a handler
//! exists for a key.
use serde::{Deserialize, Serialize};

use crate::node::Node;
use crate::value::{MemoryValue, Value};

/// Plain trigger: a key with no payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// String identifier dispatched to the host.
    pub key: String,
}

impl Event {
    /// Creates a trigger for `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Typed trigger: a key plus one literal parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypedEvent<T> {
    /// String identifier dispatched to the host.
    pub key: String,
    /// Parameter handed to the handler.
    pub param: T,
}

impl<T> TypedEvent<T> {
    /// Creates a trigger for `key` carrying `param`.
    pub fn new(key: impl Into<String>, param: T) -> Self {
        Self {
            key: key.into(),
            param,
        }
    }
}

impl<T: MemoryValue> TypedEvent<T> {
    fn emission(&self) -> Emission {
        Emission {
            key: self.key.clone(),
            param: Some(self.param.clone().into_value()),
        }
    }
}

/// One entry in a node's dispatch sequence: key plus optional parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Emission {
    /// Event key to dispatch.
    pub key: String,
    /// Typed parameter, `None` for plain events.
    pub param: Option<Value>,
}

/// Derives the ordered dispatch sequence for a node.
///
/// Final order is integer events, then text, then boolean, then plain,
/// preserving authored order within each list. Duplicate keys are kept; no
/// deduplication and no filtering.
pub fn collect_events(node: &Node) -> Vec<Emission> {
    let mut out = Vec::with_capacity(node.event_count());
    out.extend(node.int_events.iter().map(TypedEvent::emission));
    out.extend(node.text_events.iter().map(TypedEvent::emission));
    out.extend(node.bool_events.iter().map(TypedEvent::emission));
    out.extend(node.events.iter().map(|e| Emission {
        key: e.key.clone(),
        param: None,
    }));
    out
}

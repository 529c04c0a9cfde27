// SPDX-License-Identifier: Apache-2.0
//! Outgoing edges: plain destinations and memory-guarded destinations.
use serde::{Deserialize, Serialize};

use crate::ident::NodeId;
use crate::memory::MemoryStore;
use crate::value::{Cmp, MemoryValue, ValueKind};

/// Unconditional edge carrying only its target.
///
/// A target is either a node id in the same graph or the owning node's own
/// id (self-loops are legal). Dangling targets are accepted here and
/// surface only as a lookup failure when traversal reaches them.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Destination {
    /// Target node id.
    pub target: NodeId,
}

impl Destination {
    /// Creates an edge to `target`.
    pub fn new(target: NodeId) -> Self {
        Self { target }
    }
}

impl From<NodeId> for Destination {
    fn from(target: NodeId) -> Self {
        Self { target }
    }
}

/// Conditional edge: taken when `memory[key] op value` holds, or taken
/// unconditionally when `forced` and first in scan order.
///
/// A forced edge is an override, not a condition to satisfy — its own
/// guard is never consulted when it wins the forced scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuardedDestination<T> {
    /// Target node id.
    pub target: NodeId,
    /// Memory key the guard reads.
    pub key: String,
    /// Comparison applied between the stored value and `value`.
    pub op: Cmp,
    /// Literal compared against.
    pub value: T,
    /// Overrides normal evaluation when set.
    pub forced: bool,
}

impl<T> GuardedDestination<T> {
    /// Creates an unforced guard on `key op value` leading to `target`.
    pub fn new(target: NodeId, key: impl Into<String>, op: Cmp, value: T) -> Self {
        Self {
            target,
            key: key.into(),
            op,
            value,
            forced: false,
        }
    }

    /// Marks the edge as forced.
    pub fn force(mut self) -> Self {
        self.forced = true;
        self
    }
}

impl<T: MemoryValue> GuardedDestination<T> {
    /// Evaluates the guard against the store.
    ///
    /// The stored value is read leniently: a missing key compares as the
    /// kind's zero value.
    pub fn is_met(&self, memory: &MemoryStore) -> bool {
        let stored = T::load(memory, &self.key);
        T::satisfies(self.op, &stored, &self.value)
    }

    /// Kind tag of the guard's literal.
    pub fn kind(&self) -> ValueKind {
        T::KIND
    }
}

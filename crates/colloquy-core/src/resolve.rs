// SPDX-License-Identifier: Apache-2.0
//! Destination resolution: the one non-trivial control path in the engine.
//!
//! Ordering contract
//! - Guarded destinations are always scanned integer list, then text, then
//!   boolean, preserving authored order within each.
//! - The first `forced` edge in that scan order wins unconditionally,
//!   before any guard is evaluated — including its own.
//! - With no forced edge, the first satisfied guard in the same scan order
//!   wins.
//! - Otherwise the first plain destination in authored order wins. This
//!   covers both the single-fallback case and the underspecified
//!   several-plain-edges case: first-wins is the deterministic tie-break.
//! - A node with edges but no match is a dead end: reported at warning
//!   level and treated as "no transition", never a hard failure. Ending
//!   the conversation is a valid (if likely unintended) outcome.
//!
//! Changing any of these rules changes reachability of authored content
//! and must be treated as a breaking change.
use tracing::warn;

use crate::edge::GuardedDestination;
use crate::ident::NodeId;
use crate::memory::MemoryStore;
use crate::node::Node;
use crate::value::MemoryValue;

/// Outcome of resolving a node against the current memory.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    /// Advance to the node with this id.
    To(NodeId),
    /// No transition; the conversation ends here.
    End,
}

impl Transition {
    /// Target id when the transition advances, `None` otherwise.
    pub fn target(self) -> Option<NodeId> {
        match self {
            Self::To(id) => Some(id),
            Self::End => None,
        }
    }
}

/// Selects the next node id for `node` given the current `memory`.
///
/// Pure over its inputs apart from the dead-end diagnostic; never mutates
/// memory. Completes in time linear in the node's destination count.
pub fn resolve(node: &Node, memory: &MemoryStore) -> Transition {
    if node.destination_count() == 0 {
        return Transition::End;
    }
    if let Some(target) = first_forced(node) {
        return Transition::To(target);
    }
    if let Some(target) = first_satisfied(node, memory) {
        return Transition::To(target);
    }
    if let Some(dest) = node.destinations.first() {
        return Transition::To(dest.target);
    }
    warn!(
        node = %node.id,
        "every guarded destination failed and no plain fallback exists; ending conversation"
    );
    Transition::End
}

fn first_forced(node: &Node) -> Option<NodeId> {
    forced_in(&node.int_branches)
        .or_else(|| forced_in(&node.text_branches))
        .or_else(|| forced_in(&node.bool_branches))
}

fn forced_in<T>(guards: &[GuardedDestination<T>]) -> Option<NodeId> {
    guards.iter().find(|g| g.forced).map(|g| g.target)
}

fn first_satisfied(node: &Node, memory: &MemoryStore) -> Option<NodeId> {
    satisfied_in(&node.int_branches, memory)
        .or_else(|| satisfied_in(&node.text_branches, memory))
        .or_else(|| satisfied_in(&node.bool_branches, memory))
}

fn satisfied_in<T: MemoryValue>(
    guards: &[GuardedDestination<T>],
    memory: &MemoryStore,
) -> Option<NodeId> {
    guards.iter().find(|g| g.is_met(memory)).map(|g| g.target)
}

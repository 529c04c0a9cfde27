// SPDX-License-Identifier: Apache-2.0
//! Dialogue node: one beat of dialogue plus its outgoing edges, triggers,
//! and memory writes.
use serde::{Deserialize, Serialize};

use crate::edge::{Destination, GuardedDestination};
use crate::event::{Event, TypedEvent};
use crate::ident::NodeId;
use crate::memory::MemoryWrite;

/// Derived classification of a node by destination count.
///
/// Never authored and never trusted from storage: persistence recomputes
/// it immediately before write, and resolution derives its semantics from
/// the destination lists independently of any stored tag.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Zero destinations of any kind; the conversation stops here.
    Ending,
    /// Exactly one destination.
    Linear,
    /// More than one destination.
    Branching,
}

/// Canvas coordinates on the authoring surface; opaque to the engine.
#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasPos {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

/// A vertex of the dialogue graph.
///
/// Invariants
/// - `id` is unique within the owning graph and immutable.
/// - Order is significant in every list: guarded destinations scan
///   integer, then text, then boolean, authored order within each; events
///   fire in the order [`crate::collect_events`] documents; memory writes
///   replay integer, then text, then boolean.
/// - Display fields (`speaker`, `body`, `player_line`) and authoring
///   metadata (`position`, `notes`) are opaque and pass through persistence
///   unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identity used for all edge targets and lookups.
    pub id: NodeId,
    /// Display name of whoever delivers the line.
    pub speaker: String,
    /// Line text.
    pub body: String,
    /// Distinguishes player-authored lines from narrator/NPC lines;
    /// consumed only by presentation.
    pub player_line: bool,
    /// Unconditional edges, authored order.
    pub destinations: Vec<Destination>,
    /// Integer-guarded edges, authored order.
    pub int_branches: Vec<GuardedDestination<i64>>,
    /// Text-guarded edges, authored order.
    pub text_branches: Vec<GuardedDestination<String>>,
    /// Boolean-guarded edges, authored order.
    pub bool_branches: Vec<GuardedDestination<bool>>,
    /// Plain event keys, authored order.
    pub events: Vec<Event>,
    /// Integer-parameterized events, authored order.
    pub int_events: Vec<TypedEvent<i64>>,
    /// Text-parameterized events, authored order.
    pub text_events: Vec<TypedEvent<String>>,
    /// Boolean-parameterized events, authored order.
    pub bool_events: Vec<TypedEvent<bool>>,
    /// Integer values written to memory on entry, authored order.
    pub int_writes: Vec<MemoryWrite<i64>>,
    /// Text values written to memory on entry, authored order.
    pub text_writes: Vec<MemoryWrite<String>>,
    /// Boolean values written to memory on entry, authored order.
    pub bool_writes: Vec<MemoryWrite<bool>>,
    /// Canvas position on the authoring surface.
    pub position: CanvasPos,
    /// Free-form authoring notes.
    pub notes: String,
}

impl Node {
    /// Creates an empty node: an ending node until edges are added.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            speaker: String::new(),
            body: String::new(),
            player_line: false,
            destinations: Vec::new(),
            int_branches: Vec::new(),
            text_branches: Vec::new(),
            bool_branches: Vec::new(),
            events: Vec::new(),
            int_events: Vec::new(),
            text_events: Vec::new(),
            bool_events: Vec::new(),
            int_writes: Vec::new(),
            text_writes: Vec::new(),
            bool_writes: Vec::new(),
            position: CanvasPos::default(),
            notes: String::new(),
        }
    }

    /// Sets the speaker name.
    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = speaker.into();
        self
    }

    /// Sets the line text.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Marks the line as player-authored.
    pub fn player(mut self) -> Self {
        self.player_line = true;
        self
    }

    /// Total outgoing edges across the plain and guarded lists.
    pub fn destination_count(&self) -> usize {
        self.destinations.len()
            + self.int_branches.len()
            + self.text_branches.len()
            + self.bool_branches.len()
    }

    /// Total triggers across the plain and typed lists.
    pub fn event_count(&self) -> usize {
        self.events.len() + self.int_events.len() + self.text_events.len() + self.bool_events.len()
    }

    /// Total memory writes across the typed lists.
    pub fn write_count(&self) -> usize {
        self.int_writes.len() + self.text_writes.len() + self.bool_writes.len()
    }

    /// Classification derived from the current destination count.
    pub fn kind(&self) -> NodeKind {
        match self.destination_count() {
            0 => NodeKind::Ending,
            1 => NodeKind::Linear,
            _ => NodeKind::Branching,
        }
    }

    /// True when `target` is this node itself or any outgoing edge leads
    /// to it.
    pub fn has_destination(&self, target: NodeId) -> bool {
        target == self.id
            || self.destinations.iter().any(|d| d.target == target)
            || self.int_branches.iter().any(|g| g.target == target)
            || self.text_branches.iter().any(|g| g.target == target)
            || self.bool_branches.iter().any(|g| g.target == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Cmp;

    #[test]
    fn kind_tracks_destination_count() {
        let mut node = Node::new(NodeId(1));
        assert_eq!(node.kind(), NodeKind::Ending);

        node.destinations.push(Destination::new(NodeId(2)));
        assert_eq!(node.kind(), NodeKind::Linear);

        node.bool_branches
            .push(GuardedDestination::new(NodeId(3), "met", Cmp::Eq, true));
        assert_eq!(node.kind(), NodeKind::Branching);
    }

    #[test]
    fn has_destination_covers_self_and_all_edge_lists() {
        let mut node = Node::new(NodeId(1));
        node.destinations.push(Destination::new(NodeId(2)));
        node.int_branches
            .push(GuardedDestination::new(NodeId(3), "gold", Cmp::Ge, 10));

        assert!(node.has_destination(NodeId(1)));
        assert!(node.has_destination(NodeId(2)));
        assert!(node.has_destination(NodeId(3)));
        assert!(!node.has_destination(NodeId(4)));
    }
}

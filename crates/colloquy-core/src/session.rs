// SPDX-License-Identifier: Apache-2.0
//! Conversation driver: owns position and memory, surfaces events for
//! external dispatch, advances via the resolver.
use tracing::debug;

use crate::event::{collect_events, Emission};
use crate::graph::{DialogueGraph, GraphError};
use crate::ident::NodeId;
use crate::memory::MemoryStore;
use crate::node::Node;
use crate::resolve::resolve;

/// One play-through of a dialogue graph.
///
/// The step protocol mirrors the engine's control flow: [`Session::enter`]
/// applies the current node's memory writes and yields its emissions for
/// dispatch; handlers may mutate memory through [`Session::memory_mut`];
/// [`Session::advance`] then resolves against the possibly-updated store
/// and moves. Each conversation owns its own store — hosts wanting
/// concurrent conversations take independent sessions, there is no shared
/// state.
#[derive(Debug)]
pub struct Session<'g> {
    graph: &'g DialogueGraph,
    memory: MemoryStore,
    current: Option<NodeId>,
}

impl<'g> Session<'g> {
    /// Starts a session at `entry` with empty memory.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when `entry` is not in the
    /// graph.
    pub fn start(graph: &'g DialogueGraph, entry: NodeId) -> Result<Self, GraphError> {
        Self::with_memory(graph, entry, MemoryStore::new())
    }

    /// Starts a session at `entry` with a restored memory store, e.g. from
    /// a save document.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when `entry` is not in the
    /// graph.
    pub fn with_memory(
        graph: &'g DialogueGraph,
        entry: NodeId,
        memory: MemoryStore,
    ) -> Result<Self, GraphError> {
        graph.node(entry)?;
        Ok(Self {
            graph,
            memory,
            current: Some(entry),
        })
    }

    /// Current position, `None` once the conversation has ended.
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Current node, `None` once ended or while positioned on a dangling
    /// id.
    pub fn current_node(&self) -> Option<&'g Node> {
        let id = self.current?;
        self.graph.node(id).ok()
    }

    /// The session's memory store.
    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    /// Mutable access for event handlers running between transitions.
    pub fn memory_mut(&mut self) -> &mut MemoryStore {
        &mut self.memory
    }

    /// True once the conversation has ended.
    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    /// Applies the current node's memory writes and returns its ordered
    /// emissions for the dispatch collaborator. Empty once ended.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when the current id has no
    /// node — the lazy surfacing point for dangling authored targets.
    pub fn enter(&mut self) -> Result<Vec<Emission>, GraphError> {
        let Some(id) = self.current else {
            return Ok(Vec::new());
        };
        let node = self.graph.node(id)?;
        self.memory.apply(node);
        debug!(node = %id, events = node.event_count(), writes = node.write_count(), "entered node");
        Ok(collect_events(node))
    }

    /// Resolves the current node against memory and moves to the result.
    ///
    /// Returns the new position, `None` once the conversation has ended.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when the current id has no
    /// node.
    pub fn advance(&mut self) -> Result<Option<NodeId>, GraphError> {
        let Some(id) = self.current else {
            return Ok(None);
        };
        let node = self.graph.node(id)?;
        let next = resolve(node, &self.memory);
        self.current = next.target();
        debug!(from = %id, to = ?self.current, "advanced");
        Ok(self.current)
    }
}

// SPDX-License-Identifier: Apache-2.0
//! Passive node storage indexed by id.
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use thiserror::Error;

use crate::ident::NodeId;
use crate::node::Node;

/// Errors produced by graph construction and lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// Lookup by id found no node. Fatal to the traversal step that
    /// performed it; the engine cannot guess an alternate node.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
    /// Insertion would collide with an existing id. Surfaced immediately;
    /// nothing is overwritten.
    #[error("duplicate node id: {0}")]
    DuplicateId(NodeId),
}

/// A collection of nodes indexed by id.
///
/// Id assignment is owned by the authoring layer; the graph only stores
/// and looks up. `BTreeMap` backing makes enumeration ascending by id,
/// the canonical order for export and validation. Referential closure is
/// not validated: a dangling edge target is accepted and surfaces lazily
/// as [`GraphError::NodeNotFound`] when traversal reaches it.
#[derive(Default, Clone, Debug)]
pub struct DialogueGraph {
    nodes: BTreeMap<NodeId, Node>,
}

impl DialogueGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from authored node definitions.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateId`] on the first colliding id.
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for node in nodes {
            graph.insert(node)?;
        }
        Ok(graph)
    }

    /// Inserts a node under its own id.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateId`] when the id is already present.
    pub fn insert(&mut self, node: Node) -> Result<(), GraphError> {
        match self.nodes.entry(node.id) {
            Entry::Occupied(_) => Err(GraphError::DuplicateId(node.id)),
            Entry::Vacant(slot) => {
                slot.insert(node);
                Ok(())
            }
        }
    }

    /// Looks up a node by id.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when `id` is absent.
    pub fn node(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    /// True when a node with `id` exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// All node ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// All nodes, ascending by id.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// SPDX-License-Identifier: Apache-2.0
//! Structured-text persistence for nodes and memory stores.
//!
//! One self-contained JSON document per node and per store. Documents are
//! reproducible byte-for-byte for the same input: struct fields serialize
//! in declaration order and every key→value mapping is a `BTreeMap`.
//!
//! A node document always carries the derived `kind` tag, recomputed
//! immediately before write. On read the stored tag is parsed but ignored:
//! anything that needs the classification recomputes it from the
//! destination lists, so an inconsistent stored tag cannot skew
//! resolution.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::memory::MemoryStore;
use crate::node::{Node, NodeKind};

/// Errors produced while encoding or decoding persisted documents.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The document could not be produced or parsed.
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct NodeDocRef<'a> {
    kind: NodeKind,
    #[serde(flatten)]
    node: &'a Node,
}

#[derive(Deserialize)]
struct NodeDoc {
    // Present in every stored document; parsed so round-trips keep the
    // field, never consulted.
    #[serde(rename = "kind")]
    _kind: NodeKind,
    #[serde(flatten)]
    node: Node,
}

/// Serializes a node to its persisted document, recomputing `kind` first.
///
/// # Errors
/// Returns [`CodecError::Malformed`] when serialization fails.
pub fn encode_node(node: &Node) -> Result<String, CodecError> {
    let doc = NodeDocRef {
        kind: node.kind(),
        node,
    };
    Ok(serde_json::to_string(&doc)?)
}

/// Reconstructs a node from its persisted document.
///
/// The stored `kind` tag is not trusted; callers derive the current
/// classification via [`Node::kind`].
///
/// # Errors
/// Returns [`CodecError::Malformed`] when the document does not parse.
pub fn decode_node(doc: &str) -> Result<Node, CodecError> {
    let parsed: NodeDoc = serde_json::from_str(doc)?;
    Ok(parsed.node)
}

/// Serializes a memory store — all three mappings — to one document.
///
/// # Errors
/// Returns [`CodecError::Malformed`] when serialization fails.
pub fn encode_memory(store: &MemoryStore) -> Result<String, CodecError> {
    Ok(serde_json::to_string(store)?)
}

/// Reconstructs a memory store from its persisted document.
///
/// The result replaces any prior state wholesale; nothing is merged.
///
/// # Errors
/// Returns [`CodecError::Malformed`] when the document does not parse.
pub fn decode_memory(doc: &str) -> Result<MemoryStore, CodecError> {
    Ok(serde_json::from_str(doc)?)
}

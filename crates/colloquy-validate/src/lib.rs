// SPDX-License-Identifier: Apache-2.0
//! Whole-graph authoring diagnostics.
//!
//! The engine itself never validates referential closure or event hygiene:
//! it fails lazily, only if and when traversal actually reaches a bad
//! reference. This crate is the optional offline pass an authoring tool
//! runs before shipping a graph. Every finding is advisory — the engine's
//! behavior on these graphs is defined — so there is no error severity,
//! only warnings.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

use std::collections::BTreeMap;
use std::fmt;

use colloquy_core::{DialogueGraph, Node, NodeId, ValueKind};

/// What a finding is about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FindingKind {
    /// An edge targets an id with no corresponding node.
    DanglingDestination {
        /// The missing target id.
        target: NodeId,
    },
    /// The same key appears more than once in one node's trigger set.
    DuplicateEventKey {
        /// The repeated key.
        key: String,
    },
    /// Every outgoing edge is guarded and none is forced; if all guards
    /// fail at runtime the node dead-ends.
    NoFallback,
}

/// One advisory diagnostic tied to a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    /// Node the finding is about.
    pub node: NodeId,
    /// Classification.
    pub kind: FindingKind,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {}: {}", self.node, self.message)
    }
}

/// Scans the whole graph and reports authoring inconsistencies.
///
/// Nodes are visited ascending by id; findings within a node are reported
/// dangling targets first (plain edges, then integer, text, and boolean
/// guards in that order), then duplicate event keys, then the missing
/// fallback check. Output is deterministic for a given graph.
pub fn validate(graph: &DialogueGraph) -> Vec<Finding> {
    let mut findings = Vec::new();
    for node in graph.nodes() {
        check_targets(graph, node, &mut findings);
        check_event_keys(node, &mut findings);
        check_fallback(node, &mut findings);
    }
    findings
}

fn check_targets(graph: &DialogueGraph, node: &Node, findings: &mut Vec<Finding>) {
    let mut dangling = |target: NodeId, label: &str| {
        if !graph.contains(target) {
            findings.push(Finding {
                node: node.id,
                kind: FindingKind::DanglingDestination { target },
                message: format!("{label} destination targets missing node {target}"),
            });
        }
    };

    for d in &node.destinations {
        dangling(d.target, "plain");
    }
    for g in &node.int_branches {
        dangling(g.target, ValueKind::Int.label());
    }
    for g in &node.text_branches {
        dangling(g.target, ValueKind::Text.label());
    }
    for g in &node.bool_branches {
        dangling(g.target, ValueKind::Bool.label());
    }
}

fn check_event_keys(node: &Node, findings: &mut Vec<Finding>) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for key in node
        .int_events
        .iter()
        .map(|e| e.key.as_str())
        .chain(node.text_events.iter().map(|e| e.key.as_str()))
        .chain(node.bool_events.iter().map(|e| e.key.as_str()))
        .chain(node.events.iter().map(|e| e.key.as_str()))
    {
        *counts.entry(key).or_default() += 1;
    }
    for (key, count) in counts {
        if count > 1 {
            findings.push(Finding {
                node: node.id,
                kind: FindingKind::DuplicateEventKey {
                    key: key.to_owned(),
                },
                message: format!("event key \"{key}\" fires {count} times on one entry"),
            });
        }
    }
}

fn check_fallback(node: &Node, findings: &mut Vec<Finding>) {
    let guard_count =
        node.int_branches.len() + node.text_branches.len() + node.bool_branches.len();
    if guard_count == 0 || !node.destinations.is_empty() {
        return;
    }
    let any_forced = node.int_branches.iter().any(|g| g.forced)
        || node.text_branches.iter().any(|g| g.forced)
        || node.bool_branches.iter().any(|g| g.forced);
    if any_forced {
        return;
    }
    findings.push(Finding {
        node: node.id,
        kind: FindingKind::NoFallback,
        message: String::from(
            "every outgoing edge is guarded and none is forced; the node can dead-end",
        ),
    });
}

// SPDX-License-Identifier: Apache-2.0
//! Node identity.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-assigned identifier for a dialogue node.
///
/// Ids are unique within a graph and immutable once the node exists; the
/// graph stores them but never generates them. The derived ordering is the
/// canonical enumeration order for whole-graph operations (export,
/// validation).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

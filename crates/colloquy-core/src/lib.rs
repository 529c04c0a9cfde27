// SPDX-License-Identifier: Apache-2.0
//! colloquy-core: deterministic branching-dialogue engine.
//!
//! A conversation is a directed graph of [`Node`]s whose outgoing edges
//! are guarded by conditions over a typed [`MemoryStore`]. Given a node
//! and the current memory, [`resolve`] picks the single next node id (or
//! ends the conversation) and [`collect_events`] yields the ordered
//! trigger descriptors to dispatch. [`Session`] drives that loop one step
//! at a time; mapping event keys to application callbacks stays outside
//! the engine.
//!
//! Everything here is synchronous and single-threaded by design: one
//! logical conversation advances one step at a time, and concurrent
//! conversations take independent graph/store instances.
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
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod codec;
mod edge;
mod event;
mod graph;
mod ident;
mod memory;
mod node;
mod resolve;
mod session;
mod value;

// Re-exports for stable public API
pub use codec::{decode_memory, decode_node, encode_memory, encode_node, CodecError};
pub use edge::{Destination, GuardedDestination};
pub use event::{collect_events, Emission, Event, TypedEvent};
pub use graph::{DialogueGraph, GraphError};
pub use ident::NodeId;
pub use memory::{MemoryStore, MemoryWrite};
pub use node::{CanvasPos, Node, NodeKind};
pub use resolve::{resolve, Transition};
pub use session::Session;
pub use value::{Cmp, MemoryValue, Value, ValueKind};

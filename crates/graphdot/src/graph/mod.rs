//! Graph description types consumed by the exporters.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`]: A caller-chosen identifier paired with a data record
//! - [`Edge`]: A directed, id-based connection between two nodes
//! - [`Graph`]: The insertion-ordered node and edge collection
//! - [`Record`]: The default key-value data record, with typed accessors

mod record;
mod types;

pub use record::{Record, Value};
pub use types::{Edge, Graph, Node, NodeId};

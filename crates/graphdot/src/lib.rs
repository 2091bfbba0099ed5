//! # graphdot
//!
//! Serialize directed graphs with arbitrary node and edge records to Graphviz DOT text.
//!
//! ## Core Principles
//!
//! - **Bring Your Own Graph**: A thin description type, not a graph database
//! - **Read-Only Export**: Exporting never mutates the input
//! - **Deterministic Output**: Insertion order in, declaration order out
//! - **Zero Magic**: Explicit over implicit, always
//!
//! ## Architecture
//!
//! graphdot is organized in layers:
//!
//! ```text
//! User Tools (analysis, visualization pipelines)
//!     ↓
//! Whole-Graph Exporters (DOT, JSON)
//!     ↓
//! Statement Builders (declarations, connections)
//!     ↓
//! Graph Description (nodes, edges, records)
//! ```
//!
//! Rendering through a locally installed Graphviz binary sits off to the
//! side and is entirely optional.
//!
//! ## Example
//!
//! ```rust
//! use graphdot::{Graph, Record};
//!
//! // Explicit graph construction; ids and records come from the caller
//! let mut graph = Graph::new();
//! graph.add_node("parse", Record::new().with("lines", 120i64));
//! graph.add_node("eval", Record::new().with("lines", 245i64));
//! graph.add_edge("parse", "eval", Record::new().with("kind", "calls"));
//!
//! let dot = graph.export_dot().unwrap();
//! assert!(dot.contains("\"parse\" -> \"eval\""));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;
pub mod render;

// Re-export main types
pub use error::{ExportError, Result};
pub use export::{
    export_dot, export_dot_file, export_dot_named, export_json, sanitize_label, write_dot,
    DEFAULT_GRAPH_NAME,
};
pub use graph::{Edge, Graph, Node, NodeId, Record, Value};
pub use render::{dot_available, render_file, render_file_to, RenderFormat};

//! Export module for turning graph descriptions into external formats.
//!
//! Supports:
//! - **DOT**: Graphviz visualization with sanitized labels
//! - **JSON**: D3.js and web-based tools
//! - **Statements**: line-level DOT building blocks for custom documents

pub mod dot;
pub mod json;
pub mod statement;

pub use dot::{
    export_dot, export_dot_file, export_dot_named, sanitize_label, write_dot, DEFAULT_GRAPH_NAME,
};
pub use json::export_json;
pub use statement::{connection, declaration, digraph, escape_label, format_id, format_id_with};

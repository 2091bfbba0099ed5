//! DOT format export for Graphviz visualization.
//!
//! Generates DOT text for whole graph descriptions, with node and edge
//! labels sanitized for safe embedding.

use crate::error::{ExportError, Result};
use crate::graph::Graph;
use log::{debug, warn};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// Graph name used by [`export_dot`].
pub const DEFAULT_GRAPH_NAME: &str = "test";

/// Node count above which exports log a warning.
const LARGE_EXPORT_NODES: usize = 10_000;

/// Export graph to Graphviz DOT format.
///
/// Nodes are declared first, in insertion order, as boxed labeled entries;
/// edges follow, in insertion order, as labeled directed connections. The
/// label is the sanitized textual form of each data record.
///
/// # Errors
///
/// Returns [`ExportError::Conversion`] if a data record's textual
/// conversion fails. Nothing else is checked: an empty graph exports as an
/// empty document and dangling edge endpoints pass through verbatim.
pub fn export_dot<D: std::fmt::Display>(graph: &Graph<D>) -> Result<String> {
    export_dot_named(graph, DEFAULT_GRAPH_NAME)
}

/// Export graph to Graphviz DOT format with a caller-chosen graph name.
pub fn export_dot_named<D: std::fmt::Display>(graph: &Graph<D>, name: &str) -> Result<String> {
    debug!(
        "Exporting graph to DOT: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    if graph.node_count() > LARGE_EXPORT_NODES {
        warn!(
            "Exporting large graph ({} nodes). Consider splitting it before rendering.",
            graph.node_count()
        );
    }

    let mut output = String::new();

    // Header
    output.push_str("digraph ");
    output.push_str(name);
    output.push_str(" {\n");

    // Node declarations, insertion order
    for node in graph.nodes() {
        let label = render_label(&node.data)
            .map_err(|e| ExportError::conversion(format!("node \"{}\"", node.id), e))?;
        output.push_str(&format!("\"{}\" [label=\"{label}\" shape=box];\n", node.id));
    }

    // Edge declarations, insertion order
    for edge in graph.edges() {
        let label = render_label(&edge.data).map_err(|e| {
            ExportError::conversion(format!("edge \"{}\" -> \"{}\"", edge.source, edge.target), e)
        })?;
        output.push_str(&format!(
            "\"{}\" -> \"{}\" [label=\"{label}\"];\n",
            edge.source, edge.target
        ));
    }

    output.push_str("}\n");

    Ok(output)
}

/// Write the DOT rendering of a graph to a caller-supplied sink.
///
/// Produces exactly the text of [`export_dot`].
pub fn write_dot<D, W>(graph: &Graph<D>, sink: &mut W) -> Result<()>
where
    D: std::fmt::Display,
    W: io::Write,
{
    let dot = export_dot(graph)?;
    sink.write_all(dot.as_bytes())
        .map_err(|e| ExportError::io("Failed to write DOT output to sink", e))
}

/// Export graph to a DOT file on disk.
pub fn export_dot_file<D: std::fmt::Display>(graph: &Graph<D>, path: &Path) -> Result<()> {
    let dot = export_dot(graph)?;
    fs::write(path, dot)
        .map_err(|e| ExportError::io(format!("Failed to write DOT file: {}", path.display()), e))
}

/// Sanitize label text for embedding in DOT output.
///
/// Newlines become the literal `\l` escape (Graphviz left-justified line
/// break) and carriage returns are removed. Text that already went through
/// this function comes back unchanged, so pre-escaped labels are kept as
/// given.
pub fn sanitize_label(label: &str) -> String {
    label.replace('\n', "\\l").replace('\r', "")
}

// The record's Display impl is the one fallible step of an export; callers
// attach the entity context.
fn render_label<D: std::fmt::Display>(data: &D) -> std::result::Result<String, std::fmt::Error> {
    let mut text = String::new();
    write!(text, "{data}")?;
    Ok(sanitize_label(&text))
}

//! Core graph types: nodes, edges, IDs, and the graph container.

use super::record::Record;
use crate::error::Result;
use log::trace;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a node, kept in textual form.
///
/// Identifiers are chosen by the caller; string and numeric forms are
/// accepted and numbers are stored as their decimal rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create an identifier from anything string-convertible.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for NodeId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

/// A node in the graph description.
///
/// Nodes pair an identifier with an opaque data record whose textual
/// form becomes the node label on export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node<D> {
    /// Unique identifier (chosen by the caller)
    pub id: NodeId,
    /// Data record rendered as the node label
    pub data: D,
}

impl<D> Node<D> {
    /// Create a new node.
    pub fn new(id: impl Into<NodeId>, data: D) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

/// A directed edge in the graph description.
///
/// Endpoints are weak, id-based references; an edge does not own its
/// nodes and its endpoints are never validated against the node list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge<D> {
    /// Source node ID
    pub source: NodeId,
    /// Target node ID
    pub target: NodeId,
    /// Data record rendered as the edge label
    pub data: D,
}

impl<D> Edge<D> {
    /// Create a new edge.
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, data: D) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            data,
        }
    }
}

/// An insertion-ordered collection of nodes and edges.
///
/// This is a graph *description*, not a graph database: there are no id
/// lookups, no deletion, and no adjacency indexes. Nodes and edges keep
/// the order they were added in, and that order determines export order.
/// Identifier uniqueness and edge-endpoint consistency are the caller's
/// responsibility; exporters pass dangling endpoints through verbatim.
///
/// # Examples
///
/// ```
/// use graphdot::{Graph, Record};
///
/// let mut graph = Graph::new();
/// graph.add_node("main", Record::new().with("kind", "function"));
/// graph.add_node("util", Record::new().with("kind", "module"));
/// graph.add_edge("main", "util", Record::new().with("kind", "calls"));
///
/// let dot = graph.export_dot()?;
/// assert!(dot.starts_with("digraph test {\n"));
/// assert!(dot.ends_with("}\n"));
/// # Ok::<(), graphdot::ExportError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph<D = Record> {
    nodes: Vec<Node<D>>,
    edges: Vec<Edge<D>>,
}

impl<D> Graph<D> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Append a node to the graph.
    pub fn add_node(&mut self, id: impl Into<NodeId>, data: D) {
        let id = id.into();
        trace!("Adding node: id={id}");
        self.nodes.push(Node { id, data });
    }

    /// Append a directed edge to the graph.
    ///
    /// Endpoints are recorded as given; whether they name existing nodes
    /// is not checked.
    pub fn add_edge(&mut self, source: impl Into<NodeId>, target: impl Into<NodeId>, data: D) {
        let source = source.into();
        let target = target.into();
        trace!("Adding edge: source={source}, target={target}");
        self.edges.push(Edge {
            source,
            target,
            data,
        });
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node<D>] {
        &self.nodes
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge<D>] {
        &self.edges
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check whether the graph has neither nodes nor edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

impl<D> Default for Graph<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: std::fmt::Display> Graph<D> {
    /// Export the graph to Graphviz DOT format.
    pub fn export_dot(&self) -> Result<String> {
        crate::export::export_dot(self)
    }

    /// Export the graph to Graphviz DOT format with a caller-chosen graph name.
    pub fn export_dot_named(&self, name: &str) -> Result<String> {
        crate::export::export_dot_named(self, name)
    }
}

impl<D: Serialize> Graph<D> {
    /// Export the graph to D3.js-compatible JSON format.
    pub fn export_json(&self) -> Result<String> {
        crate::export::export_json(self)
    }
}

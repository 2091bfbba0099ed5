//! Integration tests for graph description construction.
//!
//! Tests cover:
//! - Node and edge insertion, counts, and accessors
//! - Insertion-order guarantees
//! - Id conversions from strings and numbers
//! - Record getters and textual form
//! - Serde round-trips of whole descriptions

use graphdot::{Edge, Graph, Node, NodeId, Record, Value};

// Counts and emptiness track insertions
#[test]
fn test_add_and_count() {
    let mut graph = Graph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);

    graph.add_node("a", Record::new());
    graph.add_node("b", Record::new());
    graph.add_edge("a", "b", Record::new());

    assert!(!graph.is_empty());
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

// Nodes and edges keep their insertion order
#[test]
fn test_insertion_order() {
    let mut graph: Graph<i64> = Graph::new();
    graph.add_node("n3", 3);
    graph.add_node("n1", 1);
    graph.add_node("n2", 2);
    graph.add_edge("n3", "n1", 31);
    graph.add_edge("n1", "n2", 12);

    let node_ids: Vec<_> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(node_ids, ["n3", "n1", "n2"]);

    let edge_data: Vec<_> = graph.edges().iter().map(|e| e.data).collect();
    assert_eq!(edge_data, [31, 12]);
}

// Node and edge fields are plain public data
#[test]
fn test_node_and_edge_constructors() {
    let node = Node::new("id1", "payload");
    assert_eq!(node.id, NodeId::from("id1"));
    assert_eq!(node.data, "payload");

    let edge = Edge::new("src", "dst", "label");
    assert_eq!(edge.source.as_str(), "src");
    assert_eq!(edge.target.as_str(), "dst");
    assert_eq!(edge.data, "label");
}

// Ids accept strings and numbers and render in decimal
#[test]
fn test_node_id_conversions() {
    assert_eq!(NodeId::from("name").to_string(), "name");
    assert_eq!(NodeId::from(7u64).to_string(), "7");
    assert_eq!(NodeId::from(-3i64).to_string(), "-3");
    assert_eq!(NodeId::new(String::from("owned")).as_str(), "owned");
}

// Default graph is empty
#[test]
fn test_default_graph() {
    let graph: Graph<Record> = Graph::default();
    assert!(graph.is_empty());
}

// Record getters are type-safe
#[test]
fn test_record_getters() {
    let record = Record::new()
        .with("name", "main")
        .with("line", 42i64)
        .with("score", 0.5)
        .with("public", true)
        .with("tags", vec!["entry".to_string()])
        .with("spans", vec![1i64, 9i64]);

    assert_eq!(record.get_text("name"), Some("main"));
    assert_eq!(record.get_int("line"), Some(42));
    assert_eq!(record.get_float("score"), Some(0.5));
    assert_eq!(record.get_bool("public"), Some(true));
    assert_eq!(record.get_text_list("tags").map(|t| t.len()), Some(1));
    assert_eq!(record.get_int_list("spans"), Some(&[1i64, 9][..]));

    // Wrong type returns None
    assert_eq!(record.get_int("name"), None);
    assert_eq!(record.get_text("line"), None);
}

// Records collect from key/value pairs
#[test]
fn test_record_from_iterator() {
    let record: Record = vec![
        ("name".to_string(), Value::Text("x".to_string())),
        ("line".to_string(), Value::Int(3)),
    ]
    .into_iter()
    .collect();

    assert_eq!(record.len(), 2);
    assert_eq!(record.get_int("line"), Some(3));
}

// The textual form sorts keys, so equal records read the same
#[test]
fn test_record_display_is_deterministic() {
    let a = Record::new().with("b", 2i64).with("a", 1i64).with("c", 3i64);
    let b = Record::new().with("c", 3i64).with("a", 1i64).with("b", 2i64);

    assert_eq!(a.to_string(), b.to_string());
    assert_eq!(a.to_string(), "a: 1\nb: 2\nc: 3");
}

// Whole descriptions survive a serde round-trip
#[test]
fn test_graph_serde_round_trip() {
    let mut graph = Graph::new();
    graph.add_node("parse", Record::new().with("line", 10i64));
    graph.add_node("eval", Record::new().with("line", 20i64));
    graph.add_edge("parse", "eval", Record::new().with("kind", "calls"));

    let json = serde_json::to_string(&graph).unwrap();
    let restored: Graph = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.node_count(), 2);
    assert_eq!(restored.edge_count(), 1);

    let ids: Vec<_> = restored.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["parse", "eval"]);
    assert_eq!(restored.nodes()[0].data.get_int("line"), Some(10));
    assert_eq!(restored.edges()[0].data.get_text("kind"), Some("calls"));
}

// Exported text from a restored description matches the original's
#[test]
fn test_serde_round_trip_preserves_export() {
    let mut graph = Graph::new();
    graph.add_node("a", Record::new().with("label", "first\nsecond"));
    graph.add_edge("a", "b", Record::new());

    let restored: Graph =
        serde_json::from_str(&serde_json::to_string(&graph).unwrap()).unwrap();

    assert_eq!(graph.export_dot().unwrap(), restored.export_dot().unwrap());
}

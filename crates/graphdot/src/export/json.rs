//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js force-directed layouts.

use crate::error::{ExportError, Result};
use crate::graph::Graph;
use serde::Serialize;
use serde_json::json;

/// Export graph to D3.js-compatible JSON format.
///
/// # Errors
///
/// Returns [`ExportError::Serialization`] if a data record fails to
/// serialize.
pub fn export_json<D: Serialize>(graph: &Graph<D>) -> Result<String> {
    let mut nodes_array = Vec::new();
    let mut links_array = Vec::new();

    // Export all nodes
    for node in graph.nodes() {
        let data = serde_json::to_value(&node.data).map_err(|e| {
            ExportError::serialization(
                format!("Failed to serialize data for node \"{}\"", node.id),
                e,
            )
        })?;
        nodes_array.push(json!({
            "id": node.id,
            "data": data,
        }));
    }

    // Export all edges
    for edge in graph.edges() {
        let data = serde_json::to_value(&edge.data).map_err(|e| {
            ExportError::serialization(
                format!(
                    "Failed to serialize data for edge \"{}\" -> \"{}\"",
                    edge.source, edge.target
                ),
                e,
            )
        })?;
        links_array.push(json!({
            "source": edge.source,
            "target": edge.target,
            "data": data,
        }));
    }

    let result = json!({
        "nodes": nodes_array,
        "links": links_array,
    });

    // serde_json::to_string_pretty cannot fail on an already-built Value tree
    Ok(serde_json::to_string_pretty(&result).expect("Failed to serialize JSON"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Record;

    #[test]
    fn test_export_json_structure() {
        let mut graph = Graph::new();
        graph.add_node("a", Record::new().with("name", "test"));
        graph.add_edge("a", "b", Record::new());

        let out = export_json(&graph).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["nodes"][0]["id"], "a");
        assert_eq!(value["nodes"][0]["data"]["name"], "test");
        assert_eq!(value["links"][0]["source"], "a");
        assert_eq!(value["links"][0]["target"], "b");
    }
}

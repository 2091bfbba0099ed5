//! Minimal usage example: describe a graph, write its DOT form to a sink,
//! and assemble a custom document from statement builders.

use graphdot::export::statement;
use graphdot::{write_dot, Graph, Record};

fn main() -> graphdot::Result<()> {
    // Whole-graph export: ids and records come from the caller
    let mut graph = Graph::new();
    graph.add_node("parse", Record::new().with("step", 1i64));
    graph.add_node("check", Record::new().with("step", 2i64));
    graph.add_node("emit", Record::new().with("step", 3i64));
    graph.add_edge("parse", "check", Record::new());
    graph.add_edge("check", "emit", Record::new());

    // Any io::Write works as a sink; stdout here
    write_dot(&graph, &mut std::io::stdout())?;

    // Statement builders for hand-assembled documents
    let declarations = vec![
        statement::declaration(
            "start",
            "Start",
            Some(statement::SHAPE_BOX),
            Some(statement::COLOR_GREEN),
        ),
        statement::declaration(
            "finish",
            "Finish",
            Some(statement::SHAPE_BOX),
            Some(statement::COLOR_GRAY75),
        ),
    ];
    let connections = vec![statement::connection("start", "finish", "one step")];

    println!("{}", statement::digraph(&declarations, &connections));

    Ok(())
}

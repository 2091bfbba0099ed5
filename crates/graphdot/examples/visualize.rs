//! Visualization and export example demonstrating the export formats.
//!
//! This example describes a small service as a graph and exports it to:
//! - DOT (Graphviz) for visual diagrams
//! - JSON (D3.js) for web visualization
//!
//! When Graphviz is installed, the DOT file is also rendered to PNG.

use graphdot::{export_dot_file, render_file, Graph, Record, RenderFormat};
use std::fs;
use std::path::Path;

fn main() -> graphdot::Result<()> {
    println!("=== Building Module Graph ===\n");

    let mut graph = Graph::new();

    // Describe a small service and its internal dependencies
    graph.add_node(
        "api",
        Record::new().with("kind", "module").with("lines", 420i64),
    );
    graph.add_node(
        "auth",
        Record::new().with("kind", "module").with("lines", 180i64),
    );
    graph.add_node(
        "store",
        Record::new().with("kind", "module").with("lines", 350i64),
    );
    graph.add_node(
        "metrics",
        Record::new().with("kind", "module").with("lines", 95i64),
    );

    graph.add_edge("api", "auth", Record::new().with("kind", "calls"));
    graph.add_edge("api", "store", Record::new().with("kind", "calls"));
    graph.add_edge("auth", "store", Record::new().with("kind", "calls"));
    graph.add_edge("api", "metrics", Record::new().with("kind", "notifies"));

    println!(
        "✓ Added {} modules and {} dependencies\n",
        graph.node_count(),
        graph.edge_count()
    );

    println!("=== Exporting to Multiple Formats ===\n");

    fs::create_dir_all("output").expect("Failed to create output directory");

    // 1. DOT (Graphviz) - whole-graph export
    println!("1. DOT (Graphviz) Format:");
    let dot = graph.export_dot()?;
    export_dot_file(&graph, Path::new("output/graph.dot"))?;
    println!("   ✓ Saved to output/graph.dot");
    println!("   Lines: {}\n", dot.lines().count());

    // 2. DOT with a caller-chosen graph name
    println!("2. DOT (Named) Format:");
    let named = graph.export_dot_named("services")?;
    fs::write("output/services.dot", &named).expect("Failed to write named DOT file");
    println!("   ✓ Saved to output/services.dot");
    println!("   → Starts with: {}\n", named.lines().next().unwrap_or(""));

    // 3. JSON (D3.js compatible)
    println!("3. JSON (D3.js) Format:");
    let json = graph.export_json()?;
    fs::write("output/graph.json", &json).expect("Failed to write JSON file");
    println!("   ✓ Saved to output/graph.json");
    println!("   → Use with D3.js force-directed layout");
    println!("   Size: {} bytes\n", json.len());

    // 4. Render through the local Graphviz installation
    println!("4. Rendering:");
    match render_file(Path::new("output/graph.dot"), RenderFormat::Png)? {
        Some(image) => println!("   ✓ Rendered to {}", image.display()),
        None => {
            println!("   → Graphviz not installed, render skipped");
            println!("   → Render manually with: dot -Tpng output/graph.dot -o output/graph.png");
        }
    }

    println!("\n=== Graph Statistics ===\n");
    println!("Total nodes: {}", graph.node_count());
    println!("Total edges: {}", graph.edge_count());

    println!("\n✓ All exports complete! Check the output/ directory.");

    Ok(())
}

//! Line-level DOT statement builders.
//!
//! For callers assembling DOT documents from their own structures: node
//! declarations with optional shape and fill color, directed connections,
//! and whole-document assembly. [`dot`](super::dot) covers the common case
//! of exporting a whole [`Graph`](crate::Graph) in one call.

/// Box node shape.
pub const SHAPE_BOX: &str = "box";

/// Light blue fill color.
pub const COLOR_LIGHTBLUE: &str = "lightblue";

/// Light slate blue fill color.
pub const COLOR_LIGHT_SLATE_BLUE: &str = "lightslateblue";

/// 75% gray fill color.
pub const COLOR_GRAY75: &str = "gray75";

/// Green fill color.
pub const COLOR_GREEN: &str = "green";

/// Third green shade fill color.
pub const COLOR_GREEN3: &str = "green3";

/// Build a node declaration statement, without the trailing `;`.
///
/// The id goes through [`format_id`] and the label through
/// [`escape_label`]. Shape and fill color are appended when given, in that
/// order.
pub fn declaration(id: &str, label: &str, shape: Option<&str>, color: Option<&str>) -> String {
    let mut decl = format!("{}[label=\"{}\"", format_id(id), escape_label(label));

    if let Some(shape) = shape {
        decl.push_str(&format!(", shape={shape}"));
    }

    if let Some(color) = color {
        decl.push_str(&format!(", style=filled fillcolor=\"{color}\""));
    }

    decl.push(']');
    decl
}

/// Build a directed connection statement, without the trailing `;`.
///
/// Endpoint ids are used as given; the label goes through
/// [`escape_label`].
pub fn connection(source: &str, target: &str, label: &str) -> String {
    format!("{source} -> {target} [label=\"{}\"]", escape_label(label))
}

/// Assemble a DOT document from prepared declaration and connection
/// statements.
///
/// Each statement gets a terminating `;`, declarations and connections are
/// separated by a blank line, and the document ends with the closing brace.
pub fn digraph(declarations: &[String], connections: &[String]) -> String {
    let mut dot = String::from("digraph graphname {\n");

    for declaration in declarations {
        dot.push_str(declaration);
        dot.push_str(";\n");
    }

    dot.push('\n');

    for connection in connections {
        dot.push_str(connection);
        dot.push_str(";\n");
    }

    dot.push('}');
    dot
}

/// Escape label text for a statement attribute.
///
/// Newlines become the literal `\n` escape (Graphviz centered line break).
/// Distinct from [`sanitize_label`](super::dot::sanitize_label), which uses
/// left-justified breaks and also strips carriage returns.
pub fn escape_label(label: &str) -> String {
    label.replace('\n', "\\n")
}

/// Format an id for use in a declaration.
///
/// DOT ids cannot carry square brackets; both are replaced with `0`.
pub fn format_id(id: &str) -> String {
    format_id_with(id, '0', '0')
}

/// Format an id, replacing square brackets with the given characters.
pub fn format_id_with(id: &str, open: char, close: char) -> String {
    id.replace('[', &open.to_string())
        .replace(']', &close.to_string())
}

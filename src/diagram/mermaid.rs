//! Mermaid flowchart notation

use std::fmt;

use super::graph::{DiagramWriter, Edge, Endpoint, Graph, Node, NodeShape, Statement, Style};

const INDENT: &str = "    ";

/// Writes graphs as Mermaid `graph` flowcharts
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidWriter;

impl DiagramWriter for MermaidWriter {
    fn write(&self, graph: &Graph) -> String {
        let mut lines = Vec::with_capacity(graph.statements().len() + 1);
        lines.push(format!("graph {}", graph.direction));

        for statement in graph.statements() {
            let line = match statement {
                Statement::Node(node) => format_node(node),
                Statement::Edge(edge) => format_edge(edge),
                Statement::Style(style) => format_style(style),
            };
            lines.push(format!("{INDENT}{line}"));
        }

        lines.join("\n")
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&MermaidWriter.write(self))
    }
}

fn format_node(node: &Node) -> String {
    match node.shape {
        NodeShape::Rectangle => format!("{}[{}]", node.id, node.label),
        NodeShape::Stadium => format!("{}([{}])", node.id, node.label),
        NodeShape::Diamond => format!("{}{{{}}}", node.id, node.label),
    }
}

fn format_endpoint(endpoint: &Endpoint) -> String {
    match endpoint {
        Endpoint::Declared(node) => format_node(node),
        Endpoint::Reference(id) => id.clone(),
    }
}

fn format_edge(edge: &Edge) -> String {
    let source = format_endpoint(&edge.source);
    let target = format_endpoint(&edge.target);
    match &edge.label {
        Some(label) => format!("{source} -->|{label}| {target}"),
        None => format!("{source} --> {target}"),
    }
}

fn format_style(style: &Style) -> String {
    format!("style {} fill:{}", style.id, style.fill)
}

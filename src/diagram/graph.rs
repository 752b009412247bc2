//! Graph structures
//!
//! Renderers build a [`Graph`] and never produce text themselves; a
//! [`DiagramWriter`] turns the finished graph into a notation in one pass.

use std::fmt;

use serde::Deserialize;

/// The direction of a flowchart
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Top-Down
    #[default]
    TD,
    /// Top-Bottom
    TB,
    /// Left-Right
    LR,
    /// Bottom-Top
    BT,
    /// Right-Left
    RL,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::TD => "TD",
            Direction::TB => "TB",
            Direction::LR => "LR",
            Direction::BT => "BT",
            Direction::RL => "RL",
        };
        f.write_str(name)
    }
}

/// Shape of a node in the diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    Rectangle, // [text]
    Stadium,   // ([text])
    Diamond,   // {text}
}

/// A declared node: identifier, label and shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub shape: NodeShape,
}

impl Node {
    pub fn rectangle(id: &str, label: &str) -> Self {
        Node {
            id: id.to_string(),
            label: label.to_string(),
            shape: NodeShape::Rectangle,
        }
    }

    pub fn stadium(id: &str, label: &str) -> Self {
        Node {
            id: id.to_string(),
            label: label.to_string(),
            shape: NodeShape::Stadium,
        }
    }

    pub fn diamond(id: &str, label: &str) -> Self {
        Node {
            id: id.to_string(),
            label: label.to_string(),
            shape: NodeShape::Diamond,
        }
    }
}

/// One side of an edge
///
/// An endpoint either declares its node inline (`S1[Draft]`) or refers to a
/// node declared elsewhere (`S1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Declared(Node),
    Reference(String),
}

impl Endpoint {
    pub fn reference(id: &str) -> Self {
        Endpoint::Reference(id.to_string())
    }

    /// Identifier of the node this endpoint points at
    pub fn id(&self) -> &str {
        match self {
            Endpoint::Declared(node) => &node.id,
            Endpoint::Reference(id) => id,
        }
    }
}

/// A directed edge, optionally labeled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: Endpoint,
    pub target: Endpoint,
    pub label: Option<String>,
}

/// A fill colour assigned to a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub id: String,
    pub fill: String,
}

/// One statement of the diagram, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Node(Node),
    Edge(Edge),
    Style(Style),
}

/// An ordered flowchart description
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    pub direction: Direction,
    statements: Vec<Statement>,
}

impl Graph {
    pub fn new(direction: Direction) -> Self {
        Graph {
            direction,
            statements: Vec::new(),
        }
    }

    /// Appends a standalone node declaration
    pub fn push_node(&mut self, node: Node) {
        self.statements.push(Statement::Node(node));
    }

    /// Appends an edge
    pub fn push_edge(&mut self, source: Endpoint, target: Endpoint, label: Option<&str>) {
        self.statements.push(Statement::Edge(Edge {
            source,
            target,
            label: label.map(str::to_string),
        }));
    }

    /// Appends a fill style for a node
    pub fn push_style(&mut self, id: &str, fill: &str) {
        self.statements.push(Statement::Style(Style {
            id: id.to_string(),
            fill: fill.to_string(),
        }));
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Edge(edge) => Some(edge),
            _ => None,
        })
    }

    pub fn styles(&self) -> impl Iterator<Item = &Style> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Style(style) => Some(style),
            _ => None,
        })
    }
}

/// Turns a graph into diagram text
pub trait DiagramWriter {
    fn write(&self, graph: &Graph) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_id() {
        let declared = Endpoint::Declared(Node::rectangle("S1", "Draft"));
        assert_eq!(declared.id(), "S1");
        assert_eq!(Endpoint::reference("S2").id(), "S2");
    }

    #[test]
    fn test_graph_keeps_statement_order() {
        let mut graph = Graph::new(Direction::TD);
        graph.push_edge(
            Endpoint::Declared(Node::stadium("Start", "Begin")),
            Endpoint::Declared(Node::rectangle("S1", "A")),
            None,
        );
        graph.push_node(Node::diamond("D1", "Ok?"));
        graph.push_edge(Endpoint::reference("D1"), Endpoint::reference("S1"), Some("No"));
        graph.push_style("Start", "#e1f5e1");

        assert_eq!(graph.statements().len(), 4);
        assert!(matches!(graph.statements()[1], Statement::Node(_)));
        assert_eq!(graph.edges().count(), 2);
        assert_eq!(graph.styles().count(), 1);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::default().to_string(), "TD");
        assert_eq!(Direction::LR.to_string(), "LR");
    }
}

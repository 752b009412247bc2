//! Linear workflows
//!
//! Also hosts the chain helpers shared by the role-annotated and iterative
//! renderers, which draw the same topology.

use crate::config::Theme;
use crate::constants::{END_ID, END_LABEL, START_ID, START_LABEL};
use crate::workflow::Workflow;

use super::graph::{Endpoint, Graph, Node};
use super::stage_id;

/// Renders stages as a single chain from Start to End
///
/// ```text
/// Start([Workflow Start]) --> S1[A]
/// S1[A] --> S2[B]
/// S2 --> End([Workflow End])
/// ```
pub fn render_linear(workflow: &Workflow, theme: &Theme) -> Graph {
    let labels: Vec<&str> = workflow.stages.iter().map(|s| s.name.as_str()).collect();

    let mut graph = Graph::new(theme.direction);
    push_chain(&mut graph, &labels, END_LABEL);
    push_marker_styles(&mut graph, &theme.palette.start, &theme.palette.end);
    graph
}

/// Appends Start, one node per label, and End, connected in order
///
/// Nothing is appended for an empty label list.
pub(super) fn push_chain<S: AsRef<str>>(graph: &mut Graph, labels: &[S], end_label: &str) {
    let Some(first) = labels.first() else {
        return;
    };

    graph.push_edge(
        Endpoint::Declared(Node::stadium(START_ID, START_LABEL)),
        Endpoint::Declared(Node::rectangle(&stage_id(0), first.as_ref())),
        None,
    );

    for (index, pair) in labels.windows(2).enumerate() {
        graph.push_edge(
            Endpoint::Declared(Node::rectangle(&stage_id(index), pair[0].as_ref())),
            Endpoint::Declared(Node::rectangle(&stage_id(index + 1), pair[1].as_ref())),
            None,
        );
    }

    graph.push_edge(
        Endpoint::reference(&stage_id(labels.len() - 1)),
        Endpoint::Declared(Node::stadium(END_ID, end_label)),
        None,
    );
}

/// Appends the fill styles of the Start and End markers
pub(super) fn push_marker_styles(graph: &mut Graph, start: &str, end: &str) {
    graph.push_style(START_ID, start);
    graph.push_style(END_ID, end);
}

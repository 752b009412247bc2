//! Iterative workflows

use log::warn;

use crate::config::Theme;
use crate::constants::END_LABEL;
use crate::workflow::Workflow;

use super::graph::{Endpoint, Graph};
use super::linear::{push_chain, push_marker_styles};
use super::stage_id;

/// Renders a chain with labeled feedback loops drawn on top
///
/// Loop endpoints are resolved by exact stage name. A loop naming a stage
/// that does not exist is skipped with a warning.
pub fn render_iterative(workflow: &Workflow, theme: &Theme) -> Graph {
    let labels: Vec<&str> = workflow.stages.iter().map(|s| s.name.as_str()).collect();

    let mut graph = Graph::new(theme.direction);
    push_chain(&mut graph, &labels, END_LABEL);

    for feedback in &workflow.feedback_loops {
        match (
            workflow.stage_index(&feedback.from),
            workflow.stage_index(&feedback.to),
        ) {
            (Some(from), Some(to)) => graph.push_edge(
                Endpoint::reference(&stage_id(from)),
                Endpoint::reference(&stage_id(to)),
                Some(feedback.condition_or_default()),
            ),
            (from, to) => {
                let missing: Vec<&str> = [(from, &feedback.from), (to, &feedback.to)]
                    .into_iter()
                    .filter(|(index, _)| index.is_none())
                    .map(|(_, name)| name.as_str())
                    .collect();
                warn!(
                    "Skipping feedback loop '{}' -> '{}': unknown stage {}",
                    feedback.from,
                    feedback.to,
                    missing.join(", ")
                );
            }
        }
    }

    push_marker_styles(&mut graph, &theme.palette.start, &theme.palette.end);
    graph
}

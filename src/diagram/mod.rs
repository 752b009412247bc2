//! Diagram generation module
//!
//! This module turns a workflow into a flowchart graph and the graph into
//! Mermaid text. Generation is a pure function of the workflow and the theme.

mod decision;
mod graph;
mod iterative;
mod linear;
mod mermaid;
mod roles;

use log::debug;

pub use decision::render_decision;
pub use graph::{
    DiagramWriter, Direction, Edge, Endpoint, Graph, Node, NodeShape, Statement, Style,
};
pub use iterative::render_iterative;
pub use linear::render_linear;
pub use mermaid::MermaidWriter;
pub use roles::render_roles;

use crate::config::Theme;
use crate::errors::Result;
use crate::workflow::{Workflow, WorkflowType};

/// Identifier of the stage node at a zero-based position
pub(crate) fn stage_id(index: usize) -> String {
    format!("S{}", index + 1)
}

/// Identifier of the n-th decision node, zero-based
pub(crate) fn decision_id(index: usize) -> String {
    format!("D{}", index + 1)
}

/// Builds the graph for a workflow
///
/// The workflow is validated first and then handed to the renderer matching
/// its declared type.
///
/// # Arguments
/// * `workflow` - The workflow to draw
/// * `theme` - Direction and colours to use
///
/// # Returns
/// * `Result<Graph>` - The flowchart graph or an error
///
/// # Errors
/// * Returns `Error::InvalidWorkflow` if the workflow has no stages or repeats a stage name
/// * Returns `Error::UnknownWorkflowType` if the workflow type is not supported
pub fn generate_diagram(workflow: &Workflow, theme: &Theme) -> Result<Graph> {
    workflow.validate()?;
    let kind = workflow.kind()?;

    debug!(
        "Rendering workflow '{}' as a {} diagram",
        workflow.name, kind
    );

    let graph = match kind {
        WorkflowType::Linear => render_linear(workflow, theme),
        WorkflowType::Decision => render_decision(workflow, theme),
        WorkflowType::RoleAnnotated => render_roles(workflow, theme),
        WorkflowType::Iterative => render_iterative(workflow, theme),
    };

    debug!(
        "Generated {} statements ({} edges)",
        graph.statements().len(),
        graph.edges().count()
    );

    Ok(graph)
}

/// Builds the Mermaid text for a workflow
///
/// # Errors
/// Returns the same errors as [`generate_diagram`]
pub fn render_diagram(workflow: &Workflow, theme: &Theme) -> Result<String> {
    let graph = generate_diagram(workflow, theme)?;
    Ok(MermaidWriter.write(&graph))
}

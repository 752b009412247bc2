//! Turns workflow descriptions into Mermaid flow diagrams.
//!
//! A workflow is a list of named stages, optionally with decision points,
//! owning roles or feedback loops. [`diagram::generate_diagram`] builds a
//! flowchart graph for it and [`diagram::MermaidWriter`] renders the graph
//! as text.

use std::io;

use anyhow::Context;
use log::info;

pub mod cli;
pub mod config;
pub mod constants;
pub mod diagram;
pub mod errors;
pub mod logging;
pub mod output;
pub mod workflow;

pub use cli::CliOptions;

pub mod prelude {
    pub use crate::cli::{CliOptions, build_cli, get_matches, get_verbosity};
    pub use crate::config::{Theme, resolve_theme};
    pub use crate::diagram::{Graph, generate_diagram, render_diagram};
    pub use crate::errors::{
        Error, Result, file_operation_error, generic_error, input_parsing_error,
        invalid_workflow_error, unknown_workflow_type_error,
    };
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::run;
    pub use crate::workflow::{InputSource, Workflow, WorkflowType, load_workflow};
}

/// Runs one diagram generation
///
/// This function orchestrates the steps:
/// 1. Resolve the theme
/// 2. Load the workflow description
/// 3. Validate the workflow and generate the diagram
/// 4. Write the diagram and print the fenced block
///
/// Nothing is written when any earlier step fails.
///
/// # Errors
/// Returns an error if the configuration or input cannot be loaded, the
/// workflow type is unknown, or the output cannot be written
pub fn run(options: &CliOptions) -> anyhow::Result<()> {
    let theme = config::resolve_theme(options.config.as_deref())?;

    let workflow = workflow::load_workflow(&options.stages)?;
    info!(
        "Generating {} diagram for '{}' ({} stages)",
        workflow.workflow_type,
        workflow.name,
        workflow.stages.len()
    );

    let diagram = diagram::render_diagram(&workflow, &theme)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output::publish_diagram(&diagram, options.output.as_deref(), &mut handle)
        .context("Failed to output the diagram")?;

    Ok(())
}

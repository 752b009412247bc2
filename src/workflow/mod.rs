//! Workflow module
//!
//! This module contains the workflow description model and its loader.

mod loader;
mod model;

pub use loader::{InputFormat, InputSource, load_workflow, parse_workflow, read_source};
pub use model::{Decision, DecisionOption, FeedbackLoop, Stage, Workflow, WorkflowType};

//! Workflow data structures
//!
//! This module contains the data structures describing a workflow document.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOOP_CONDITION, UNKNOWN_ROLE};
use crate::errors::{Error, Result, invalid_workflow_error, unknown_workflow_type_error};

/// The four workflow shapes a diagram can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowType {
    /// Stages form a single chain
    Linear,
    /// Some stages branch into labeled options
    Decision,
    /// Every stage carries an owning role
    RoleAnnotated,
    /// A chain with labeled feedback loops
    Iterative,
}

impl WorkflowType {
    /// Values accepted in the `workflow_type` field, in documentation order
    pub const ACCEPTED: [&'static str; 4] = ["simple", "decision", "multi-role", "iterative"];

    /// The name used for this type in workflow documents
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowType::Linear => "simple",
            WorkflowType::Decision => "decision",
            WorkflowType::RoleAnnotated => "multi-role",
            WorkflowType::Iterative => "iterative",
        }
    }
}

impl FromStr for WorkflowType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "simple" => Ok(WorkflowType::Linear),
            "decision" => Ok(WorkflowType::Decision),
            "multi-role" => Ok(WorkflowType::RoleAnnotated),
            "iterative" => Ok(WorkflowType::Iterative),
            _ => Err(unknown_workflow_type_error(s, &Self::ACCEPTED)),
        }
    }
}

impl fmt::Display for WorkflowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A workflow description as read from the input document
///
/// The workflow type is kept as written so that an unsupported value can be
/// reported verbatim when a diagram is requested.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Workflow {
    /// Human readable name of the workflow
    #[serde(rename = "workflow_name", default)]
    pub name: String,
    /// Shape of the workflow (`simple`, `decision`, `multi-role` or `iterative`)
    #[serde(rename = "workflow_type", default = "default_workflow_type")]
    pub workflow_type: String,
    /// Ordered stages of the workflow
    pub stages: Vec<Stage>,
    /// Decision points attached to stages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decisions: Vec<Decision>,
    /// Feedback loops between stages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feedback_loops: Vec<FeedbackLoop>,
}

/// Default workflow type when the document omits one
fn default_workflow_type() -> String {
    WorkflowType::Linear.as_str().to_string()
}

/// A named step in a workflow
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stage {
    /// Unique name of the stage
    pub name: String,
    /// Optional role owning the stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Stage {
    /// Creates a stage without a role
    pub fn new(name: &str) -> Self {
        Stage {
            name: name.to_string(),
            role: None,
        }
    }

    /// Creates a stage owned by `role`
    pub fn with_role(name: &str, role: &str) -> Self {
        Stage {
            name: name.to_string(),
            role: Some(role.to_string()),
        }
    }

    /// The owning role, or `Unknown` when none was given
    pub fn role_or_unknown(&self) -> &str {
        self.role.as_deref().unwrap_or(UNKNOWN_ROLE)
    }
}

/// A branch point attached to a stage
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Decision {
    /// Name of the stage the decision follows
    pub stage: String,
    /// Label of the decision node
    pub name: String,
    /// Outgoing options, in order
    #[serde(default)]
    pub options: Vec<DecisionOption>,
}

/// One labeled outcome of a decision
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DecisionOption {
    /// Edge label
    pub label: String,
    /// Name of the stage this option leads to
    pub next_stage: String,
}

/// A labeled back-edge between two stages
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeedbackLoop {
    /// Stage the loop starts from
    pub from: String,
    /// Stage the loop returns to
    pub to: String,
    /// Optional edge label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl FeedbackLoop {
    /// The loop label, `Iterate` when no condition was given
    pub fn condition_or_default(&self) -> &str {
        self.condition.as_deref().unwrap_or(DEFAULT_LOOP_CONDITION)
    }
}

impl Workflow {
    /// Creates a workflow of the given type from a list of stages
    pub fn new(name: &str, workflow_type: WorkflowType, stages: Vec<Stage>) -> Self {
        Workflow {
            name: name.to_string(),
            workflow_type: workflow_type.as_str().to_string(),
            stages,
            decisions: Vec::new(),
            feedback_loops: Vec::new(),
        }
    }

    /// Parses the declared workflow type
    ///
    /// # Errors
    /// Returns `Error::UnknownWorkflowType` naming the value and the accepted set
    pub fn kind(&self) -> Result<WorkflowType> {
        self.workflow_type.parse()
    }

    /// Validates the structural invariants every renderer relies on
    ///
    /// This checks that:
    /// - at least one stage is present
    /// - no stage has an empty name
    /// - stage names are unique
    ///
    /// References from decisions and feedback loops are deliberately not
    /// checked here; renderers resolve them permissively.
    ///
    /// # Errors
    /// Returns `Error::InvalidWorkflow` describing the first violation found
    pub fn validate(&self) -> Result<()> {
        if self.stages.is_empty() {
            return Err(invalid_workflow_error(
                "No stages specified. At least one stage is required.",
            ));
        }

        let mut seen = HashSet::new();
        for (index, stage) in self.stages.iter().enumerate() {
            if stage.name.trim().is_empty() {
                return Err(invalid_workflow_error(&format!(
                    "Stage at index {index} has an empty name."
                )));
            }
            if !seen.insert(stage.name.as_str()) {
                return Err(invalid_workflow_error(&format!(
                    "Stage '{}' is defined more than once. Stage names must be unique.",
                    stage.name
                )));
            }
        }

        Ok(())
    }

    /// Returns the first decision attached to the named stage
    pub fn decision_for(&self, stage: &str) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.stage == stage)
    }

    /// Returns the zero-based position of the named stage
    pub fn stage_index(&self, name: &str) -> Option<usize> {
        self.stages.iter().position(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stages(names: &[&str]) -> Vec<Stage> {
        names.iter().map(|n| Stage::new(n)).collect()
    }

    #[test]
    fn test_workflow_type_round_trips_through_names() {
        for name in WorkflowType::ACCEPTED {
            let kind: WorkflowType = name.parse().unwrap();
            assert_eq!(kind.as_str(), name);
        }
    }

    #[test]
    fn test_workflow_type_rejects_unknown_value() {
        let error = "bogus".parse::<WorkflowType>().unwrap_err();
        match error {
            Error::UnknownWorkflowType { value, accepted } => {
                assert_eq!(value, "bogus");
                assert_eq!(accepted, WorkflowType::ACCEPTED.to_vec());
            }
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_workflow_type_is_case_sensitive() {
        assert!("Simple".parse::<WorkflowType>().is_err());
    }

    #[test]
    fn test_validate_accepts_unique_stages() {
        let workflow = Workflow::new("ok", WorkflowType::Linear, stages(&["A", "B"]));
        assert!(workflow.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_stages() {
        let workflow = Workflow::new("empty", WorkflowType::Linear, Vec::new());
        let error = workflow.validate().unwrap_err();
        assert!(error.to_string().contains("No stages specified"));
    }

    #[test]
    fn test_validate_rejects_duplicate_stage_names() {
        let workflow = Workflow::new("dup", WorkflowType::Linear, stages(&["A", "B", "A"]));
        let error = workflow.validate().unwrap_err();
        assert!(error.to_string().contains("'A' is defined more than once"));
    }

    #[test]
    fn test_validate_rejects_blank_stage_name() {
        let workflow = Workflow::new("blank", WorkflowType::Linear, stages(&["A", "  "]));
        let error = workflow.validate().unwrap_err();
        assert!(error.to_string().contains("index 1"));
    }

    #[test]
    fn test_stage_index_resolves_first_stage() {
        let workflow = Workflow::new("idx", WorkflowType::Iterative, stages(&["A", "B"]));
        assert_eq!(workflow.stage_index("A"), Some(0));
        assert_eq!(workflow.stage_index("B"), Some(1));
        assert_eq!(workflow.stage_index("C"), None);
    }

    #[test]
    fn test_defaults_for_role_and_condition() {
        assert_eq!(Stage::new("A").role_or_unknown(), "Unknown");
        assert_eq!(Stage::with_role("A", "Editor").role_or_unknown(), "Editor");

        let feedback = FeedbackLoop {
            from: "B".to_string(),
            to: "A".to_string(),
            condition: None,
        };
        assert_eq!(feedback.condition_or_default(), "Iterate");
    }
}

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the flow diagram generator
#[derive(Debug)]
pub enum Error {
    /// Error related to reading or writing a file
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error when the workflow document cannot be deserialized
    InputParsing {
        source: Box<dyn StdError + Send + Sync>,
        origin: String,
    },
    /// Error when the workflow document breaks a structural invariant
    InvalidWorkflow { detail: String },
    /// Error when the workflow type is not one of the supported shapes
    UnknownWorkflowType {
        value: String,
        accepted: Vec<&'static str>,
    },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::InputParsing { origin, .. } => {
                write!(f, "Failed to parse workflow from {origin}")
            }
            Error::InvalidWorkflow { detail } => {
                write!(f, "Invalid workflow: {detail}")
            }
            Error::UnknownWorkflowType { value, accepted } => {
                let quoted: Vec<String> = accepted.iter().map(|a| format!("'{a}'")).collect();
                write!(
                    f,
                    "Unknown workflow type '{}'. Use {}.",
                    value,
                    quoted.join(", ")
                )
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::InputParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

/// Custom Result type for the flow diagram generator
///
/// # Examples
/// ```
/// use flow_diagram::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     Ok("graph TD".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an input parsing error
pub fn input_parsing_error<E: StdError + Send + Sync + 'static>(err: E, origin: &str) -> Error {
    Error::InputParsing {
        source: Box::new(err),
        origin: origin.to_string(),
    }
}

/// Helper function to create an invalid workflow error
pub fn invalid_workflow_error(detail: &str) -> Error {
    Error::InvalidWorkflow {
        detail: detail.to_string(),
    }
}

/// Helper function to create an unknown workflow type error
pub fn unknown_workflow_type_error(value: &str, accepted: &[&'static str]) -> Error {
    Error::UnknownWorkflowType {
        value: value.to_string(),
        accepted: accepted.to_vec(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}

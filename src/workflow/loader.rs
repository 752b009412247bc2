//! Workflow loading functionality
//!
//! This module reads workflow documents from files or standard input.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::constants::STDIN_MARKER;
use crate::errors::{Result, file_operation_error, input_parsing_error};

use super::model::Workflow;

/// Where the workflow document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Interprets a command-line argument as an input source
    ///
    /// `-` selects standard input; anything else is a path, with a leading
    /// `~` expanded to the home directory.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_MARKER {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(shellexpand::tilde(arg).as_ref()))
        }
    }

    /// Describes the source for error messages
    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "standard input".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// The serialization format expected from this source
    pub fn format(&self) -> InputFormat {
        match self {
            InputSource::Stdin => InputFormat::Json,
            InputSource::File(path) => InputFormat::from_path(path),
        }
    }
}

/// Serialization format of a workflow document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON document (default)
    Json,
    /// YAML document
    Yaml,
}

impl InputFormat {
    /// Picks the format from the file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }
}

/// Reads the raw document text from the source
///
/// # Errors
/// Returns `Error::FileOperation` if the file or stream cannot be read
pub fn read_source(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| file_operation_error(e, PathBuf::from(STDIN_MARKER), "read"))?;
            Ok(buffer)
        }
        InputSource::File(path) => {
            fs::read_to_string(path).map_err(|e| file_operation_error(e, path.clone(), "read"))
        }
    }
}

/// Deserializes a workflow document
///
/// Structural checks happen when the diagram is generated, so a document that
/// parses is returned as is.
///
/// # Arguments
/// * `content` - The document text
/// * `format` - The serialization format of `content`
/// * `origin` - Description of where the text came from, used in errors
///
/// # Returns
/// * `Result<Workflow>` - The workflow or an error
///
/// # Errors
/// Returns `Error::InputParsing` if the text is not a valid workflow document
pub fn parse_workflow(content: &str, format: InputFormat, origin: &str) -> Result<Workflow> {
    let workflow: Workflow = match format {
        InputFormat::Json => {
            serde_json::from_str(content).map_err(|e| input_parsing_error(e, origin))?
        }
        InputFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| input_parsing_error(e, origin))?
        }
    };

    debug!(
        "Parsed workflow '{}' ({}) with {} stages, {} decisions, {} feedback loops",
        workflow.name,
        workflow.workflow_type,
        workflow.stages.len(),
        workflow.decisions.len(),
        workflow.feedback_loops.len()
    );

    Ok(workflow)
}

/// Loads a workflow from the given source
///
/// # Arguments
/// * `source` - Where to read the document from
///
/// # Returns
/// * `Result<Workflow>` - The workflow or an error
///
/// # Errors
/// Returns an error if the source cannot be read or parsed
pub fn load_workflow(source: &InputSource) -> Result<Workflow> {
    let origin = source.describe();
    info!("Reading workflow from {origin}");

    let content = read_source(source)?;
    parse_workflow(&content, source.format(), &origin)
}

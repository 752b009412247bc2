//! Diagram output
//!
//! Writes the generated text to a file or to stdout, followed by a fenced
//! Mermaid block for copying into Markdown.

use std::fs::{create_dir_all, write};
use std::io::Write;
use std::path::{Path, PathBuf};

use colored::Colorize;
use log::info;

use crate::errors::{Result, file_operation_error};
use crate::logging::format_message;

/// Wraps diagram text in a Markdown code fence
pub fn fenced_block(diagram: &str) -> String {
    format!("```mermaid\n{diagram}\n```")
}

/// Expands a leading `~` in a user supplied path
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref())
}

/// Writes the diagram to a file, creating parent directories as needed
///
/// # Arguments
/// * `path` - Destination file
/// * `diagram` - The diagram text
///
/// # Returns
/// * `Result<PathBuf>` - The path that was written
///
/// # Errors
/// Returns `Error::FileOperation` if a directory or the file cannot be created
pub fn write_diagram(path: &Path, diagram: &str) -> Result<PathBuf> {
    let path = expand_path(path);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)
            .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create directory for"))?;
    }

    write(&path, format!("{diagram}\n"))
        .map_err(|e| file_operation_error(e, path.clone(), "write"))?;

    Ok(path)
}

/// Publishes the diagram
///
/// With an output path the diagram goes to that file; without one it is
/// printed to `out`. In both cases the fenced block follows on `out`.
///
/// # Errors
/// Returns an error if the file or `out` cannot be written
pub fn publish_diagram<W: Write>(diagram: &str, output: Option<&Path>, out: &mut W) -> Result<()> {
    match output {
        Some(path) => {
            let written = write_diagram(path, diagram)?;
            let message = format!("Diagram generated: {}", written.display());
            let colored_message = format!(
                "Diagram generated: {}",
                written.display().to_string().green().bold()
            );
            info!("{}", format_message(&message, &colored_message));
        }
        None => writeln!(out, "{diagram}")?,
    }

    writeln!(out)?;
    writeln!(out, "{}", fenced_block(diagram))?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const DIAGRAM: &str = "graph TD\n    Start([Workflow Start]) --> S1[A]";

    #[test]
    fn test_fenced_block() {
        assert_eq!(
            fenced_block("graph TD"),
            "```mermaid\ngraph TD\n```"
        );
    }

    #[test]
    fn test_write_diagram_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/flow.mmd");

        let written = write_diagram(&path, DIAGRAM).unwrap();

        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), format!("{DIAGRAM}\n"));
    }

    #[test]
    fn test_publish_to_stdout_prints_diagram_and_fence() {
        let mut out = Vec::new();
        publish_diagram(DIAGRAM, None, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(
            printed,
            format!("{DIAGRAM}\n\n```mermaid\n{DIAGRAM}\n```\n")
        );
    }

    #[test]
    fn test_publish_to_file_prints_only_fence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flow.mmd");
        let mut out = Vec::new();

        publish_diagram(DIAGRAM, Some(&path), &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, format!("\n```mermaid\n{DIAGRAM}\n```\n"));
        assert!(fs::read_to_string(&path).unwrap().starts_with("graph TD"));
    }
}

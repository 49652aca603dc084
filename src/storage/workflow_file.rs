//! Workflow export file reading

use crate::etl::Extractor;
use crate::n8n::WorkflowDocument;

use eyre::{Context, Result};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

/// Read a single n8n workflow export from a JSON file
pub struct WorkflowFileReader {
    path: PathBuf,
}

impl WorkflowFileReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the workflow export
    ///
    /// # Errors
    /// Fails if the file cannot be read, is not valid JSON, or its top-level
    /// value is not an object.
    pub fn read(&self) -> Result<WorkflowDocument> {
        log::debug!("Reading workflow file: {}", self.path.display().bright_black());

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read workflow file: {}", self.path.display()))?;

        let workflow = WorkflowDocument::from_json(&content)
            .with_context(|| format!("Failed to parse workflow JSON: {}", self.path.display()))?;

        log::debug!("Parsed workflow with {} top-level key(s)", workflow.len());
        Ok(workflow)
    }
}

impl Extractor for WorkflowFileReader {
    type Item = WorkflowDocument;

    fn extract(&self) -> Result<Vec<Self::Item>> {
        Ok(vec![self.read()?])
    }
}

//! Custom resource manifest output
//!
//! Every resource is written as its own YAML document, each preceded by a
//! `---` separator line:
//!
//! ```yaml
//! ---
//! apiVersion: n8n.slys.dev/v1alpha1
//! kind: N8nWorkflow
//! ...
//! ```

use crate::etl::Loader;
use crate::n8n::N8nWorkflow;

use eyre::{Context, Result};
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// YAML document separator written before each resource
pub const DOCUMENT_SEPARATOR: &str = "---\n";

/// Render resources as a multi-document YAML manifest
///
/// # Example
/// ```
/// use n8n_workflow_converter::n8n::WorkflowDocument;
/// use n8n_workflow_converter::storage::render_manifest;
/// use n8n_workflow_converter::transform::WorkflowConverter;
///
/// let resource = WorkflowConverter::default().convert(WorkflowDocument::new());
/// let yaml = render_manifest(&[resource]).unwrap();
/// assert!(yaml.starts_with("---\napiVersion: n8n.slys.dev/v1alpha1\n"));
/// ```
pub fn render_manifest(resources: &[N8nWorkflow]) -> Result<String> {
    let mut manifest = String::new();
    for resource in resources {
        let yaml = resource.to_yaml().with_context(|| {
            format!(
                "Failed to serialize custom resource: {}",
                resource.metadata.name
            )
        })?;
        manifest.push_str(DOCUMENT_SEPARATOR);
        manifest.push_str(&yaml);
    }
    Ok(manifest)
}

/// Where rendered manifests go
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestTarget {
    Stdout,
    File(PathBuf),
}

/// Write custom resources as YAML to stdout or a file
pub struct ManifestWriter {
    target: ManifestTarget,
}

impl ManifestWriter {
    pub fn new(target: ManifestTarget) -> Self {
        Self { target }
    }

    pub fn stdout() -> Self {
        Self::new(ManifestTarget::Stdout)
    }

    pub fn file(path: impl AsRef<Path>) -> Self {
        Self::new(ManifestTarget::File(path.as_ref().to_path_buf()))
    }

    pub fn target(&self) -> &ManifestTarget {
        &self.target
    }

    /// Render and write resources
    ///
    /// The whole manifest is rendered before anything is written, so a
    /// serialization failure leaves no partial output behind.
    pub fn write(&self, resources: &[N8nWorkflow]) -> Result<()> {
        let manifest = render_manifest(resources)?;

        match &self.target {
            ManifestTarget::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(manifest.as_bytes())
                    .and_then(|_| stdout.flush())
                    .context("Failed to write manifest to stdout")?;
            }
            ManifestTarget::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
                std::fs::write(path, manifest)
                    .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
                log::info!("Wrote manifest to {}", path.display().bright_black());
            }
        }

        Ok(())
    }
}

impl Loader for ManifestWriter {
    type Item = N8nWorkflow;

    fn load(&self, items: Vec<Self::Item>) -> Result<usize> {
        self.write(&items)?;
        Ok(items.len())
    }
}

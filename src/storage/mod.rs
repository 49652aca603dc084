//! File and stream I/O
//!
//! - Reading n8n workflow exports (JSON)
//! - Writing custom resource manifests (YAML)

mod manifest_writer;
mod workflow_file;

pub use manifest_writer::{DOCUMENT_SEPARATOR, ManifestTarget, ManifestWriter, render_manifest};
pub use workflow_file::WorkflowFileReader;

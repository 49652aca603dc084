//! n8n Workflow Converter
//!
//! Turns n8n workflow exports into `N8nWorkflow` Kubernetes custom resources

pub mod cli;
pub mod etl;
pub mod n8n;
pub mod storage;
pub mod transform;

// Re-exports for convenience
pub use etl::{Extractor, Loader, Pipeline, Transformer};
pub use n8n::{N8nWorkflow, WorkflowDocument};
pub use storage::{ManifestTarget, ManifestWriter, WorkflowFileReader};
pub use transform::{ConvertOptions, WorkflowConverter, slugify};

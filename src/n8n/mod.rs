//! n8n data model
//!
//! - [`WorkflowDocument`]: a workflow as exported from the n8n editor
//! - [`N8nWorkflow`]: the `n8n.slys.dev/v1alpha1` custom resource it becomes

mod resource;
mod verbatim;
mod workflow;

pub use resource::{
    API_VERSION, KIND, N8nRef, N8nWorkflow, N8nWorkflowSpec, ObjectMeta, SecretKeyRef, SyncPolicy,
    WorkflowSpec,
};
pub use workflow::WorkflowDocument;

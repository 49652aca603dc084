//! `N8nWorkflow` custom resource
//!
//! Field declaration order is the order keys are written to YAML, so the
//! structs below mirror the manifest layout:
//!
//! ```yaml
//! apiVersion: n8n.slys.dev/v1alpha1
//! kind: N8nWorkflow
//! metadata:
//!   name: my-workflow
//!   namespace: n8n
//! spec:
//!   active: true
//!   workflow:
//!     name: My Workflow
//!     nodes: []
//!     connections: {}
//! ```

use super::verbatim;
use serde::Serialize;
use serde_json::Value;

/// API group and version of the custom resource
pub const API_VERSION: &str = "n8n.slys.dev/v1alpha1";

/// Kind of the custom resource
pub const KIND: &str = "N8nWorkflow";

/// How the operator keeps the workflow in sync with the n8n instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
pub enum SyncPolicy {
    /// Continuously sync, overwriting changes made in the n8n UI
    #[value(name = "Always")]
    Always,
    /// Create the workflow once and never update it
    #[value(name = "CreateOnly")]
    CreateOnly,
    /// Pause all sync operations
    #[value(name = "Manual")]
    Manual,
}

/// Reference to a key in a Secret holding the n8n API key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecretKeyRef {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Reference to the n8n instance the workflow is synced to
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct N8nRef {
    /// Full base URL of the n8n API; takes precedence over name/namespace/port
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Name of the n8n Service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<SecretKeyRef>,
}

impl N8nRef {
    /// True when no field is set, i.e. the reference carries no information
    pub fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.name.is_none()
            && self.namespace.is_none()
            && self.port.is_none()
            && self.secret_ref.is_none()
    }
}

/// Object metadata written to the manifest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectMeta {
    pub name: String,
    pub namespace: String,
}

/// The n8n workflow definition embedded in the resource
///
/// All fields other than `name` are opaque JSON copied from the export and
/// written with their numbers exactly as read.
///
/// `None` means the key is left out of the manifest; `Some(Value::Null)` is
/// written as an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSpec {
    pub name: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "verbatim::serialize_option"
    )]
    pub nodes: Option<Value>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "verbatim::serialize_option"
    )]
    pub connections: Option<Value>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "verbatim::serialize_option"
    )]
    pub settings: Option<Value>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "verbatim::serialize_option"
    )]
    pub static_data: Option<Value>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "verbatim::serialize_option"
    )]
    pub pin_data: Option<Value>,
}

/// Desired state of the workflow
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct N8nWorkflowSpec {
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_policy: Option<SyncPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n8n_ref: Option<N8nRef>,
    pub workflow: WorkflowSpec,
}

/// An `N8nWorkflow` custom resource
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct N8nWorkflow {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: N8nWorkflowSpec,
}

impl N8nWorkflow {
    /// Create a resource with the fixed apiVersion and kind
    pub fn new(metadata: ObjectMeta, spec: N8nWorkflowSpec) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata,
            spec,
        }
    }

    /// Serialize the resource to a YAML document (without a `---` separator)
    pub fn to_yaml(&self) -> serde_yaml::Result<String> {
        serde_yaml::to_string(self)
    }
}

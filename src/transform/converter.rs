//! Workflow to custom resource conversion
//!
//! Field rules differ on purpose and must stay that way:
//!
//! | field                     | copied when                           |
//! |---------------------------|---------------------------------------|
//! | `nodes`, `connections`    | key present (any value, even `null`)  |
//! | `settings`                | present and non-empty after filtering |
//! | `staticData`, `pinData`   | present and truthy                    |

use super::{SettingsFilter, slug};
use crate::etl::Transformer;
use crate::n8n::{
    N8nRef, N8nWorkflow, N8nWorkflowSpec, ObjectMeta, SyncPolicy, WorkflowDocument, WorkflowSpec,
};
use eyre::Result;
use owo_colors::OwoColorize;
use serde_json::Value;

/// Namespace used when none is configured
pub const DEFAULT_NAMESPACE: &str = "n8n";

/// Workflow name used when the export has no `name`
pub const UNNAMED_WORKFLOW: &str = "unnamed-workflow";

/// Settings that shape the generated resource beyond the workflow itself
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    pub namespace: String,
    pub active: bool,
    pub sync_policy: Option<SyncPolicy>,
    pub n8n_ref: Option<N8nRef>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            active: true,
            sync_policy: None,
            n8n_ref: None,
        }
    }
}

/// Transformer that turns an n8n workflow export into an `N8nWorkflow` resource
///
/// Conversion never fails: unexpected value types are copied as they are.
///
/// # Example
/// ```
/// use n8n_workflow_converter::n8n::WorkflowDocument;
/// use n8n_workflow_converter::transform::WorkflowConverter;
/// use serde_json::json;
///
/// let workflow = WorkflowDocument::try_from(json!({"name": "Test"})).unwrap();
/// let resource = WorkflowConverter::new("ops", false).convert(workflow);
///
/// assert_eq!(resource.metadata.name, "test");
/// assert_eq!(resource.metadata.namespace, "ops");
/// assert!(!resource.spec.active);
/// assert_eq!(resource.spec.workflow.name, "Test");
/// ```
pub struct WorkflowConverter {
    options: ConvertOptions,
    settings: SettingsFilter,
}

impl WorkflowConverter {
    /// Create a converter for the given namespace and active flag
    pub fn new(namespace: impl Into<String>, active: bool) -> Self {
        Self::with_options(ConvertOptions {
            namespace: namespace.into(),
            active,
            ..Default::default()
        })
    }

    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            options,
            settings: SettingsFilter::default_n8n_fields(),
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a workflow export into a custom resource
    pub fn convert(&self, mut workflow: WorkflowDocument) -> N8nWorkflow {
        let name = workflow_name(workflow.take("name"));
        let resource_name = resource_name(&name);

        let mut spec = WorkflowSpec {
            name,
            ..Default::default()
        };

        spec.nodes = workflow.take("nodes");
        spec.connections = workflow.take("connections");
        spec.settings = workflow
            .take("settings")
            .and_then(|settings| self.settings.filter(settings));
        spec.static_data = workflow.take("staticData").filter(is_truthy);
        spec.pin_data = workflow.take("pinData").filter(is_truthy);

        log::debug!(
            "Workflow {}: nodes={} connections={} settings={} staticData={} pinData={}",
            resource_name.bright_black(),
            spec.nodes.is_some(),
            spec.connections.is_some(),
            spec.settings.is_some(),
            spec.static_data.is_some(),
            spec.pin_data.is_some(),
        );

        N8nWorkflow::new(
            ObjectMeta {
                name: resource_name,
                namespace: self.options.namespace.clone(),
            },
            N8nWorkflowSpec {
                active: self.options.active,
                sync_policy: self.options.sync_policy,
                n8n_ref: self.options.n8n_ref.clone().filter(|r| !r.is_empty()),
                workflow: spec,
            },
        )
    }
}

impl Default for WorkflowConverter {
    fn default() -> Self {
        Self::with_options(ConvertOptions::default())
    }
}

impl Transformer for WorkflowConverter {
    type Input = WorkflowDocument;
    type Output = N8nWorkflow;

    fn transform(&self, input: Self::Input) -> Result<Self::Output> {
        Ok(self.convert(input))
    }
}

/// Resolve the display name of a workflow
///
/// A missing or `null` name falls back to [`UNNAMED_WORKFLOW`]. Other
/// non-string values are used in their JSON text form.
fn workflow_name(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => UNNAMED_WORKFLOW.to_string(),
        Some(Value::String(name)) => name,
        Some(other) => {
            log::warn!("Workflow name is not a string, using {}", other);
            other.to_string()
        }
    }
}

fn resource_name(name: &str) -> String {
    let normalized = slug::normalize(name);
    if normalized.is_empty() {
        log::warn!(
            "Workflow name {:?} has no usable characters, metadata.name will be empty",
            name
        );
    } else if normalized.len() > slug::MAX_NAME_LEN {
        log::warn!(
            "Resource name {} truncated to {} characters",
            normalized.bright_black(),
            slug::MAX_NAME_LEN
        );
    }
    slug::truncate(normalized)
}

/// Truthiness as n8n exports use it: null, false, zero and empty values are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

//! Workflow export documents
//!
//! n8n exports a workflow as a single JSON object. Only a handful of its keys
//! are meaningful to the converter; everything else (ids, tags, version ids,
//! editor metadata) is ignored.
//!
//! Example export:
//! ```json
//! {
//!   "name": "My Workflow",
//!   "nodes": [{"name": "Start", "type": "n8n-nodes-base.manualTrigger"}],
//!   "connections": {},
//!   "settings": {"executionOrder": "v1", "availableInMCP": false},
//!   "staticData": null,
//!   "pinData": {}
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An n8n workflow export
///
/// Wraps the top-level JSON object. Deserializing anything other than an
/// object (an array, a string, ...) fails. Values inside the object are kept
/// opaque and in their original key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowDocument(Map<String, Value>);

impl WorkflowDocument {
    /// Create an empty workflow document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a workflow document from a JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Take a top-level value out of the document
    ///
    /// A key present with a `null` value yields `Some(Value::Null)`.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Number of top-level keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for WorkflowDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for WorkflowDocument {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

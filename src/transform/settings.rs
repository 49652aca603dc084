//! Workflow settings filter
//!
//! Drops settings that only make sense inside the n8n instance the workflow
//! was exported from.

use serde_json::Value;

/// Filter that removes instance specific keys from a workflow's settings
pub struct SettingsFilter {
    fields: Vec<String>,
}

impl SettingsFilter {
    /// Create a filter that drops the given keys
    pub fn new(fields: Vec<&str>) -> Self {
        Self {
            fields: fields.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Filter with the keys n8n adds on export
    ///
    /// Drops: availableInMCP
    pub fn default_n8n_fields() -> Self {
        Self::new(vec!["availableInMCP"])
    }

    /// Filter a settings value
    ///
    /// Returns `None` when nothing is left after filtering. Values that are
    /// not objects are returned unchanged.
    pub fn filter(&self, settings: Value) -> Option<Value> {
        match settings {
            Value::Object(map) => {
                let kept: serde_json::Map<String, Value> = map
                    .into_iter()
                    .filter(|(key, _)| !self.fields.contains(key))
                    .collect();
                if kept.is_empty() {
                    None
                } else {
                    Some(Value::Object(kept))
                }
            }
            other => Some(other),
        }
    }
}

impl Default for SettingsFilter {
    fn default() -> Self {
        Self::default_n8n_fields()
    }
}

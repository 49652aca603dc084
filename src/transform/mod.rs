//! Transformations from n8n workflow exports to custom resources

mod converter;
mod settings;
mod slug;

pub use converter::{ConvertOptions, DEFAULT_NAMESPACE, UNNAMED_WORKFLOW, WorkflowConverter};
pub use settings::SettingsFilter;
pub use slug::{MAX_NAME_LEN, normalize, slugify};

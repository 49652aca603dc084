//! CLI helper functions

use crate::{
    etl::Pipeline,
    n8n::{N8nRef, SecretKeyRef},
    storage::{ManifestTarget, ManifestWriter, WorkflowFileReader},
    transform::{ConvertOptions, WorkflowConverter},
};
use eyre::Result;
use owo_colors::OwoColorize;
use std::path::Path;

/// Connection details for the n8n instance, as given on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct N8nRefArgs {
    pub url: Option<String>,
    pub service: Option<String>,
    pub namespace: Option<String>,
    pub port: Option<u16>,
    pub secret: Option<String>,
    pub secret_key: Option<String>,
}

/// Build the `spec.n8nRef` block from command line values
///
/// Returns `None` when no value was given. A secret key without a secret
/// name is rejected.
pub fn build_n8n_ref(args: N8nRefArgs) -> Result<Option<N8nRef>> {
    let secret_ref = match (args.secret, args.secret_key) {
        (Some(name), key) => Some(SecretKeyRef { name, key }),
        (None, Some(key)) => {
            eyre::bail!("API key secret key '{}' given without a secret name", key)
        }
        (None, None) => None,
    };

    let reference = N8nRef {
        url: args.url,
        name: args.service,
        namespace: args.namespace,
        port: args.port,
        secret_ref,
    };

    Ok(Some(reference).filter(|r| !r.is_empty()))
}

/// Convert one workflow export into an `N8nWorkflow` manifest
///
/// Pipeline: WorkflowFileReader → WorkflowConverter → ManifestWriter
pub fn convert_workflow_file(
    input: impl AsRef<Path>,
    options: ConvertOptions,
    target: ManifestTarget,
) -> Result<usize> {
    let input = input.as_ref();

    log::info!(
        "Converting {} into {} namespace {}",
        input.display().bright_black(),
        match options.active {
            true => "active",
            false => "inactive",
        }
        .cyan(),
        options.namespace.bright_black(),
    );

    let pipeline = Pipeline::new(
        WorkflowFileReader::new(input),
        WorkflowConverter::with_options(options),
        ManifestWriter::new(target),
    );

    let count = pipeline.run()?;
    log::info!("✓ Converted {} workflow(s)", count);

    Ok(count)
}

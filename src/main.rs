use clap::{Parser, builder::styling};
use eyre::Result;
use n8n_workflow_converter::{
    ManifestTarget,
    cli::{N8nRefArgs, build_n8n_ref, convert_workflow_file},
    n8n::SyncPolicy,
    transform::{ConvertOptions, DEFAULT_NAMESPACE},
};
use std::path::PathBuf;

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Convert an n8n workflow JSON export into an N8nWorkflow Kubernetes custom resource
#[derive(Parser)]
#[command(name = "n8nwf", version, styles = STYLES)]
struct Cli {
    /// Path to the n8n workflow JSON file
    workflow_file: PathBuf,

    /// Kubernetes namespace of the resource
    #[arg(short, long, default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    /// Create the workflow as inactive
    #[arg(long)]
    inactive: bool,

    /// How the operator syncs the workflow with n8n
    #[arg(long, value_enum, ignore_case = true)]
    sync_policy: Option<SyncPolicy>,

    /// Full base URL of the n8n API (takes precedence over service/namespace/port)
    #[arg(long, value_name = "URL")]
    n8n_url: Option<String>,

    /// Name of the n8n Service
    #[arg(long, value_name = "NAME")]
    n8n_service: Option<String>,

    /// Namespace of the n8n Service
    #[arg(long, value_name = "NAMESPACE")]
    n8n_namespace: Option<String>,

    /// Port of the n8n Service
    #[arg(long, value_name = "PORT")]
    n8n_port: Option<u16>,

    /// Secret holding the n8n API key
    #[arg(long, value_name = "SECRET")]
    api_key_secret: Option<String>,

    /// Key inside the API key secret
    #[arg(long, value_name = "KEY", requires = "api_key_secret")]
    api_key_secret_key: Option<String>,

    /// Write the manifest to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// More verbose logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        true => "debug",
        false => "warn",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    let (workflow_file, options, target) = cli.into_parts()?;
    convert_workflow_file(&workflow_file, options, target)?;

    Ok(())
}

impl Cli {
    /// Split parsed arguments into the input path, conversion options and output target
    fn into_parts(self) -> Result<(PathBuf, ConvertOptions, ManifestTarget)> {
        let n8n_ref = build_n8n_ref(N8nRefArgs {
            url: self.n8n_url,
            service: self.n8n_service,
            namespace: self.n8n_namespace,
            port: self.n8n_port,
            secret: self.api_key_secret,
            secret_key: self.api_key_secret_key,
        })?;

        let options = ConvertOptions {
            namespace: self.namespace,
            active: !self.inactive,
            sync_policy: self.sync_policy,
            n8n_ref,
        };

        let target = match self.output {
            Some(path) => ManifestTarget::File(path),
            None => ManifestTarget::Stdout,
        };

        Ok((self.workflow_file, options, target))
    }
}

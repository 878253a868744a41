//! Arguments for the `model` command family

use clap::Parser;

use super::common::OutputFormat;

/// Arguments for 'model'
///
/// The first positional token selects the subcommand (list, view, push, pull)
/// and is validated against the model registry rather than by clap.
#[derive(Parser, Debug, Clone)]
#[command(after_help = "EXAMPLES:\n  \
        meshctl model list\n  \
        meshctl model list --page 2\n  \
        meshctl model view kubernetes -o json\n  \
        meshctl model push --path ./model.json --registry ghcr.io --repository org/models --tag v1\n  \
        meshctl model pull kubernetes --path ./kubernetes.json")]
pub struct ModelArgs {
    /// Subcommand followed by its arguments
    #[arg(value_name = "SUBCOMMAND")]
    pub args: Vec<String>,

    /// Fetch a single page instead of all models
    #[arg(long)]
    pub page: Option<u32>,

    /// Output format for 'view'
    #[arg(short = 'o', long = "output-format", value_enum, default_value_t = OutputFormat::Yaml)]
    pub output: OutputFormat,

    /// Username for registry authentication
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// Password for registry authentication
    #[arg(short = 'p', long)]
    pub password: Option<String>,

    /// Registry to push the model to or pull it from
    #[arg(short = 'r', long)]
    pub registry: Option<String>,

    /// Repository name within the registry
    #[arg(short = 'n', long)]
    pub repository: Option<String>,

    /// Tag for the model
    #[arg(short = 't', long)]
    pub tag: Option<String>,

    /// Path to the model file (source for push, destination for pull)
    #[arg(long)]
    pub path: Option<String>,
}

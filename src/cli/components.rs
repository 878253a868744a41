//! Arguments for the `components` command family

use clap::Parser;

use super::common::OutputFormat;

/// Arguments for 'components'
///
/// The first positional token selects the subcommand (list, view, search).
#[derive(Parser, Debug, Clone)]
#[command(after_help = "EXAMPLES:\n  \
        meshctl components list\n  \
        meshctl components list --page 2\n  \
        meshctl components view Deployment\n  \
        meshctl components search ingress")]
pub struct ComponentsArgs {
    /// Subcommand followed by its arguments
    #[arg(value_name = "SUBCOMMAND")]
    pub args: Vec<String>,

    /// Fetch a single page instead of all components
    #[arg(long)]
    pub page: Option<u32>,

    /// Output format for 'view'
    #[arg(short = 'o', long = "output-format", value_enum, default_value_t = OutputFormat::Yaml)]
    pub output: OutputFormat,
}

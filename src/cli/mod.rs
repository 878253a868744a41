//! CLI argument parsing

mod common;
mod components;
mod context;
mod model;

use clap::{Parser, Subcommand};

use crate::config::{context as context_config, defaults};

pub use common::OutputFormat;
pub use components::ComponentsArgs;
pub use context::{ConfigAction, DeleteContextArgs, SetContextArgs, UseContextArgs};
pub use model::ModelArgs;

/// Browse the model and component inventory of a mesh management server
#[derive(Parser, Debug)]
#[command(name = "meshctl")]
#[command(version)]
#[command(
    about = "Browse the model and component inventory of a mesh management server",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Context to use (overrides MESHCTL_CONTEXT and current-context)
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// API token (overrides the token stored in the context)
    #[arg(long, global = true, env = context_config::TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode - no spinner, suitable for scripts
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit the header row from tables
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// View list of models and detail of models
    #[command(visible_alias = "models")]
    Model(ModelArgs),

    /// View list of components and detail of components
    #[command(visible_alias = "component")]
    Components(ComponentsArgs),

    /// Manage connection contexts
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Command {
    /// Name of the command as registered with clap (used to render usage)
    pub fn name(&self) -> &'static str {
        match self {
            Command::Model(_) => "model",
            Command::Components(_) => "components",
            Command::Config { .. } => "config",
        }
    }
}

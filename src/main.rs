//! meshctl - Main entry point

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::{debug, info};

use meshctl::{
    run_components_command, run_context_command, run_model_command, Cli, Command, ContextStore,
    MeshError,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting meshctl v{}", env!("CARGO_PKG_VERSION"));
    debug!("Command: {}", cli.command.name());

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(parent) = e.usage_parent() {
                print_usage(parent);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), MeshError> {
    let store = ContextStore::new();
    match &cli.command {
        Command::Model(args) => run_model_command(&store, cli, args).await,
        Command::Components(args) => run_components_command(&store, cli, args).await,
        Command::Config { action } => run_context_command(&store, action),
    }
}

/// Print the usage of a parent command on stderr
fn print_usage(parent: &str) {
    let mut root = Cli::command();
    root.build();
    if let Some(cmd) = root.find_subcommand_mut(parent) {
        eprintln!("\n{}", cmd.render_usage());
        eprintln!("\nFor more information, try 'meshctl {} --help'.", parent);
    }
}

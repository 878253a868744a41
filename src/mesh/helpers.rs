//! Shared command pipeline for the model and components families

use log::debug;

use crate::cli::Cli;
use crate::context::{resolve_context, ActiveContext, ContextStore};
use crate::error::{MeshError, Result};
use crate::mesh::gate::check_preconditions;
use crate::mesh::registry::CommandRegistry;
use crate::mesh::MeshClient;

/// Everything a subcommand body needs once the pipeline let it run
pub struct Invocation<'a, A> {
    pub context: ActiveContext,
    pub client: MeshClient,
    pub action: A,
    /// Arguments after the subcommand token
    pub args: &'a [String],
}

/// Resolve the context, pass the precondition gate, then validate the subcommand.
///
/// Each stage fails fast; a later stage never runs after an earlier failure.
pub async fn prepare<'a, A: Copy>(
    store: &ContextStore,
    cli: &Cli,
    registry: &CommandRegistry<A>,
    args: &'a [String],
) -> Result<Invocation<'a, A>> {
    let context = resolve_context(store, cli.context.as_deref(), cli.token.as_deref())
        .inspect_err(|e| debug!("Context resolution failed: {}", e))?;
    let client = MeshClient::from_context(&context);

    check_preconditions(&client, &context).await?;

    let (action, args) = registry.dispatch(args)?;
    debug!(
        "Dispatching '{}' subcommand with {} argument(s)",
        registry.parent(),
        args.len()
    );

    Ok(Invocation {
        context,
        client,
        action,
        args,
    })
}

/// Reject positional arguments for subcommands that take none
pub fn expect_no_args(args: &[String], subcommand: &str) -> Result<()> {
    if args.is_empty() {
        return Ok(());
    }
    Err(MeshError::InvalidArgument(format!(
        "'{}' takes no arguments, got: {}",
        subcommand,
        args.join(" ")
    )))
}

/// Require exactly one positional argument
pub fn expect_one_arg<'a>(args: &'a [String], subcommand: &str, what: &str) -> Result<&'a str> {
    match args {
        [value] => Ok(value.as_str()),
        [] => Err(MeshError::InvalidArgument(format!(
            "'{}' requires a {} argument",
            subcommand, what
        ))),
        _ => Err(MeshError::InvalidArgument(format!(
            "'{}' takes a single {} argument, got: {}",
            subcommand,
            what,
            args.join(" ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_expect_no_args() {
        assert!(expect_no_args(&[], "list").is_ok());
        let err = expect_no_args(&args(&["extra"]), "list").unwrap_err();
        assert!(matches!(err, MeshError::InvalidArgument(_)));
        assert!(err.to_string().contains("'list' takes no arguments"));
    }

    #[test]
    fn test_expect_one_arg() {
        assert_eq!(
            expect_one_arg(&args(&["istio"]), "view", "model name").unwrap(),
            "istio"
        );
        assert!(expect_one_arg(&[], "view", "model name")
            .unwrap_err()
            .to_string()
            .contains("requires a model name"));
        assert!(expect_one_arg(&args(&["a", "b"]), "view", "model name").is_err());
    }
}

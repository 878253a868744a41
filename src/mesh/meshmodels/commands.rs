//! Model command handlers

use std::fs;
use std::path::Path;

use log::debug;

use crate::cli::{Cli, ModelArgs, OutputFormat};
use crate::context::ContextStore;
use crate::error::{MeshError, Result};
use crate::mesh::helpers::{expect_no_args, expect_one_arg, prepare};
use crate::mesh::page::PageRequest;
use crate::mesh::registry::CommandRegistry;
use crate::mesh::traits::InventoryItem;
use crate::mesh::MeshClient;
use crate::output::{print_rendered, print_structured, render_items, to_structured, Rendered};
use crate::ui::{create_spinner, finish_spinner};

use super::api::RegistryTarget;
use super::models::MeshModel;

/// Table header for model listings
pub const MODEL_HEADER: [&str; 3] = ["Category", "Model", "Version"];

/// Notice printed when no model survives filtering
pub const NO_MODELS: &str = "No model(s) found";

/// Subcommands of 'model'
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelAction {
    List,
    View,
    Push,
    Pull,
}

/// Dispatch table for 'model'
pub fn model_registry() -> CommandRegistry<ModelAction> {
    CommandRegistry::new(
        "model",
        &[
            ("list", ModelAction::List),
            ("view", ModelAction::View),
            ("push", ModelAction::Push),
            ("pull", ModelAction::Pull),
        ],
    )
}

/// Run the model command family
pub async fn run_model_command(store: &ContextStore, cli: &Cli, args: &ModelArgs) -> Result<()> {
    let inv = prepare(store, cli, &model_registry(), &args.args).await?;
    debug!(
        "Running model {:?} against context '{}'",
        inv.action, inv.context.name
    );

    match inv.action {
        ModelAction::List => {
            expect_no_args(inv.args, "list")?;
            let page = PageRequest::from_flag(args.page);
            let rendered = list_models(&inv.client, page, cli.batch).await?;
            print_rendered(&rendered, cli.no_header)
        }
        ModelAction::View => {
            let name = expect_one_arg(inv.args, "view", "model name")?;
            match view_model(&inv.client, name, cli.batch).await? {
                Some(model) => print_structured(&model, args.output),
                None => {
                    println!("{}", NO_MODELS);
                    Ok(())
                }
            }
        }
        ModelAction::Push => {
            expect_no_args(inv.args, "push")?;
            let path = args.path.as_deref().ok_or_else(|| {
                MeshError::InvalidArgument("'push' requires --path <FILE>".to_string())
            })?;
            let target = RegistryTarget::from(args);
            push_model(&inv.client, Path::new(path), &target).await?;
            println!("✓ Pushed model from '{}'", path);
            Ok(())
        }
        ModelAction::Pull => {
            let name = expect_one_arg(inv.args, "pull", "model name")?;
            let target = RegistryTarget::from(args);
            let Some(model) = pull_model(&inv.client, name, &target, cli.batch).await? else {
                println!("{}", NO_MODELS);
                return Ok(());
            };
            let json = to_structured(&model, OutputFormat::Json)?;
            match &args.path {
                Some(path) => {
                    fs::write(path, json.as_bytes()).map_err(|e| {
                        MeshError::Io(format!("Failed to write model to '{}': {}", path, e))
                    })?;
                    println!("✓ Pulled model '{}' to '{}'", name, path);
                }
                None => println!("{}", json),
            }
            Ok(())
        }
    }
}

/// Fetch models and project them into the listing table
pub async fn list_models(client: &MeshClient, page: PageRequest, batch: bool) -> Result<Rendered> {
    let spinner = create_spinner("Fetching models...", batch);
    let result = client.get_models(page).await;
    finish_spinner(spinner);

    let models = result?;
    debug!("Fetched {} models", models.len());
    Ok(render_items(&models, &MODEL_HEADER, NO_MODELS))
}

/// Pick the model to show from the server's candidates for `name`
fn select_model(models: Vec<MeshModel>, name: &str) -> Option<MeshModel> {
    let mut visible: Vec<MeshModel> = models
        .into_iter()
        .filter(|m| !m.display_name().is_empty())
        .collect();
    match visible.iter().position(|m| m.matches(name)) {
        Some(index) => Some(visible.swap_remove(index)),
        None => visible.into_iter().next(),
    }
}

/// Fetch a single model definition by name
pub async fn view_model(client: &MeshClient, name: &str, batch: bool) -> Result<Option<MeshModel>> {
    let spinner = create_spinner(&format!("Fetching model '{}'...", name), batch);
    let result = client.get_models_by_name(name).await;
    finish_spinner(spinner);

    Ok(select_model(result?, name))
}

/// Fetch a model definition for local storage
pub async fn pull_model(
    client: &MeshClient,
    name: &str,
    target: &RegistryTarget,
    batch: bool,
) -> Result<Option<MeshModel>> {
    let spinner = create_spinner(&format!("Pulling model '{}'...", name), batch);
    let result = client.pull_model(name, target).await;
    finish_spinner(spinner);

    Ok(select_model(result?, name))
}

/// Read a model file (JSON or YAML) and return it as JSON bytes
pub fn load_model_definition(path: &Path) -> Result<Vec<u8>> {
    let content = fs::read_to_string(path)
        .map_err(|e| MeshError::Io(format!("Failed to read '{}': {}", path.display(), e)))?;

    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(json_err) => serde_yml::from_str(&content).map_err(|yaml_err| {
            MeshError::InvalidArgument(format!(
                "'{}' is neither valid JSON ({}) nor YAML ({})",
                path.display(),
                json_err,
                yaml_err
            ))
        })?,
    };

    if !value.is_object() {
        return Err(MeshError::InvalidArgument(format!(
            "'{}' does not contain a model definition object",
            path.display()
        )));
    }

    serde_json::to_vec(&value).map_err(MeshError::from)
}

/// Upload a local model file
pub async fn push_model(client: &MeshClient, path: &Path, target: &RegistryTarget) -> Result<()> {
    let definition = load_model_definition(path)?;
    let reply = client.push_model(definition, target).await?;
    debug!("Push reply: {}", String::from_utf8_lossy(&reply));
    Ok(())
}

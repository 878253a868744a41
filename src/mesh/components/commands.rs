//! Component command handlers

use log::debug;

use crate::cli::{Cli, ComponentsArgs};
use crate::context::ContextStore;
use crate::error::Result;
use crate::mesh::helpers::{expect_no_args, expect_one_arg, prepare};
use crate::mesh::page::PageRequest;
use crate::mesh::registry::CommandRegistry;
use crate::mesh::traits::InventoryItem;
use crate::mesh::MeshClient;
use crate::output::{print_rendered, print_structured, render_items, Rendered};
use crate::ui::{create_spinner, finish_spinner};

use super::models::Component;

/// Table header for component listings
pub const COMPONENT_HEADER: [&str; 4] = ["Category", "Model", "Component", "Version"];

/// Notice printed when no component survives filtering
pub const NO_COMPONENTS: &str = "No component(s) found";

/// Subcommands of 'components'
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentAction {
    List,
    View,
    Search,
}

/// Dispatch table for 'components'
pub fn component_registry() -> CommandRegistry<ComponentAction> {
    CommandRegistry::new(
        "components",
        &[
            ("list", ComponentAction::List),
            ("view", ComponentAction::View),
            ("search", ComponentAction::Search),
        ],
    )
}

/// Run the components command family
pub async fn run_components_command(
    store: &ContextStore,
    cli: &Cli,
    args: &ComponentsArgs,
) -> Result<()> {
    let inv = prepare(store, cli, &component_registry(), &args.args).await?;
    debug!(
        "Running components {:?} against context '{}'",
        inv.action, inv.context.name
    );

    match inv.action {
        ComponentAction::List => {
            expect_no_args(inv.args, "list")?;
            let page = PageRequest::from_flag(args.page);
            let rendered = list_components(&inv.client, page, cli.batch).await?;
            print_rendered(&rendered, cli.no_header)
        }
        ComponentAction::View => {
            let name = expect_one_arg(inv.args, "view", "component name")?;
            match view_component(&inv.client, name, cli.batch).await? {
                Some(component) => print_structured(&component, args.output),
                None => {
                    println!("{}", NO_COMPONENTS);
                    Ok(())
                }
            }
        }
        ComponentAction::Search => {
            let query = expect_one_arg(inv.args, "search", "query")?;
            let rendered = search_components(&inv.client, query, cli.batch).await?;
            print_rendered(&rendered, cli.no_header)
        }
    }
}

/// Fetch components and project them into the listing table
pub async fn list_components(
    client: &MeshClient,
    page: PageRequest,
    batch: bool,
) -> Result<Rendered> {
    let spinner = create_spinner("Fetching components...", batch);
    let result = client.get_components(page).await;
    finish_spinner(spinner);

    let components = result?;
    debug!("Fetched {} components", components.len());
    Ok(render_items(&components, &COMPONENT_HEADER, NO_COMPONENTS))
}

/// Search components and render the hits like a listing
pub async fn search_components(client: &MeshClient, query: &str, batch: bool) -> Result<Rendered> {
    let spinner = create_spinner(&format!("Searching components for '{}'...", query), batch);
    let result = client.search_components(query).await;
    finish_spinner(spinner);

    Ok(render_items(&result?, &COMPONENT_HEADER, NO_COMPONENTS))
}

/// Exact kind or display-name match among the search hits
async fn view_component(client: &MeshClient, name: &str, batch: bool) -> Result<Option<Component>> {
    let spinner = create_spinner(&format!("Fetching component '{}'...", name), batch);
    let result = client.search_components(name).await;
    finish_spinner(spinner);

    Ok(result?
        .into_iter()
        .find(|c| !c.display_name().is_empty() && c.matches(name)))
}

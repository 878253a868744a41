//! Components: listing, detail view and search

mod api;
mod commands;
mod models;

pub use commands::{
    component_registry, list_components, run_components_command, search_components,
    ComponentAction, COMPONENT_HEADER, NO_COMPONENTS,
};
pub use models::{Component, ComponentModel, ComponentsResponse};

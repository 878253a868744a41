//! Mesh server API module
//!
//! Every `model`/`components` invocation runs the same pipeline: resolve the
//! context, pass the precondition gate, validate the subcommand, fetch the
//! listing and render it.

mod client;
pub mod components;
mod gate;
mod helpers;
pub mod meshmodels;
mod page;
mod registry;
pub mod traits;

pub use client::MeshClient;
pub use components::{run_components_command, Component, ComponentsResponse};
pub use gate::{check_preconditions, fetch_server_version, ServerVersion};
pub use helpers::{expect_no_args, expect_one_arg, prepare, Invocation};
pub use meshmodels::{run_model_command, MeshModel, MeshModelsResponse, RegistryTarget};
pub use page::PageRequest;
pub use registry::{CommandRegistry, Registration};
pub use traits::{InventoryItem, ListingResponse};

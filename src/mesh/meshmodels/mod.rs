//! Mesh models: listing, detail view, push and pull

mod api;
mod commands;
mod models;

pub use api::RegistryTarget;
pub use commands::{
    list_models, load_model_definition, model_registry, run_model_command, ModelAction,
    MODEL_HEADER, NO_MODELS,
};
pub use models::{Category, MeshModel, MeshModelsResponse};

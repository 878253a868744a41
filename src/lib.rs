//! meshctl - Browse the model and component inventory of a mesh server
//!
//! A kubectl-style CLI that lists, views, searches, pushes and pulls the
//! mesh models and components registered on a management server.
//!
//! # Example
//!
//! ```bash
//! # Point meshctl at a server
//! meshctl config set-context local --endpoint http://localhost:9081
//!
//! # List all models
//! meshctl model list
//!
//! # Fetch a single page
//! meshctl model list --page 2
//!
//! # Show one model as JSON
//! meshctl model view kubernetes -o json
//!
//! # Search components
//! meshctl components search ingress
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod mesh;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, ComponentsArgs, ConfigAction, ModelArgs, OutputFormat};
pub use context::{resolve_context, run_context_command, ActiveContext, ContextStore};
pub use error::{MeshError, Result};
pub use mesh::{run_components_command, run_model_command, MeshClient, PageRequest};
pub use output::Rendered;

//! Context management module
//!
//! Named contexts bundle a server endpoint, an optional API token and the
//! server version constraint. The active context is resolved from the
//! `--context` flag, the `MESHCTL_CONTEXT` env var or `current-context`.

mod commands;
mod models;
mod resolve;
mod store;
mod version;

pub use commands::run_context_command;
pub use models::{ActiveContext, Context, ContextConfig};
pub use resolve::{normalize_endpoint, pick_context_name, resolve_context};
pub use store::ContextStore;
pub use version::{Comparator, Version, VersionConstraint};

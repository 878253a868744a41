//! Context configuration data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::version::VersionConstraint;

/// Top-level context configuration
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ContextConfig {
    /// Name of the currently active context
    #[serde(rename = "current-context", skip_serializing_if = "Option::is_none")]
    pub current_context: Option<String>,
    /// Map of context name to context configuration
    #[serde(default)]
    pub contexts: BTreeMap<String, Context>,
}

impl ContextConfig {
    /// Comma-separated list of configured context names (for error messages)
    pub fn available_names(&self) -> String {
        self.contexts.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// A named context as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Server base URL, e.g. `http://localhost:9081`
    pub endpoint: String,
    /// API token (stored in config file)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Compatible server version constraint (`latest` when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A context that passed validation and is ready to drive an invocation
#[derive(Debug, Clone)]
pub struct ActiveContext {
    /// Context name
    pub name: String,
    /// Normalized base URL without a trailing slash
    pub base_url: String,
    /// Effective API token (CLI flag wins over the stored one)
    pub token: Option<String>,
    /// Raw constraint text, kept for error messages
    pub version: String,
    /// Parsed version constraint
    pub constraint: VersionConstraint,
}

//! Context resolution from multiple sources

use log::debug;
use reqwest::Url;

use crate::config::context as context_config;
use crate::error::{MeshError, Result};

use super::models::{ActiveContext, ContextConfig};
use super::store::ContextStore;
use super::version::VersionConstraint;

/// Pick the active context name from, in order:
/// 1. --context CLI flag
/// 2. MESHCTL_CONTEXT env var
/// 3. current-context from config file
pub fn pick_context_name(
    cli_context: Option<&str>,
    env_context: Option<String>,
    config: &ContextConfig,
) -> Option<String> {
    if let Some(name) = cli_context {
        debug!("Using context from CLI flag: {}", name);
        return Some(name.to_string());
    }

    if let Some(name) = env_context.filter(|n| !n.is_empty()) {
        debug!(
            "Using context from {} env var: {}",
            context_config::ENV_VAR,
            name
        );
        return Some(name);
    }

    if let Some(name) = &config.current_context {
        debug!("Using context from config file: {}", name);
        return Some(name.clone());
    }

    None
}

/// Validate that an endpoint is an http(s) origin and strip the trailing slash
pub fn normalize_endpoint(endpoint: &str) -> Result<String> {
    let url = Url::parse(endpoint.trim())
        .map_err(|e| MeshError::Config(format!("Invalid endpoint '{}': {}", endpoint, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(MeshError::Config(format!(
            "Invalid endpoint '{}': scheme must be http or https",
            endpoint
        )));
    }
    if !url.has_host() {
        return Err(MeshError::Config(format!(
            "Invalid endpoint '{}': missing host",
            endpoint
        )));
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(MeshError::Config(format!(
            "Invalid endpoint '{}': expected an origin like http://localhost:9081",
            endpoint
        )));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Load the config file and resolve the validated active context.
///
/// Never touches the network; any failure here is a `MeshError::Config`.
pub fn resolve_context(
    store: &ContextStore,
    cli_context: Option<&str>,
    cli_token: Option<&str>,
) -> Result<ActiveContext> {
    let config = store.load_required()?;
    let env_context = std::env::var(context_config::ENV_VAR).ok();

    let name = pick_context_name(cli_context, env_context, &config).ok_or_else(|| {
        MeshError::Config(
            "No current context set. Use 'meshctl config use-context <name>' to set one."
                .to_string(),
        )
    })?;

    let ctx = config.contexts.get(&name).ok_or_else(|| {
        MeshError::Config(format!(
            "Context '{}' not found in config. Available: {}",
            name,
            config.available_names()
        ))
    })?;

    let base_url = normalize_endpoint(&ctx.endpoint)?;

    let version = ctx
        .version
        .clone()
        .unwrap_or_else(|| context_config::ANY_VERSION.to_string());
    let constraint: VersionConstraint = version.parse().map_err(|e| {
        MeshError::Config(format!(
            "Context '{}' has an invalid version constraint '{}': {}",
            name, version, e
        ))
    })?;

    debug!("Resolved context '{}': endpoint={}", name, base_url);

    Ok(ActiveContext {
        name,
        base_url,
        token: cli_token.map(str::to_string).or_else(|| ctx.token.clone()),
        version,
        constraint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::models::Context;
    use tempfile::TempDir;

    fn store_with(
        dir: &TempDir,
        current: Option<&str>,
        entries: &[(&str, &str, Option<&str>)],
    ) -> ContextStore {
        let store = ContextStore::with_path(dir.path().join("config.json"));
        let mut config = ContextConfig {
            current_context: current.map(str::to_string),
            ..Default::default()
        };
        for (name, endpoint, version) in entries {
            config.contexts.insert(
                name.to_string(),
                Context {
                    endpoint: endpoint.to_string(),
                    token: Some("stored-token".to_string()),
                    version: version.map(str::to_string),
                },
            );
        }
        store.save(&config).unwrap();
        store
    }

    #[test]
    fn test_cli_flag_wins() {
        let config = ContextConfig {
            current_context: Some("file".to_string()),
            ..Default::default()
        };
        let name = pick_context_name(Some("flag"), Some("env".to_string()), &config);
        assert_eq!(name, Some("flag".to_string()));
    }

    #[test]
    fn test_env_beats_config_file() {
        let config = ContextConfig {
            current_context: Some("file".to_string()),
            ..Default::default()
        };
        let name = pick_context_name(None, Some("env".to_string()), &config);
        assert_eq!(name, Some("env".to_string()));
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let config = ContextConfig {
            current_context: Some("file".to_string()),
            ..Default::default()
        };
        let name = pick_context_name(None, Some(String::new()), &config);
        assert_eq!(name, Some("file".to_string()));
    }

    #[test]
    fn test_none_when_no_sources() {
        assert!(pick_context_name(None, None, &ContextConfig::default()).is_none());
    }

    #[test]
    fn test_normalize_endpoint() {
        assert_eq!(
            normalize_endpoint("http://localhost:9081/").unwrap(),
            "http://localhost:9081"
        );
        assert_eq!(
            normalize_endpoint("https://meshery.example.com").unwrap(),
            "https://meshery.example.com"
        );
        assert!(normalize_endpoint("ftp://localhost").is_err());
        assert!(normalize_endpoint("localhost:9081").is_err());
        assert!(normalize_endpoint("http://localhost:9081/api").is_err());
        assert!(normalize_endpoint("not a url").is_err());
    }

    #[test]
    fn test_resolve_missing_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let store = ContextStore::with_path(dir.path().join("config.json"));
        let err = resolve_context(&store, Some("local"), None).unwrap_err();
        assert!(matches!(err, MeshError::Config(_)));
        assert!(err.to_string().contains("No configuration found"));
    }

    #[test]
    fn test_resolve_unknown_context() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, None, &[("local", "http://localhost:9081", None)]);
        let err = resolve_context(&store, Some("nope"), None).unwrap_err();
        assert!(matches!(err, MeshError::Config(_)));
        assert!(err.to_string().contains("Available: local"));
    }

    #[test]
    fn test_resolve_valid_context() {
        let dir = TempDir::new().unwrap();
        let store = store_with(
            &dir,
            Some("local"),
            &[("local", "http://localhost:9081/", Some(">=v0.6.0"))],
        );
        let ctx = resolve_context(&store, Some("local"), None).unwrap();
        assert_eq!(ctx.name, "local");
        assert_eq!(ctx.base_url, "http://localhost:9081");
        assert_eq!(ctx.token, Some("stored-token".to_string()));
        assert_eq!(ctx.version, ">=v0.6.0");
        assert!(ctx.constraint.is_satisfied_by("v0.6.1"));
    }

    #[test]
    fn test_resolve_defaults_to_any_version() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, None, &[("local", "http://localhost:9081", None)]);
        let ctx = resolve_context(&store, Some("local"), None).unwrap();
        assert_eq!(ctx.constraint, VersionConstraint::Any);
    }

    #[test]
    fn test_resolve_cli_token_overrides_stored() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, None, &[("local", "http://localhost:9081", None)]);
        let ctx = resolve_context(&store, Some("local"), Some("flag-token")).unwrap();
        assert_eq!(ctx.token, Some("flag-token".to_string()));
    }

    #[test]
    fn test_resolve_invalid_constraint_is_config_error() {
        let dir = TempDir::new().unwrap();
        let store = store_with(
            &dir,
            None,
            &[("local", "http://localhost:9081", Some("stable"))],
        );
        let err = resolve_context(&store, Some("local"), None).unwrap_err();
        assert!(matches!(err, MeshError::Config(_)));
        assert!(err.to_string().contains("invalid version constraint"));
    }

    #[test]
    fn test_resolve_invalid_endpoint_is_config_error() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, None, &[("local", "localhost", None)]);
        let err = resolve_context(&store, Some("local"), None).unwrap_err();
        assert!(matches!(err, MeshError::Config(_)));
    }
}

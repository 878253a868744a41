//! Context command handlers

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use log::debug;

use crate::cli::{ConfigAction, SetContextArgs};
use crate::config::context as context_config;
use crate::error::{MeshError, Result};

use super::models::{Context, ContextConfig};
use super::resolve::normalize_endpoint;
use super::store::ContextStore;
use super::version::VersionConstraint;

/// Dispatch context subcommands
pub fn run_context_command(store: &ContextStore, action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::GetContexts => run_context_list(store),
        ConfigAction::SetContext(args) => run_context_set(store, args),
        ConfigAction::UseContext(args) => run_context_use(store, &args.name),
        ConfigAction::DeleteContext(args) => run_context_delete(store, &args.name),
        ConfigAction::CurrentContext => run_context_show(store),
        ConfigAction::View => run_config_view(store),
    }
}

fn not_found(name: &str, config: &ContextConfig) -> MeshError {
    MeshError::Config(format!(
        "Context '{}' not found. Available contexts: {}",
        name,
        config.available_names()
    ))
}

/// Build the `get-contexts` table
fn contexts_table(config: &ContextConfig) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("CURRENT"),
            Cell::new("NAME"),
            Cell::new("ENDPOINT"),
            Cell::new("VERSION"),
            Cell::new("TOKEN"),
        ]);

    for (name, ctx) in &config.contexts {
        let is_current = config.current_context.as_deref() == Some(name.as_str());
        table.add_row(vec![
            Cell::new(if is_current { "*" } else { "" }),
            Cell::new(name),
            Cell::new(&ctx.endpoint),
            Cell::new(ctx.version.as_deref().unwrap_or(context_config::ANY_VERSION)),
            Cell::new(mask_token(ctx.token.as_deref())),
        ]);
    }
    table
}

/// List all contexts
fn run_context_list(store: &ContextStore) -> Result<()> {
    let config = store.load_or_default()?;

    if config.contexts.is_empty() {
        println!("No contexts configured.");
        println!("\nUse 'meshctl config set-context <name> --endpoint <URL>' to create one.");
        return Ok(());
    }

    println!("{}", contexts_table(&config));
    Ok(())
}

/// Show the current context details
fn run_context_show(store: &ContextStore) -> Result<()> {
    let config = store.load_or_default()?;

    let current_name = config.current_context.as_ref().ok_or_else(|| {
        MeshError::Config(
            "No current context set. Use 'meshctl config use-context <name>' to set one."
                .to_string(),
        )
    })?;

    let ctx = config.contexts.get(current_name).ok_or_else(|| {
        MeshError::Config(format!(
            "Current context '{}' not found in config. Available: {}",
            current_name,
            config.available_names()
        ))
    })?;

    println!("Current context: {}", current_name);
    println!("  Endpoint: {}", ctx.endpoint);
    println!("  Token:    {}", mask_token(ctx.token.as_deref()));
    println!(
        "  Version:  {}",
        ctx.version.as_deref().unwrap_or(context_config::ANY_VERSION)
    );

    Ok(())
}

fn validate_version(version: &str) -> Result<()> {
    version
        .parse::<VersionConstraint>()
        .map(|_| ())
        .map_err(|e| {
            MeshError::Config(format!("Invalid version constraint '{}': {}", version, e))
        })
}

/// Create or update a named context
fn run_context_set(store: &ContextStore, args: &SetContextArgs) -> Result<()> {
    let endpoint = args.endpoint.as_deref().map(normalize_endpoint).transpose()?;
    if let Some(version) = &args.version {
        validate_version(version)?;
    }

    let mut config = store.load_or_default()?;

    if let Some(existing) = config.contexts.get_mut(&args.name) {
        if let Some(endpoint) = endpoint {
            existing.endpoint = endpoint;
        }
        if args.token.is_some() {
            existing.token = args.token.clone();
        }
        if args.version.is_some() {
            existing.version = args.version.clone();
        }
        store.save(&config)?;
        println!("✓ Updated context '{}'", args.name);
        return Ok(());
    }

    let endpoint = endpoint.ok_or_else(|| {
        MeshError::Config(format!(
            "--endpoint is required when creating a new context. Usage:\n  \
             meshctl config set-context {} --endpoint <URL> [--token <TOKEN>] [--version <CONSTRAINT>]",
            args.name
        ))
    })?;

    config.contexts.insert(
        args.name.clone(),
        Context {
            endpoint,
            token: args.token.clone(),
            version: args.version.clone(),
        },
    );

    // First context becomes current
    if config.contexts.len() == 1 {
        debug!("Setting '{}' as current context", args.name);
        config.current_context = Some(args.name.clone());
    }

    store.save(&config)?;
    println!("✓ Created context '{}'", args.name);
    Ok(())
}

/// Switch the active context
fn run_context_use(store: &ContextStore, name: &str) -> Result<()> {
    let mut config = store.load_or_default()?;

    if !config.contexts.contains_key(name) {
        return Err(not_found(name, &config));
    }

    config.current_context = Some(name.to_string());
    store.save(&config)?;
    println!("✓ Switched to context '{}'", name);
    Ok(())
}

/// Delete a named context
fn run_context_delete(store: &ContextStore, name: &str) -> Result<()> {
    let mut config = store.load_or_default()?;

    if config.contexts.remove(name).is_none() {
        return Err(not_found(name, &config));
    }

    if config.current_context.as_deref() == Some(name) {
        config.current_context = None;
    }

    store.save(&config)?;
    println!("✓ Deleted context '{}'", name);
    Ok(())
}

/// Print the config file with tokens masked
fn run_config_view(store: &ContextStore) -> Result<()> {
    let mut config = store.load_or_default()?;
    for ctx in config.contexts.values_mut() {
        if ctx.token.is_some() {
            ctx.token = Some(mask_token(ctx.token.as_deref()));
        }
    }
    let json = serde_json::to_string_pretty(&config)
        .map_err(|e| MeshError::Config(format!("Failed to serialize config: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// Show the last 4 chars of a token, or "<not set>"
fn mask_token(token: Option<&str>) -> String {
    match token {
        Some(t) if t.chars().count() >= 4 => {
            let tail: String = t.chars().skip(t.chars().count() - 4).collect();
            format!("****{}", tail)
        }
        Some(_) => "****".to_string(),
        None => "<not set>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> ContextStore {
        ContextStore::with_path(dir.path().join("config.json"))
    }

    fn set_args(name: &str, endpoint: Option<&str>) -> SetContextArgs {
        SetContextArgs {
            name: name.to_string(),
            endpoint: endpoint.map(str::to_string),
            token: None,
            version: None,
        }
    }

    fn ctx(endpoint: &str) -> Context {
        Context {
            endpoint: endpoint.to_string(),
            token: None,
            version: None,
        }
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token(Some("abcdefghijklmnop")), "****mnop");
        assert_eq!(mask_token(Some("abcd")), "****abcd");
        assert_eq!(mask_token(Some("ab")), "****");
        assert_eq!(mask_token(None), "<not set>");
    }

    #[test]
    fn test_set_new_requires_endpoint() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let err = run_context_set(&store, &set_args("local", None)).unwrap_err();
        assert!(err.to_string().contains("--endpoint is required"));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_new_creates_and_becomes_current() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let args = SetContextArgs {
            token: Some("my-token".to_string()),
            version: Some(">=v0.6.0".to_string()),
            ..set_args("local", Some("http://localhost:9081/"))
        };
        run_context_set(&store, &args).unwrap();

        let config = store.load_or_default().unwrap();
        assert_eq!(config.contexts["local"].endpoint, "http://localhost:9081");
        assert_eq!(config.contexts["local"].token, Some("my-token".to_string()));
        assert_eq!(
            config.contexts["local"].version,
            Some(">=v0.6.0".to_string())
        );
        assert_eq!(config.current_context, Some("local".to_string()));
    }

    #[test]
    fn test_set_rejects_bad_endpoint_and_version() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let err = run_context_set(&store, &set_args("x", Some("ftp://host"))).unwrap_err();
        assert!(matches!(err, MeshError::Config(_)));

        let args = SetContextArgs {
            version: Some(">=banana".to_string()),
            ..set_args("x", Some("http://localhost:9081"))
        };
        let err = run_context_set(&store, &args).unwrap_err();
        assert!(err.to_string().contains("Invalid version constraint"));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_update_merges() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let args = SetContextArgs {
            token: Some("old-token".to_string()),
            ..set_args("prod", Some("https://old.example.com"))
        };
        run_context_set(&store, &args).unwrap();

        let args = SetContextArgs {
            version: Some("v0.7.0".to_string()),
            ..set_args("prod", None)
        };
        run_context_set(&store, &args).unwrap();

        let config = store.load_or_default().unwrap();
        assert_eq!(config.contexts["prod"].endpoint, "https://old.example.com");
        assert_eq!(config.contexts["prod"].token, Some("old-token".to_string()));
        assert_eq!(config.contexts["prod"].version, Some("v0.7.0".to_string()));
    }

    #[test]
    fn test_set_second_keeps_current() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        run_context_set(&store, &set_args("first", Some("http://a:1"))).unwrap();
        run_context_set(&store, &set_args("second", Some("http://b:2"))).unwrap();
        assert_eq!(
            store.load_or_default().unwrap().current_context,
            Some("first".to_string())
        );
    }

    #[test]
    fn test_use_sets_current() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let mut config = ContextConfig::default();
        config.contexts.insert("prod".to_string(), ctx("http://prod"));
        config.contexts.insert("dev".to_string(), ctx("http://dev"));
        store.save(&config).unwrap();

        run_context_use(&store, "dev").unwrap();
        assert_eq!(
            store.load_or_default().unwrap().current_context,
            Some("dev".to_string())
        );

        let err = run_context_use(&store, "nonexistent").unwrap_err();
        assert!(err.to_string().contains("Available contexts: dev, prod"));
    }

    #[test]
    fn test_delete_clears_current_only_when_matching() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let mut config = ContextConfig {
            current_context: Some("prod".to_string()),
            ..Default::default()
        };
        config.contexts.insert("prod".to_string(), ctx("http://prod"));
        config.contexts.insert("dev".to_string(), ctx("http://dev"));
        store.save(&config).unwrap();

        run_context_delete(&store, "dev").unwrap();
        assert_eq!(
            store.load_or_default().unwrap().current_context,
            Some("prod".to_string())
        );

        run_context_delete(&store, "prod").unwrap();
        let config = store.load_or_default().unwrap();
        assert!(config.contexts.is_empty());
        assert!(config.current_context.is_none());

        assert!(run_context_delete(&store, "prod").is_err());
    }

    #[test]
    fn test_contexts_table_marks_current() {
        let mut config = ContextConfig {
            current_context: Some("local".to_string()),
            ..Default::default()
        };
        config.contexts.insert(
            "local".to_string(),
            Context {
                token: Some("supersecret".to_string()),
                ..ctx("http://localhost:9081")
            },
        );
        let rendered = contexts_table(&config).to_string();
        assert!(rendered.contains("ENDPOINT"));
        assert!(rendered.contains("http://localhost:9081"));
        assert!(rendered.contains("latest"));
        assert!(rendered.contains("****cret"));
        assert!(!rendered.contains("supersecret"));
    }

    #[test]
    fn test_show_without_current_errors() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        assert!(run_context_show(&store).is_err());
    }
}

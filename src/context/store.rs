//! On-disk context file (`~/.meshctl/config.json`)

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::context as context_config;
use crate::error::{MeshError, Result};

use super::models::ContextConfig;

/// Reads and writes the context file at a fixed path
pub struct ContextStore {
    path: PathBuf,
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextStore {
    /// Store at `~/.meshctl/config.json`
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(
            home.join(context_config::DIR_NAME)
                .join(context_config::FILE_NAME),
        )
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn config_error(&self, action: &str, cause: impl std::fmt::Display) -> MeshError {
        MeshError::Config(format!(
            "Failed to {} {}: {}",
            action,
            self.path.display(),
            cause
        ))
    }

    /// `None` when no file exists yet
    fn read(&self) -> Result<Option<ContextConfig>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No context file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.config_error("read context file", e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| self.config_error("parse context file", e))
    }

    /// Load the context file for a server command; a missing file is a config error
    pub fn load_required(&self) -> Result<ContextConfig> {
        self.read()?.ok_or_else(|| {
            MeshError::Config(format!(
                "No configuration found at {}. Use 'meshctl config set-context <name> --endpoint <URL>' to create one.",
                self.path.display()
            ))
        })
    }

    /// Load the context file for editing; a missing file yields an empty config
    pub fn load_or_default(&self) -> Result<ContextConfig> {
        Ok(self.read()?.unwrap_or_default())
    }

    /// Write the whole file atomically (temp file, then rename), owner-only on Unix
    pub fn save(&self, config: &ContextConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.config_error("create directory for", e))?;
        }

        let json = serde_json::to_string_pretty(config)
            .map_err(|e| self.config_error("serialize contexts for", e))?;

        let staged = self.path.with_extension("json.tmp");
        fs::write(&staged, json).map_err(|e| self.config_error("stage", e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&staged, fs::Permissions::from_mode(0o600))
                .map_err(|e| self.config_error("restrict permissions of", e))?;
        }

        fs::rename(&staged, &self.path).map_err(|e| self.config_error("replace", e))?;
        debug!(
            "Saved {} context(s) to {}",
            config.contexts.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::models::Context;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ContextStore {
        ContextStore::with_path(dir.path().join(".meshctl").join("config.json"))
    }

    fn local_context() -> ContextConfig {
        let mut config = ContextConfig {
            current_context: Some("local".to_string()),
            ..Default::default()
        };
        config.contexts.insert(
            "local".to_string(),
            Context {
                endpoint: "http://localhost:9081".to_string(),
                token: Some("my-token".to_string()),
                version: Some(">=v0.6.0".to_string()),
            },
        );
        config
    }

    #[test]
    fn test_load_required_missing_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let err = store.load_required().unwrap_err();
        assert!(matches!(err, MeshError::Config(_)));
        assert!(err.to_string().contains("No configuration found at"));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_load_or_default_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let config = store_in(&dir).load_or_default().unwrap();
        assert!(config.current_context.is_none());
        assert!(config.contexts.is_empty());
    }

    #[test]
    fn test_corrupt_file_fails_both_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"contexts": {"local": {"token": "x"}}}"#).unwrap();
        let store = ContextStore::with_path(path);

        for err in [
            store.load_required().unwrap_err(),
            store.load_or_default().unwrap_err(),
        ] {
            assert!(matches!(err, MeshError::Config(_)));
            assert!(err.to_string().contains("Failed to parse context file"));
        }
    }

    #[test]
    fn test_save_then_load_required() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&local_context()).unwrap();

        let loaded = store.load_required().unwrap();
        assert_eq!(loaded.current_context.as_deref(), Some("local"));
        assert_eq!(loaded.contexts["local"].endpoint, "http://localhost:9081");
        assert_eq!(loaded.contexts["local"].version.as_deref(), Some(">=v0.6.0"));
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_saved_file_uses_kubectl_style_keys() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&local_context()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["current-context"], "local");
        assert_eq!(raw["contexts"]["local"]["endpoint"], "http://localhost:9081");
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&local_context()).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_default_path_under_home() {
        let store = ContextStore::new();
        let path = store.path().to_string_lossy().to_string();
        assert!(path.ends_with(".meshctl/config.json"));
    }
}

/// Configuration constants for the mesh server API
pub mod api {
    /// Model collection endpoint
    pub const MODELS: &str = "api/meshmodels/models";

    /// Component collection endpoint
    pub const COMPONENTS: &str = "api/meshmodels/components";

    /// Model registration endpoint (used by `model push`)
    pub const REGISTER: &str = "api/meshmodels/register";

    /// Server build information endpoint
    pub const SYSTEM_VERSION: &str = "api/system/version";
}

/// Configuration constants for named contexts
pub mod context {
    /// Directory name under home for meshctl config
    pub const DIR_NAME: &str = ".meshctl";

    /// Config file name
    pub const FILE_NAME: &str = "config.json";

    /// Environment variable for overriding the active context
    pub const ENV_VAR: &str = "MESHCTL_CONTEXT";

    /// Environment variable for the API token
    pub const TOKEN_ENV_VAR: &str = "MESHCTL_TOKEN";

    /// Version constraint used when a context does not set one
    pub const ANY_VERSION: &str = "latest";
}

/// HTTP client settings
pub mod http {
    use std::time::Duration;

    /// TCP connect timeout for all requests
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Total timeout for API requests
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Total timeout for the liveness probe
    pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths_are_relative() {
        for path in [api::MODELS, api::COMPONENTS, api::REGISTER, api::SYSTEM_VERSION] {
            assert!(!path.starts_with('/'), "{path} should not start with '/'");
        }
    }

    #[test]
    fn test_probe_timeout_not_longer_than_request_timeout() {
        assert!(http::PROBE_TIMEOUT <= http::REQUEST_TIMEOUT);
    }

    #[test]
    fn test_context_env_vars() {
        assert_eq!(context::ENV_VAR, "MESHCTL_CONTEXT");
        assert_eq!(context::TOKEN_ENV_VAR, "MESHCTL_TOKEN");
    }
}

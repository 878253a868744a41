use std::fmt;

/// Error type for every stage of a command invocation
#[derive(Debug)]
pub enum MeshError {
    /// No usable configuration or context
    Config(String),
    /// Liveness probe against the server failed
    ServerUnreachable { url: String, reason: String },
    /// Server build does not satisfy the context's version constraint
    VersionMismatch { constraint: String, server: String },
    /// Parent command invoked without a subcommand
    MissingSubcommand {
        parent: String,
        available: Vec<String>,
    },
    /// Subcommand token not registered under the parent command
    InvalidSubcommand {
        parent: String,
        requested: String,
        available: Vec<String>,
    },
    /// Wrong positional arguments or flags for a valid subcommand
    InvalidArgument(String),
    /// Transport failure, including timeouts
    Network(reqwest::Error),
    /// Server answered with a non-2xx status
    HttpStatus { status: u16, url: String },
    /// Response body was not the expected JSON
    Decode(String),
    /// Local file I/O failure
    Io(String),
}

impl MeshError {
    /// True for dispatch-time errors after which the parent usage should be shown
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            MeshError::MissingSubcommand { .. } | MeshError::InvalidSubcommand { .. }
        )
    }

    /// Name of the parent command for usage errors
    pub fn usage_parent(&self) -> Option<&str> {
        match self {
            MeshError::MissingSubcommand { parent, .. }
            | MeshError::InvalidSubcommand { parent, .. } => Some(parent),
            _ => None,
        }
    }
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MeshError::ServerUnreachable { url, reason } => {
                write!(f, "Server at {} is not reachable: {}", url, reason)
            }
            MeshError::VersionMismatch { constraint, server } => write!(
                f,
                "Server version '{}' does not satisfy the context version constraint '{}'",
                server, constraint
            ),
            MeshError::MissingSubcommand { parent, available } => write!(
                f,
                "{} subcommand isn't specified. Available subcommands: [{}]",
                parent,
                available.join(", ")
            ),
            MeshError::InvalidSubcommand {
                parent,
                requested,
                available,
            } => write!(
                f,
                "'{}' is an invalid subcommand. Please provide required options from [{}]. \
                 Use 'meshctl {} --help' to display usage guide.",
                requested,
                available.join(", "),
                parent
            ),
            MeshError::InvalidArgument(msg) => write!(f, "{}", msg),
            MeshError::Network(e) => write!(f, "HTTP request failed: {}", e),
            MeshError::HttpStatus { status, url } => {
                write!(f, "API error (status {}) from {}", status, url)
            }
            MeshError::Decode(msg) => write!(f, "Failed to decode response: {}", msg),
            MeshError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MeshError {
    fn from(err: reqwest::Error) -> Self {
        MeshError::Network(err)
    }
}

impl From<serde_json::Error> for MeshError {
    fn from(err: serde_json::Error) -> Self {
        MeshError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for MeshError {
    fn from(err: std::io::Error) -> Self {
        MeshError::Io(err.to_string())
    }
}

/// Result type alias for meshctl operations
pub type Result<T> = std::result::Result<T, MeshError>;

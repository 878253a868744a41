//! Precondition gate run before any model/components subcommand

use log::debug;
use serde::Deserialize;

use crate::config::api;
use crate::context::{ActiveContext, VersionConstraint};
use crate::error::{MeshError, Result};
use crate::mesh::MeshClient;

/// Build information reported by the server
#[derive(Deserialize, Debug, Clone)]
pub struct ServerVersion {
    pub build: String,
    #[serde(default)]
    pub commitsha: Option<String>,
    #[serde(default)]
    pub release_channel: Option<String>,
}

/// Fetch the running server's build information
pub async fn fetch_server_version(client: &MeshClient) -> Result<ServerVersion> {
    let url = client.url(api::SYSTEM_VERSION);
    debug!("Fetching server version from: {}", url);
    client.send_json(client.get(&url)).await
}

/// Check reachability, then version compatibility.
///
/// The version request is only sent once the probe succeeded, and only when
/// the context actually constrains the version.
pub async fn check_preconditions(client: &MeshClient, ctx: &ActiveContext) -> Result<()> {
    client.probe().await?;

    if ctx.constraint == VersionConstraint::Any {
        debug!("Context '{}' accepts any server version", ctx.name);
        return Ok(());
    }

    let version = fetch_server_version(client).await?;
    if !ctx.constraint.is_satisfied_by(&version.build) {
        debug!(
            "Server build '{}' does not satisfy '{}' of context '{}'",
            version.build, ctx.version, ctx.name
        );
        return Err(MeshError::VersionMismatch {
            constraint: ctx.version.clone(),
            server: version.build,
        });
    }

    debug!(
        "Server build '{}' satisfies '{}' (channel: {})",
        version.build,
        ctx.version,
        version.release_channel.as_deref().unwrap_or("unknown")
    );
    Ok(())
}

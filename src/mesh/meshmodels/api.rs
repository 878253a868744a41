//! Mesh model API operations

use log::debug;

use crate::cli::ModelArgs;
use crate::config::api;
use crate::error::Result;
use crate::mesh::page::PageRequest;
use crate::mesh::traits::ListingResponse;
use crate::mesh::MeshClient;

use super::models::{MeshModel, MeshModelsResponse};

/// Registry targeting and credentials passed through to push/pull untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryTarget {
    pub registry: Option<String>,
    pub repository: Option<String>,
    pub tag: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl From<&ModelArgs> for RegistryTarget {
    fn from(args: &ModelArgs) -> Self {
        Self {
            registry: args.registry.clone(),
            repository: args.repository.clone(),
            tag: args.tag.clone(),
            username: args.username.clone(),
            password: args.password.clone(),
        }
    }
}

impl RegistryTarget {
    /// `registry`, `repository` and `tag` as url-encoded query pairs (present ones only)
    pub fn query(&self) -> String {
        [
            ("registry", &self.registry),
            ("repository", &self.repository),
            ("tag", &self.tag),
        ]
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect::<Vec<_>>()
        .join("&")
    }

    /// Append the passthrough query to a URL
    fn apply(&self, url: &str) -> String {
        let query = self.query();
        if query.is_empty() {
            return url.to_string();
        }
        let separator = if url.contains('?') { "&" } else { "?" };
        format!("{}{}{}", url, separator, query)
    }

    fn with_credentials(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = match &self.username {
            Some(username) => builder.header("X-Registry-Username", username),
            None => builder,
        };
        match &self.password {
            Some(password) => builder.header("X-Registry-Password", password),
            None => builder,
        }
    }
}

impl MeshClient {
    /// List models, one page or all of them
    pub async fn get_models(&self, page: PageRequest) -> Result<Vec<MeshModel>> {
        let resp: MeshModelsResponse = self.fetch_listing(api::MODELS, page).await?;
        debug!(
            "Models response: page={:?} page_size={:?} total_count={:?}",
            resp.page, resp.page_size, resp.total_count
        );
        Ok(resp.into_items())
    }

    /// Fetch every version of the model with the given name
    pub async fn get_models_by_name(&self, name: &str) -> Result<Vec<MeshModel>> {
        let path = format!("{}/{}", api::MODELS, urlencoding::encode(name));
        let resp: MeshModelsResponse = self.fetch_listing(&path, PageRequest::All).await?;
        Ok(resp.into_items())
    }

    /// Upload a model definition; returns the raw server reply
    pub async fn push_model(
        &self,
        definition: Vec<u8>,
        target: &RegistryTarget,
    ) -> Result<Vec<u8>> {
        let url = target.apply(&self.url(api::REGISTER));
        debug!("Pushing {} bytes to: {}", definition.len(), url);

        let request = target.with_credentials(
            self.post(&url)
                .header("Content-Type", "application/json")
                .body(definition),
        );
        self.send_raw(request).await
    }

    /// Fetch a model definition for pull, sending registry credentials along
    pub async fn pull_model(
        &self,
        name: &str,
        target: &RegistryTarget,
    ) -> Result<Vec<MeshModel>> {
        let url = PageRequest::All.apply(
            &target.apply(&self.url(&format!("{}/{}", api::MODELS, urlencoding::encode(name)))),
        );
        debug!("Pulling model from: {}", url);

        let resp: MeshModelsResponse = self
            .send_json(target.with_credentials(self.get(&url)))
            .await?;
        Ok(resp.into_items())
    }
}

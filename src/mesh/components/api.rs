//! Component API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::mesh::page::PageRequest;
use crate::mesh::traits::ListingResponse;
use crate::mesh::MeshClient;

use super::models::{Component, ComponentsResponse};

impl MeshClient {
    /// List components, one page or all of them
    pub async fn get_components(&self, page: PageRequest) -> Result<Vec<Component>> {
        let resp: ComponentsResponse = self.fetch_listing(api::COMPONENTS, page).await?;
        debug!(
            "Components response: page={:?} page_size={:?} total_count={:?}",
            resp.page, resp.page_size, resp.total_count
        );
        Ok(resp.into_items())
    }

    /// Full-text search over components, always across all pages
    pub async fn search_components(&self, query: &str) -> Result<Vec<Component>> {
        let path = format!("{}?search={}", api::COMPONENTS, urlencoding::encode(query));
        let resp: ComponentsResponse = self.fetch_listing(&path, PageRequest::All).await?;
        Ok(resp.into_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_components_page() {
        let server = MockServer::start().await;
        let client = MeshClient::test_client(&server.uri());

        Mock::given(method("GET"))
            .and(path("/api/meshmodels/components"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "page": 3,
                "components": [{"kind": "Pod", "displayName": "Pod"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let components = client.get_components(PageRequest::Page(3)).await.unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].kind, "Pod");
    }

    #[tokio::test]
    async fn test_search_components_encodes_query() {
        let server = MockServer::start().await;
        let client = MeshClient::test_client(&server.uri());

        Mock::given(method("GET"))
            .and(path("/api/meshmodels/components"))
            .and(query_param("search", "ingress gateway"))
            .and(query_param("pagesize", "all"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"components": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let components = client.search_components("ingress gateway").await.unwrap();
        assert!(components.is_empty());
    }

    #[tokio::test]
    async fn test_components_wrong_envelope_is_decode_error() {
        let server = MockServer::start().await;
        let client = MeshClient::test_client(&server.uri());

        Mock::given(method("GET"))
            .and(path("/api/meshmodels/components"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"models": []})),
            )
            .mount(&server)
            .await;

        let err = client.get_components(PageRequest::All).await.unwrap_err();
        assert!(matches!(err, MeshError::Decode(_)));
    }
}

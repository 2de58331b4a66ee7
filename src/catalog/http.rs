use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{CatalogApi, CatalogError};
use crate::types::{CatalogResponse, Entity};

/// Catalog transport backed by reqwest.
pub struct HttpCatalog {
    http_client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpCatalog {
    /// Builds a client for `base_url` (e.g. `https://itunes.apple.com`)
    /// with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<CatalogResponse, CatalogError> {
        let api_url = format!("{uri}/{path}", uri = self.base_url, path = path);

        let response = self
            .http_client
            .get(&api_url)
            .query(query)
            .send()
            .await
            .map_err(|e| CatalogError::from_reqwest(e, self.timeout))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        // the catalog answers with text/javascript, so decode by hand
        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::from_reqwest(e, self.timeout))?;
        serde_json::from_slice::<CatalogResponse>(&body)
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn search(
        &self,
        term: &str,
        entity: Entity,
        limit: u32,
    ) -> Result<CatalogResponse, CatalogError> {
        self.get(
            "search",
            &[
                ("term", term.to_string()),
                ("entity", entity.to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    async fn lookup(&self, id: u64, entity: Entity) -> Result<CatalogResponse, CatalogError> {
        self.get(
            "lookup",
            &[("id", id.to_string()), ("entity", entity.to_string())],
        )
        .await
    }
}

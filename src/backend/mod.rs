//! Content backend collaborator.
//!
//! A thin reqwest wrapper that looks up one content record by its
//! technical name, forwarding the caller's credential verbatim.

use std::time::Duration;

use reqwest::header;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::config::BackendConfig;
use crate::error::{AppError, Result};

/// Decoded backend response. The rendered record is always the first
/// element of `products`.
#[derive(Debug, Deserialize)]
pub struct FetchedPayload {
    #[serde(default)]
    pub products: Vec<Value>,
}

#[derive(Clone)]
pub struct ContentClient {
    client: Client,
    endpoint: String,
}

impl ContentClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(AppError::Upstream)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// GET the backend with a `$filter` query parameter keyed on
    /// `products.technicalName`. A non-success response propagates the
    /// backend's status and body verbatim.
    #[tracing::instrument(name = "backend.fetch_content", skip(self, authorization))]
    pub async fn fetch_content(
        &self,
        content_id: &str,
        authorization: &str,
    ) -> Result<FetchedPayload> {
        let filter = format!("{{\"products.technicalName\": \"{content_id}\"}}");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("$filter", filter.as_str())])
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, authorization)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status.as_u16(), "content backend returned an error");
            return Err(AppError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_decodes_products_array() {
        let payload: FetchedPayload = serde_json::from_value(json!({
            "products": [{"title": "A"}],
            "total": 1
        }))
        .unwrap();

        assert_eq!(payload.products.len(), 1);
        assert_eq!(payload.products[0]["title"], "A");
    }

    #[test]
    fn client_builds_from_config() {
        let config = BackendConfig {
            endpoint: "http://localhost:9999/content".to_string(),
            timeout: 5,
        };

        assert!(ContentClient::new(&config).is_ok());
    }
}

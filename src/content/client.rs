// SPDX-License-Identifier: MPL-2.0
//! The query client itself: endpoint derivation, parameter encoding and the
//! response envelope.

use crate::config::ContentConfig;
use crate::content::{http_client, queries};
use crate::domain::{Category, CollectionRecord, ImageRecord};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// The store wraps every query result in a JSON envelope.
#[derive(Debug, Deserialize)]
struct QueryEnvelope<T> {
    result: T,
}

/// Read-only handle on the content store's query endpoint.
///
/// Cheap to clone; every fetch operation consumes a clone inside its async
/// task so the UI state never borrows across an await point.
#[derive(Debug, Clone)]
pub struct ContentClient {
    endpoint: String,
}

impl ContentClient {
    /// Derives the query endpoint from the configuration. An explicit
    /// `endpoint` override (tests, mirrors) wins over the hosted URL.
    #[must_use]
    pub fn new(config: &ContentConfig) -> Self {
        let endpoint = config.endpoint.clone().unwrap_or_else(|| {
            format!(
                "https://{}.api.sanity.io/v{}/data/query/{}",
                config.project_id, config.api_version, config.dataset
            )
        });
        Self { endpoint }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the ordered featured set for the carousel.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a
    /// malformed response body.
    pub async fn fetch_featured(&self) -> Result<Vec<ImageRecord>> {
        self.query(queries::FEATURED_IMAGES, &[]).await
    }

    /// Fetches the ordered gallery set for one category.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ContentClient::fetch_featured`].
    pub async fn fetch_gallery(&self, category: Category) -> Result<Vec<ImageRecord>> {
        self.query(
            queries::GALLERY_IMAGES,
            &[("category", serde_json::Value::from(category.query_value()))],
        )
        .await
    }

    /// Fetches the collection currently promoted on the home page, if any.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ContentClient::fetch_featured`].
    pub async fn fetch_active_collection(&self) -> Result<Option<CollectionRecord>> {
        self.query(queries::ACTIVE_COLLECTION, &[]).await
    }

    /// Fetches one collection by slug with its full image set. `Ok(None)`
    /// means the slug resolved to nothing.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ContentClient::fetch_featured`].
    pub async fn fetch_collection(&self, slug: &str) -> Result<Option<CollectionRecord>> {
        self.query(
            queries::COLLECTION_BY_SLUG,
            &[("slug", serde_json::Value::from(slug))],
        )
        .await
    }

    /// Issues one query. Parameters are sent as `$name` query-string values,
    /// JSON-encoded the way the store expects (strings keep their quotes).
    async fn query<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, serde_json::Value)],
    ) -> Result<T> {
        let client = http_client()?;
        let mut request = client.get(&self.endpoint).query(&[("query", groq)]);
        for (name, value) in params {
            request = request.query(&[(format!("${name}"), value.to_string())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(format!("query failed with status {status}")));
        }

        let envelope: QueryEnvelope<T> = response.json().await?;
        Ok(envelope.result)
    }
}

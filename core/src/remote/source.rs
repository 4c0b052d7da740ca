//! Remote data sources
//!
//! `HttpRemoteSource` issues plain GET requests, one per collection, with no
//! query parameters and no auth headers.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::model::{decode_records, Post, User};
use crate::{Error, Result};

/// Base URL of the public API the explorer reads from
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Source of the two remote collections
#[async_trait]
pub trait RemoteSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>>;

    async fn fetch_posts(&self) -> Result<Vec<Post>>;
}

/// Fetches users and posts over HTTP
#[derive(Debug, Clone)]
pub struct HttpRemoteSource {
    client: Client,
    base_url: String,
}

impl HttpRemoteSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_collection<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, collection);
        debug!(%url, "Fetching collection");

        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Remote(format!("{} request failed: {}", collection, e)))?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::Remote(format!(
                "{} request failed: HTTP {}",
                collection, status
            )));
        }

        let values: Vec<serde_json::Value> = res
            .json()
            .await
            .map_err(|e| Error::Remote(format!("{} response is not a JSON array: {}", collection, e)))?;

        Ok(decode_records(values, collection))
    }
}

impl Default for HttpRemoteSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl RemoteSource for HttpRemoteSource {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        self.get_collection("users").await
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.get_collection("posts").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let source = HttpRemoteSource::new("http://localhost:3000/");
        assert_eq!(source.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_default_points_at_public_api() {
        assert_eq!(HttpRemoteSource::default().base_url(), DEFAULT_BASE_URL);
    }
}

//! Client for the hosted storage REST API.
//!
//! Authenticates with the service-role key, which bypasses bucket policies;
//! it must never leave the server.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

use crate::{check_path, ObjectStorage, StorageError};

/// Configuration for [`HostedStorage`].
#[derive(Debug, Clone)]
pub struct HostedStorageConfig {
    /// Base URL of the project, e.g. `https://abc.storage-host.co`.
    pub base_url: String,
    /// Service-role key sent as a bearer token and `apikey` header.
    pub service_key: String,
}

/// Object storage backed by the hosted storage REST API.
pub struct HostedStorage {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
}

#[derive(Serialize)]
struct RemoveBody<'a> {
    prefixes: &'a [String],
}

impl HostedStorage {
    pub fn new(config: HostedStorageConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            service_key: config.service_key,
        }
    }

    fn object_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/{bucket}/{path}", self.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header(AUTHORIZATION, format!("Bearer {}", self.service_key))
            .header("apikey", &self.service_key)
    }
}

#[async_trait]
impl ObjectStorage for HostedStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        check_path(path)?;
        let response = self
            .authorize(self.client.post(self.object_url(bucket, path)))
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "true")
            .body(data)
            .send()
            .await?;
        ensure_success(response).await
    }

    async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), StorageError> {
        if paths.is_empty() {
            return Ok(());
        }
        let url = format!("{}/storage/v1/object/{bucket}", self.base_url);
        let response = self
            .authorize(self.client.delete(url))
            .json(&RemoveBody { prefixes: paths })
            .send()
            .await?;
        ensure_success(response).await
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/public/{bucket}/{path}", self.base_url)
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<(), StorageError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let message = response.text().await.unwrap_or_default();
    Err(StorageError::Service {
        status: status.as_u16(),
        message,
    })
}

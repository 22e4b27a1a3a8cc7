//! Object storage sub-client.

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::remote::client::RemoteClient;
use crate::remote::error::RemoteError;

/// Maximum number of entries returned by one `list` call.
pub const LIST_LIMIT: usize = 100;

/// Entry returned by a bucket listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StorageObject {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone)]
pub struct StorageClient {
    client: RemoteClient,
}

impl StorageClient {
    pub(crate) fn new(client: RemoteClient) -> Self {
        Self { client }
    }

    /// Upload `bytes` to `bucket/path`, replacing an existing object when `upsert` is set.
    pub async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), RemoteError> {
        tracing::debug!(bucket, path, size = bytes.len(), "upload");
        let url = self
            .client
            .endpoint(&format!("storage/v1/object/{}/{}", bucket, path))?;
        let builder = self
            .client
            .request(Method::POST, url)
            .header("Content-Type", content_type)
            .header("x-upsert", if upsert { "true" } else { "false" })
            .body(bytes);
        self.client.execute(builder).await?;
        Ok(())
    }

    /// Public URL of an object in a public bucket. No request is made.
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.client.base_url(),
            bucket,
            path.trim_start_matches('/')
        )
    }

    pub async fn list(&self, bucket: &str, prefix: &str) -> Result<Vec<StorageObject>, RemoteError> {
        let url = self
            .client
            .endpoint(&format!("storage/v1/object/list/{}", bucket))?;
        let body = json!({
            "prefix": prefix,
            "limit": LIST_LIMIT,
            "offset": 0,
            "sortBy": { "column": "name", "order": "asc" },
        });
        let builder = self.client.request(Method::POST, url).json(&body);
        let text = self.client.execute(builder).await?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), RemoteError> {
        let url = self
            .client
            .endpoint(&format!("storage/v1/object/{}", bucket))?;
        let builder = self
            .client
            .request(Method::DELETE, url)
            .json(&json!({ "prefixes": paths }));
        self.client.execute(builder).await?;
        Ok(())
    }
}

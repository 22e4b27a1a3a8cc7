use std::path::Path;

use uuid::Uuid;

use super::{failed, Outcome};
use crate::config::StorageConfig;
use crate::remote::{RemoteClient, StorageClient, StorageObject};

/// Extension used when a file name has none.
const DEFAULT_EXTENSION: &str = "jpg";

#[derive(Clone)]
pub struct StorageRepository {
    storage: StorageClient,
    buckets: StorageConfig,
}

impl StorageRepository {
    pub fn new(client: &RemoteClient, buckets: StorageConfig) -> Self {
        Self {
            storage: client.storage(),
            buckets,
        }
    }

    /// Upload an orphanage photo under `{orphanage_id}/{uuid}.{ext}` and return its public URL.
    pub async fn upload_orphanage_image(
        &self,
        orphanage_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Outcome<String> {
        let path = format!("{}/{}.{}", orphanage_id, Uuid::new_v4(), extension(file_name));
        self.upload(&self.buckets.orphanage_images_bucket, &path, file_name, bytes, false)
            .await
    }

    /// Upload (or replace) a user's avatar at `{user_id}/avatar.{ext}`.
    pub async fn upload_avatar(&self, user_id: &str, file_name: &str, bytes: Vec<u8>) -> Outcome<String> {
        let path = format!("{}/avatar.{}", user_id, extension(file_name));
        self.upload(&self.buckets.avatars_bucket, &path, file_name, bytes, true)
            .await
    }

    pub async fn list(&self, bucket: &str, prefix: &str) -> Outcome<Vec<StorageObject>> {
        self.storage
            .list(bucket, prefix)
            .await
            .map_err(|e| failed("list objects", e))
    }

    /// Remove objects. An empty list succeeds without a request.
    pub async fn delete(&self, bucket: &str, paths: &[String]) -> Outcome<()> {
        if paths.is_empty() {
            return Ok(());
        }
        self.storage
            .remove(bucket, paths)
            .await
            .map_err(|e| failed("delete objects", e))
    }

    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        self.storage.public_url(bucket, path)
    }

    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
        upsert: bool,
    ) -> Outcome<String> {
        let content_type = mime_guess::from_path(file_name).first_or_octet_stream();
        self.storage
            .upload(bucket, path, bytes, content_type.essence_str(), upsert)
            .await
            .map_err(|e| failed("upload object", e))?;
        Ok(self.storage.public_url(bucket, path))
    }
}

fn extension(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased_with_default() {
        assert_eq!(extension("Photo.PNG"), "png");
        assert_eq!(extension("scan.jpeg"), "jpeg");
        assert_eq!(extension("no_extension"), "jpg");
    }
}

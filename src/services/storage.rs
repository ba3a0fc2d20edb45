use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::Client;

/// Read-only view of the package bucket. The bucket is bound at
/// construction; every listing call exhausts all backend result pages
/// before returning.
#[async_trait]
pub trait PackageStore: Send + Sync {
    /// Top-level pseudo-directories: common prefixes under the bucket
    /// root with delimiter `/`, exactly as the backend reports them
    /// (trailing delimiter included, repeats across pages possible).
    async fn list_common_prefixes(&self) -> Result<Vec<String>>;

    /// Keys of all objects whose key starts with `prefix`.
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>>;

    /// Full object body at `key`.
    async fn download(&self, key: &str) -> Result<Vec<u8>>;
}

pub struct S3PackageStore {
    client: Client,
    bucket: String,
}

impl S3PackageStore {
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl PackageStore for S3PackageStore {
    async fn list_common_prefixes(&self) -> Result<Vec<String>> {
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .delimiter("/")
            .into_paginator()
            .send();

        let mut prefixes = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page?;
            for common in page.common_prefixes() {
                if let Some(prefix) = common.prefix() {
                    prefixes.push(prefix.to_string());
                }
            }
        }

        Ok(prefixes)
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .into_paginator()
            .send();

        let mut keys = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page?;
            for object in page.contents() {
                if let Some(key) = object.key() {
                    keys.push(key.to_string());
                }
            }
        }

        Ok(keys)
    }

    async fn download(&self, key: &str) -> Result<Vec<u8>> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await?;

        // The whole object is buffered; the trigger contract returns a
        // base64 string body, so there is nothing to stream to.
        let data = output.body.collect().await?;
        Ok(data.into_bytes().to_vec())
    }
}

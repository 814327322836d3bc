use super::StorageService;
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::{Builder as S3ConfigBuilder, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use std::time::Duration;

/// S3-compatible storage service implementation (production)
pub struct S3StorageService {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: Option<String>,
}

impl S3StorageService {
    pub async fn connect(
        bucket: String,
        endpoint: String,
        region: String,
        access_key: String,
        secret_key: String,
        public_base_url: Option<String>,
    ) -> Self {
        let creds = Credentials::new(access_key, secret_key, None, None, "storefront");
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region))
            .credentials_provider(creds)
            .load()
            .await;

        let s3_config = S3ConfigBuilder::from(&sdk_config)
            .endpoint_url(endpoint)
            .force_path_style(true)
            .build();

        Self {
            client: aws_sdk_s3::Client::from_conf(s3_config),
            bucket,
            public_base_url,
        }
    }
}

#[async_trait]
impl StorageService for S3StorageService {
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .context("put_object failed")?;

        tracing::debug!("Uploaded s3://{}/{}", self.bucket, key);
        Ok(())
    }

    async fn get_url(&self, key: &str) -> Result<String> {
        if let Some(base) = &self.public_base_url {
            return Ok(format!("{}/{}", base.trim_end_matches('/'), key));
        }

        // No public bucket URL configured: fall back to a short-lived
        // presigned GET.
        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(
                PresigningConfig::expires_in(Duration::from_secs(60 * 10))
                    .context("presign config error")?,
            )
            .await
            .context("presign error")?;

        Ok(presigned.uri().to_string())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .context("delete_object failed")?;

        tracing::debug!("Deleted s3://{}/{}", self.bucket, key);
        Ok(())
    }
}

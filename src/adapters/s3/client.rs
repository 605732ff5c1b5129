//! S3 implementation of [`WatermarkStore`]
//!
//! Watermark documents live in the destination bucket itself, under a
//! fixed key prefix, so the export needs no storage beyond the bucket it
//! already writes to.

use crate::adapters::traits::WatermarkStore;
use crate::core::state::{Watermark, DEFAULT_KEY_PREFIX};
use crate::domain::ids::{BucketName, LogGroupName};
use crate::domain::{LogshipError, ObjectStoreError, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;

/// S3-backed watermark store
pub struct S3WatermarkStore {
    client: aws_sdk_s3::Client,
    bucket: BucketName,
    key_prefix: String,
}

impl S3WatermarkStore {
    /// Creates a store using the default watermark key prefix
    pub fn new(config: &SdkConfig, bucket: BucketName) -> Self {
        Self::with_key_prefix(config, bucket, DEFAULT_KEY_PREFIX)
    }

    /// Creates a store with an explicit key prefix
    pub fn with_key_prefix(
        config: &SdkConfig,
        bucket: BucketName,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            client: aws_sdk_s3::Client::new(config),
            bucket,
            key_prefix: key_prefix.into(),
        }
    }

    fn object_key(&self, group: &LogGroupName) -> String {
        Watermark::object_key(&self.key_prefix, group)
    }
}

#[async_trait]
impl WatermarkStore for S3WatermarkStore {
    async fn load(&self, group: &LogGroupName) -> Result<Option<Watermark>> {
        let key = self.object_key(group);

        let response = match self
            .client
            .get_object()
            .bucket(self.bucket.as_str())
            .key(&key)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                let not_found = err
                    .as_service_error()
                    .map(|e| e.is_no_such_key())
                    .unwrap_or(false);
                if not_found {
                    return Ok(None);
                }
                return Err(ObjectStoreError::ReadFailed {
                    key,
                    message: err.to_string(),
                }
                .into());
            }
        };

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| ObjectStoreError::ReadFailed {
                key: key.clone(),
                message: e.to_string(),
            })?
            .into_bytes();

        let watermark =
            serde_json::from_slice(&bytes).map_err(|e| ObjectStoreError::InvalidDocument {
                key,
                message: e.to_string(),
            })?;

        Ok(Some(watermark))
    }

    async fn save(&self, group: &LogGroupName, watermark: &Watermark) -> Result<()> {
        let key = self.object_key(group);
        let body =
            serde_json::to_vec(watermark).map_err(|e| LogshipError::Serialization(e.to_string()))?;

        self.client
            .put_object()
            .bucket(self.bucket.as_str())
            .key(&key)
            .body(ByteStream::from(body))
            .content_type("application/json")
            .acl(ObjectCannedAcl::BucketOwnerFullControl)
            .send()
            .await
            .map_err(|e| ObjectStoreError::WriteFailed {
                key,
                message: e.to_string(),
            })?;

        Ok(())
    }
}

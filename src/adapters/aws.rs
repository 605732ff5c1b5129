//! Shared AWS SDK configuration
//!
//! Credentials come from the ambient provider chain (environment,
//! profile, instance role); only the region is set explicitly, since it
//! is part of the invocation contract.

use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Loads SDK configuration for the given region
pub async fn load_sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::v2025_01_17())
        .region(Region::new(region.to_owned()))
        .load()
        .await
}

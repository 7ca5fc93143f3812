// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use s3_lifecycle::s3::ClientBuilder;
use s3_lifecycle::s3::lifecycle_config::{
    Expiration, LifecycleConfig, LifecycleFilter, LifecycleRule, NoncurrentVersionExpiration,
    RuleStatus, STORAGE_CLASS_ARCHIVE, Tag, Transition,
};
use s3_lifecycle::s3::response::a_response_traits::HasBucket;
use s3_lifecycle::s3::types::S3Api;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="INFO" to log info and higher

    // SERVER_ENDPOINT, ENABLE_HTTPS and SERVER_REGION select the server
    let client = ClientBuilder::from_env()?
        .app_info(Some(("lifecycle-quickstart".into(), "0.1.0".into())))
        .build()?;
    let bucket_name: String =
        std::env::var("BUCKET").unwrap_or_else(|_| "lifecycle-rust-bucket".to_string());

    match client.get_bucket_lifecycle(&bucket_name).build().send().await {
        Ok(resp) => log::info!("lifecycle settings before setting: {:?}", resp.config()),
        Err(e) if e.is_not_found() => log::info!("bucket '{bucket_name}' has no lifecycle settings"),
        Err(e) => return Err(e.into()),
    }

    let config = LifecycleConfig::new(vec![
        LifecycleRule {
            id: String::from("expire-logs"),
            filter: Some(LifecycleFilter::prefix("logs/")),
            status: RuleStatus::Enabled,
            expiration: Some(Expiration { days: 365 }),
            ..Default::default()
        },
        LifecycleRule {
            id: String::from("archive-reports"),
            filter: Some(LifecycleFilter::and(
                "reports/",
                [Tag::new("retention", "long")],
            )),
            status: RuleStatus::Enabled,
            transitions: vec![Transition {
                days: 30,
                storage_class: STORAGE_CLASS_ARCHIVE.to_string(),
            }],
            noncurrent_version_expiration: Some(NoncurrentVersionExpiration {
                noncurrent_days: 90,
            }),
            ..Default::default()
        },
    ]);
    config.validate()?;

    let resp = client
        .put_bucket_lifecycle(&bucket_name)
        .life_cycle_config(config)
        .build()
        .send()
        .await?;
    log::info!("lifecycle settings stored on bucket '{}'", resp.bucket());

    let resp = client
        .get_bucket_lifecycle(&bucket_name)
        .build()
        .send()
        .await?;
    for rule in &resp.config().rules {
        log::info!("rule '{}' ({})", rule.id, rule.status);
    }

    client
        .delete_bucket_lifecycle(&bucket_name)
        .build()
        .send()
        .await?;
    log::info!("lifecycle settings deleted from bucket '{bucket_name}'");
    Ok(())
}

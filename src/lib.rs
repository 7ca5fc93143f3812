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

//! Bucket lifecycle configuration client for Amazon S3 compatible object storage.
//!
//! The crate models lifecycle rules, encodes and decodes the
//! `LifecycleConfiguration` XML document, and exposes the
//! `GetBucketLifecycle`, `PutBucketLifecycle` and `DeleteBucketLifecycle`
//! operations on top of a pluggable [`Transport`](s3::transport::Transport).
//!
//! ```no_run
//! use s3_lifecycle::s3::Client;
//! use s3_lifecycle::s3::http::BaseUrl;
//! use s3_lifecycle::s3::lifecycle_config::{
//!     Expiration, LifecycleConfig, LifecycleFilter, LifecycleRule, RuleStatus,
//! };
//! use s3_lifecycle::s3::types::S3Api;
//!
//! #[tokio::main]
//! async fn main() {
//!     let base_url = "http://localhost:9000/".parse::<BaseUrl>().unwrap();
//!     let client = Client::new(base_url).unwrap();
//!
//!     let config = LifecycleConfig::new(vec![LifecycleRule {
//!         id: "expire-logs".into(),
//!         filter: Some(LifecycleFilter::prefix("logs/")),
//!         status: RuleStatus::Enabled,
//!         expiration: Some(Expiration { days: 30 }),
//!         ..Default::default()
//!     }]);
//!
//!     client
//!         .put_bucket_lifecycle("my-bucket")
//!         .life_cycle_config(config)
//!         .build()
//!         .send()
//!         .await
//!         .unwrap();
//! }
//! ```

#![allow(clippy::result_large_err)]
pub mod s3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

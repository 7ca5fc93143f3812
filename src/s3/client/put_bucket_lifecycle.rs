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

use crate::s3::builders::{PutBucketLifecycle, PutBucketLifecycleBldr};
use crate::s3::client::Client;

impl Client {
    /// Creates a [`PutBucketLifecycle`] request builder.
    ///
    /// The configuration replaces the bucket's current one as a whole.
    /// To execute the request, call [`PutBucketLifecycle::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`PutBucketLifecycleResponse`](crate::s3::response::PutBucketLifecycleResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_lifecycle::s3::ClientBuilder;
    /// use s3_lifecycle::s3::lifecycle_config::{
    ///     Expiration, LifecycleConfig, LifecycleFilter, LifecycleRule, RuleStatus,
    /// };
    /// use s3_lifecycle::s3::response::PutBucketLifecycleResponse;
    /// use s3_lifecycle::s3::response::a_response_traits::HasBucket;
    /// use s3_lifecycle::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = ClientBuilder::from_env().unwrap().build().unwrap();
    ///     let config = LifecycleConfig::new(vec![LifecycleRule {
    ///         id: String::from("rule1"),
    ///         filter: Some(LifecycleFilter::prefix("logs/")),
    ///         status: RuleStatus::Enabled,
    ///         expiration: Some(Expiration { days: 365 }),
    ///         ..Default::default()
    ///     }]);
    ///
    ///     let resp: PutBucketLifecycleResponse = client
    ///         .put_bucket_lifecycle("bucket-name")
    ///         .life_cycle_config(config)
    ///         .build().send().await.unwrap();
    ///     println!("set bucket lifecycle on bucket '{}'", resp.bucket());
    /// }
    /// ```
    pub fn put_bucket_lifecycle<S: Into<String>>(&self, bucket: S) -> PutBucketLifecycleBldr {
        PutBucketLifecycle::builder()
            .client(self.clone())
            .bucket(bucket)
    }
}

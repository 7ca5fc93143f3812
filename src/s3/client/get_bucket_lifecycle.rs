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

use crate::s3::builders::{GetBucketLifecycle, GetBucketLifecycleBldr};
use crate::s3::client::Client;

impl Client {
    /// Creates a [`GetBucketLifecycle`] request builder.
    ///
    /// To execute the request, call [`GetBucketLifecycle::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`GetBucketLifecycleResponse`](crate::s3::response::GetBucketLifecycleResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_lifecycle::s3::ClientBuilder;
    /// use s3_lifecycle::s3::response::GetBucketLifecycleResponse;
    /// use s3_lifecycle::s3::response::a_response_traits::HasBucket;
    /// use s3_lifecycle::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = ClientBuilder::from_env().unwrap().build().unwrap();
    ///     match client.get_bucket_lifecycle("bucket-name").build().send().await {
    ///         Ok(resp) => println!(
    ///             "bucket '{}' has {} lifecycle rule(s)",
    ///             resp.bucket(),
    ///             resp.config().rules.len()
    ///         ),
    ///         Err(e) if e.is_not_found() => println!("no lifecycle configuration"),
    ///         Err(e) => panic!("{e}"),
    ///     }
    /// }
    /// ```
    pub fn get_bucket_lifecycle<S: Into<String>>(&self, bucket: S) -> GetBucketLifecycleBldr {
        GetBucketLifecycle::builder()
            .client(self.clone())
            .bucket(bucket)
    }
}

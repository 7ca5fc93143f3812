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

use crate::s3::builders::{DeleteBucketLifecycle, DeleteBucketLifecycleBldr};
use crate::s3::client::Client;

impl Client {
    /// Creates a [`DeleteBucketLifecycle`] request builder.
    ///
    /// Deleting is idempotent: a bucket without a configuration answers the same way.
    /// To execute the request, call [`DeleteBucketLifecycle::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`DeleteBucketLifecycleResponse`](crate::s3::response::DeleteBucketLifecycleResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_lifecycle::s3::ClientBuilder;
    /// use s3_lifecycle::s3::response::DeleteBucketLifecycleResponse;
    /// use s3_lifecycle::s3::response::a_response_traits::HasBucket;
    /// use s3_lifecycle::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = ClientBuilder::from_env().unwrap().build().unwrap();
    ///     let resp: DeleteBucketLifecycleResponse = client
    ///         .delete_bucket_lifecycle("bucket-name")
    ///         .build().send().await.unwrap();
    ///     println!("lifecycle config of bucket '{}' is deleted", resp.bucket());
    /// }
    /// ```
    pub fn delete_bucket_lifecycle<S: Into<String>>(&self, bucket: S) -> DeleteBucketLifecycleBldr {
        DeleteBucketLifecycle::builder()
            .client(self.clone())
            .bucket(bucket)
    }
}

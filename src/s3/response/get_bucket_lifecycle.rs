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

use crate::impl_has_s3fields;
use crate::s3::error::Error;
use crate::s3::lifecycle_config::LifecycleConfig;
use crate::s3::response::a_response_traits::{HasBucket, HasRegion, HasRequestId, HasS3Fields};
use crate::s3::transport::HttpResponse;
use crate::s3::types::{FromS3Response, S3Request};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Response from the [`get_bucket_lifecycle`](crate::s3::client::Client::get_bucket_lifecycle) API call,
/// providing the lifecycle configuration of an S3 bucket.
///
/// A bucket without a configuration never produces this response; the call
/// fails with a `NoSuchLifecycleConfiguration` server error instead, see
/// [`Error::is_not_found`].
#[derive(Clone, Debug)]
pub struct GetBucketLifecycleResponse {
    request: S3Request,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    config: LifecycleConfig,
}

impl_has_s3fields!(GetBucketLifecycleResponse);

impl HasBucket for GetBucketLifecycleResponse {}
impl HasRegion for GetBucketLifecycleResponse {}
impl HasRequestId for GetBucketLifecycleResponse {}

impl GetBucketLifecycleResponse {
    /// Returns the lifecycle configuration of the bucket.
    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    pub fn into_config(self) -> LifecycleConfig {
        self.config
    }
}

#[async_trait]
impl FromS3Response for GetBucketLifecycleResponse {
    async fn from_s3response(
        request: S3Request,
        response: Result<HttpResponse, Error>,
    ) -> Result<Self, Error> {
        let resp: HttpResponse = response?;
        let config = LifecycleConfig::from_bytes(&resp.body)?;
        log::debug!(
            "decoded {} lifecycle rule(s) for bucket {}",
            config.rules.len(),
            request.bucket.as_ref().map(|b| b.as_str()).unwrap_or_default()
        );

        Ok(Self {
            request,
            status: resp.status,
            headers: resp.headers,
            body: resp.body,
            config,
        })
    }
}

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

use crate::s3::error::Error;
use crate::s3::response::a_response_traits::{HasBucket, HasRegion, HasRequestId, HasS3Fields};
use crate::s3::transport::HttpResponse;
use crate::s3::types::{FromS3Response, S3Request};
use crate::{impl_from_s3response, impl_has_s3fields};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Represents the response of the [delete_bucket_lifecycle()](crate::s3::client::Client::delete_bucket_lifecycle) API call.
///
/// The service answers `204 No Content` whether or not a configuration existed.
#[derive(Clone, Debug)]
pub struct DeleteBucketLifecycleResponse {
    request: S3Request,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_s3response!(DeleteBucketLifecycleResponse);
impl_has_s3fields!(DeleteBucketLifecycleResponse);

impl HasBucket for DeleteBucketLifecycleResponse {}
impl HasRegion for DeleteBucketLifecycleResponse {}
impl HasRequestId for DeleteBucketLifecycleResponse {}

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

use crate::s3::types::S3Request;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

#[macro_export]
/// Implements the `FromS3Response` trait for the specified types.
macro_rules! impl_from_s3response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl FromS3Response for $ty {
                async fn from_s3response(
                    request: S3Request,
                    response: Result<HttpResponse, Error>,
                ) -> Result<Self, Error> {
                    let resp: HttpResponse = response?;
                    Ok(Self {
                        request,
                        status: resp.status,
                        headers: resp.headers,
                        body: resp.body,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasS3Fields` trait for the specified types.
macro_rules! impl_has_s3fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HasS3Fields for $ty {
                fn request(&self) -> &S3Request {
                    &self.request
                }

                fn status(&self) -> StatusCode {
                    self.status
                }

                fn headers(&self) -> &HeaderMap {
                    &self.headers
                }

                fn body(&self) -> &Bytes {
                    &self.body
                }
            }
        )*
    };
}

pub trait HasS3Fields {
    /// The request that was sent to the S3 API.
    fn request(&self) -> &S3Request;
    /// HTTP status code returned by the server.
    fn status(&self) -> StatusCode;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
    /// The raw response body returned by the server.
    fn body(&self) -> &Bytes;
}

/// Returns the name of the S3 bucket.
pub trait HasBucket: HasS3Fields {
    #[inline]
    fn bucket(&self) -> &str {
        self.request()
            .bucket
            .as_ref()
            .map(|b| b.as_str())
            .unwrap_or_default()
    }
}

/// Returns the region the request was sent to.
pub trait HasRegion: HasS3Fields {
    #[inline]
    fn region(&self) -> &str {
        self.request().inner_region.as_str()
    }
}

/// Returns the request ID (`x-amz-request-id`) the server assigned.
pub trait HasRequestId: HasS3Fields {
    #[inline]
    fn request_id(&self) -> Option<&str> {
        self.headers()
            .get(crate::s3::header_constants::X_AMZ_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
    }
}


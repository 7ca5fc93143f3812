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

//! Core traits for S3 request and response handling.

use super::s3_request::S3Request;
use crate::s3::error::Error;
use crate::s3::transport::HttpResponse;
use async_trait::async_trait;

/// Turns a request builder into the [`S3Request`] that gets executed.
///
/// Bucket name and region are validated and the body is encoded here, so
/// such failures are reported before anything reaches the transport.
pub trait ToS3Request: Sized {
    fn to_s3request(self) -> Result<S3Request, Error>;
}

/// Builds a typed response from the executed request and the transport's answer.
#[async_trait]
pub trait FromS3Response: Sized {
    /// `response` is whatever the transport returned; transport errors are
    /// passed through unchanged.
    async fn from_s3response(
        request: S3Request,
        response: Result<HttpResponse, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface of every lifecycle request builder.
///
/// [`S3Api::send`] runs the pipeline: [`ToS3Request::to_s3request`], then the
/// client's transport, then [`FromS3Response::from_s3response`].
#[async_trait]
pub trait S3Api: ToS3Request {
    type S3Response: FromS3Response;

    async fn send(self) -> Result<Self::S3Response, Error> {
        let mut req: S3Request = self.to_s3request()?;
        let resp: Result<HttpResponse, Error> = req.execute().await;
        Self::S3Response::from_s3response(req, resp).await
    }
}

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

//! The HTTP seam between the lifecycle operations and the wire.
//!
//! Operations hand a [`HttpRequest`] to a [`Transport`] and get back the raw
//! [`HttpResponse`]. [`ReqwestTransport`] is the implementation used unless
//! the client is built with another one.

use crate::s3::error::{Error, NetworkError, S3ServerError};
use crate::s3::error_response::ErrorResponse;
use crate::s3::header_constants::*;
use crate::s3::http::BaseUrl;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use std::fmt::Debug;

/// A request ready to be sent, before any endpoint specific addressing.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub region: String,
    pub bucket: Option<String>,
    pub object: Option<String>,
    pub query_params: Multimap,
    pub headers: Multimap,
    pub body: Option<Bytes>,
}

impl HttpRequest {
    /// Path of the addressed resource, as used in error documents.
    pub fn resource(&self) -> String {
        let mut resource = String::from("/");
        if let Some(bucket) = &self.bucket {
            resource.push_str(bucket);
        }
        if let Some(object) = &self.object {
            resource.push('/');
            resource.push_str(object);
        }
        resource
    }
}

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Passes a 2xx response through; anything else becomes [`Error::S3Server`].
    ///
    /// The error document in the body is parsed when there is one, otherwise
    /// the error is derived from the status code.
    pub fn error_for_status(self, request: &HttpRequest) -> Result<Self, Error> {
        if self.status.is_success() {
            return Ok(self);
        }

        let resource = request.resource();
        let bucket = request.bucket.as_deref();
        let response = if self.body.is_empty() {
            ErrorResponse::from_status(self.status, &self.headers, &resource, bucket)
        } else {
            match ErrorResponse::parse(&self.body) {
                Ok(v) => v,
                Err(e) => {
                    log::debug!("unreadable error document for {resource}: {e}");
                    ErrorResponse::from_status(self.status, &self.headers, &resource, bucket)
                }
            }
        };

        Err(S3ServerError {
            status: self.status,
            headers: self.headers,
            body: self.body,
            response,
        }
        .into())
    }
}

/// Performs HTTP exchanges for the client.
///
/// Implementations return `Ok` only for 2xx responses and
/// `Err(Error::S3Server(..))` otherwise, see [`HttpResponse::error_for_status`].
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

/// [`Transport`] on top of a pooled [`reqwest::Client`].
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    base_url: BaseUrl,
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(base_url: BaseUrl, http_client: reqwest::Client) -> Self {
        Self {
            base_url,
            http_client,
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let bucket = request.bucket.as_deref().unwrap_or_default();
        let url = self.base_url.build_url(
            &request.region,
            &request.query_params,
            bucket,
            request.object.as_deref(),
        )?;

        let mut headers = request.headers.clone();
        headers.add(HOST, url.host_header_value());
        if matches!(request.method, Method::PUT | Method::POST) {
            let len = request.body.as_ref().map_or(0, Bytes::len);
            headers.add(CONTENT_LENGTH, len.to_string());
        }

        log::debug!("{} {}", request.method, url);

        let mut req = self
            .http_client
            .request(request.method.clone(), url.to_string())
            .headers(headers.to_header_map()?);
        if let Some(body) = &request.body {
            req = req.body(body.clone());
        }

        let resp = req.send().await.map_err(NetworkError::from)?;
        let status = resp.status();
        let resp_headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(NetworkError::from)?;

        HttpResponse::new(status, resp_headers, body).error_for_status(&request)
    }
}

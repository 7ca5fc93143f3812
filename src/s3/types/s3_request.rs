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

//! S3Request: the transport-neutral form every builder is turned into.

use crate::s3::client::Client;
use crate::s3::error::Error;
use crate::s3::multimap_ext::Multimap;
use crate::s3::transport::{HttpRequest, HttpResponse};
use crate::s3::types::{BucketName, Region};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
/// Generic S3Request
pub struct S3Request {
    #[builder(!default)] // force required
    pub(crate) client: Client,

    #[builder(!default)] // force required
    method: Method,

    #[builder(default)]
    region: Option<Region>,

    #[builder(default, setter(into))]
    pub(crate) bucket: Option<BucketName>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    pub(crate) headers: Multimap,

    #[builder(default, setter(into))]
    pub(crate) body: Option<Bytes>,

    /// region computed by [`S3Request::execute`]
    #[builder(default, setter(skip))]
    pub(crate) inner_region: Region,
}

impl S3Request {
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Execute the request, returning the response. Only used in [`S3Api::send()`]
    ///
    /// [`S3Api::send()`]: crate::s3::types::S3Api::send
    pub async fn execute(&mut self) -> Result<HttpResponse, Error> {
        self.inner_region = match &self.region {
            Some(r) => r.clone(),
            None => self.client.default_region().clone(),
        };

        let request = HttpRequest {
            method: self.method.clone(),
            region: self.inner_region.to_string(),
            bucket: self.bucket.as_ref().map(BucketName::to_string),
            object: None,
            query_params: self.query_params.clone(),
            headers: self.headers.clone(),
            body: self.body.clone(),
        };

        self.client.transport().execute(request).await
    }
}

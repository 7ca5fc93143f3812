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

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use s3_lifecycle::s3::Client;
use s3_lifecycle::s3::error::Error;
use s3_lifecycle::s3::http::BaseUrl;
use s3_lifecycle::s3::transport::{HttpRequest, HttpResponse, Transport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Transport that records every request and replays queued answers in order.
///
/// Clones share state, so a test keeps one handle and gives another to the client.
#[derive(Clone, Debug, Default)]
pub struct FakeTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    answers: Arc<Mutex<VecDeque<Result<HttpResponse, Error>>>>,
}

#[allow(dead_code)]
impl FakeTransport {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self::default()
    }

    /// Queues a response; non-2xx statuses are turned into errors like a real transport does.
    pub fn respond(&self, status: StatusCode, body: impl Into<Bytes>) -> &Self {
        self.respond_with_headers(status, HeaderMap::new(), body)
    }

    pub fn respond_with_headers(
        &self,
        status: StatusCode,
        headers: HeaderMap,
        body: impl Into<Bytes>,
    ) -> &Self {
        self.answers
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, headers, body)));
        self
    }

    /// Queues a failure raised before any response was received.
    pub fn fail(&self, err: Error) -> &Self {
        self.answers.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    /// Builds a client on top of a clone of this transport.
    pub fn client(&self) -> Client {
        let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
        Client::builder(base_url)
            .transport(self.clone())
            .build()
            .unwrap()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        self.requests.lock().unwrap().push(request.clone());
        let answer = self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .expect("no answer queued for request");
        answer?.error_for_status(&request)
    }
}

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

//! Error types returned by the lifecycle client

use crate::s3::error_response::{ErrorCode, ErrorResponse};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use std::fmt;
use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failures detected on the client before anything is sent.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("invalid bucket name '{name}': {reason}")]
    InvalidBucketName { name: String, reason: String },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid URL")]
    InvalidUrl(#[from] http::uri::InvalidUri),

    #[error("URL build error: {0}")]
    UrlBuildError(String),

    #[error("invalid region: {0}")]
    InvalidRegion(String),

    #[error("invalid lifecycle rule ID '{0}'; it must have 1 to 255 characters")]
    InvalidLifecycleRuleId(String),

    #[error("lifecycle rule ID '{0}' is used more than once")]
    DuplicateLifecycleRuleId(String),

    #[error("invalid status '{status}' in lifecycle rule '{id}'; expected Enabled or Disabled")]
    InvalidRuleStatus { id: String, status: String },

    #[error(
        "lifecycle rule '{0}' has no action; at least one of Transition, Expiration, NoncurrentVersionTransition or NoncurrentVersionExpiration must be set"
    )]
    MissingLifecycleAction(String),

    #[error("{action} of lifecycle rule '{id}' has an empty storage class")]
    EmptyStorageClass { id: String, action: &'static str },

    #[error("{field} of lifecycle rule '{id}' must be greater than zero")]
    NonPositiveDays { id: String, field: &'static str },

    #[error("{field} of lifecycle rule '{id}' must not be negative")]
    NegativeDays { id: String, field: &'static str },
}

/// Failures while reading a `LifecycleConfiguration` document.
#[derive(Error, Debug)]
pub enum DecodeErr {
    #[error("malformed XML")]
    Xml(#[from] xmltree::ParseError),

    #[error("unexpected root element <{found}>; expected <{expected}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    #[error("invalid integer '{value}' in <{field}>")]
    InvalidInteger {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Failures while writing a `LifecycleConfiguration` document.
#[derive(Error, Debug)]
pub enum EncodeErr {
    #[error("failed to write XML document: {0}")]
    Write(String),

    #[error("encoded XML document is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    #[error("invalid header value")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    #[error("invalid header name")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),
}

/// A non-2xx answer from the service.
///
/// The status, headers and raw body are kept so callers can inspect the
/// failed response; `response` holds the parsed error document when the body
/// carried one.
#[derive(Debug)]
pub struct S3ServerError {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
    pub response: ErrorResponse,
}

impl S3ServerError {
    pub fn code(&self) -> &ErrorCode {
        &self.response.code
    }
}

impl fmt::Display for S3ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "s3 operation failed; status: {}, code: {}, message: {}, resource: {}, request_id: {}, host_id: {}, bucket_name: {}",
            self.status.as_u16(),
            self.response.code,
            self.response.message.as_deref().unwrap_or_default(),
            self.response.resource,
            self.response.request_id,
            self.response.host_id,
            self.response.bucket_name.as_deref().unwrap_or_default(),
        )
    }
}

impl std::error::Error for S3ServerError {}

#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("failed to decode lifecycle configuration: {0}")]
    Decode(#[from] DecodeErr),

    #[error("failed to encode lifecycle configuration: {0}")]
    Encode(#[from] EncodeErr),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("{0}")]
    S3Server(Box<S3ServerError>),
}

impl From<S3ServerError> for Error {
    fn from(err: S3ServerError) -> Self {
        Error::S3Server(Box::new(err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::Http(err))
    }
}

impl Error {
    /// HTTP status of the failed response, if the service answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::S3Server(e) => Some(e.status),
            _ => None,
        }
    }

    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Error::S3Server(e) => Some(&e.response),
            _ => None,
        }
    }

    /// Returns true when the bucket, or its lifecycle configuration, does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::S3Server(e) => {
                e.status == StatusCode::NOT_FOUND
                    || matches!(
                        e.response.code,
                        ErrorCode::NoSuchLifecycleConfiguration | ErrorCode::NoSuchBucket
                    )
            }
            _ => false,
        }
    }
}

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

//! Typed form of the XML error document returned by the service

use crate::s3::error::DecodeErr;
use crate::s3::header_constants::{X_AMZ_ID_2, X_AMZ_REQUEST_ID};
use crate::s3::utils::{get_text_default, get_text_option};
use bytes::{Buf, Bytes};
use http::{HeaderMap, StatusCode};
use std::str::FromStr;
use xmltree::Element;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorCode {
    #[default]
    NoError,
    /// The specified bucket does not exist
    NoSuchBucket,
    /// The bucket has no lifecycle configuration
    NoSuchLifecycleConfiguration,
    AccessDenied,
    /// The specified method is not allowed against this resource
    MethodNotAllowed,
    /// The XML you provided was not well-formed or did not validate against our published schema
    MalformedXML,
    InvalidArgument,
    InvalidBucketName,
    InvalidRequest,
    InternalError,
    ResourceNotFound,
    ResourceConflict,

    OtherError(String), // catch-all for codes not listed above
}

#[allow(dead_code)]
const ALL_ERROR_CODES: &[ErrorCode] = &[
    ErrorCode::NoError,
    ErrorCode::NoSuchBucket,
    ErrorCode::NoSuchLifecycleConfiguration,
    ErrorCode::AccessDenied,
    ErrorCode::MethodNotAllowed,
    ErrorCode::MalformedXML,
    ErrorCode::InvalidArgument,
    ErrorCode::InvalidBucketName,
    ErrorCode::InvalidRequest,
    ErrorCode::InternalError,
    ErrorCode::ResourceNotFound,
    ErrorCode::ResourceConflict,
];

impl FromStr for ErrorCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "noerror" | "" => Ok(ErrorCode::NoError),
            "nosuchbucket" => Ok(ErrorCode::NoSuchBucket),
            "nosuchlifecycleconfiguration" => Ok(ErrorCode::NoSuchLifecycleConfiguration),
            "accessdenied" => Ok(ErrorCode::AccessDenied),
            "methodnotallowed" => Ok(ErrorCode::MethodNotAllowed),
            "malformedxml" => Ok(ErrorCode::MalformedXML),
            "invalidargument" => Ok(ErrorCode::InvalidArgument),
            "invalidbucketname" => Ok(ErrorCode::InvalidBucketName),
            "invalidrequest" => Ok(ErrorCode::InvalidRequest),
            "internalerror" => Ok(ErrorCode::InternalError),
            "resourcenotfound" => Ok(ErrorCode::ResourceNotFound),
            "resourceconflict" => Ok(ErrorCode::ResourceConflict),
            _ => Ok(ErrorCode::OtherError(s.to_owned())),
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::NoError => write!(f, "NoError"),
            ErrorCode::NoSuchBucket => write!(f, "NoSuchBucket"),
            ErrorCode::NoSuchLifecycleConfiguration => write!(f, "NoSuchLifecycleConfiguration"),
            ErrorCode::AccessDenied => write!(f, "AccessDenied"),
            ErrorCode::MethodNotAllowed => write!(f, "MethodNotAllowed"),
            ErrorCode::MalformedXML => write!(f, "MalformedXML"),
            ErrorCode::InvalidArgument => write!(f, "InvalidArgument"),
            ErrorCode::InvalidBucketName => write!(f, "InvalidBucketName"),
            ErrorCode::InvalidRequest => write!(f, "InvalidRequest"),
            ErrorCode::InternalError => write!(f, "InternalError"),
            ErrorCode::ResourceNotFound => write!(f, "ResourceNotFound"),
            ErrorCode::ResourceConflict => write!(f, "ResourceConflict"),
            ErrorCode::OtherError(msg) => write!(f, "{msg}"),
        }
    }
}

/// ErrorResponse is the typed error document returned by all API operations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: Option<String>,
    pub resource: String,
    pub request_id: String,
    pub host_id: String,
    pub bucket_name: Option<String>,
}

impl ErrorResponse {
    /// Parses an `<Error>` document.
    pub fn parse(body: &Bytes) -> Result<Self, DecodeErr> {
        let root = Element::parse(body.clone().reader())?;
        let code = get_text_default(&root, "Code");
        Ok(Self {
            code: code.parse().unwrap_or_default(),
            message: get_text_option(&root, "Message"),
            resource: get_text_default(&root, "Resource"),
            request_id: get_text_default(&root, "RequestId"),
            host_id: get_text_default(&root, "HostId"),
            bucket_name: get_text_option(&root, "BucketName"),
        })
    }

    /// Builds a response for a failure that came without a readable error document.
    ///
    /// The code is derived from the status; request and host IDs come from headers.
    pub fn from_status(
        status: StatusCode,
        headers: &HeaderMap,
        resource: &str,
        bucket_name: Option<&str>,
    ) -> Self {
        let (code, message) = match status.as_u16() {
            400 => (ErrorCode::InvalidRequest, "Bad request"),
            403 => (ErrorCode::AccessDenied, "Access denied"),
            404 => match bucket_name {
                Some(_) => (ErrorCode::NoSuchBucket, "Bucket does not exist"),
                None => (ErrorCode::ResourceNotFound, "Request resource not found"),
            },
            405 | 501 => (
                ErrorCode::MethodNotAllowed,
                "The specified method is not allowed against this resource",
            ),
            409 => (ErrorCode::ResourceConflict, "Request resource conflicts"),
            _ => (
                ErrorCode::OtherError(format!("HTTP{}", status.as_u16())),
                "Server failed to process the request",
            ),
        };

        let header_text = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };

        Self {
            code,
            message: Some(message.to_string()),
            resource: resource.to_string(),
            request_id: header_text(X_AMZ_REQUEST_ID),
            host_id: header_text(X_AMZ_ID_2),
            bucket_name: bucket_name.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod test_error_code {
    use super::*;

    #[test]
    fn test_error_code_roundtrip() {
        for code in ALL_ERROR_CODES {
            let str = code.to_string();
            let code_obs: ErrorCode = str.parse().unwrap();
            assert_eq!(
                code_obs, *code,
                "Failed ErrorCode round-trip: code {code} -> str '{str}' -> code {code_obs}"
            );
        }
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let code: ErrorCode = "SlowDown".parse().unwrap();
        assert_eq!(code, ErrorCode::OtherError("SlowDown".to_string()));
        assert_eq!(code.to_string(), "SlowDown");
    }

    #[test]
    fn test_parse_no_such_lifecycle_configuration() {
        let body = Bytes::from_static(
            b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
            <Error><Code>NoSuchLifecycleConfiguration</Code>\
            <Message>The lifecycle configuration does not exist</Message>\
            <BucketName>my-bucket</BucketName><Resource>/my-bucket</Resource>\
            <RequestId>1806F3A2B4E7</RequestId><HostId>dd9025bab4ad</HostId></Error>",
        );
        let resp = ErrorResponse::parse(&body).unwrap();
        assert_eq!(resp.code, ErrorCode::NoSuchLifecycleConfiguration);
        assert_eq!(
            resp.message.as_deref(),
            Some("The lifecycle configuration does not exist")
        );
        assert_eq!(resp.bucket_name.as_deref(), Some("my-bucket"));
        assert_eq!(resp.resource, "/my-bucket");
        assert_eq!(resp.request_id, "1806F3A2B4E7");
        assert_eq!(resp.host_id, "dd9025bab4ad");
    }

    #[test]
    fn test_from_status_without_body() {
        let mut headers = HeaderMap::new();
        headers.insert(X_AMZ_REQUEST_ID, "req-1".parse().unwrap());
        let resp =
            ErrorResponse::from_status(StatusCode::FORBIDDEN, &headers, "/bucket", Some("bucket"));
        assert_eq!(resp.code, ErrorCode::AccessDenied);
        assert_eq!(resp.request_id, "req-1");
        assert!(resp.host_id.is_empty());
    }
}

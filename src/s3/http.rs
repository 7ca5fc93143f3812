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

//! Endpoint addressing: parsing the configured base URL and building request URLs.

use crate::s3::error::ValidationErr;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::{match_hostname, urlencode_object_key};
use http::Uri;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref AWS_ENDPOINT_REGEX: Regex =
        Regex::new(r"^.*\.amazonaws\.com(|\.cn)$").unwrap();
    static ref AWS_S3_PREFIX_REGEX: Regex =
        Regex::new(r"^s3(-accelerate|-fips)?\.").unwrap();
}

#[derive(Clone, Debug)]
/// Fully resolved request URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    /// Value for the `Host` header; the port is only included when non-default.
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            format!("{}:{}", self.host, self.port)
        } else {
            self.host.clone()
        }
    }
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: true,
            host: String::new(),
            port: 0,
            path: String::new(),
            query: Multimap::default(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let scheme = if self.https { "https" } else { "http" };
        if self.host.is_empty() {
            write!(f, "{scheme}://<invalid-host>")?;
        } else {
            write!(f, "{scheme}://{}", self.host_header_value())?;
        }

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            write!(f, "?{}", self.query.to_query_string())?;
        }
        Ok(())
    }
}

/// Returns true when `host` is an Amazon AWS host name.
pub fn match_aws_endpoint(host: &str) -> bool {
    AWS_ENDPOINT_REGEX.is_match(&host.to_lowercase())
}

/// Parts of an Amazon S3 host name such as `s3.dualstack.eu-west-1.amazonaws.com`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct AwsEndpoint {
    /// `s3.`, `s3-accelerate.` or `s3-fips.`
    prefix: String,
    region: String,
    /// `amazonaws.com` or `amazonaws.com.cn`
    domain_suffix: String,
    dualstack: bool,
}

impl AwsEndpoint {
    fn parse(host: &str, https: bool) -> Result<Option<Self>, ValidationErr> {
        if !match_hostname(host) || !match_aws_endpoint(host) {
            return Ok(None);
        }

        let host = host.to_lowercase();
        let invalid = || ValidationErr::UrlBuildError(format!("invalid Amazon AWS host {host}"));

        let prefix = AWS_S3_PREFIX_REGEX
            .find(&host)
            .map(|m| m.as_str().to_string())
            .ok_or_else(invalid)?;
        if prefix.starts_with("s3-accelerate") && !https {
            return Err(ValidationErr::UrlBuildError(format!(
                "use HTTPS scheme for host {host}"
            )));
        }

        let mut tokens: Vec<&str> = host[prefix.len()..].split('.').collect();
        let dualstack = tokens.first() == Some(&"dualstack");
        if dualstack {
            tokens.remove(0);
        }

        let mut region = String::new();
        if tokens.first().is_some_and(|t| *t != "amazonaws") {
            region = tokens.remove(0).to_string();
        }

        let domain_suffix = tokens.join(".");
        if domain_suffix != "amazonaws.com" && domain_suffix != "amazonaws.com.cn" {
            return Err(invalid());
        }

        Ok(Some(Self {
            prefix,
            region,
            domain_suffix,
            dualstack,
        }))
    }

    fn host(&self, region: &str) -> String {
        let mut host = self.prefix.clone();
        if self.dualstack {
            host.push_str("dualstack.");
        }
        if !self.prefix.starts_with("s3-accelerate") && !region.is_empty() {
            host.push_str(region);
            host.push('.');
        }
        host.push_str(&self.domain_suffix);
        host
    }
}

#[derive(Clone, Debug)]
/// Base URL of an S3 compatible endpoint
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    /// Region found in the host name, empty otherwise.
    pub region: String,
    aws: Option<AwsEndpoint>,
    pub virtual_style: bool,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: false,
            host: "localhost".to_string(),
            port: 9000,
            region: String::new(),
            aws: None,
            virtual_style: false,
        }
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Parses `host`, `host:port` or `scheme://host[:port]`; scheme defaults to https.
    ///
    /// ```
    /// use s3_lifecycle::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
    /// assert!(!base_url.https);
    /// let base_url: BaseUrl = "s3.eu-west-1.amazonaws.com".parse().unwrap();
    /// assert_eq!(base_url.region, "eu-west-1");
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let uri = s.parse::<Uri>()?;

        let https = match uri.scheme_str() {
            None | Some("https") => true,
            Some("http") => false,
            Some(_) => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "scheme must be http or https".into(),
                ));
            }
        };

        let host = uri
            .host()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ValidationErr::InvalidBaseUrl("valid host must be provided".into()))?;
        let host = if host.parse::<std::net::Ipv6Addr>().is_ok() {
            format!("[{host}]")
        } else {
            host.to_string()
        };

        let port = match uri.port_u16() {
            Some(443) if https => 0,
            Some(80) if !https => 0,
            Some(p) => p,
            None => 0,
        };

        if !matches!(uri.path(), "" | "/") {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }
        if uri.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let aws = AwsEndpoint::parse(&host, https)?;
        let region = aws.as_ref().map(|a| a.region.clone()).unwrap_or_default();
        let virtual_style = aws.is_some() || host.ends_with("aliyuncs.com");

        Ok(BaseUrl {
            https,
            host,
            port,
            region,
            aws,
            virtual_style,
        })
    }
}

impl BaseUrl {
    pub fn is_aws_host(&self) -> bool {
        self.aws.is_some()
    }

    /// Builds the URL of a bucket (or an object in it) for `region`.
    pub fn build_url(
        &self,
        region: &str,
        query: &Multimap,
        bucket: &str,
        object: Option<&str>,
    ) -> Result<Url, ValidationErr> {
        let mut host = match &self.aws {
            Some(aws) => {
                if aws.prefix.starts_with("s3-accelerate") && bucket.contains('.') {
                    return Err(ValidationErr::UrlBuildError(
                        "bucket name with '.' is not allowed for accelerate endpoint".into(),
                    ));
                }
                aws.host(region)
            }
            None => self.host.clone(),
        };

        // Dotted bucket names break wildcard TLS certificates.
        let path_style = !self.virtual_style || (self.https && bucket.contains('.'));

        let mut path = String::new();
        if path_style {
            path.push('/');
            path.push_str(bucket);
        } else {
            host = format!("{bucket}.{host}");
        }

        match object {
            Some(object) if !object.is_empty() => {
                if !object.starts_with('/') {
                    path.push('/');
                }
                path.push_str(&urlencode_object_key(object));
            }
            _ if path.is_empty() => path.push('/'),
            _ => {}
        }

        Ok(Url {
            https: self.https,
            host,
            port: self.port,
            path,
            query: query.clone(),
        })
    }
}

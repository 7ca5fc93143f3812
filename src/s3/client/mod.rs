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

//! Lifecycle client and its builder.

use crate::s3::error::Error;
use crate::s3::http::BaseUrl;
use crate::s3::transport::{ReqwestTransport, Transport};
use crate::s3::types::Region;
use std::sync::Arc;

mod delete_bucket_lifecycle;
mod get_bucket_lifecycle;
mod put_bucket_lifecycle;

/// The default AWS region to be used if no other region is specified.
pub const DEFAULT_REGION: &str = "us-east-1";

const DEFAULT_SERVER_ENDPOINT: &str = "http://localhost:9000";

/// Client Builder manufactures a [`Client`] using given parameters.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: BaseUrl,
    /// Transport to send requests through; a [`ReqwestTransport`] when unset.
    transport: Option<Arc<dyn Transport>>,
    default_region: Option<String>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
}

impl ClientBuilder {
    /// Creates a builder given a base URL for the S3 compatible service.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            transport: None,
            default_region: None,
            ignore_cert_check: None,
            app_info: None,
        }
    }

    /// Creates a builder from the `SERVER_ENDPOINT`, `ENABLE_HTTPS`,
    /// `SERVER_REGION` and `IGNORE_CERT_CHECK` environment variables.
    ///
    /// The endpoint defaults to `http://localhost:9000`; the region to `us-east-1`.
    pub fn from_env() -> Result<Self, Error> {
        let host: String = std::env::var("SERVER_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_SERVER_ENDPOINT.to_string());
        log::debug!("SERVER_ENDPOINT={host}");

        let mut base_url: BaseUrl = host.parse()?;
        if let Ok(v) = std::env::var("ENABLE_HTTPS") {
            base_url.https = v.parse().unwrap_or(false);
        }
        log::debug!("ENABLE_HTTPS={}", base_url.https);

        let region: Option<String> = std::env::var("SERVER_REGION")
            .ok()
            .filter(|v| !v.is_empty());
        log::debug!("SERVER_REGION={region:?}");

        let ignore_cert_check: Option<bool> = std::env::var("IGNORE_CERT_CHECK")
            .ok()
            .map(|v| v.parse().unwrap_or(false));

        Ok(Self::new(base_url)
            .default_region(region)
            .ignore_cert_check(ignore_cert_check))
    }

    /// Send requests through `transport` instead of the default HTTP client.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Region used when a request does not name one. Falls back to the region
    /// found in the endpoint host name, then to [`DEFAULT_REGION`].
    pub fn default_region(mut self, region: Option<String>) -> Self {
        self.default_region = region;
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<Client, Error> {
        let region = match self.default_region {
            Some(r) => r,
            None if !self.base_url.region.is_empty() => self.base_url.region.clone(),
            None => DEFAULT_REGION.to_string(),
        };
        let default_region = Region::new(region)?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => {
                let http_client =
                    build_http_client(self.ignore_cert_check, self.app_info.as_ref())?;
                Arc::new(ReqwestTransport::new(self.base_url.clone(), http_client))
            }
        };

        Ok(Client {
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                transport,
                default_region,
            }),
        })
    }
}

fn build_http_client(
    ignore_cert_check: Option<bool>,
    app_info: Option<&(String, String)>,
) -> Result<reqwest::Client, Error> {
    let mut builder = reqwest::Client::builder().no_gzip();

    #[cfg(feature = "http2")]
    {
        builder = builder.http2_adaptive_window(true);
    }

    let mut user_agent = String::from("S3Lifecycle (")
        + std::env::consts::OS
        + "; "
        + std::env::consts::ARCH
        + ") s3-lifecycle-rs/"
        + env!("CARGO_PKG_VERSION");
    if let Some((app_name, app_version)) = app_info {
        user_agent.push_str(&format!(" {app_name}/{app_version}"));
    }
    builder = builder.user_agent(user_agent);

    #[cfg(any(
        feature = "default-tls",
        feature = "native-tls",
        feature = "rustls-tls"
    ))]
    if let Some(v) = ignore_cert_check {
        builder = builder.danger_accept_invalid_certs(v);
    }
    #[cfg(not(any(
        feature = "default-tls",
        feature = "native-tls",
        feature = "rustls-tls"
    )))]
    let _ = ignore_cert_check;

    Ok(builder.build()?)
}

/// Client for the bucket lifecycle APIs of an S3 compatible service.
///
/// Cloning is cheap; clones share the transport and its connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    pub(crate) shared: Arc<SharedClientItems>,
}

impl Client {
    /// Returns a client for `base_url` using the default transport.
    ///
    /// ```
    /// use s3_lifecycle::s3::Client;
    /// use s3_lifecycle::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
    /// let client = Client::new(base_url).unwrap();
    /// assert_eq!(client.default_region().as_str(), "us-east-1");
    /// ```
    pub fn new(base_url: BaseUrl) -> Result<Self, Error> {
        ClientBuilder::new(base_url).build()
    }

    pub fn builder(base_url: BaseUrl) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    /// Returns whether this client uses an AWS host.
    pub fn is_aws_host(&self) -> bool {
        self.shared.base_url.is_aws_host()
    }

    /// Returns whether this client is configured to use HTTPS.
    pub fn is_secure(&self) -> bool {
        self.shared.base_url.https
    }

    pub fn default_region(&self) -> &Region {
        &self.shared.default_region
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.shared.transport
    }
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    transport: Arc<dyn Transport>,
    default_region: Region,
}

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

use crate::s3::client::Client;
use crate::s3::error::Error;
use crate::s3::header_constants::{APPLICATION_XML, CONTENT_MD5, CONTENT_TYPE, LIFECYCLE};
use crate::s3::lifecycle_config::LifecycleConfig;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::PutBucketLifecycleResponse;
use crate::s3::types::{BucketName, Region, S3Api, S3Request, ToS3Request};
use crate::s3::utils::{insert, md5sum_hash};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`PutBucketLifecycleConfiguration`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutBucketLifecycleConfiguration.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`Client::put_bucket_lifecycle`](crate::s3::client::Client::put_bucket_lifecycle) method.
///
/// The configuration replaces whatever the bucket had before.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutBucketLifecycle {
    #[builder(!default)] // force required
    client: Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(default, setter(into))]
    region: Option<String>,
    #[builder(!default, setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(default)]
    life_cycle_config: LifecycleConfig,
}

/// Builder type alias for [`PutBucketLifecycle`].
///
/// Constructed via [`PutBucketLifecycle::builder()`](PutBucketLifecycle::builder) and used to build a [`PutBucketLifecycle`] instance.
pub type PutBucketLifecycleBldr =
    PutBucketLifecycleBuilder<((Client,), (), (), (), (String,), ())>;

impl S3Api for PutBucketLifecycle {
    type S3Response = PutBucketLifecycleResponse;
}

impl ToS3Request for PutBucketLifecycle {
    fn to_s3request(self) -> Result<S3Request, Error> {
        let bucket = BucketName::new(self.bucket)?;
        let region = self.region.map(Region::new).transpose()?;

        let body: Bytes = self.life_cycle_config.to_xml()?.into();

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        if !headers.contains_key_ignore_case(CONTENT_TYPE) {
            headers.add(CONTENT_TYPE, APPLICATION_XML);
        }
        if !headers.contains_key_ignore_case(CONTENT_MD5) {
            headers.add(CONTENT_MD5, md5sum_hash(&body));
        }

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .region(region)
            .bucket(bucket)
            .query_params(insert(self.extra_query_params, LIFECYCLE))
            .headers(headers)
            .body(body)
            .build())
    }
}

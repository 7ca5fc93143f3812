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
use crate::s3::header_constants::LIFECYCLE;
use crate::s3::multimap_ext::Multimap;
use crate::s3::response::GetBucketLifecycleResponse;
use crate::s3::types::{BucketName, Region, S3Api, S3Request, ToS3Request};
use crate::s3::utils::insert;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`GetBucketLifecycleConfiguration`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetBucketLifecycleConfiguration.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`Client::get_bucket_lifecycle`](crate::s3::client::Client::get_bucket_lifecycle) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetBucketLifecycle {
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
}

/// Builder type alias for [`GetBucketLifecycle`].
///
/// Constructed via [`GetBucketLifecycle::builder()`](GetBucketLifecycle::builder) and used to build a [`GetBucketLifecycle`] instance.
pub type GetBucketLifecycleBldr = GetBucketLifecycleBuilder<((Client,), (), (), (), (String,))>;

impl S3Api for GetBucketLifecycle {
    type S3Response = GetBucketLifecycleResponse;
}

impl ToS3Request for GetBucketLifecycle {
    fn to_s3request(self) -> Result<S3Request, Error> {
        let bucket = BucketName::new(self.bucket)?;
        let region = self.region.map(Region::new).transpose()?;

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::GET)
            .region(region)
            .bucket(bucket)
            .query_params(insert(self.extra_query_params, LIFECYCLE))
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}

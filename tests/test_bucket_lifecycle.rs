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

mod common;

use common::FakeTransport;
use http::{HeaderMap, Method, StatusCode};
use s3_lifecycle::s3::error::{Error, ValidationErr};
use s3_lifecycle::s3::error_response::ErrorCode;
use s3_lifecycle::s3::lifecycle_config::{
    Expiration, LIFECYCLE_CONFIGURATION, LifecycleConfig, LifecycleFilter, LifecycleRule,
    NoncurrentVersionExpiration, NoncurrentVersionTransition, RuleStatus, Tag, Transition,
};
use s3_lifecycle::s3::multimap_ext::{Multimap, MultimapExt};
use s3_lifecycle::s3::response::a_response_traits::{
    HasBucket, HasRegion, HasRequestId, HasS3Fields,
};
use s3_lifecycle::s3::response::{
    DeleteBucketLifecycleResponse, GetBucketLifecycleResponse, PutBucketLifecycleResponse,
};
use s3_lifecycle::s3::types::S3Api;
use s3_lifecycle::s3::utils::md5sum_hash;

const BUCKET: &str = "lifecycle-bucket";

const LIFECYCLE_DOCUMENT: &str = r#"<LifecycleConfiguration>
	<Rule>
		<ID>1234</ID>
		<Filter>
            <And>
                <Prefix>test</Prefix>
                <Tag>
                    <Key>key</Key>
                    <Value>value</Value>
                </Tag>
            </And>
		</Filter>
		<Status>Enabled</Status>
		<Transition>
			<Days>10</Days>
			<StorageClass>Standard</StorageClass>
		</Transition>
		<Expiration>
			<Days>10</Days>
		</Expiration>
		<NoncurrentVersionTransition>
			<NoncurrentDays>90</NoncurrentDays>
			<StorageClass>ARCHIVE</StorageClass>
		</NoncurrentVersionTransition>
		<NoncurrentVersionTransition>
			<NoncurrentDays>180</NoncurrentDays>
			<StorageClass>DEEP_ARCHIVE</StorageClass>
		</NoncurrentVersionTransition>
		<NoncurrentVersionExpiration>
			<NoncurrentDays>360</NoncurrentDays>
		</NoncurrentVersionExpiration>
	</Rule>
	<Rule>
		<ID>123422</ID>
		<Filter>
			<Prefix>gg</Prefix>
		</Filter>
		<Status>Disabled</Status>
		<Expiration>
			<Days>10</Days>
		</Expiration>
	</Rule>
</LifecycleConfiguration>"#;

fn expected_rules() -> Vec<LifecycleRule> {
    vec![
        LifecycleRule {
            id: "1234".into(),
            filter: Some(LifecycleFilter::and("test", [Tag::new("key", "value")])),
            status: RuleStatus::Enabled,
            transitions: vec![Transition {
                days: 10,
                storage_class: "Standard".into(),
            }],
            expiration: Some(Expiration { days: 10 }),
            noncurrent_version_transitions: vec![
                NoncurrentVersionTransition {
                    noncurrent_days: 90,
                    storage_class: "ARCHIVE".into(),
                },
                NoncurrentVersionTransition {
                    noncurrent_days: 180,
                    storage_class: "DEEP_ARCHIVE".into(),
                },
            ],
            noncurrent_version_expiration: Some(NoncurrentVersionExpiration {
                noncurrent_days: 360,
            }),
        },
        LifecycleRule {
            id: "123422".into(),
            filter: Some(LifecycleFilter::prefix("gg")),
            status: RuleStatus::Disabled,
            expiration: Some(Expiration { days: 10 }),
            ..Default::default()
        },
    ]
}

fn assert_lifecycle_request(method: Method, transport: &FakeTransport) {
    let req = transport.last_request();
    assert_eq!(req.method, method);
    assert_eq!(req.bucket.as_deref(), Some(BUCKET));
    assert_eq!(req.object, None);
    assert_eq!(
        req.query_params.get("lifecycle").map(String::as_str),
        Some("")
    );
}

#[tokio::test]
async fn get_bucket_lifecycle_decodes_document() {
    let transport = FakeTransport::new();
    let mut headers = HeaderMap::new();
    headers.insert("x-amz-request-id", "17C3A7B2E0D9F6AA".parse().unwrap());
    transport.respond_with_headers(StatusCode::OK, headers, LIFECYCLE_DOCUMENT);

    let resp: GetBucketLifecycleResponse = transport
        .client()
        .get_bucket_lifecycle(BUCKET)
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.config().rules, expected_rules());
    assert_eq!(resp.bucket(), BUCKET);
    assert_eq!(resp.region(), "us-east-1");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.request_id(), Some("17C3A7B2E0D9F6AA"));
    assert_eq!(resp.body().as_ref(), LIFECYCLE_DOCUMENT.as_bytes());

    assert_lifecycle_request(Method::GET, &transport);
    let req = transport.last_request();
    assert!(req.body.is_none());
    assert!(req.headers.is_empty());
}

#[tokio::test]
async fn get_bucket_lifecycle_with_extra_headers_and_region() {
    let transport = FakeTransport::new();
    transport.respond(StatusCode::OK, LIFECYCLE_DOCUMENT);

    let mut extra_headers = Multimap::new();
    extra_headers.add("x-custom-option", "yes");

    let resp = transport
        .client()
        .get_bucket_lifecycle(BUCKET)
        .extra_headers(Some(extra_headers))
        .region(Some("eu-west-1".to_string()))
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.into_config(), LifecycleConfig::new(expected_rules()));
    assert_lifecycle_request(Method::GET, &transport);

    let req = transport.last_request();
    assert_eq!(req.region, "eu-west-1");
    assert_eq!(
        req.headers.get("x-custom-option").map(String::as_str),
        Some("yes")
    );
}

#[tokio::test]
async fn get_bucket_lifecycle_without_configuration() {
    let transport = FakeTransport::new();
    transport.respond(
        StatusCode::NOT_FOUND,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <Error><Code>NoSuchLifecycleConfiguration</Code>\
         <Message>The lifecycle configuration does not exist</Message>\
         <BucketName>lifecycle-bucket</BucketName><Resource>/lifecycle-bucket</Resource>\
         <RequestId>1</RequestId><HostId>2</HostId></Error>",
    );

    let err = transport
        .client()
        .get_bucket_lifecycle(BUCKET)
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    let e = err.error_response().unwrap();
    assert_eq!(e.code, ErrorCode::NoSuchLifecycleConfiguration);
    assert_eq!(e.bucket_name.as_deref(), Some(BUCKET));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn get_bucket_lifecycle_reports_bad_document() {
    let transport = FakeTransport::new();
    transport.respond(StatusCode::OK, "<Tagging><TagSet/></Tagging>");

    let err = transport
        .client()
        .get_bucket_lifecycle(BUCKET)
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn put_bucket_lifecycle_sends_document() {
    let transport = FakeTransport::new();
    transport.respond(StatusCode::OK, "");

    let config = LifecycleConfig::new(vec![
        LifecycleRule {
            id: "1234".into(),
            filter: Some(LifecycleFilter::prefix("test")),
            status: RuleStatus::Enabled,
            transitions: vec![Transition {
                days: 10,
                storage_class: "Standard".into(),
            }],
            ..Default::default()
        },
        LifecycleRule {
            id: "123422".into(),
            filter: Some(LifecycleFilter::prefix("gg")),
            status: RuleStatus::Disabled,
            expiration: Some(Expiration { days: 10 }),
            ..Default::default()
        },
    ]);

    let resp: PutBucketLifecycleResponse = transport
        .client()
        .put_bucket_lifecycle(BUCKET)
        .life_cycle_config(config.clone())
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.bucket(), BUCKET);
    assert_eq!(resp.status(), StatusCode::OK);

    assert_lifecycle_request(Method::PUT, &transport);
    let req = transport.last_request();
    let body = req.body.expect("PUT carries a body");

    let root = xmltree::Element::parse(body.as_ref()).unwrap();
    assert_eq!(root.name, LIFECYCLE_CONFIGURATION);
    assert_eq!(LifecycleConfig::from_bytes(&body).unwrap(), config);

    assert_eq!(
        req.headers.get("Content-MD5").map(String::as_str),
        Some(md5sum_hash(&body).as_str())
    );
    assert_eq!(
        req.headers.get("Content-Type").map(String::as_str),
        Some("application/xml")
    );
}

#[tokio::test]
async fn put_bucket_lifecycle_keeps_caller_content_type() {
    let transport = FakeTransport::new();
    transport.respond(StatusCode::OK, "");

    let mut extra_headers = Multimap::new();
    extra_headers.add("content-type", "text/xml");

    transport
        .client()
        .put_bucket_lifecycle(BUCKET)
        .extra_headers(Some(extra_headers))
        .build()
        .send()
        .await
        .unwrap();

    let req = transport.last_request();
    assert_eq!(
        req.headers.get("content-type").map(String::as_str),
        Some("text/xml")
    );
    assert!(!req.headers.contains_key("Content-Type"));
    let body = req.body.unwrap();
    assert_eq!(LifecycleConfig::from_bytes(&body).unwrap(), LifecycleConfig::default());
}

#[tokio::test]
async fn put_bucket_lifecycle_rejected_by_server() {
    let transport = FakeTransport::new();
    transport.respond(
        StatusCode::BAD_REQUEST,
        "<Error><Code>MalformedXML</Code><Message>bad</Message></Error>",
    );

    let err = transport
        .client()
        .put_bucket_lifecycle(BUCKET)
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(!err.is_not_found());
    assert_eq!(err.error_response().unwrap().code, ErrorCode::MalformedXML);
}

#[tokio::test]
async fn delete_bucket_lifecycle_is_idempotent() {
    let transport = FakeTransport::new();
    transport
        .respond(StatusCode::NO_CONTENT, "")
        .respond(StatusCode::NO_CONTENT, "");
    let client = transport.client();

    let resp: DeleteBucketLifecycleResponse = client
        .delete_bucket_lifecycle(BUCKET)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_lifecycle_request(Method::DELETE, &transport);

    let mut extra_headers = Multimap::new();
    extra_headers.add("x-custom-option", "again");
    let resp = client
        .delete_bucket_lifecycle(BUCKET)
        .extra_headers(Some(extra_headers))
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(resp.bucket(), BUCKET);

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.body.is_none()));
}

#[tokio::test]
async fn invalid_bucket_name_is_rejected_before_sending() {
    let transport = FakeTransport::new();

    let err = transport
        .client()
        .delete_bucket_lifecycle("ab")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidBucketName { .. })
    ));

    let err = transport
        .client()
        .get_bucket_lifecycle(BUCKET)
        .region(Some(String::new()))
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidRegion(_))
    ));

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn transport_failure_is_passed_through() {
    let transport = FakeTransport::new();
    transport.fail(Error::Validation(ValidationErr::UrlBuildError(
        "connection refused".into(),
    )));

    let err = transport
        .client()
        .get_bucket_lifecycle(BUCKET)
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::UrlBuildError(ref m)) if m == "connection refused"
    ));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn put_then_get_roundtrip() {
    let transport = FakeTransport::new();
    let client = transport.client();
    let config = LifecycleConfig::new(expected_rules());

    transport.respond(StatusCode::OK, "");
    client
        .put_bucket_lifecycle(BUCKET)
        .life_cycle_config(config.clone())
        .build()
        .send()
        .await
        .unwrap();

    let sent = transport.last_request().body.unwrap();
    transport.respond(StatusCode::OK, sent);
    let resp = client
        .get_bucket_lifecycle(BUCKET)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.config(), &config);
}

#[tokio::test]
async fn lifecycle_marker_is_sent_once() {
    let transport = FakeTransport::new();
    transport.respond(StatusCode::NO_CONTENT, "");

    let mut extra_query_params = Multimap::new();
    extra_query_params.add("lifecycle", "");
    extra_query_params.add("versionId", "null");

    transport
        .client()
        .delete_bucket_lifecycle(BUCKET)
        .extra_query_params(Some(extra_query_params))
        .build()
        .send()
        .await
        .unwrap();

    let req = transport.last_request();
    assert_eq!(req.query_params.get_vec("lifecycle").map(Vec::len), Some(1));
    assert_eq!(
        req.query_params.get("versionId").map(String::as_str),
        Some("null")
    );
}

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

//! Various utility and helper functions

use crate::s3::error::ValidationErr;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use lazy_static::lazy_static;
use md5::compute as md5compute;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use xmltree::Element;

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Gets base64 encoded MD5 hash of given data, as used by the `Content-MD5` header
pub fn md5sum_hash(data: &[u8]) -> String {
    b64encode(md5compute(data).as_slice())
}

const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &QUERY_ENCODE_SET.remove(b'/');

/// Percent-encodes a query key or value
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ENCODE_SET).collect()
}

pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Returns the caller's extra query parameters with `key` added as an empty-valued marker.
///
/// A marker the caller already supplied is left as is.
pub fn insert(data: Option<Multimap>, key: impl Into<String>) -> Multimap {
    let mut result: Multimap = data.unwrap_or_default();
    let key: String = key.into();
    if !result.contains_key(&key) {
        result.add(key, "");
    }
    result
}

/// Checks if given hostname is valid or not
pub fn match_hostname(value: &str) -> bool {
    lazy_static! {
        static ref HOSTNAME_REGEX: Regex =
            Regex::new(r"^([a-z_\d-]{1,63}\.)*([a-z_\d-]{1,63})$").unwrap();
    }

    if !HOSTNAME_REGEX.is_match(value.to_lowercase().as_str()) {
        return false;
    }

    for token in value.split('.') {
        if token.starts_with('-')
            || token.starts_with('_')
            || token.ends_with('-')
            || token.ends_with('_')
        {
            return false;
        }
    }

    true
}

/// Checks if given region is valid or not
pub fn match_region(value: &str) -> bool {
    lazy_static! {
        static ref REGION_REGEX: Regex = Regex::new(r"^([a-z_\d-]{1,63})$").unwrap();
    }

    REGION_REGEX.is_match(value.to_lowercase().as_str())
        && !value.starts_with('-')
        && !value.starts_with('_')
        && !value.ends_with('-')
        && !value.ends_with('_')
}

/// Validates given bucket name
pub fn check_bucket_name(bucket_name: &str, strict: bool) -> Result<(), ValidationErr> {
    let err = |reason: &str| ValidationErr::InvalidBucketName {
        name: bucket_name.to_string(),
        reason: reason.to_string(),
    };

    if bucket_name.trim().is_empty() {
        return Err(err("bucket name cannot be empty"));
    }

    if bucket_name.len() < 3 {
        return Err(err("bucket name cannot be less than 3 characters"));
    }

    if bucket_name.len() > 63 {
        return Err(err("bucket name cannot be greater than 63 characters"));
    }

    lazy_static! {
        static ref IPV4_REGEX: Regex = Regex::new(r"^((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])$").unwrap();
        static ref VALID_BUCKET_NAME_REGEX: Regex =
            Regex::new("^[A-Za-z0-9][A-Za-z0-9\\.\\-_:]{1,61}[A-Za-z0-9]$").unwrap();
        static ref VALID_BUCKET_NAME_STRICT_REGEX: Regex =
            Regex::new("^[a-z0-9][a-z0-9\\.\\-]{1,61}[a-z0-9]$").unwrap();
    }

    if IPV4_REGEX.is_match(bucket_name) {
        return Err(err("bucket name cannot be an IP address"));
    }

    if bucket_name.contains("..") || bucket_name.contains(".-") || bucket_name.contains("-.") {
        return Err(err(
            "bucket name contains invalid successive characters '..', '.-' or '-.'",
        ));
    }

    if strict {
        if !VALID_BUCKET_NAME_STRICT_REGEX.is_match(bucket_name) {
            return Err(err("bucket name does not follow S3 standards strictly"));
        }
    } else if !VALID_BUCKET_NAME_REGEX.is_match(bucket_name) {
        return Err(err("bucket name does not follow S3 standards"));
    }

    Ok(())
}

/// Gets optional text value of given XML element for given tag.
pub fn get_text_option(element: &Element, tag: &str) -> Option<String> {
    element
        .get_child(tag)
        .map(|v| v.get_text().unwrap_or_default().to_string())
}

/// Gets default text value of given XML element for given tag.
pub fn get_text_default(element: &Element, tag: &str) -> String {
    get_text_option(element, tag).unwrap_or_default()
}

/// Iterates the direct child elements of `element` named `tag`, in document order.
pub fn child_elements<'a>(element: &'a Element, tag: &'a str) -> impl Iterator<Item = &'a Element> {
    element
        .children
        .iter()
        .filter_map(|c| c.as_element())
        .filter(move |e| e.name == tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bucket_name() {
        assert!(check_bucket_name("my-bucket", true).is_ok());
        assert!(check_bucket_name("my.bucket.name", true).is_ok());
        assert!(check_bucket_name("My_Bucket", false).is_ok());
        assert!(check_bucket_name("My_Bucket", true).is_err());
        assert!(check_bucket_name("ab", false).is_err());
        assert!(check_bucket_name("   ", false).is_err());
        assert!(check_bucket_name("192.168.1.1", false).is_err());
        assert!(check_bucket_name("bucket..name", false).is_err());
        assert!(check_bucket_name(&"a".repeat(64), false).is_err());
    }

    #[test]
    fn test_check_bucket_name_error_carries_name() {
        match check_bucket_name("a", false) {
            Err(ValidationErr::InvalidBucketName { name, reason }) => {
                assert_eq!(name, "a");
                assert!(reason.contains("less than 3"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_md5sum_hash() {
        // md5("") in base64
        assert_eq!(md5sum_hash(b""), "1B2M2Y8AsgTpgAmY7PhCfg==");
    }

    #[test]
    fn test_url_encode() {
        assert_eq!(url_encode("lifecycle"), "lifecycle");
        assert_eq!(url_encode("a b/c"), "a%20b%2Fc");
        assert_eq!(urlencode_object_key("dir/a b"), "dir/a%20b");
    }

    #[test]
    fn test_insert_marker() {
        let map = insert(None, "lifecycle");
        assert_eq!(map.get("lifecycle").map(String::as_str), Some(""));

        let mut extra = Multimap::new();
        extra.add("x", "1");
        let map = insert(Some(extra), "lifecycle");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_insert_keeps_existing_marker() {
        let mut extra = Multimap::new();
        extra.add("lifecycle", "");
        let map = insert(Some(extra), "lifecycle");
        assert_eq!(map.get_vec("lifecycle").map(Vec::len), Some(1));
        assert_eq!(map.to_query_string(), "lifecycle=");
    }

    #[test]
    fn test_match_region() {
        assert!(match_region("us-east-1"));
        assert!(!match_region("-bad"));
        assert!(!match_region("bad region"));
    }

    #[test]
    fn test_child_elements_in_order() {
        let root = Element::parse(
            "<Rule><Transition>1</Transition><ID>x</ID><Transition>2</Transition></Rule>"
                .as_bytes(),
        )
        .unwrap();
        let texts: Vec<String> = child_elements(&root, "Transition")
            .map(|e| e.get_text().unwrap_or_default().to_string())
            .collect();
        assert_eq!(texts, vec!["1", "2"]);
    }
}

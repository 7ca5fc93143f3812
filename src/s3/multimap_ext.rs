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

use crate::s3::error::NetworkError;
use crate::s3::utils::url_encode;
use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};

/// Multimap for string key and string value, used for headers and query parameters.
pub type Multimap = multimap::MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Returns true if a key equal to `key`, ignoring ASCII case, is present
    fn contains_key_ignore_case(&self, key: &str) -> bool;

    /// Converts multimap to HTTP query string
    fn to_query_string(&self) -> String;

    /// Converts multimap to an [`http::HeaderMap`], keeping every value of repeated keys
    fn to_header_map(&self) -> Result<HeaderMap, NetworkError>;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn contains_key_ignore_case(&self, key: &str) -> bool {
        self.keys().any(|k| k.eq_ignore_ascii_case(key))
    }

    fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, values) in self.iter_all() {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }

    fn to_header_map(&self) -> Result<HeaderMap, NetworkError> {
        let mut map = HeaderMap::with_capacity(self.len());
        for (key, values) in self.iter_all() {
            let name = HeaderName::from_bytes(key.as_bytes())?;
            for value in values {
                map.append(name.clone(), HeaderValue::from_str(value)?);
            }
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_keeps_empty_marker() {
        let mut query = Multimap::new();
        query.add("lifecycle", "");
        assert_eq!(query.to_query_string(), "lifecycle=");
    }

    #[test]
    fn test_query_string_encodes_values() {
        let mut query = Multimap::new();
        query.add("prefix", "a b");
        assert_eq!(query.to_query_string(), "prefix=a%20b");
    }

    #[test]
    fn test_contains_key_ignore_case() {
        let mut headers = Multimap::new();
        headers.add("Content-Type", "application/xml");
        assert!(headers.contains_key_ignore_case("content-type"));
        assert!(!headers.contains_key_ignore_case("content-md5"));
    }

    #[test]
    fn test_to_header_map() {
        let mut headers = Multimap::new();
        headers.add("x-custom", "a");
        headers.add("x-custom", "b");
        let map = headers.to_header_map().unwrap();
        let values: Vec<&str> = map
            .get_all("x-custom")
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn test_to_header_map_rejects_bad_name() {
        let mut headers = Multimap::new();
        headers.add("bad header", "a");
        assert!(headers.to_header_map().is_err());
    }
}

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

//! Validated wrappers for request parameters.
//!
//! A value that made it into one of these types has passed its checks, so
//! request building never re-validates it.

use crate::s3::error::ValidationErr;
use crate::s3::utils::{check_bucket_name, match_region};
use std::fmt;

/// A bucket name that follows the S3 naming rules.
///
/// ```
/// use s3_lifecycle::s3::types::BucketName;
///
/// let bucket = BucketName::new("my-bucket").unwrap();
/// assert_eq!(bucket.as_str(), "my-bucket");
///
/// assert!(BucketName::new("ab").is_err());
/// assert!(BucketName::new("192.168.1.1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BucketName(String);

impl BucketName {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationErr> {
        let name = name.into();
        check_bucket_name(&name, false)?;
        Ok(Self(name))
    }

    /// Like [`BucketName::new`] but rejects the legacy upper case and underscore forms.
    pub fn new_strict(name: impl Into<String>) -> Result<Self, ValidationErr> {
        let name = name.into();
        check_bucket_name(&name, true)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for BucketName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for BucketName {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BucketName {
    type Error = ValidationErr;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for BucketName {
    type Error = ValidationErr;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A region identifier such as `us-east-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Region(String);

impl Default for Region {
    fn default() -> Self {
        Self(crate::s3::client::DEFAULT_REGION.to_string())
    }
}

impl Region {
    pub fn new(region: impl Into<String>) -> Result<Self, ValidationErr> {
        let region = region.into();
        if region.trim().is_empty() {
            return Err(ValidationErr::InvalidRegion(
                "region cannot be empty".to_string(),
            ));
        }
        if !match_region(&region) {
            return Err(ValidationErr::InvalidRegion(region));
        }
        Ok(Self(region))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Region {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Region {
    type Error = ValidationErr;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Region {
    type Error = ValidationErr;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_name_valid() {
        let bucket: BucketName = "my-bucket".parse().unwrap();
        assert_eq!(bucket.as_str(), "my-bucket");
        assert_eq!(bucket.to_string(), "my-bucket");
        assert_eq!(bucket.into_inner(), "my-bucket");
    }

    #[test]
    fn test_bucket_name_rejected() {
        for name in ["", "ab", "192.168.1.1", "my..bucket", "my.-bucket", "-bucket"] {
            assert!(BucketName::new(name).is_err(), "{name:?} should be rejected");
        }
        assert!(BucketName::new("a".repeat(64)).is_err());
    }

    #[test]
    fn test_bucket_name_strict() {
        assert!(BucketName::new("My_Bucket").is_ok());
        assert!(BucketName::new_strict("My_Bucket").is_err());
    }

    #[test]
    fn test_region() {
        let region: Region = "eu-west-1".parse().unwrap();
        assert_eq!(region.as_str(), "eu-west-1");
        assert_eq!(Region::default().as_str(), "us-east-1");
        assert!(Region::new("").is_err());
        assert!(Region::try_from("  ").is_err());
        assert!(Region::new("eu west").is_err());
    }
}

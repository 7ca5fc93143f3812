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

//! Argument builders for the lifecycle APIs of [`Client`](crate::s3::client::Client)

mod delete_bucket_lifecycle;
mod get_bucket_lifecycle;
mod put_bucket_lifecycle;

pub use delete_bucket_lifecycle::*;
pub use get_bucket_lifecycle::*;
pub use put_bucket_lifecycle::*;

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! A bucket and object lifecycle client for Amazon S3.
//!
//! This crate wraps the base Amazon S3 [service API] with a small, typed
//! surface for managing buckets and objects: create/list/delete buckets,
//! upload/download/list/delete objects, canned ACLs, bucket versioning,
//! and presigned `GetObject` URLs. Every operation is a direct
//! pass-through to `aws-sdk-s3` with uniform error surfacing; there is no
//! caching, no retry layer of its own, and no shared mutable state.
//!
//! [service API]: https://docs.aws.amazon.com/AmazonS3/latest/API/API_Operations_Amazon_Simple_Storage_Service.html
//!
//! # Examples
//!
//! Load the default configuration and round-trip an object:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_lifecycle::error::Error> {
//! use aws_s3_lifecycle::operation::upload::UploadInput;
//!
//! let config = aws_s3_lifecycle::from_env().load().await;
//! let client = aws_s3_lifecycle::Client::new(config);
//!
//! client
//!     .upload(UploadInput::new("my-bucket", "my-key", "hello"))
//!     .await?;
//! let body = client.download("my-bucket", "my-key", None).await?;
//! assert_eq!(&body[..], b"hello");
//! # Ok(())
//! # }
//! ```

pub(crate) const MEBIBYTE: u64 = 1024 * 1024;

/// Error types emitted by `aws-s3-lifecycle`
pub mod error;

/// Common types used by `aws-s3-lifecycle`
pub mod types;

/// Lifecycle client
pub mod client;

/// Lifecycle operations
pub mod operation;

/// Client configuration
pub mod config;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}

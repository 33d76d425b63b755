/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::cmp;
use std::time::Duration;

use crate::types::PartSize;
use crate::MEBIBYTE;

pub(crate) mod loader;

/// Minimum part size in bytes accepted by the S3 multipart API
pub(crate) const MIN_PART_SIZE_BYTES: u64 = 5 * MEBIBYTE;

/// Part size used when [`PartSize::Auto`] is configured
pub(crate) const DEFAULT_PART_SIZE_BYTES: u64 = 10 * MEBIBYTE;

/// Default expiry for presigned `GetObject` URLs
pub(crate) const DEFAULT_PRESIGN_EXPIRES_IN: Duration = Duration::from_secs(5 * 60);

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    part_size: PartSize,
    presign_expires_in: Duration,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns a reference to the target part size for chunked transfers
    pub fn part_size(&self) -> &PartSize {
        &self.part_size
    }

    /// Returns how long a presigned URL remains valid
    pub fn presign_expires_in(&self) -> Duration {
        self.presign_expires_in
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    part_size: PartSize,
    presign_expires_in: Option<Duration>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// The target size of each part when using the chunked upload or download paths.
    ///
    /// The minimum part size is 5 MiB, any part size less than that will be rounded up.
    /// Default is [PartSize::Auto]
    pub fn part_size(self, part_size: PartSize) -> Self {
        let part_size = match part_size {
            PartSize::Target(explicit) => {
                PartSize::Target(cmp::max(explicit, MIN_PART_SIZE_BYTES))
            }
            ps => ps,
        };

        self.set_part_size(part_size)
    }

    /// Target part size for chunked transfers.
    ///
    /// NOTE: This does not validate the setting and is meant for internal use only.
    pub(crate) fn set_part_size(mut self, part_size: PartSize) -> Self {
        self.part_size = part_size;
        self
    }

    /// How long presigned `GetObject` URLs remain valid.
    ///
    /// Default is 5 minutes.
    pub fn presign_expires_in(mut self, expires_in: Duration) -> Self {
        self.presign_expires_in = Some(expires_in);
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    ///
    /// # Panics
    ///
    /// Panics if no client was provided. Use [`from_env`](crate::from_env) to
    /// construct a config from the ambient environment instead.
    pub fn build(self) -> Config {
        Config {
            part_size: self.part_size,
            presign_expires_in: self.presign_expires_in.unwrap_or(DEFAULT_PRESIGN_EXPIRES_IN),
            client: self.client.expect("client set"),
        }
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::Duration;

use crate::config::Builder;
use crate::types::PartSize;
use crate::Config;

/// Load lifecycle client [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
}

impl ConfigLoader {
    /// The target size of each part when using the chunked upload or download paths.
    ///
    /// The minimum part size is 5 MiB, any part size less than that will be rounded up.
    /// Default is [PartSize::Auto]
    pub fn part_size(mut self, part_size: PartSize) -> Self {
        self.builder = self.builder.part_size(part_size);
        self
    }

    /// How long presigned `GetObject` URLs remain valid.
    ///
    /// Default is 5 minutes.
    pub fn presign_expires_in(mut self, expires_in: Duration) -> Self {
        self.builder = self.builder.presign_expires_in(expires_in);
        self
    }

    /// Load the default configuration
    ///
    /// Credentials and region are resolved from the ambient environment the
    /// same way the AWS CLI resolves them. If fields have been overridden
    /// during builder construction, the override values will be used.
    pub async fn load(self) -> Config {
        let shared_config = aws_config::from_env().load().await;
        let s3_client = aws_sdk_s3::Client::new(&shared_config);
        self.builder.client(s3_client).build()
    }
}

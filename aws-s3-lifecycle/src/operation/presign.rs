/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::presigning::PresigningConfig;

use crate::client::Handle;
use crate::error::Error;

/// Generate a presigned `GetObject` URL using the configured expiry.
///
/// The URL is signed locally; no request is sent to the service.
pub(crate) async fn presigned_get_url(
    handle: &Handle,
    bucket: &str,
    key: &str,
) -> Result<String, Error> {
    let presigning = PresigningConfig::expires_in(handle.config.presign_expires_in())?;
    presigned_get_url_with(handle, bucket, key, presigning).await
}

pub(crate) async fn presigned_get_url_with(
    handle: &Handle,
    bucket: &str,
    key: &str,
    presigning: PresigningConfig,
) -> Result<String, Error> {
    let presigned = handle
        .client()
        .get_object()
        .bucket(bucket)
        .key(key)
        .presigned(presigning)
        .await
        .map_err(|err| {
            tracing::warn!(bucket, key, error = ?err, "failed to presign GetObject");
            Error::from(err)
        })?;

    Ok(presigned.uri().to_string())
}

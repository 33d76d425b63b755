/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::{Delete, ObjectIdentifier};

use crate::client::Handle;
use crate::error::{self, Error};

/// Delete a single object, optionally pinned to a specific version.
pub(crate) async fn delete_object(
    handle: &Handle,
    bucket: &str,
    key: &str,
    version_id: Option<&str>,
) -> Result<(), Error> {
    handle
        .client()
        .delete_object()
        .bucket(bucket)
        .key(key)
        .set_version_id(version_id.map(str::to_string))
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket, key, version_id, error = ?err, "failed to delete object");
            Error::from(err)
        })?;

    Ok(())
}

/// Delete a batch of keys in a single `DeleteObjects` request.
///
/// The response carries per-key results even when the request as a whole
/// succeeds, so the error list is checked before reporting success.
/// Returns the number of objects the service confirmed deleted.
pub(crate) async fn delete_objects(
    handle: &Handle,
    bucket: &str,
    keys: Vec<String>,
) -> Result<usize, Error> {
    if keys.is_empty() {
        return Err(error::invalid_input("no keys given for batch delete"));
    }

    let mut objects = Vec::with_capacity(keys.len());
    for key in keys {
        objects.push(ObjectIdentifier::builder().key(key).build()?);
    }

    let delete = Delete::builder()
        .set_objects(Some(objects))
        .quiet(false)
        .build()?;

    let resp = handle
        .client()
        .delete_objects()
        .bucket(bucket)
        .delete(delete)
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket, error = ?err, "failed to delete objects");
            Error::from(err)
        })?;

    let failed: Vec<String> = resp
        .errors
        .unwrap_or_default()
        .into_iter()
        .filter_map(|e| e.key)
        .collect();

    if !failed.is_empty() {
        tracing::warn!(bucket, failed_keys = ?failed, "batch delete reported per-key failures");
        return Err(error::batch_delete_failed(failed));
    }

    Ok(resp.deleted.unwrap_or_default().len())
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::cmp;
use std::path::Path;

use bytes::{Bytes, BytesMut};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::client::Handle;
use crate::error::{self, Error};

/// Download an object into memory, optionally pinned to a specific version.
pub(crate) async fn download(
    handle: &Handle,
    bucket: &str,
    key: &str,
    version_id: Option<&str>,
) -> Result<Bytes, Error> {
    let resp = handle
        .client()
        .get_object()
        .bucket(bucket)
        .key(key)
        .set_version_id(version_id.map(str::to_string))
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket, key, version_id, error = ?err, "failed to get object");
            Error::from(err)
        })?;

    let data = resp.body.collect().await.map_err(|err| {
        tracing::warn!(bucket, key, error = ?err, "failed to read object body");
        error::provider(err)
    })?;

    Ok(data.into_bytes())
}

/// Download an object to a local file, streaming the body chunk by chunk.
///
/// Returns the number of bytes written. The file handle is closed on every
/// exit path; flush and write failures surface as local I/O errors.
pub(crate) async fn download_to_file(
    handle: &Handle,
    bucket: &str,
    key: &str,
    path: &Path,
) -> Result<u64, Error> {
    let mut resp = handle
        .client()
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket, key, error = ?err, "failed to get object");
            Error::from(err)
        })?;

    let mut file = fs::File::create(path).await.map_err(|err| {
        tracing::warn!(path = %path.display(), error = ?err, "failed to create destination file");
        error::local_io(err)
    })?;

    let mut bytes_written: u64 = 0;
    while let Some(chunk) = resp.body.try_next().await.map_err(|err| {
        tracing::warn!(bucket, key, error = ?err, "failed to read object body");
        error::provider(err)
    })? {
        file.write_all(&chunk).await?;
        bytes_written += chunk.len() as u64;
    }
    file.flush().await?;

    Ok(bytes_written)
}

/// Download an object with sequential ranged `GetObject` requests.
///
/// Size is discovered with `HeadObject`; ranges are fetched in order and
/// appended to one contiguous buffer, so parts cannot be reordered.
pub(crate) async fn download_chunked(
    handle: &Handle,
    bucket: &str,
    key: &str,
) -> Result<Bytes, Error> {
    let head = handle
        .client()
        .head_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket, key, error = ?err, "failed to discover object size");
            Error::from(err)
        })?;

    let total = head.content_length.unwrap_or(0).max(0) as u64;
    let part_size = handle.part_size_bytes();
    tracing::trace!(bucket, key, total, part_size, "starting chunked download");

    let mut buf = BytesMut::with_capacity(total as usize);
    let mut start: u64 = 0;
    while start < total {
        let end = cmp::min(start + part_size, total) - 1;
        let resp = handle
            .client()
            .get_object()
            .bucket(bucket)
            .key(key)
            .range(format!("bytes={start}-{end}"))
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(bucket, key, start, end, error = ?err, "failed to get object range");
                Error::from(err)
            })?;

        let chunk = resp.body.collect().await.map_err(|err| {
            tracing::warn!(bucket, key, start, end, error = ?err, "failed to read object range body");
            error::provider(err)
        })?;
        buf.extend_from_slice(&chunk.into_bytes());
        start = end + 1;
    }

    if buf.len() as u64 != total {
        return Err(error::provider(format!(
            "chunked download size mismatch: expected {total} bytes, assembled {}",
            buf.len()
        )));
    }

    Ok(buf.freeze())
}

/// Download an object and decode it as UTF-8 text.
pub(crate) async fn object_text(handle: &Handle, bucket: &str, key: &str) -> Result<String, Error> {
    let body = download(handle, bucket, key, None).await?;
    String::from_utf8(body.to_vec()).map_err(|err| {
        tracing::warn!(bucket, key, error = ?err, "object content is not valid UTF-8");
        error::invalid_input(err)
    })
}

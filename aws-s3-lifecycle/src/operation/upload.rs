/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::cmp;
use std::path::Path;

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{CompletedMultipartUpload, CompletedPart};
use bytes::Bytes;

use crate::client::Handle;
use crate::error::{self, Error};
use crate::types::CannedAcl;

/// Request type for uploading a single object from memory.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct UploadInput {
    /// Destination bucket
    pub bucket: String,
    /// Destination key
    pub key: String,
    /// Content to upload
    pub body: Bytes,
    /// Canned ACL applied to the resulting object. Default is none
    /// (service default, `private`).
    pub acl: Option<CannedAcl>,
}

impl UploadInput {
    /// Create a new input for the given bucket, key, and content.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            body: body.into(),
            acl: None,
        }
    }

    /// Apply a canned ACL to the uploaded object.
    pub fn acl(mut self, acl: CannedAcl) -> Self {
        self.acl = Some(acl);
        self
    }
}

/// Response type for uploads.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct UploadOutput {
    /// Entity tag of the stored object
    pub e_tag: Option<String>,
    /// Version id assigned by the service when the bucket is versioned
    pub version_id: Option<String>,
    /// Multipart upload id, set only when the multipart path was used
    pub upload_id: Option<String>,
}

/// Upload a single object, choosing the single-request or multipart path
/// based on the configured part size.
pub(crate) async fn upload(handle: &Handle, input: UploadInput) -> Result<UploadOutput, Error> {
    let part_size = handle.part_size_bytes();
    let content_length = input.body.len() as u64;

    if content_length <= part_size {
        tracing::trace!(
            "upload content size ({content_length}) within part size ({part_size}); sending as single PutObject request"
        );
        put_object(handle, &input).await
    } else {
        tracing::trace!(
            "upload content size ({content_length}) exceeds part size ({part_size}); using multipart upload"
        );
        multipart_upload(handle, &input, part_size as usize).await
    }
}

/// Upload a local file as a single `PutObject` request.
///
/// The open happens before any remote call; open failures surface as local
/// I/O errors. The file handle is owned by the request body stream and
/// closed when the request completes, on success or failure.
pub(crate) async fn upload_file(
    handle: &Handle,
    bucket: &str,
    key: &str,
    path: &Path,
    acl: Option<CannedAcl>,
) -> Result<UploadOutput, Error> {
    let body = ByteStream::from_path(path).await.map_err(|err| {
        tracing::warn!(path = %path.display(), error = ?err, "failed to open file for upload");
        error::local_io(err)
    })?;

    let resp = handle
        .client()
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(body)
        .set_acl(acl.map(CannedAcl::to_object_acl))
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket, key, path = %path.display(), error = ?err, "failed to upload file");
            Error::from(err)
        })?;

    Ok(UploadOutput {
        e_tag: resp.e_tag,
        version_id: resp.version_id,
        upload_id: None,
    })
}

async fn put_object(handle: &Handle, input: &UploadInput) -> Result<UploadOutput, Error> {
    let content_length = input.body.len() as i64;
    let resp = handle
        .client()
        .put_object()
        .bucket(&input.bucket)
        .key(&input.key)
        .content_length(content_length)
        .body(ByteStream::from(input.body.clone()))
        .set_acl(input.acl.map(CannedAcl::to_object_acl))
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket = %input.bucket, key = %input.key, error = ?err, "failed to upload object");
            Error::from(err)
        })?;

    Ok(UploadOutput {
        e_tag: resp.e_tag,
        version_id: resp.version_id,
        upload_id: None,
    })
}

async fn multipart_upload(
    handle: &Handle,
    input: &UploadInput,
    part_size: usize,
) -> Result<UploadOutput, Error> {
    let mpu = handle
        .client()
        .create_multipart_upload()
        .bucket(&input.bucket)
        .key(&input.key)
        .set_acl(input.acl.map(CannedAcl::to_object_acl))
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket = %input.bucket, key = %input.key, error = ?err, "failed to start multipart upload");
            Error::from(err)
        })?;

    let upload_id = mpu
        .upload_id
        .ok_or_else(|| error::provider("CreateMultipartUpload response missing upload id"))?;
    tracing::trace!(%upload_id, "multipart upload started");

    let total = input.body.len();
    let mut completed_parts = Vec::with_capacity(total.div_ceil(part_size));
    let mut offset = 0;
    let mut part_number = 1i32;

    while offset < total {
        let end = cmp::min(offset + part_size, total);
        let chunk = input.body.slice(offset..end);

        let resp = match handle
            .client()
            .upload_part()
            .bucket(&input.bucket)
            .key(&input.key)
            .upload_id(&upload_id)
            .part_number(part_number)
            .content_length(chunk.len() as i64)
            .body(ByteStream::from(chunk))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(
                    bucket = %input.bucket,
                    key = %input.key,
                    %upload_id,
                    part_number,
                    error = ?err,
                    "failed to upload part"
                );
                abort_upload(handle, input, &upload_id).await;
                return Err(err.into());
            }
        };

        completed_parts.push(
            CompletedPart::builder()
                .set_e_tag(resp.e_tag)
                .part_number(part_number)
                .build(),
        );

        offset = end;
        part_number += 1;
    }

    let resp = handle
        .client()
        .complete_multipart_upload()
        .bucket(&input.bucket)
        .key(&input.key)
        .upload_id(&upload_id)
        .multipart_upload(
            CompletedMultipartUpload::builder()
                .set_parts(Some(completed_parts))
                .build(),
        )
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket = %input.bucket, key = %input.key, %upload_id, error = ?err, "failed to complete multipart upload");
            Error::from(err)
        })?;

    Ok(UploadOutput {
        e_tag: resp.e_tag,
        version_id: resp.version_id,
        upload_id: Some(upload_id),
    })
}

/// Best-effort abort of an in-progress multipart upload.
///
/// An abort failure is logged, not returned, so it cannot mask the error
/// that triggered the abort.
async fn abort_upload(handle: &Handle, input: &UploadInput, upload_id: &str) {
    if let Err(err) = handle
        .client()
        .abort_multipart_upload()
        .bucket(&input.bucket)
        .key(&input.key)
        .upload_id(upload_id)
        .send()
        .await
    {
        tracing::warn!(
            bucket = %input.bucket,
            key = %input.key,
            upload_id,
            error = ?err,
            "failed to abort multipart upload"
        );
    }
}

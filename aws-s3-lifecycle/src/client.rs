/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::Path;
use std::sync::Arc;

use aws_sdk_s3::presigning::PresigningConfig;
use bytes::Bytes;

use crate::config::DEFAULT_PART_SIZE_BYTES;
use crate::error::Error;
use crate::operation;
use crate::operation::bucket::CreateBucketInput;
use crate::operation::upload::{UploadInput, UploadOutput};
use crate::types::{
    AclGrant, BucketSummary, CannedAcl, ObjectSummary, ObjectVersionSummary, PartSize,
};
use crate::Config;

/// Bucket and object lifecycle client for Amazon Simple Storage Service.
///
/// The client is a cheap handle that can be cloned freely; all clones share
/// the same underlying configuration and S3 client. Operations are
/// stateless and independent, so concurrent calls need no coordination.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, env details, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: Config,
}

impl Handle {
    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.config.client()
    }

    /// Get the concrete part size in bytes to use for the chunked upload and
    /// download paths.
    pub(crate) fn part_size_bytes(&self) -> u64 {
        match self.config.part_size() {
            PartSize::Auto => DEFAULT_PART_SIZE_BYTES,
            PartSize::Target(explicit) => *explicit,
        }
    }
}

impl Client {
    /// Creates a new client from a lifecycle [`Config`].
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// List all buckets owned by the configured account.
    pub async fn list_buckets(&self) -> Result<Vec<BucketSummary>, Error> {
        operation::bucket::list_buckets(&self.handle).await
    }

    /// Check whether a bucket exists.
    ///
    /// A missing bucket is not an error: `HeadBucket` returning not-found
    /// maps to `Ok(false)`. Any other failure (no access to the bucket,
    /// transport error) is returned as an error.
    pub async fn bucket_exists(&self, bucket: &str) -> Result<bool, Error> {
        operation::bucket::bucket_exists(&self.handle, bucket).await
    }

    /// Create a bucket.
    ///
    /// See [`CreateBucketInput`] for the optional canned ACL and versioning
    /// settings. When versioning is requested the bucket is created first
    /// and versioning enabled with a follow-up call; if that second call
    /// fails the bucket still exists and the error is returned as-is.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use aws_s3_lifecycle::{Client, error::Error};
    /// # use aws_s3_lifecycle::operation::bucket::CreateBucketInput;
    /// # async fn example(client: &Client) -> Result<(), Error> {
    /// client
    ///     .create_bucket(CreateBucketInput::new("my-bucket", "us-west-2"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_bucket(&self, input: CreateBucketInput) -> Result<(), Error> {
        operation::bucket::create_bucket(&self.handle, input).await
    }

    /// Create a bucket with the `public-read-write` canned ACL.
    pub async fn create_public_bucket(&self, bucket: &str, region: &str) -> Result<(), Error> {
        let input = CreateBucketInput::new(bucket, region).acl(CannedAcl::PublicReadWrite);
        operation::bucket::create_bucket(&self.handle, input).await
    }

    /// Create a public bucket and enable versioning on it.
    ///
    /// If enabling versioning fails the bucket still exists; the error from
    /// the versioning call is returned.
    pub async fn create_versioned_bucket(&self, bucket: &str, region: &str) -> Result<(), Error> {
        let input = CreateBucketInput::new(bucket, region)
            .acl(CannedAcl::PublicReadWrite)
            .versioned(true);
        operation::bucket::create_bucket(&self.handle, input).await
    }

    /// Enable versioning on an existing bucket.
    pub async fn enable_bucket_versioning(&self, bucket: &str) -> Result<(), Error> {
        operation::bucket::enable_versioning(&self.handle, bucket).await
    }

    /// Apply a canned ACL to a bucket.
    pub async fn put_bucket_acl(&self, bucket: &str, acl: CannedAcl) -> Result<(), Error> {
        operation::bucket::put_bucket_acl(&self.handle, bucket, acl).await
    }

    /// Fetch the ACL grants currently attached to a bucket.
    pub async fn get_bucket_acl(&self, bucket: &str) -> Result<Vec<AclGrant>, Error> {
        operation::bucket::get_bucket_acl(&self.handle, bucket).await
    }

    /// Delete a bucket.
    ///
    /// No local emptiness check is performed; the service rejects deletion
    /// of a non-empty bucket.
    pub async fn delete_bucket(&self, bucket: &str) -> Result<(), Error> {
        operation::bucket::delete_bucket(&self.handle, bucket).await
    }

    /// Upload an object from an in-memory buffer.
    ///
    /// Content no larger than the configured part size is sent as a single
    /// `PutObject` request. Larger content is sent as a multipart upload at
    /// the configured part size, one part at a time.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use aws_s3_lifecycle::{Client, error::Error};
    /// # use aws_s3_lifecycle::operation::upload::UploadInput;
    /// # use aws_s3_lifecycle::types::CannedAcl;
    /// # async fn example(client: &Client) -> Result<(), Error> {
    /// let input = UploadInput::new("my-bucket", "my-key", "hello world")
    ///     .acl(CannedAcl::PublicRead);
    /// let output = client.upload(input).await?;
    /// println!("etag: {:?}", output.e_tag);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload(&self, input: UploadInput) -> Result<UploadOutput, Error> {
        operation::upload::upload(&self.handle, input).await
    }

    /// Upload a local file as a single `PutObject` request.
    ///
    /// The file is opened for read and streamed as the request body; an
    /// open failure surfaces before any remote call is made.
    pub async fn upload_file(
        &self,
        bucket: &str,
        key: &str,
        path: impl AsRef<Path>,
    ) -> Result<UploadOutput, Error> {
        operation::upload::upload_file(&self.handle, bucket, key, path.as_ref(), None).await
    }

    /// Upload a local file and apply a canned ACL to the resulting object.
    pub async fn upload_file_with_acl(
        &self,
        bucket: &str,
        key: &str,
        path: impl AsRef<Path>,
        acl: CannedAcl,
    ) -> Result<UploadOutput, Error> {
        operation::upload::upload_file(&self.handle, bucket, key, path.as_ref(), Some(acl)).await
    }

    /// Apply a canned ACL to an existing object.
    pub async fn put_object_acl(
        &self,
        bucket: &str,
        key: &str,
        acl: CannedAcl,
    ) -> Result<(), Error> {
        operation::acl::put_object_acl(&self.handle, bucket, key, acl).await
    }

    /// Fetch the ACL grants currently attached to an object.
    pub async fn get_object_acl(&self, bucket: &str, key: &str) -> Result<Vec<AclGrant>, Error> {
        operation::acl::get_object_acl(&self.handle, bucket, key).await
    }

    /// Download an object into memory.
    ///
    /// Pass a `version_id` to fetch a specific version from a versioned
    /// bucket; `None` fetches the latest.
    pub async fn download(
        &self,
        bucket: &str,
        key: &str,
        version_id: Option<&str>,
    ) -> Result<Bytes, Error> {
        operation::download::download(&self.handle, bucket, key, version_id).await
    }

    /// Download an object to a local file, returning the number of bytes written.
    ///
    /// The destination is created (truncating any existing file). Create and
    /// write failures surface as local I/O errors; the file handle is closed
    /// on every exit path.
    pub async fn download_to_file(
        &self,
        bucket: &str,
        key: &str,
        path: impl AsRef<Path>,
    ) -> Result<u64, Error> {
        operation::download::download_to_file(&self.handle, bucket, key, path.as_ref()).await
    }

    /// Download an object with sequential ranged `GetObject` requests.
    ///
    /// The object size is discovered with `HeadObject`, then each part-sized
    /// range is fetched in order and reassembled into one contiguous buffer.
    pub async fn download_chunked(&self, bucket: &str, key: &str) -> Result<Bytes, Error> {
        operation::download::download_chunked(&self.handle, bucket, key).await
    }

    /// Download an object and decode its content as UTF-8 text.
    pub async fn get_object_text(&self, bucket: &str, key: &str) -> Result<String, Error> {
        operation::download::object_text(&self.handle, bucket, key).await
    }

    /// Generate a presigned `GetObject` URL for an object.
    ///
    /// The URL expires after the configured duration (5 minutes by default).
    pub async fn presigned_get_url(&self, bucket: &str, key: &str) -> Result<String, Error> {
        operation::presign::presigned_get_url(&self.handle, bucket, key).await
    }

    /// Generate a presigned `GetObject` URL with an explicit presigning config.
    pub async fn presigned_get_url_with(
        &self,
        bucket: &str,
        key: &str,
        presigning: PresigningConfig,
    ) -> Result<String, Error> {
        operation::presign::presigned_get_url_with(&self.handle, bucket, key, presigning).await
    }

    /// List every object in a bucket, following pagination to the end.
    pub async fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectSummary>, Error> {
        operation::list::list_objects(&self.handle, bucket).await
    }

    /// List every object version in a bucket, following pagination to the end.
    pub async fn list_object_versions(
        &self,
        bucket: &str,
    ) -> Result<Vec<ObjectVersionSummary>, Error> {
        operation::list::list_object_versions(&self.handle, bucket).await
    }

    /// Delete a single object by key.
    pub async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), Error> {
        operation::delete::delete_object(&self.handle, bucket, key, None).await
    }

    /// Delete a specific version of an object.
    pub async fn delete_object_version(
        &self,
        bucket: &str,
        key: &str,
        version_id: &str,
    ) -> Result<(), Error> {
        operation::delete::delete_object(&self.handle, bucket, key, Some(version_id)).await
    }

    /// Delete a batch of objects in a single `DeleteObjects` request.
    ///
    /// All keys are sent in one request. The response's per-key error list
    /// is checked: if any key failed, a
    /// [`BatchDeleteFailed`](crate::error::ErrorKind::BatchDeleteFailed)
    /// error naming the failed keys is returned. On success the number of
    /// deleted objects is returned.
    pub async fn delete_objects(
        &self,
        bucket: &str,
        keys: Vec<String>,
    ) -> Result<usize, Error> {
        operation::delete::delete_objects(&self.handle, bucket, keys).await
    }
}

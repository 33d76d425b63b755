/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::primitives::DateTime;
use aws_sdk_s3::types::{BucketCannedAcl, ObjectCannedAcl};

/// The target part size for the chunked upload and download paths.
#[derive(Debug, Clone, Default)]
pub enum PartSize {
    /// Use the default part size (10 MiB).
    #[default]
    Auto,

    /// Target part size explicitly given, in bytes.
    ///
    /// NOTE: Part sizes below the S3 minimum of 5 MiB are rounded up.
    Target(u64),
}

/// Predefined access-control policy applied to a bucket or object.
///
/// Values map one-to-one onto the canned ACL identifiers in the S3 API
/// (`private`, `public-read`, `public-read-write`, `authenticated-read`).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[non_exhaustive]
pub enum CannedAcl {
    /// Owner gets full control, nobody else has access
    Private,
    /// Owner gets full control, all users get read access
    PublicRead,
    /// Owner gets full control, all users get read and write access
    PublicReadWrite,
    /// Owner gets full control, authenticated users get read access
    AuthenticatedRead,
}

impl CannedAcl {
    pub(crate) fn to_bucket_acl(self) -> BucketCannedAcl {
        match self {
            CannedAcl::Private => BucketCannedAcl::Private,
            CannedAcl::PublicRead => BucketCannedAcl::PublicRead,
            CannedAcl::PublicReadWrite => BucketCannedAcl::PublicReadWrite,
            CannedAcl::AuthenticatedRead => BucketCannedAcl::AuthenticatedRead,
        }
    }

    pub(crate) fn to_object_acl(self) -> ObjectCannedAcl {
        match self {
            CannedAcl::Private => ObjectCannedAcl::Private,
            CannedAcl::PublicRead => ObjectCannedAcl::PublicRead,
            CannedAcl::PublicReadWrite => ObjectCannedAcl::PublicReadWrite,
            CannedAcl::AuthenticatedRead => ObjectCannedAcl::AuthenticatedRead,
        }
    }
}

/// Descriptor for a bucket returned by `ListBuckets`.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct BucketSummary {
    /// Bucket name
    pub name: Option<String>,
    /// When the bucket was created
    pub creation_date: Option<DateTime>,
}

impl From<aws_sdk_s3::types::Bucket> for BucketSummary {
    fn from(value: aws_sdk_s3::types::Bucket) -> Self {
        Self {
            name: value.name,
            creation_date: value.creation_date,
        }
    }
}

/// Descriptor for an object returned by `ListObjectsV2`.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct ObjectSummary {
    /// Object key
    pub key: Option<String>,
    /// Size of the object in bytes
    pub size: Option<i64>,
    /// Entity tag computed by the service for the stored content
    pub e_tag: Option<String>,
    /// When the object was last modified
    pub last_modified: Option<DateTime>,
}

impl From<aws_sdk_s3::types::Object> for ObjectSummary {
    fn from(value: aws_sdk_s3::types::Object) -> Self {
        Self {
            key: value.key,
            size: value.size,
            e_tag: value.e_tag,
            last_modified: value.last_modified,
        }
    }
}

/// Descriptor for an object version returned by `ListObjectVersions`.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct ObjectVersionSummary {
    /// Object key
    pub key: Option<String>,
    /// Version identifier assigned by the service
    pub version_id: Option<String>,
    /// Whether this version is the latest for its key
    pub is_latest: Option<bool>,
    /// Size of the version in bytes
    pub size: Option<i64>,
    /// When the version was created
    pub last_modified: Option<DateTime>,
}

impl From<aws_sdk_s3::types::ObjectVersion> for ObjectVersionSummary {
    fn from(value: aws_sdk_s3::types::ObjectVersion) -> Self {
        Self {
            key: value.key,
            version_id: value.version_id,
            is_latest: value.is_latest,
            size: value.size,
            last_modified: value.last_modified,
        }
    }
}

/// A single grantee/permission pair attached to a bucket or object ACL.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct AclGrant {
    /// The grantee, as a display name, canonical user id, group URI, or
    /// email address, whichever the service populated.
    pub grantee: Option<String>,
    /// Permission level granted (e.g. `FULL_CONTROL`, `READ`, `WRITE`)
    pub permission: Option<String>,
}

impl From<aws_sdk_s3::types::Grant> for AclGrant {
    fn from(value: aws_sdk_s3::types::Grant) -> Self {
        let grantee = value.grantee.and_then(|g| {
            g.display_name
                .or(g.id)
                .or(g.uri)
                .or(g.email_address)
        });
        Self {
            grantee,
            permission: value.permission.map(|p| p.as_str().to_string()),
        }
    }
}

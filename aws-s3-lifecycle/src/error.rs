/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

use aws_sdk_s3::error::ProvideErrorMetadata;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of lifecycle errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// Local file open/create/read/write failure during an upload or download helper
    LocalIo,

    /// Target bucket, object, or version does not exist
    NotFound,

    /// Any other remote API failure (auth, permissions, throttling, malformed request)
    Provider,

    /// One or more keys in a batch delete were not deleted
    BatchDeleteFailed(BatchDeleteFailed),
}

/// Per-key failure detail for a batch delete request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchDeleteFailed {
    failed_keys: Vec<String>,
}

impl BatchDeleteFailed {
    /// Keys the service reported as not deleted.
    pub fn failed_keys(&self) -> &[String] {
        &self.failed_keys
    }
}

impl Error {
    /// Creates a new lifecycle [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns true if the target bucket, object, or version did not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::LocalIo => write!(f, "local I/O error"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::Provider => write!(f, "S3 request failed"),
            ErrorKind::BatchDeleteFailed(detail) => {
                write!(
                    f,
                    "batch delete failed for {} key(s): {:?}",
                    detail.failed_keys.len(),
                    detail.failed_keys
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::LocalIo, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl From<aws_sdk_s3::presigning::PresigningConfigError> for Error {
    fn from(value: aws_sdk_s3::presigning::PresigningConfigError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        let kind = match value.code() {
            Some("NotFound" | "NoSuchKey" | "NoSuchBucket" | "NoSuchVersion") => {
                ErrorKind::NotFound
            }
            _ => ErrorKind::Provider,
        };

        Error::new(kind, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn local_io<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::LocalIo, err)
}

pub(crate) fn provider<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::Provider, err)
}

pub(crate) fn batch_delete_failed(failed_keys: Vec<String>) -> Error {
    let detail = BatchDeleteFailed { failed_keys };
    Error::new(
        ErrorKind::BatchDeleteFailed(detail),
        "the service reported per-key delete failures",
    )
}

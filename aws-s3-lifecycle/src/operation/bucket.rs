/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::{
    BucketLocationConstraint, BucketVersioningStatus, CreateBucketConfiguration,
    VersioningConfiguration,
};

use crate::client::Handle;
use crate::error::Error;
use crate::types::{AclGrant, BucketSummary, CannedAcl};

/// Request type for creating a bucket.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CreateBucketInput {
    /// Bucket name, globally unique in the provider namespace
    pub bucket: String,
    /// Region the bucket is created in, sent as the location constraint
    pub region: String,
    /// Canned ACL applied at creation time. Default is none (service
    /// default, `private`).
    pub acl: Option<CannedAcl>,
    /// Enable versioning with a follow-up call after creation. Default is false.
    pub versioned: bool,
}

impl CreateBucketInput {
    /// Create a new input for the given bucket name and region.
    pub fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
            acl: None,
            versioned: false,
        }
    }

    /// Apply a canned ACL at creation time.
    pub fn acl(mut self, acl: CannedAcl) -> Self {
        self.acl = Some(acl);
        self
    }

    /// Enable versioning on the bucket after it is created.
    pub fn versioned(mut self, versioned: bool) -> Self {
        self.versioned = versioned;
        self
    }
}

pub(crate) async fn list_buckets(handle: &Handle) -> Result<Vec<BucketSummary>, Error> {
    let resp = handle.client().list_buckets().send().await.map_err(|err| {
        tracing::warn!(error = ?err, "failed to list buckets");
        Error::from(err)
    })?;

    Ok(resp
        .buckets
        .unwrap_or_default()
        .into_iter()
        .map(BucketSummary::from)
        .collect())
}

/// Check bucket existence with `HeadBucket`.
///
/// Not-found is normalized to `Ok(false)`; every other failure is an error.
pub(crate) async fn bucket_exists(handle: &Handle, bucket: &str) -> Result<bool, Error> {
    match handle.client().head_bucket().bucket(bucket).send().await {
        Ok(_) => Ok(true),
        Err(err) => {
            let not_found = err
                .as_service_error()
                .map(|e| e.is_not_found())
                .unwrap_or(false);
            if not_found {
                tracing::debug!(bucket, "bucket does not exist");
                Ok(false)
            } else {
                tracing::warn!(bucket, error = ?err, "failed to check bucket existence");
                Err(err.into())
            }
        }
    }
}

pub(crate) async fn create_bucket(handle: &Handle, input: CreateBucketInput) -> Result<(), Error> {
    let constraint = BucketLocationConstraint::from(input.region.as_str());
    let bucket_config = CreateBucketConfiguration::builder()
        .location_constraint(constraint)
        .build();

    handle
        .client()
        .create_bucket()
        .bucket(&input.bucket)
        .create_bucket_configuration(bucket_config)
        .set_acl(input.acl.map(CannedAcl::to_bucket_acl))
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket = %input.bucket, region = %input.region, error = ?err, "failed to create bucket");
            Error::from(err)
        })?;

    if input.versioned {
        // The bucket exists at this point; a versioning failure is reported
        // without rolling back the create.
        enable_versioning(handle, &input.bucket).await?;
    }

    Ok(())
}

pub(crate) async fn enable_versioning(handle: &Handle, bucket: &str) -> Result<(), Error> {
    let versioning = VersioningConfiguration::builder()
        .status(BucketVersioningStatus::Enabled)
        .build();

    handle
        .client()
        .put_bucket_versioning()
        .bucket(bucket)
        .versioning_configuration(versioning)
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket, error = ?err, "failed to enable bucket versioning");
            Error::from(err)
        })?;

    Ok(())
}

pub(crate) async fn put_bucket_acl(
    handle: &Handle,
    bucket: &str,
    acl: CannedAcl,
) -> Result<(), Error> {
    handle
        .client()
        .put_bucket_acl()
        .bucket(bucket)
        .acl(acl.to_bucket_acl())
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket, error = ?err, "failed to put bucket ACL");
            Error::from(err)
        })?;

    Ok(())
}

pub(crate) async fn get_bucket_acl(handle: &Handle, bucket: &str) -> Result<Vec<AclGrant>, Error> {
    let resp = handle
        .client()
        .get_bucket_acl()
        .bucket(bucket)
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket, error = ?err, "failed to get bucket ACL");
            Error::from(err)
        })?;

    Ok(resp
        .grants
        .unwrap_or_default()
        .into_iter()
        .map(AclGrant::from)
        .collect())
}

pub(crate) async fn delete_bucket(handle: &Handle, bucket: &str) -> Result<(), Error> {
    handle
        .client()
        .delete_bucket()
        .bucket(bucket)
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket, error = ?err, "failed to delete bucket");
            Error::from(err)
        })?;

    Ok(())
}

#[cfg(test)]
mod test {
    use crate::operation::bucket::CreateBucketInput;
    use crate::types::CannedAcl;
    use aws_sdk_s3::operation::create_bucket::CreateBucketOutput;
    use aws_sdk_s3::operation::head_bucket::{HeadBucketError, HeadBucketOutput};
    use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
    use aws_sdk_s3::operation::put_bucket_versioning::PutBucketVersioningOutput;
    use aws_sdk_s3::types::error::NotFound;
    use aws_sdk_s3::types::{Bucket, BucketCannedAcl, BucketVersioningStatus};
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};

    fn client_for(s3_client: aws_sdk_s3::Client) -> crate::Client {
        let config = crate::Config::builder().client(s3_client).build();
        crate::Client::new(config)
    }

    #[tokio::test]
    async fn test_bucket_exists_not_found_is_not_an_error() {
        let head = mock!(aws_sdk_s3::Client::head_bucket)
            .then_error(|| HeadBucketError::NotFound(NotFound::builder().build()));
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&head]);

        let client = client_for(s3);
        let exists = client.bucket_exists("absent-bucket").await.unwrap();
        assert!(!exists);
    }

    #[tokio::test]
    async fn test_bucket_exists() {
        let head = mock!(aws_sdk_s3::Client::head_bucket)
            .match_requests(|r| r.bucket() == Some("my-bucket"))
            .then_output(|| HeadBucketOutput::builder().build());
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&head]);

        let client = client_for(s3);
        let exists = client.bucket_exists("my-bucket").await.unwrap();
        assert!(exists);
    }

    #[tokio::test]
    async fn test_bucket_exists_other_errors_surface() {
        let head = mock!(aws_sdk_s3::Client::head_bucket).then_error(|| {
            HeadBucketError::generic(
                aws_sdk_s3::error::ErrorMetadata::builder()
                    .code("AccessDenied")
                    .message("no access")
                    .build(),
            )
        });
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&head]);

        let client = client_for(s3);
        let err = client.bucket_exists("forbidden-bucket").await.unwrap_err();
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_buckets() {
        let list = mock!(aws_sdk_s3::Client::list_buckets).then_output(|| {
            ListBucketsOutput::builder()
                .buckets(Bucket::builder().name("alpha").build())
                .buckets(Bucket::builder().name("beta").build())
                .build()
        });
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list]);

        let client = client_for(s3);
        let buckets = client.list_buckets().await.unwrap();
        let names: Vec<_> = buckets.iter().filter_map(|b| b.name.as_deref()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[tokio::test]
    async fn test_create_versioned_bucket_issues_followup_call() {
        let create = mock!(aws_sdk_s3::Client::create_bucket)
            .match_requests(|r| {
                r.bucket() == Some("versioned-bucket")
                    && r.acl() == Some(&BucketCannedAcl::PublicReadWrite)
            })
            .then_output(|| CreateBucketOutput::builder().build());
        let versioning = mock!(aws_sdk_s3::Client::put_bucket_versioning)
            .match_requests(|r| {
                r.bucket() == Some("versioned-bucket")
                    && r.versioning_configuration()
                        .and_then(|v| v.status())
                        == Some(&BucketVersioningStatus::Enabled)
            })
            .then_output(|| PutBucketVersioningOutput::builder().build());
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&create, &versioning]);

        let client = client_for(s3);
        client
            .create_versioned_bucket("versioned-bucket", "us-west-2")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_bucket_sets_location_constraint() {
        let create = mock!(aws_sdk_s3::Client::create_bucket)
            .match_requests(|r| {
                r.create_bucket_configuration()
                    .and_then(|c| c.location_constraint())
                    .map(|lc| lc.as_str())
                    == Some("eu-central-1")
            })
            .then_output(|| CreateBucketOutput::builder().build());
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&create]);

        let client = client_for(s3);
        let input = CreateBucketInput::new("b1", "eu-central-1").acl(CannedAcl::Private);
        client.create_bucket(input).await.unwrap();
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::client::Handle;
use crate::error::Error;
use crate::types::{AclGrant, CannedAcl};

pub(crate) async fn put_object_acl(
    handle: &Handle,
    bucket: &str,
    key: &str,
    acl: CannedAcl,
) -> Result<(), Error> {
    handle
        .client()
        .put_object_acl()
        .bucket(bucket)
        .key(key)
        .acl(acl.to_object_acl())
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket, key, error = ?err, "failed to put object ACL");
            Error::from(err)
        })?;

    Ok(())
}

pub(crate) async fn get_object_acl(
    handle: &Handle,
    bucket: &str,
    key: &str,
) -> Result<Vec<AclGrant>, Error> {
    let resp = handle
        .client()
        .get_object_acl()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(bucket, key, error = ?err, "failed to get object ACL");
            Error::from(err)
        })?;

    Ok(resp
        .grants
        .unwrap_or_default()
        .into_iter()
        .map(AclGrant::from)
        .collect())
}

#[cfg(test)]
mod test {
    use crate::types::CannedAcl;
    use aws_sdk_s3::operation::get_object_acl::GetObjectAclOutput;
    use aws_sdk_s3::operation::put_object_acl::PutObjectAclOutput;
    use aws_sdk_s3::types::{Grant, Grantee, ObjectCannedAcl, Permission, Type};
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};

    fn client_for(s3_client: aws_sdk_s3::Client) -> crate::Client {
        let config = crate::Config::builder().client(s3_client).build();
        crate::Client::new(config)
    }

    #[tokio::test]
    async fn test_put_object_acl_sends_canned_acl() {
        let put = mock!(aws_sdk_s3::Client::put_object_acl)
            .match_requests(|r| {
                r.bucket() == Some("b")
                    && r.key() == Some("k")
                    && r.acl() == Some(&ObjectCannedAcl::PublicRead)
            })
            .then_output(|| PutObjectAclOutput::builder().build());
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put]);

        let client = client_for(s3);
        client
            .put_object_acl("b", "k", CannedAcl::PublicRead)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_get_object_acl_maps_grants() {
        let get = mock!(aws_sdk_s3::Client::get_object_acl).then_output(|| {
            GetObjectAclOutput::builder()
                .grants(
                    Grant::builder()
                        .grantee(
                            Grantee::builder()
                                .display_name("owner")
                                .r#type(Type::CanonicalUser)
                                .build()
                                .unwrap(),
                        )
                        .permission(Permission::FullControl)
                        .build(),
                )
                .build()
        });
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get]);

        let client = client_for(s3);
        let grants = client.get_object_acl("b", "k").await.unwrap();
        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].grantee.as_deref(), Some("owner"));
        assert_eq!(grants[0].permission.as_deref(), Some("FULL_CONTROL"));
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::client::Handle;
use crate::error::Error;
use crate::types::{ObjectSummary, ObjectVersionSummary};

/// List every object in a bucket via `ListObjectsV2`, following
/// continuation tokens until the listing is exhausted.
pub(crate) async fn list_objects(
    handle: &Handle,
    bucket: &str,
) -> Result<Vec<ObjectSummary>, Error> {
    let mut summaries = Vec::new();
    let mut continuation_token: Option<String> = None;

    loop {
        let resp = handle
            .client()
            .list_objects_v2()
            .bucket(bucket)
            .set_continuation_token(continuation_token.take())
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(bucket, error = ?err, "failed to list objects");
                Error::from(err)
            })?;

        summaries.extend(
            resp.contents
                .unwrap_or_default()
                .into_iter()
                .map(ObjectSummary::from),
        );

        let is_truncated = resp.is_truncated.unwrap_or(false);
        match resp.next_continuation_token {
            Some(token) if is_truncated => continuation_token = Some(token),
            _ => break,
        }
    }

    Ok(summaries)
}

/// List every object version in a bucket via `ListObjectVersions`,
/// following key/version-id markers until the listing is exhausted.
pub(crate) async fn list_object_versions(
    handle: &Handle,
    bucket: &str,
) -> Result<Vec<ObjectVersionSummary>, Error> {
    let mut summaries = Vec::new();
    let mut key_marker: Option<String> = None;
    let mut version_id_marker: Option<String> = None;

    loop {
        let resp = handle
            .client()
            .list_object_versions()
            .bucket(bucket)
            .set_key_marker(key_marker.take())
            .set_version_id_marker(version_id_marker.take())
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(bucket, error = ?err, "failed to list object versions");
                Error::from(err)
            })?;

        summaries.extend(
            resp.versions
                .unwrap_or_default()
                .into_iter()
                .map(ObjectVersionSummary::from),
        );

        if resp.is_truncated.unwrap_or(false) {
            key_marker = resp.next_key_marker;
            version_id_marker = resp.next_version_id_marker;
            if key_marker.is_none() && version_id_marker.is_none() {
                break;
            }
        } else {
            break;
        }
    }

    Ok(summaries)
}

#[cfg(test)]
mod test {
    use aws_sdk_s3::operation::list_object_versions::ListObjectVersionsOutput;
    use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
    use aws_sdk_s3::types::{Object, ObjectVersion};
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};

    fn client_for(s3_client: aws_sdk_s3::Client) -> crate::Client {
        let config = crate::Config::builder().client(s3_client).build();
        crate::Client::new(config)
    }

    #[tokio::test]
    async fn test_list_objects_follows_continuation_tokens() {
        let page_1 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.continuation_token().is_none())
            .then_output(|| {
                ListObjectsV2Output::builder()
                    .contents(Object::builder().key("a").size(1).build())
                    .contents(Object::builder().key("b").size(2).build())
                    .is_truncated(true)
                    .next_continuation_token("token-1")
                    .build()
            });
        let page_2 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.continuation_token() == Some("token-1"))
            .then_output(|| {
                ListObjectsV2Output::builder()
                    .contents(Object::builder().key("c").size(3).build())
                    .is_truncated(false)
                    .build()
            });
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&page_1, &page_2]);

        let client = client_for(s3);
        let objects = client.list_objects("b").await.unwrap();
        let keys: Vec<_> = objects.iter().filter_map(|o| o.key.as_deref()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_list_object_versions_follows_markers() {
        let page_1 = mock!(aws_sdk_s3::Client::list_object_versions)
            .match_requests(|r| r.key_marker().is_none())
            .then_output(|| {
                ListObjectVersionsOutput::builder()
                    .versions(
                        ObjectVersion::builder()
                            .key("k")
                            .version_id("v2")
                            .is_latest(true)
                            .build(),
                    )
                    .is_truncated(true)
                    .next_key_marker("k")
                    .next_version_id_marker("v2")
                    .build()
            });
        let page_2 = mock!(aws_sdk_s3::Client::list_object_versions)
            .match_requests(|r| {
                r.key_marker() == Some("k") && r.version_id_marker() == Some("v2")
            })
            .then_output(|| {
                ListObjectVersionsOutput::builder()
                    .versions(
                        ObjectVersion::builder()
                            .key("k")
                            .version_id("v1")
                            .is_latest(false)
                            .build(),
                    )
                    .is_truncated(false)
                    .build()
            });
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&page_1, &page_2]);

        let client = client_for(s3);
        let versions = client.list_object_versions("b").await.unwrap();
        let ids: Vec<_> = versions
            .iter()
            .filter_map(|v| v.version_id.as_deref())
            .collect();
        assert_eq!(ids, vec!["v2", "v1"]);
    }
}

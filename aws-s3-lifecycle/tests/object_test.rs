/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_lifecycle::operation::upload::UploadInput;
use aws_sdk_s3::operation::delete_objects::DeleteObjectsOutput;
use aws_sdk_s3::operation::get_object::GetObjectOutput;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{DeletedObject, Object};
use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
use bytes::Bytes;

fn lifecycle_client(s3_client: aws_sdk_s3::Client) -> aws_s3_lifecycle::Client {
    let config = aws_s3_lifecycle::Config::builder().client(s3_client).build();
    aws_s3_lifecycle::Client::new(config)
}

/// upload bytes B under key K, list shows K, download K yields exactly B
#[tokio::test]
async fn test_object_round_trip() {
    let body = Bytes::from_static(b"round trip payload");

    let put = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(|r| {
            r.bucket() == Some("b") && r.key() == Some("k") && r.content_length() == Some(18)
        })
        .then_output(|| PutObjectOutput::builder().e_tag("rt-etag").build());
    let list = mock!(aws_sdk_s3::Client::list_objects_v2).then_output(|| {
        ListObjectsV2Output::builder()
            .contents(Object::builder().key("k").size(18).e_tag("rt-etag").build())
            .build()
    });
    let get = mock!(aws_sdk_s3::Client::get_object)
        .match_requests(|r| r.bucket() == Some("b") && r.key() == Some("k"))
        .then_output(|| {
            GetObjectOutput::builder()
                .body(ByteStream::from_static(b"round trip payload"))
                .e_tag("rt-etag")
                .build()
        });

    let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put, &list, &get]);
    let client = lifecycle_client(s3);

    let output = client
        .upload(UploadInput::new("b", "k", body.clone()))
        .await
        .unwrap();
    assert_eq!(output.e_tag.as_deref(), Some("rt-etag"));

    let objects = client.list_objects("b").await.unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].key.as_deref(), Some("k"));

    let downloaded = client.download("b", "k", None).await.unwrap();
    assert_eq!(downloaded, body);
}

/// deleting a batch of N keys removes all N; subsequent list excludes them
#[tokio::test]
async fn test_batch_delete_then_list_excludes_keys() {
    let delete = mock!(aws_sdk_s3::Client::delete_objects)
        .match_requests(|r| {
            r.delete().map(|d| d.objects().len()) == Some(3)
        })
        .then_output(|| {
            DeleteObjectsOutput::builder()
                .deleted(DeletedObject::builder().key("k1").build())
                .deleted(DeletedObject::builder().key("k2").build())
                .deleted(DeletedObject::builder().key("k3").build())
                .build()
        });
    let list = mock!(aws_sdk_s3::Client::list_objects_v2)
        .then_output(|| ListObjectsV2Output::builder().build());

    let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&delete, &list]);
    let client = lifecycle_client(s3);

    let keys = vec!["k1".to_string(), "k2".to_string(), "k3".to_string()];
    let deleted = client.delete_objects("b", keys).await.unwrap();
    assert_eq!(deleted, 3);

    let remaining = client.list_objects("b").await.unwrap();
    assert!(remaining.is_empty());
}

/// a local file round-trips through upload_file and download_to_file
#[tokio::test]
async fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.txt");
    std::fs::write(&source, b"file payload").unwrap();

    let put = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(|r| r.bucket() == Some("b") && r.key() == Some("k"))
        .then_output(|| PutObjectOutput::builder().build());
    let get = mock!(aws_sdk_s3::Client::get_object).then_output(|| {
        GetObjectOutput::builder()
            .body(ByteStream::from_static(b"file payload"))
            .build()
    });

    let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put, &get]);
    let client = lifecycle_client(s3);

    client.upload_file("b", "k", &source).await.unwrap();

    let dest = dir.path().join("dest.txt");
    let written = client.download_to_file("b", "k", &dest).await.unwrap();
    assert_eq!(written, 12);
    assert_eq!(std::fs::read(&dest).unwrap(), b"file payload");
}

/// an open failure on the source path surfaces before any remote call
#[tokio::test]
async fn test_upload_file_missing_source_fails_locally() {
    let put = mock!(aws_sdk_s3::Client::put_object)
        .then_output(|| PutObjectOutput::builder().build());
    let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put]);
    let client = lifecycle_client(s3);

    let err = client
        .upload_file("b", "k", "/definitely/not/a/real/path.txt")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &aws_s3_lifecycle::error::ErrorKind::LocalIo);
}

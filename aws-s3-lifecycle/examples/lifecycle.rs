/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Walks a bucket through its full lifecycle against a real account:
//! create, upload, list, download, presign, batch delete, delete bucket.
//!
//! Credentials and region are resolved from the environment the same way
//! the AWS CLI resolves them.

use std::error::Error;

use aws_s3_lifecycle::operation::upload::UploadInput;
use clap::Parser;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "lifecycle")]
#[command(about = "Exercises bucket and object lifecycle operations end to end.")]
struct Args {
    /// Bucket to create and tear down (must not already exist)
    #[arg(required = true)]
    bucket: String,

    /// Region to create the bucket in
    #[arg(long, default_value = "us-west-2")]
    region: String,

    /// Leave the bucket and objects in place on exit
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    keep: bool,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = aws_s3_lifecycle::from_env().load().await;
    let client = aws_s3_lifecycle::Client::new(config);

    println!("creating bucket {} in {}", args.bucket, args.region);
    client
        .create_bucket(
            aws_s3_lifecycle::operation::bucket::CreateBucketInput::new(
                &args.bucket,
                &args.region,
            ),
        )
        .await?;
    assert!(client.bucket_exists(&args.bucket).await?);

    let keys = ["greeting.txt", "farewell.txt"];
    client
        .upload(UploadInput::new(&args.bucket, keys[0], "hello from the lifecycle demo"))
        .await?;
    client
        .upload(UploadInput::new(&args.bucket, keys[1], "goodbye from the lifecycle demo"))
        .await?;

    let objects = client.list_objects(&args.bucket).await?;
    println!("bucket now holds {} object(s)", objects.len());
    for object in &objects {
        println!("  {:?} ({:?} bytes)", object.key, object.size);
    }

    let text = client.get_object_text(&args.bucket, keys[0]).await?;
    println!("downloaded {}: {text}", keys[0]);

    let url = client.presigned_get_url(&args.bucket, keys[0]).await?;
    println!("presigned URL (valid 5 minutes): {url}");

    if args.keep {
        println!("--keep set; leaving bucket in place");
        return Ok(());
    }

    let deleted = client
        .delete_objects(&args.bucket, keys.iter().map(|k| k.to_string()).collect())
        .await?;
    println!("deleted {deleted} object(s)");

    client.delete_bucket(&args.bucket).await?;
    assert!(!client.bucket_exists(&args.bucket).await?);
    println!("bucket {} removed", args.bucket);

    Ok(())
}

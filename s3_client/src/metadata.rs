use anyhow::Context;
use aws_sdk_s3 as s3;

/// Reads the object and returns the content type S3 reports for it
#[tracing::instrument(skip(client))]
pub async fn content_type(client: &s3::Client, bucket: &str, key: &str) -> anyhow::Result<String> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .context(format!("could not get item {key} from bucket {bucket}"))?;

    resp.content_type.context("expected content type")
}

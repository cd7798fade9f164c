use anyhow::Context;
use aws_sdk_s3 as s3;

/// Looks up the bucket's location constraint.
/// Buckets in the primary region report no constraint and come back as an
/// empty string.
#[tracing::instrument(skip(client))]
pub async fn bucket_location(client: &s3::Client, bucket: &str) -> anyhow::Result<String> {
    let resp = client
        .get_bucket_location()
        .bucket(bucket)
        .send()
        .await
        .context(format!("could not get location for bucket {bucket}"))?;

    Ok(resp
        .location_constraint
        .map(|constraint| constraint.as_str().to_string())
        .unwrap_or_default())
}

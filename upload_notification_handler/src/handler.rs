use anyhow::Context;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent, tracing};

use crate::config::Config;
use crate::email;
use crate::object_info::ObjectInfo;

/// Handles a single S3 upload notification event
#[tracing::instrument(skip(s3_client, ses_client, config, event))]
pub async fn handler(
    s3_client: &s3_client::S3,
    ses_client: &ses_client::Ses,
    config: &Config,
    event: LambdaEvent<S3Event>,
) -> Result<(), Error> {
    tracing::info!(
        event = %serde_json::to_string_pretty(&event.payload).unwrap_or_default(),
        "received event"
    );

    let (bucket, key) = first_record(&event.payload)?;
    tracing::trace!(%bucket, %key, "processing record");

    let info = ObjectInfo::resolve(s3_client, &bucket, &key).await?;

    email::notify(
        ses_client,
        &config.sender,
        &config.recipient,
        &info,
        &bucket,
        &key,
    )
    .await;

    Ok(())
}

/// Pulls the bucket name and decoded object key out of the event's first
/// record. Any further records are ignored.
fn first_record(event: &S3Event) -> anyhow::Result<(String, String)> {
    let record = event.records.first().context("no records in event")?;

    let bucket: &str = record.s3.bucket.name.as_ref().context("expected bucket")?;
    let key: &str = record.s3.object.key.as_ref().context("expected key")?;

    Ok((bucket.to_string(), decode_key(key)?))
}

/// Decodes an object key the way the notification event encodes it: `+`
/// stands for a space, the rest is percent-encoded utf-8
fn decode_key(key: &str) -> anyhow::Result<String> {
    let replaced = key.replace('+', " ");
    let decoded = urlencoding::decode(&replaced)
        .context("object key is not valid percent-encoded utf-8")?;

    Ok(decoded.into_owned())
}

use anyhow::Context;
use aws_sdk_sesv2::{
    self as ses,
    types::{Body, Content, Destination, EmailContent, Message},
};

static CHARSET: &str = "UTF-8";

/// Sends a plain text email to a single recipient
#[tracing::instrument(skip(client, subject, content))]
pub async fn send_email(
    client: &ses::Client,
    from_email: &str,
    to_email: &str,
    subject: &str,
    content: &str,
) -> anyhow::Result<String> {
    let mut dest: Destination = Destination::builder().build();
    dest.to_addresses = Some(vec![to_email.to_string()]);

    let subject_content = Content::builder()
        .data(subject)
        .charset(CHARSET)
        .build()
        .context("building Content")?;

    let body_content = Content::builder()
        .data(content)
        .charset(CHARSET)
        .build()
        .context("building Content")?;

    let body = Body::builder().text(body_content).build();

    let msg = Message::builder()
        .subject(subject_content)
        .body(body)
        .build();

    let email_content = EmailContent::builder().simple(msg).build();

    let resp = client
        .send_email()
        .from_email_address(from_email)
        .destination(dest)
        .content(email_content)
        .send()
        .await?;

    match resp.message_id() {
        Some(message_id) => Ok(message_id.to_string()),
        None => Err(anyhow::anyhow!("no message id in response")),
    }
}

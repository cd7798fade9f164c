use crate::object_info::ObjectInfo;

/// Subject line for the notification email
pub fn subject(bucket: &str, key: &str) -> String {
    format!("Object {key} Uploaded to Bucket {bucket}")
}

/// Plain text body: five labelled lines separated by CRLF
pub fn body(info: &ObjectInfo, bucket: &str, key: &str) -> String {
    format!(
        "Bucket: {bucket}\r\n\
         Key: {key}\r\n\
         URI: {uri}\r\n\
         URL: {url}\r\n\
         Object Type: {content_type}",
        uri = info.uri,
        url = info.url,
        content_type = info.content_type,
    )
}

/// Sends the notification email for an uploaded object.
///
/// A rejected send is logged and dropped: a storage failure aborts the
/// invocation, a failed email does not.
pub async fn notify(
    ses_client: &ses_client::Ses,
    sender: &str,
    recipient: &str,
    info: &ObjectInfo,
    bucket: &str,
    key: &str,
) {
    let subject = subject(bucket, key);
    let body = body(info, bucket, key);

    match ses_client.send_email(sender, recipient, &subject, &body).await {
        Ok(message_id) => tracing::info!(%message_id, "email sent"),
        Err(e) => tracing::error!(error=?e, "could not send notification email"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> ObjectInfo {
        ObjectInfo {
            content_type: "image/jpeg".to_string(),
            uri: "s3://my-bucket/photo.jpg".to_string(),
            url: "https://my-bucket.s3.us-west-2.amazonaws.com/photo.jpg".to_string(),
        }
    }

    #[test]
    fn subject_names_the_key_and_bucket() {
        assert_eq!(
            subject("my-bucket", "photo.jpg"),
            "Object photo.jpg Uploaded to Bucket my-bucket"
        );
    }

    #[test]
    fn body_is_five_crlf_separated_lines_in_fixed_order() {
        let body = body(&info(), "my-bucket", "photo.jpg");

        let lines: Vec<&str> = body.split("\r\n").collect();
        assert_eq!(
            lines,
            vec![
                "Bucket: my-bucket",
                "Key: photo.jpg",
                "URI: s3://my-bucket/photo.jpg",
                "URL: https://my-bucket.s3.us-west-2.amazonaws.com/photo.jpg",
                "Object Type: image/jpeg",
            ]
        );
    }
}

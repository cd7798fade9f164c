/// Metadata resolved for a single uploaded object. Built per invocation and
/// dropped once the notification is out.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectInfo {
    /// Content type S3 reports for the object.
    pub content_type: String,
    /// Canonical `s3://` identifier.
    pub uri: String,
    /// Public https url derived from the bucket location.
    pub url: String,
}

impl ObjectInfo {
    /// Looks up the object's content type and its bucket's location, then
    /// derives the canonical uri and the public url.
    ///
    /// Failures from either lookup are logged and re-raised unchanged.
    #[tracing::instrument(skip(s3_client))]
    pub async fn resolve(
        s3_client: &s3_client::S3,
        bucket: &str,
        key: &str,
    ) -> anyhow::Result<Self> {
        let content_type = s3_client
            .content_type(bucket, key)
            .await
            .inspect_err(|e| tracing::error!(error=?e, "could not read object metadata"))?;

        let location = s3_client
            .bucket_location(bucket)
            .await
            .inspect_err(|e| tracing::error!(error=?e, "could not read bucket location"))?;

        tracing::info!(%content_type, "resolved content type");

        Ok(Self::from_parts(bucket, key, &location, content_type))
    }

    // Buckets in the primary region report an empty location, which leaves an
    // empty region segment in the url. Reproduced as-is.
    fn from_parts(bucket: &str, key: &str, location: &str, content_type: String) -> Self {
        Self {
            content_type,
            uri: format!("s3://{bucket}/{key}"),
            url: format!("https://{bucket}.s3.{location}.amazonaws.com/{key}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_uri_and_url_from_bucket_location() {
        let info = ObjectInfo::from_parts(
            "my-bucket",
            "photo.jpg",
            "us-west-2",
            "image/jpeg".to_string(),
        );

        assert_eq!(info.content_type, "image/jpeg");
        assert_eq!(info.uri, "s3://my-bucket/photo.jpg");
        assert_eq!(info.url, "https://my-bucket.s3.us-west-2.amazonaws.com/photo.jpg");
    }

    #[test]
    fn key_is_not_re_encoded() {
        let info = ObjectInfo::from_parts("b", "a b c", "eu-west-1", "text/plain".to_string());

        assert_eq!(info.uri, "s3://b/a b c");
        assert_eq!(info.url, "https://b.s3.eu-west-1.amazonaws.com/a b c");
    }

    #[test]
    fn empty_location_leaves_an_empty_region_segment() {
        let info = ObjectInfo::from_parts(
            "my-bucket",
            "photo.jpg",
            "",
            "image/jpeg".to_string(),
        );

        assert_eq!(info.url, "https://my-bucket.s3..amazonaws.com/photo.jpg");
    }
}

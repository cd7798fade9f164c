mod location;
mod metadata;

#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }

    /// Retrieves the content type recorded for the provided key.
    #[tracing::instrument(skip(self))]
    pub async fn content_type(&self, bucket: &str, key: &str) -> anyhow::Result<String> {
        metadata::content_type(&self.inner, bucket, key).await
    }

    /// Retrieves the location constraint of the provided bucket.
    #[tracing::instrument(skip(self))]
    pub async fn bucket_location(&self, bucket: &str) -> anyhow::Result<String> {
        location::bucket_location(&self.inner, bucket).await
    }
}

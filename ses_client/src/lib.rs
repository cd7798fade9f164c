mod send_email;

use aws_sdk_sesv2 as ses;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockSesClient as Ses;
#[cfg(not(test))]
pub use SesClient as Ses;

#[derive(Clone, Debug)]
pub struct SesClient {
    inner: ses::Client,
}

#[cfg_attr(test, automock)]
impl SesClient {
    pub fn new(inner: ses::Client) -> Self {
        Self { inner }
    }

    /// Sends a plain text email and returns the message id SES assigned to it
    #[tracing::instrument(skip(self, subject, content))]
    pub async fn send_email(
        &self,
        from_email: &str,
        to_email: &str,
        subject: &str,
        content: &str,
    ) -> anyhow::Result<String> {
        send_email::send_email(&self.inner, from_email, to_email, subject, content).await
    }
}

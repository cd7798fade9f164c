use anyhow::Context;

/// Region used when the runtime hands us an empty AWS_REGION.
static DEFAULT_REGION: &str = "eu-west-1";

/// Process-wide configuration, resolved once at startup.
#[derive(Debug)]
pub struct Config {
    /// The region the service clients talk to.
    pub region: String,

    /// The verified address notification emails are sent from.
    pub sender: String,

    /// The address notification emails are delivered to.
    pub recipient: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let region = std::env::var("AWS_REGION").context("AWS_REGION must be provided")?;
        let region = region_or_default(region);

        let sender = std::env::var("SENDER").context("SENDER must be provided")?;

        let recipient = std::env::var("RECIPIENT").context("RECIPIENT must be provided")?;

        Ok(Config {
            region,
            sender,
            recipient,
        })
    }
}

fn region_or_default(region: String) -> String {
    if region.is_empty() {
        DEFAULT_REGION.to_string()
    } else {
        region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_region_falls_back_to_default() {
        assert_eq!(region_or_default(String::new()), "eu-west-1");
    }

    #[test]
    fn set_region_is_kept() {
        assert_eq!(region_or_default("us-west-2".to_string()), "us-west-2");
    }
}

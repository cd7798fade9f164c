//! A typed utility for determining what environment we are in at runtime

use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// The current environment the application is running in
#[derive(Debug, Clone, Copy)]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// The binary is running on localhost
    Local,
}

/// An error which can occur when constructing an [Environment]
#[derive(Debug, Error)]
pub enum EnvironmentErr {
    /// A std::env::var error while reading the ENVIRONMENT var
    #[error("could not read the ENVIRONMENT variable: {0}")]
    VarErr(#[from] std::env::VarError),
    /// the input string value was not recognized as a valid env
    #[error("{0}")]
    InvalidValue(#[from] UnknownValue),
}

impl Environment {
    /// Attempt to construct a new version of [Environment] from the environment variables
    pub fn new_from_env() -> Result<Self, EnvironmentErr> {
        let v = std::env::var("ENVIRONMENT")?;
        Ok(Self::from_str(&v)?)
    }

    /// attempt to create a new [Environment] falling back to production if we fail to construct
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

/// Represents a value which cannot be converted into an [Environment]
#[derive(Debug, Error)]
#[error("Could not convert {0} into an environment value")]
pub struct UnknownValue(String);

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(environment: &str) -> Result<Self, UnknownValue> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownValue(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_environments() {
        assert!(matches!(
            Environment::from_str("prod"),
            Ok(Environment::Production)
        ));
        assert!(matches!(
            Environment::from_str("dev"),
            Ok(Environment::Develop)
        ));
        assert!(matches!(
            Environment::from_str("local"),
            Ok(Environment::Local)
        ));
    }

    #[test]
    fn rejects_unknown_environment() {
        let err = Environment::from_str("staging").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not convert staging into an environment value"
        );
    }

    #[test]
    fn environments_render_their_short_names() {
        assert_eq!(Environment::Production.to_string(), "prod");
        assert_eq!(Environment::Develop.to_string(), "dev");
        assert_eq!(Environment::Local.to_string(), "local");
    }
}

use crate::error::{MessagingError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PolicyConfig {
    /// First age that counts as adult
    #[serde(default = "default_adult_age")]
    pub adult_age: u32,
}

fn default_adult_age() -> u32 {
    18
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            adult_age: default_adult_age(),
        }
    }
}

impl PolicyConfig {
    /// Build from `MESSAGING_*` style key/value pairs
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: PolicyConfig = envy::prefixed("MESSAGING_").from_iter(vars)?;
        if config.adult_age == 0 {
            return Err(MessagingError::Config("adult_age must be positive".to_string()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PolicyConfig::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.adult_age, 18);
    }

    #[test]
    fn test_override_and_validation() {
        let config =
            PolicyConfig::from_vars(vec![("MESSAGING_ADULT_AGE".to_string(), "19".to_string())]).unwrap();
        assert_eq!(config.adult_age, 19);

        let err = PolicyConfig::from_vars(vec![("MESSAGING_ADULT_AGE".to_string(), "0".to_string())])
            .unwrap_err();
        assert!(matches!(err, MessagingError::Config(_)));
    }
}

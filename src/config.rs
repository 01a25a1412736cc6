use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    MissingVar(&'static str),
}

/// Read-only Drive access configuration, loaded once at startup.
///
/// Both values are opaque constants from the deployment; the client performs
/// no well-formedness checks on them.
#[derive(Debug, Clone)]
pub struct DriveConfig {
    pub api_key: String,
    pub folder_id: String,
}

impl DriveConfig {
    pub fn new(api_key: impl Into<String>, folder_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            folder_id: folder_id.into(),
        }
    }

    /// Load from `GOOGLE_API_KEY` and `GOOGLE_DRIVE_FOLDER_ID`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVar` if either variable is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: require_var("GOOGLE_API_KEY")?,
            folder_id: require_var("GOOGLE_DRIVE_FOLDER_ID")?,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_values_verbatim() {
        let config = DriveConfig::new("key-123", "folder-abc");
        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.folder_id, "folder-abc");
    }
}

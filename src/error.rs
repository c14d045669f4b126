use thiserror::Error;

pub const CONFIGURATION_SUMMARY: &str =
    "Invalid or missing API key. Please check your configuration.";
pub const UPSTREAM_SUMMARY: &str = "Failed to generate prompt";
pub const STORAGE_SUMMARY: &str = "Failed to update favorites";

#[derive(Debug, Error)]
pub enum PromptError {
    /// The text-generation credential is missing or was rejected.
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Upstream error: {0}")]
    Upstream(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PromptError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, PromptError::Configuration(_))
    }

    /// Short message shown to the user in place of the generated prompt.
    pub fn summary(&self) -> &'static str {
        match self {
            PromptError::Configuration(_) => CONFIGURATION_SUMMARY,
            PromptError::Upstream(_) => UPSTREAM_SUMMARY,
            PromptError::Storage(_) | PromptError::Serialization(_) => STORAGE_SUMMARY,
        }
    }

    /// The raw message without the category prefix.
    pub fn details(&self) -> &str {
        match self {
            PromptError::Configuration(msg)
            | PromptError::Upstream(msg)
            | PromptError::Storage(msg)
            | PromptError::Serialization(msg) => msg,
        }
    }
}

impl From<serde_json::Error> for PromptError {
    fn from(e: serde_json::Error) -> Self {
        PromptError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for PromptError {
    fn from(e: std::io::Error) -> Self {
        PromptError::Storage(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PromptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summaries() {
        let err = PromptError::Configuration("API key not valid".into());
        assert!(err.is_configuration());
        assert_eq!(err.summary(), CONFIGURATION_SUMMARY);
        assert_eq!(err.details(), "API key not valid");

        let err = PromptError::Upstream("quota exceeded".into());
        assert!(!err.is_configuration());
        assert_eq!(err.summary(), UPSTREAM_SUMMARY);
        assert_eq!(err.to_string(), "Upstream error: quota exceeded");

        let err = PromptError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(err.summary(), STORAGE_SUMMARY);
        assert_eq!(err.details(), "disk full");
    }
}

use serde::{Deserialize, Serialize};

use crate::error::PromptError;

pub const DEFAULT_SUBJECT: &str = "a person";

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

/// Scene description submitted by the collector. Built once per submission
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub vibe: String,
    #[serde(default)]
    pub cloth: String,
    #[serde(default)]
    pub cloth_color: String,
    #[serde(default)]
    pub has_car: bool,
    #[serde(default)]
    pub car_model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_options: Option<String>,
}

impl Default for PromptRequest {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            location: String::new(),
            vibe: String::new(),
            cloth: String::new(),
            cloth_color: String::new(),
            has_car: false,
            car_model: String::new(),
            custom_options: None,
        }
    }
}

impl PromptRequest {
    /// Car model to render, if the vehicle clause is enabled.
    pub fn vehicle(&self) -> Option<&str> {
        self.has_car.then_some(self.car_model.as_str())
    }

    /// Custom details to render, if any were given.
    pub fn custom_details(&self) -> Option<&str> {
        self.custom_options.as_deref().filter(|s| !s.is_empty())
    }
}

/// Body returned to the collector after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PromptResponse {
    Success { prompt: String },
    Failure { error: String, details: String },
}

impl PromptResponse {
    pub fn success(prompt: impl Into<String>) -> Self {
        PromptResponse::Success {
            prompt: prompt.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PromptResponse::Success { .. })
    }

    pub fn prompt(&self) -> Option<&str> {
        match self {
            PromptResponse::Success { prompt } => Some(prompt),
            PromptResponse::Failure { .. } => None,
        }
    }
}

impl From<&PromptError> for PromptResponse {
    fn from(err: &PromptError) -> Self {
        PromptResponse::Failure {
            error: err.summary().to_string(),
            details: err.details().to_string(),
        }
    }
}

//! Form-side state: gathers field values, applies presets and tracks the
//! outcome of the last submission.

use serde::{Deserialize, Serialize};

use crate::{
    composer::PromptComposer,
    models::{PromptRequest, PromptResponse, DEFAULT_SUBJECT},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Happy,
    Relaxed,
    Angry,
    Mysterious,
    Epic,
    Normal,
}

impl Vibe {
    pub const ALL: [Vibe; 6] = [
        Vibe::Happy,
        Vibe::Relaxed,
        Vibe::Angry,
        Vibe::Mysterious,
        Vibe::Epic,
        Vibe::Normal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Vibe::Happy => "happy",
            Vibe::Relaxed => "relaxed",
            Vibe::Angry => "angry",
            Vibe::Mysterious => "mysterious",
            Vibe::Epic => "epic",
            Vibe::Normal => "normal",
        }
    }

    pub fn parse(label: &str) -> Option<Vibe> {
        Self::ALL
            .into_iter()
            .find(|vibe| vibe.as_str().eq_ignore_ascii_case(label.trim()))
    }
}

/// A shortcut that fills several fields at once. Unset fields fall back to
/// neutral values when applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: String,
    pub location: Option<String>,
    pub cloth: Option<String>,
    pub cloth_color: Option<String>,
    pub vibe: Option<String>,
    pub has_car: bool,
    pub car_model: Option<String>,
}

impl Preset {
    pub fn builtin() -> Vec<Preset> {
        vec![
            Preset {
                name: "Cyberpunk".into(),
                location: Some("Rainy neon-lit Tokyo street".into()),
                cloth: Some("leather jacket".into()),
                cloth_color: None,
                vibe: Some(Vibe::Mysterious.as_str().into()),
                has_car: true,
                car_model: Some("DeLorean".into()),
            },
            Preset {
                name: "Fantasy".into(),
                location: Some("Ancient elven forest".into()),
                cloth: Some("flowing robe".into()),
                cloth_color: None,
                vibe: Some(Vibe::Epic.as_str().into()),
                has_car: false,
                car_model: None,
            },
            Preset {
                name: "Beach".into(),
                location: Some("Sunny California beach".into()),
                cloth: Some("swim shorts".into()),
                cloth_color: None,
                vibe: Some(Vibe::Relaxed.as_str().into()),
                has_car: false,
                car_model: None,
            },
        ]
    }

    pub fn find(name: &str) -> Option<Preset> {
        Self::builtin()
            .into_iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }
}

/// What the output panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Ready(String),
    Failed(String),
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Loading)
    }

    pub fn prompt(&self) -> Option<&str> {
        match self {
            SubmissionState::Ready(prompt) => Some(prompt),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldCollector {
    subject: String,
    location: String,
    vibe: String,
    cloth: String,
    cloth_color: String,
    has_car: bool,
    car_model: String,
    custom_options: String,
    state: SubmissionState,
}

impl Default for FieldCollector {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            location: "cyberpunk city street at night".to_string(),
            vibe: Vibe::Relaxed.as_str().to_string(),
            cloth: "t-shirt".to_string(),
            cloth_color: "blue".to_string(),
            has_car: false,
            car_model: "Tesla Model 3".to_string(),
            custom_options: String::new(),
            state: SubmissionState::Idle,
        }
    }
}

impl FieldCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_vibe(mut self, vibe: Vibe) -> Self {
        self.vibe = vibe.as_str().to_string();
        self
    }

    /// Any mood label, including ones outside [`Vibe`].
    pub fn with_custom_vibe(mut self, vibe: impl Into<String>) -> Self {
        self.vibe = vibe.into();
        self
    }

    pub fn with_clothing(mut self, color: impl Into<String>, item: impl Into<String>) -> Self {
        self.cloth_color = color.into();
        self.cloth = item.into();
        self
    }

    pub fn with_car(mut self, car_model: impl Into<String>) -> Self {
        self.has_car = true;
        self.car_model = car_model.into();
        self
    }

    /// Untick the car box. The model text is kept but not sent.
    pub fn without_car(mut self) -> Self {
        self.has_car = false;
        self
    }

    pub fn with_custom_options(mut self, options: impl Into<String>) -> Self {
        self.custom_options = options.into();
        self
    }

    pub fn apply_preset(&mut self, preset: &Preset) {
        self.cloth = preset.cloth.clone().unwrap_or_else(|| "t-shirt".into());
        self.cloth_color = preset.cloth_color.clone().unwrap_or_else(|| "white".into());
        self.has_car = preset.has_car;
        self.car_model = preset.car_model.clone().unwrap_or_default();
        self.location = preset.location.clone().unwrap_or_else(|| "a park".into());
        self.vibe = preset
            .vibe
            .clone()
            .unwrap_or_else(|| Vibe::Normal.as_str().into());
        self.custom_options.clear();
        self.state = SubmissionState::Idle;
    }

    /// Freeze the current fields into a request.
    pub fn snapshot(&self) -> PromptRequest {
        PromptRequest {
            subject: self.subject.clone(),
            location: self.location.clone(),
            vibe: self.vibe.clone(),
            cloth: self.cloth.clone(),
            cloth_color: self.cloth_color.clone(),
            has_car: self.has_car,
            car_model: self.car_model.clone(),
            custom_options: (!self.custom_options.is_empty())
                .then(|| self.custom_options.clone()),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Enter the loading state and return the request to send. Allowed from
    /// any state, including while a previous call is still loading.
    pub fn begin(&mut self) -> PromptRequest {
        self.state = SubmissionState::Loading;
        self.snapshot()
    }

    pub fn finish(&mut self, response: PromptResponse) {
        self.state = match response {
            PromptResponse::Success { prompt } => SubmissionState::Ready(prompt),
            PromptResponse::Failure { error, .. } => SubmissionState::Failed(error),
        };
    }

    pub async fn submit(&mut self, composer: &PromptComposer) -> &SubmissionState {
        let request = self.begin();
        let response = composer.respond(&request).await;
        self.finish(response);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::tests::StubGenerator;
    use std::sync::Arc;

    #[test]
    fn test_snapshot_drops_empty_custom_options() {
        let request = FieldCollector::new().snapshot();
        assert_eq!(request.custom_options, None);
        assert_eq!(request.subject, DEFAULT_SUBJECT);
        assert_eq!(request.vibe, "relaxed");
    }

    #[test]
    fn test_snapshot_is_independent_of_later_edits() {
        let collector = FieldCollector::new().with_location("a desert");
        let request = collector.snapshot();
        let collector = collector.with_location("a glacier");
        assert_eq!(request.location, "a desert");
        assert_eq!(collector.snapshot().location, "a glacier");
    }

    #[test]
    fn test_apply_preset_fallbacks() {
        let mut collector = FieldCollector::new()
            .with_clothing("red", "hoodie")
            .with_custom_options("a cat");
        collector.apply_preset(&Preset::find("fantasy").unwrap());

        let request = collector.snapshot();
        assert_eq!(request.cloth, "flowing robe");
        assert_eq!(request.cloth_color, "white");
        assert_eq!(request.vibe, "epic");
        assert!(!request.has_car);
        assert_eq!(request.car_model, "");
        assert_eq!(request.custom_options, None);
    }

    #[test]
    fn test_cyberpunk_preset_enables_car() {
        let mut collector = FieldCollector::new();
        collector.apply_preset(&Preset::find("Cyberpunk").unwrap());
        assert_eq!(collector.snapshot().vehicle(), Some("DeLorean"));
    }

    #[test]
    fn test_vibe_labels() {
        assert_eq!(Vibe::parse(" Mysterious "), Some(Vibe::Mysterious));
        assert_eq!(Vibe::parse("serene"), None);
        let request = FieldCollector::new().with_custom_vibe("serene").snapshot();
        assert_eq!(request.vibe, "serene");
    }

    #[tokio::test]
    async fn test_submit_success_then_failure_then_retry() {
        let ok = PromptComposer::new(Arc::new(StubGenerator::ok("A neon alley")));
        let failing = PromptComposer::new(Arc::new(StubGenerator::upstream_error("boom")));

        let mut collector = FieldCollector::new();
        assert_eq!(collector.submit(&ok).await.prompt(), Some("A neon alley"));

        let state = collector.submit(&failing).await;
        assert_eq!(state.error(), Some("Failed to generate prompt"));

        let pending = collector.begin();
        assert_eq!(pending, collector.snapshot());
        assert!(collector.state().is_loading());
        assert_eq!(collector.submit(&ok).await.prompt(), Some("A neon alley"));
    }
}

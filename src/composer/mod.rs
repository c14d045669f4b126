pub mod template;
pub mod traits;

use crate::{
    error::Result,
    logger,
    models::{PromptRequest, PromptResponse},
};
use std::sync::Arc;

pub use template::render_instruction;
pub use traits::TextGenerator;

/// Renders a [`PromptRequest`] and hands it to the text generator.
///
/// Holds no per-request state, so one instance can serve concurrent
/// submissions.
#[derive(Clone)]
pub struct PromptComposer {
    generator: Arc<dyn TextGenerator>,
}

impl PromptComposer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Render and submit. Exactly one generator call per invocation; the
    /// returned text is passed through untouched.
    pub async fn compose(&self, request: &PromptRequest) -> Result<String> {
        let instruction = render_instruction(request);
        log::debug!(
            "Rendered instruction ({} chars) for subject '{}'",
            instruction.len(),
            request.subject
        );

        let timer = logger::timer(&format!("generate via {}", self.generator.name()));
        let result = self.generator.generate(&instruction).await;
        timer.stop();

        match &result {
            Ok(text) => log::info!("✅ Generated prompt ({} chars)", text.len()),
            Err(e) if e.is_configuration() => {
                log::error!("❌ Text generator rejected configuration: {}", e)
            }
            Err(e) => log::error!("❌ Prompt generation failed: {}", e),
        }
        result
    }

    /// Like [`compose`](Self::compose) but folds every failure into the
    /// structured response body.
    pub async fn respond(&self, request: &PromptRequest) -> PromptResponse {
        match self.compose(request).await {
            Ok(prompt) => PromptResponse::success(prompt),
            Err(e) => PromptResponse::from(&e),
        }
    }
}

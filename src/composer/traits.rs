use crate::error::Result;
use async_trait::async_trait;

/// A single-shot text-generation backend: one instruction in, one text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, instruction: &str) -> Result<String>;

    fn name(&self) -> &str;
}

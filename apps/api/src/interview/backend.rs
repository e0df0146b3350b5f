//! Generative backend — the pluggable text source behind question generation.
//!
//! `AppState` holds an `Option<Arc<dyn GenerativeBackend>>`; `None` means every
//! question set comes from the question bank.

use async_trait::async_trait;

use crate::interview::errors::GenerationError;
use crate::interview::prompts::QUESTION_SYSTEM;
use crate::llm_client::prompts::PLAIN_TEXT_SYSTEM;
use crate::llm_client::{LlmClient, SamplingConfig};

/// Anything that can continue a prompt with free text.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    async fn complete(
        &self,
        prompt: &str,
        sampling: &SamplingConfig,
    ) -> Result<String, GenerationError>;
}

#[async_trait]
impl GenerativeBackend for LlmClient {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn complete(
        &self,
        prompt: &str,
        sampling: &SamplingConfig,
    ) -> Result<String, GenerationError> {
        let system = format!("{QUESTION_SYSTEM} {PLAIN_TEXT_SYSTEM}");
        Ok(self.call_text(prompt, &system, sampling).await?)
    }
}

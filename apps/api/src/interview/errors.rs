use thiserror::Error;

use crate::interview::state::ConversationState;
use crate::llm_client::LlmError;

/// Errors a conversation reports back to its caller. Neither changes any state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversationError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Cannot {action} while the conversation is {from:?}")]
    InvalidTransition {
        from: ConversationState,
        action: &'static str,
    },
}

/// Question generation failures. Always recovered through the question bank.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No generative backend configured")]
    Unavailable,

    #[error("Generative backend failed: {0}")]
    Backend(#[from] LlmError),

    #[error("Generative backend returned no usable text")]
    EmptyOutput,
}

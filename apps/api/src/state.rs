use std::sync::Arc;

use crate::interview::generator::QuestionGenerator;
use crate::interview::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Holds the optional generative backend; shared read-only by every conversation.
    pub generator: Arc<QuestionGenerator>,
}

//! Axum route handlers for the Conversation API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::conversation::{
    AskedQuestion, Conversation, Progress, TurnOutcome, FAREWELL_MESSAGE,
};
use crate::interview::models::{
    CandidateProfile, ChatMessage, ExperienceLevel, ProfileForm, JOB_ROLES,
};
use crate::interview::session::SharedConversation;
use crate::interview::state::ConversationState;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Everything the presentation shell needs to render a conversation.
#[derive(Debug, Serialize)]
pub struct ConversationView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub state: ConversationState,
    /// States reachable from here; tells the shell which actions to offer.
    pub next_states: Vec<ConversationState>,
    pub prompt: Option<String>,
    pub profile: Option<CandidateProfile>,
    pub transcript: Vec<ChatMessage>,
    pub progress: Progress,
    pub progress_label: String,
}

impl From<&Conversation> for ConversationView {
    fn from(conv: &Conversation) -> Self {
        let progress = conv.progress();
        Self {
            id: conv.id(),
            created_at: conv.created_at(),
            state: conv.state(),
            next_states: conv.state().valid_transitions(),
            prompt: conv.prompt(),
            profile: conv.profile().cloned(),
            transcript: conv.transcript().to_vec(),
            progress_label: progress.label(),
            progress,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub outcome: TurnOutcome,
    pub conversation: ConversationView,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub questions: Vec<AskedQuestion>,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub experience_levels: Vec<ExperienceLevel>,
    pub job_roles: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct FarewellResponse {
    pub message: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/options
///
/// Choices for the profile form's select boxes.
pub async fn handle_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        experience_levels: ExperienceLevel::ALL.to_vec(),
        job_roles: JOB_ROLES.to_vec(),
    })
}

/// POST /api/v1/conversations
pub async fn handle_create(
    State(state): State<AppState>,
) -> (StatusCode, Json<ConversationView>) {
    let conversation = state.sessions.create().await;
    let view = ConversationView::from(&*conversation.lock().await);
    (StatusCode::CREATED, Json(view))
}

/// GET /api/v1/conversations/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConversationView>, AppError> {
    let conversation = find(&state, id).await?;
    let conv = conversation.lock().await;
    Ok(Json(ConversationView::from(&*conv)))
}

/// DELETE /api/v1/conversations/:id
///
/// Ends the session and drops the conversation.
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FarewellResponse>, AppError> {
    if !state.sessions.remove(id).await {
        return Err(not_found(id));
    }
    Ok(Json(FarewellResponse {
        message: FAREWELL_MESSAGE,
    }))
}

/// POST /api/v1/conversations/:id/profile
pub async fn handle_submit_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<ProfileForm>,
) -> Result<Json<ConversationView>, AppError> {
    let conversation = find(&state, id).await?;
    let mut conv = conversation.lock().await;
    conv.submit_profile(form)?;
    Ok(Json(ConversationView::from(&*conv)))
}

/// POST /api/v1/conversations/:id/start
///
/// Generates the question set and asks the first question. May wait on the
/// generative backend; never fails because of it.
pub async fn handle_confirm_start(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConversationView>, AppError> {
    let conversation = find(&state, id).await?;
    let mut conv = conversation.lock().await;
    conv.confirm_start(&state.generator).await?;
    Ok(Json(ConversationView::from(&*conv)))
}

/// POST /api/v1/conversations/:id/review
pub async fn handle_review_info(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConversationView>, AppError> {
    let conversation = find(&state, id).await?;
    let mut conv = conversation.lock().await;
    conv.review_info()?;
    Ok(Json(ConversationView::from(&*conv)))
}

/// POST /api/v1/conversations/:id/messages
pub async fn handle_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let conversation = find(&state, id).await?;
    let mut conv = conversation.lock().await;
    let outcome = conv.submit_user_message(&request.text)?;
    Ok(Json(MessageResponse {
        outcome,
        conversation: ConversationView::from(&*conv),
    }))
}

/// POST /api/v1/conversations/:id/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConversationView>, AppError> {
    let conversation = find(&state, id).await?;
    let mut conv = conversation.lock().await;
    conv.reset()?;
    Ok(Json(ConversationView::from(&*conv)))
}

/// GET /api/v1/conversations/:id/summary
///
/// The bot questions asked so far, in order.
pub async fn handle_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SummaryResponse>, AppError> {
    let conversation = find(&state, id).await?;
    let conv = conversation.lock().await;
    Ok(Json(SummaryResponse {
        questions: conv.questions_asked(),
    }))
}

async fn find(state: &AppState, id: Uuid) -> Result<SharedConversation, AppError> {
    state.sessions.get(id).await.ok_or_else(|| not_found(id))
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Conversation {id} not found"))
}

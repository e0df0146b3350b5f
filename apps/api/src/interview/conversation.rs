//! Conversation Controller — one candidate's interview from greeting to completion.
//!
//! Every operation either performs a full transition or returns an error and
//! leaves the conversation untouched. The only suspension point is question
//! generation inside `confirm_start`, which cannot fail.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::interview::errors::ConversationError;
use crate::interview::generator::{QuestionGenerator, QuestionSet};
use crate::interview::intent::{is_ending, is_greeting};
use crate::interview::models::{CandidateProfile, ChatMessage, ProfileForm};
use crate::interview::state::ConversationState;

pub const GREETING_PROMPT: &str =
    "Hello! I'm your AI interview assistant. Let me get some basic information about you first.";

pub const COMPLETED_PROMPT: &str =
    "The interview is complete! Thank you for your time and answers.";

pub const CLOSING_MESSAGE: &str =
    "I understand you'd like to end the interview. Thank you for your time!";

pub const COMPLETION_MESSAGE: &str = "That was the last question! Thank you for the interview.";

pub const FAREWELL_MESSAGE: &str = "Thank you! Goodbye and good luck!";

pub const ACKNOWLEDGMENTS: &[&str] = &[
    "Thank you for that answer!",
    "Interesting perspective!",
    "Good point!",
    "That's helpful!",
    "Thanks for explaining that!",
];

/// What a candidate message did to the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    /// Acknowledged and asked the next question.
    Advanced,
    /// The candidate asked to stop.
    Ended,
    /// The last question had already been asked.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub asked: usize,
    pub total: usize,
    /// asked / total, 0.0 before any questions exist.
    pub ratio: f32,
}

impl Progress {
    pub fn label(&self) -> String {
        format!("Question {} of {}", self.asked, self.total)
    }
}

/// A bot question from the transcript, with its 1-based transcript position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskedQuestion {
    pub position: usize,
    pub text: String,
}

pub struct Conversation {
    id: Uuid,
    created_at: DateTime<Utc>,
    state: ConversationState,
    profile: Option<CandidateProfile>,
    transcript: Vec<ChatMessage>,
    questions: Option<QuestionSet>,
    /// Number of questions already asked; index of the next one.
    cursor: usize,
    rng: StdRng,
}

impl Conversation {
    pub fn new(id: Uuid) -> Self {
        Self::with_rng(id, StdRng::from_entropy())
    }

    pub fn with_rng(id: Uuid, rng: StdRng) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            state: ConversationState::Greeting,
            profile: None,
            transcript: Vec::new(),
            questions: None,
            cursor: 0,
            rng,
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Transitions
    // ────────────────────────────────────────────────────────────────────────

    /// Greeting → Ready. Rejects incomplete forms without touching any state.
    pub fn submit_profile(&mut self, form: ProfileForm) -> Result<(), ConversationError> {
        self.require(ConversationState::Greeting, "submit a profile")?;
        let profile = form.validate()?;
        info!(conversation_id = %self.id, "Profile submitted for {}", profile.job_role);
        self.profile = Some(profile);
        self.transition(ConversationState::Ready);
        Ok(())
    }

    /// Ready → Greeting. The stored profile is kept so the form can be pre-filled.
    pub fn review_info(&mut self) -> Result<(), ConversationError> {
        self.require(ConversationState::Ready, "review the profile")?;
        self.transition(ConversationState::Greeting);
        Ok(())
    }

    /// Ready → Interviewing: generates the questions and asks the first one.
    pub async fn confirm_start(
        &mut self,
        generator: &QuestionGenerator,
    ) -> Result<(), ConversationError> {
        self.require(ConversationState::Ready, "start the interview")?;
        let Some(profile) = self.profile.as_ref() else {
            return Err(ConversationError::InvalidTransition {
                from: self.state,
                action: "start the interview",
            });
        };

        let questions = generator.generate(profile, &mut self.rng).await;
        let welcome = welcome_message(profile);

        if questions.is_empty() {
            warn!(conversation_id = %self.id, "No questions available; the first reply ends the interview");
        }

        self.transcript.push(ChatMessage::bot(welcome));
        if let Some(first) = questions.get(0) {
            self.transcript.push(ChatMessage::bot(first));
            self.cursor = 1;
        }
        self.questions = Some(questions);
        self.transition(ConversationState::Interviewing);
        Ok(())
    }

    /// Records a candidate reply and moves the interview along.
    pub fn submit_user_message(&mut self, text: &str) -> Result<TurnOutcome, ConversationError> {
        self.require(ConversationState::Interviewing, "send a message")?;
        let text = text.trim();
        if text.is_empty() {
            return Err(ConversationError::Validation(
                "Message cannot be empty".to_string(),
            ));
        }

        if is_greeting(text) {
            debug!(conversation_id = %self.id, "Candidate greeting treated as an answer");
        }

        self.transcript.push(ChatMessage::user(text));

        if is_ending(text) {
            self.transcript.push(ChatMessage::bot(CLOSING_MESSAGE));
            self.transition(ConversationState::Completed);
            return Ok(TurnOutcome::Ended);
        }

        let next = self
            .questions
            .as_ref()
            .and_then(|q| q.get(self.cursor))
            .map(str::to_string);

        match next {
            Some(question) => {
                let ack = ACKNOWLEDGMENTS
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(ACKNOWLEDGMENTS[0]);
                self.transcript.push(ChatMessage::bot(ack));
                self.transcript.push(ChatMessage::bot(question));
                self.cursor += 1;
                Ok(TurnOutcome::Advanced)
            }
            None => {
                self.transcript.push(ChatMessage::bot(COMPLETION_MESSAGE));
                self.transition(ConversationState::Completed);
                Ok(TurnOutcome::Finished)
            }
        }
    }

    /// Completed → Greeting, clearing everything at once. A no-op in Greeting.
    pub fn reset(&mut self) -> Result<(), ConversationError> {
        match self.state {
            ConversationState::Greeting => Ok(()),
            ConversationState::Completed => {
                self.profile = None;
                self.transcript.clear();
                self.questions = None;
                self.cursor = 0;
                self.transition(ConversationState::Greeting);
                Ok(())
            }
            from => Err(ConversationError::InvalidTransition {
                from,
                action: "reset",
            }),
        }
    }

    fn require(
        &self,
        expected: ConversationState,
        action: &'static str,
    ) -> Result<(), ConversationError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(ConversationError::InvalidTransition {
                from: self.state,
                action,
            })
        }
    }

    fn transition(&mut self, to: ConversationState) {
        debug_assert!(
            self.state.can_transition_to(&to),
            "illegal transition {:?} -> {:?}",
            self.state,
            to
        );
        debug!(conversation_id = %self.id, "Conversation {:?} -> {:?}", self.state, to);
        self.state = to;
    }

    // ────────────────────────────────────────────────────────────────────────
    // Observables
    // ────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn profile(&self) -> Option<&CandidateProfile> {
        self.profile.as_ref()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// The most recently asked question, if any.
    pub fn current_question(&self) -> Option<&str> {
        let index = self.cursor.checked_sub(1)?;
        self.questions.as_ref()?.get(index)
    }

    pub fn progress(&self) -> Progress {
        let total = self.questions.as_ref().map_or(0, QuestionSet::len);
        let ratio = if total == 0 {
            0.0
        } else {
            self.cursor as f32 / total as f32
        };
        Progress {
            asked: self.cursor,
            total,
            ratio,
        }
    }

    /// Bot lines that asked something, in transcript order.
    pub fn questions_asked(&self) -> Vec<AskedQuestion> {
        self.transcript
            .iter()
            .enumerate()
            .filter(|(_, msg)| msg.is_bot_question())
            .map(|(i, msg)| AskedQuestion {
                position: i + 1,
                text: msg.text.clone(),
            })
            .collect()
    }

    /// The bot line shown outside the chat for the current state.
    pub fn prompt(&self) -> Option<String> {
        match self.state {
            ConversationState::Greeting => Some(GREETING_PROMPT.to_string()),
            ConversationState::Ready => self.profile.as_ref().map(ready_prompt),
            ConversationState::Interviewing => None,
            ConversationState::Completed => Some(COMPLETED_PROMPT.to_string()),
        }
    }
}

fn welcome_message(profile: &CandidateProfile) -> String {
    format!(
        "Hello {}! I'm your AI interview assistant. I've generated personalized questions \
         based on your {} of experience as a {} with expertise in {}. Let's begin!",
        profile.name, profile.years_experience, profile.job_role, profile.tech_stack
    )
}

fn ready_prompt(profile: &CandidateProfile) -> String {
    format!(
        "Perfect! I have your information. I'll be conducting a personalized interview for a \
         {} position, tailored to your {} experience level with {}. Are you ready to start?",
        profile.job_role, profile.years_experience, profile.tech_stack
    )
}

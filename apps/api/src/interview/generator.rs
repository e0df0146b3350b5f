//! Question Generator — produces the fixed question set for one interview.
//!
//! Flow: build prompt → one backend call (no retry) → extract_questions →
//!       truncate to 5 → top up from the question bank.
//!
//! Backend failures never escape this module: they are logged and the bank
//! supplies the whole set instead.

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use crate::interview::backend::GenerativeBackend;
use crate::interview::errors::GenerationError;
use crate::interview::models::CandidateProfile;
use crate::interview::parser::extract_questions;
use crate::interview::prompts::QUESTION_PROMPT_TEMPLATE;
use crate::interview::question_bank::QuestionBank;
use crate::llm_client::SamplingConfig;

/// Number of questions in a full interview.
pub const QUESTION_COUNT: usize = 5;

/// Where the questions of a set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSource {
    Generated,
    /// Generated questions topped up from the bank.
    Mixed,
    Fallback,
}

/// The ordered questions of one interview. Fixed once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<String>,
    source: QuestionSource,
}

impl QuestionSet {
    pub fn new(questions: Vec<String>, source: QuestionSource) -> Self {
        Self { questions, source }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.questions.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn source(&self) -> QuestionSource {
        self.source
    }
}

#[derive(Clone)]
pub struct QuestionGenerator {
    backend: Option<Arc<dyn GenerativeBackend>>,
    bank: QuestionBank,
    sampling: SamplingConfig,
}

impl QuestionGenerator {
    pub fn new(backend: Option<Arc<dyn GenerativeBackend>>, sampling: SamplingConfig) -> Self {
        Self {
            backend,
            bank: QuestionBank::builtin(),
            sampling,
        }
    }

    /// A generator that never calls a backend.
    pub fn fallback_only() -> Self {
        Self::new(None, SamplingConfig::default())
    }

    #[cfg(test)]
    pub fn with_bank(mut self, bank: QuestionBank) -> Self {
        self.bank = bank;
        self
    }

    pub fn backend_name(&self) -> Option<&'static str> {
        self.backend.as_ref().map(|b| b.name())
    }

    /// Returns exactly `QUESTION_COUNT` questions, or fewer only when the bank
    /// itself has fewer for this tech stack.
    pub async fn generate<R>(&self, profile: &CandidateProfile, rng: &mut R) -> QuestionSet
    where
        R: Rng + Send + ?Sized,
    {
        let generated = match self.generate_with_backend(profile).await {
            Ok(questions) => questions,
            Err(GenerationError::Unavailable) => Vec::new(),
            Err(e) => {
                warn!("Question generation failed, using question bank: {e}");
                Vec::new()
            }
        };

        let set = self.top_up(generated, &profile.tech_stack, rng);
        if set.len() < QUESTION_COUNT {
            warn!(
                "Question bank only had {} questions for '{}'; the interview will be shorter",
                set.len(),
                profile.tech_stack
            );
        }
        info!(
            "Prepared {} questions for {} (source={:?})",
            set.len(),
            profile.job_role,
            set.source()
        );
        set
    }

    async fn generate_with_backend(
        &self,
        profile: &CandidateProfile,
    ) -> Result<Vec<String>, GenerationError> {
        let backend = self.backend.as_ref().ok_or(GenerationError::Unavailable)?;

        let raw = backend
            .complete(&build_question_prompt(profile), &self.sampling)
            .await?;

        let questions = extract_questions(&raw);
        if questions.is_empty() {
            return Err(GenerationError::EmptyOutput);
        }
        Ok(questions)
    }

    /// Truncates to `QUESTION_COUNT`, then appends bank questions until full.
    fn top_up<R: Rng + ?Sized>(
        &self,
        mut questions: Vec<String>,
        tech_stack: &str,
        rng: &mut R,
    ) -> QuestionSet {
        questions.truncate(QUESTION_COUNT);
        let from_backend = questions.len();

        if questions.len() < QUESTION_COUNT {
            for question in self.bank.lookup(tech_stack, rng) {
                if questions.len() == QUESTION_COUNT {
                    break;
                }
                if !questions.contains(&question) {
                    questions.push(question);
                }
            }
        }

        let source = if from_backend == 0 {
            QuestionSource::Fallback
        } else if from_backend == questions.len() {
            QuestionSource::Generated
        } else {
            QuestionSource::Mixed
        };

        QuestionSet::new(questions, source)
    }
}

/// Fills the prompt template with the profile fields that shape the questions.
pub fn build_question_prompt(profile: &CandidateProfile) -> String {
    fill_template(
        QUESTION_PROMPT_TEMPLATE,
        &[
            ("tech_stack", profile.tech_stack.as_str()),
            ("years_experience", profile.years_experience.label()),
            ("job_role", profile.job_role.as_str()),
        ],
    )
}

/// Substitutes `{key}` placeholders in a single left-to-right pass. Inserted
/// values are never rescanned, so profile text containing braces is kept as typed.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = values.iter().find_map(|(key, value)| {
            after
                .strip_prefix(key)
                .and_then(|tail| tail.strip_prefix('}'))
                .map(|tail| (*value, tail))
        });
        match placeholder {
            Some((value, tail)) => {
                out.push_str(value);
                rest = tail;
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

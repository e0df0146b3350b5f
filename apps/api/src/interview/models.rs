//! Candidate profile and transcript models.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interview::errors::ConversationError;

/// Job roles offered by the profile form. `Other` lets the candidate type their own.
pub const JOB_ROLES: &[&str] = &[
    "Software Developer",
    "Senior Developer",
    "Tech Lead",
    "Data Scientist",
    "ML Engineer",
    "DevOps Engineer",
    "Full Stack Developer",
    "Backend Developer",
    "Frontend Developer",
    "Database Administrator",
    "System Administrator",
    OTHER_ROLE,
];

pub const OTHER_ROLE: &str = "Other";

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

/// Professional experience bracket. Ordered from least to most experienced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "0-1 years")]
    UpToOne,
    #[serde(rename = "1-2 years")]
    OneToTwo,
    #[serde(rename = "2-3 years")]
    TwoToThree,
    #[serde(rename = "3-5 years")]
    ThreeToFive,
    #[serde(rename = "5-7 years")]
    FiveToSeven,
    #[serde(rename = "7-10 years")]
    SevenToTen,
    #[serde(rename = "10+ years")]
    TenPlus,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 7] = [
        Self::UpToOne,
        Self::OneToTwo,
        Self::TwoToThree,
        Self::ThreeToFive,
        Self::FiveToSeven,
        Self::SevenToTen,
        Self::TenPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::UpToOne => "0-1 years",
            Self::OneToTwo => "1-2 years",
            Self::TwoToThree => "2-3 years",
            Self::ThreeToFive => "3-5 years",
            Self::FiveToSeven => "5-7 years",
            Self::SevenToTen => "7-10 years",
            Self::TenPlus => "10+ years",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw profile submission as it arrives from the form. Nothing is guaranteed present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub tech_stack: String,
    pub years_experience: Option<ExperienceLevel>,
    pub job_role: String,
    /// Only consulted when `job_role` is "Other".
    pub custom_role: Option<String>,
}

/// A validated candidate profile. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub tech_stack: String,
    pub years_experience: ExperienceLevel,
    pub job_role: String,
}

impl ProfileForm {
    /// Trims every field and checks that all required ones are filled in.
    ///
    /// On failure the error lists every missing field, in form order.
    pub fn validate(self) -> Result<CandidateProfile, ConversationError> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        let phone = self.phone.trim().to_string();
        let tech_stack = self.tech_stack.trim().to_string();
        let job_role = resolve_job_role(self.job_role.trim(), self.custom_role.as_deref());

        let mut missing = Vec::new();
        if name.is_empty() {
            missing.push("name");
        }
        if email.is_empty() {
            missing.push("email");
        }
        if phone.is_empty() {
            missing.push("phone");
        }
        if tech_stack.is_empty() {
            missing.push("tech_stack");
        }
        if self.years_experience.is_none() {
            missing.push("years_experience");
        }
        if job_role.is_empty() {
            missing.push("job_role");
        }

        match self.years_experience {
            Some(years_experience) if missing.is_empty() => Ok(CandidateProfile {
                name,
                email,
                phone,
                tech_stack,
                years_experience,
                job_role,
            }),
            _ => Err(ConversationError::Validation(format!(
                "Please fill in all fields! Missing: {}",
                missing.join(", ")
            ))),
        }
    }
}

fn resolve_job_role(job_role: &str, custom_role: Option<&str>) -> String {
    if job_role == OTHER_ROLE {
        if let Some(custom) = custom_role.map(str::trim).filter(|c| !c.is_empty()) {
            return custom.to_string();
        }
    }
    job_role.to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Transcript
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Bot,
    User,
}

/// One line of the interview chat. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// True for bot lines that ask something. Used to build the interview summary.
    pub fn is_bot_question(&self) -> bool {
        self.sender == Sender::Bot && self.text.contains('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> ProfileForm {
        ProfileForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            tech_stack: "Python, SQL".to_string(),
            years_experience: Some(ExperienceLevel::ThreeToFive),
            job_role: "Backend Developer".to_string(),
            custom_role: None,
        }
    }

    #[test]
    fn test_complete_form_validates() {
        let profile = complete_form().validate().unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.years_experience, ExperienceLevel::ThreeToFive);
        assert_eq!(profile.job_role, "Backend Developer");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut form = complete_form();
        form.name = "  Ada  ".to_string();
        let profile = form.validate().unwrap();
        assert_eq!(profile.name, "Ada");
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let mut form = complete_form();
        form.email = "   ".to_string();
        form.years_experience = None;
        let err = form.validate().unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, ConversationError::Validation(_)));
        assert!(msg.contains("email"));
        assert!(msg.contains("years_experience"));
        assert!(!msg.contains("name"));
    }

    #[test]
    fn test_other_role_uses_custom_role() {
        let mut form = complete_form();
        form.job_role = OTHER_ROLE.to_string();
        form.custom_role = Some(" Site Reliability Engineer ".to_string());
        assert_eq!(form.validate().unwrap().job_role, "Site Reliability Engineer");
    }

    #[test]
    fn test_other_role_without_custom_role_is_kept() {
        let mut form = complete_form();
        form.job_role = OTHER_ROLE.to_string();
        form.custom_role = Some(String::new());
        assert_eq!(form.validate().unwrap().job_role, OTHER_ROLE);
    }

    #[test]
    fn test_experience_level_serializes_as_label() {
        let json = serde_json::to_string(&ExperienceLevel::TenPlus).unwrap();
        assert_eq!(json, "\"10+ years\"");
        let level: ExperienceLevel = serde_json::from_str("\"1-2 years\"").unwrap();
        assert_eq!(level, ExperienceLevel::OneToTwo);
    }

    #[test]
    fn test_experience_levels_are_ordered() {
        assert!(ExperienceLevel::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_form_deserializes_with_missing_fields() {
        let form: ProfileForm = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(form.name, "Ada");
        assert!(form.years_experience.is_none());
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_transcript_round_trip_preserves_order() {
        let transcript = vec![
            ChatMessage::bot("Welcome!"),
            ChatMessage::bot("1. What is a tuple?"),
            ChatMessage::user("An immutable sequence."),
            ChatMessage::bot("Good point!"),
        ];

        let json = serde_json::to_string(&transcript).unwrap();
        let recovered: Vec<ChatMessage> = serde_json::from_str(&json).unwrap();

        assert_eq!(recovered, transcript);
        assert_eq!(recovered[2].sender, Sender::User);
    }

    #[test]
    fn test_bot_question_detection() {
        assert!(ChatMessage::bot("Why?").is_bot_question());
        assert!(!ChatMessage::user("Why?").is_bot_question());
        assert!(!ChatMessage::bot("Good point!").is_bot_question());
    }
}

//! Conversation lifecycle states and the edges between them.

use serde::{Deserialize, Serialize};

/// Where a conversation is in its lifecycle.
///
/// - `Greeting`: collecting the candidate profile
/// - `Ready`: profile stored, waiting for the candidate to confirm
/// - `Interviewing`: questions are being asked
/// - `Completed`: terminal until an explicit reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Greeting,
    Ready,
    Interviewing,
    Completed,
}

impl ConversationState {
    pub fn can_transition_to(&self, target: &Self) -> bool {
        use ConversationState::*;
        matches!(
            (self, target),
            (Greeting, Ready)
                // review info
                | (Ready, Greeting)
                | (Ready, Interviewing)
                // next question
                | (Interviewing, Interviewing)
                | (Interviewing, Completed)
                // reset
                | (Completed, Greeting)
        )
    }

    pub fn valid_transitions(&self) -> Vec<Self> {
        use ConversationState::*;
        match self {
            Greeting => vec![Ready],
            Ready => vec![Greeting, Interviewing],
            Interviewing => vec![Interviewing, Completed],
            Completed => vec![Greeting],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ConversationState; 4] = [
        ConversationState::Greeting,
        ConversationState::Ready,
        ConversationState::Interviewing,
        ConversationState::Completed,
    ];

    #[test]
    fn test_default_state_is_greeting() {
        assert_eq!(ConversationState::default(), ConversationState::Greeting);
    }

    #[test]
    fn test_serializes_to_snake_case() {
        let json = serde_json::to_string(&ConversationState::Interviewing).unwrap();
        assert_eq!(json, "\"interviewing\"");
    }

    #[test]
    fn test_greeting_cannot_skip_to_interviewing() {
        assert!(!ConversationState::Greeting.can_transition_to(&ConversationState::Interviewing));
    }

    #[test]
    fn test_completed_only_resets_to_greeting() {
        assert_eq!(
            ConversationState::Completed.valid_transitions(),
            vec![ConversationState::Greeting]
        );
    }

    #[test]
    fn test_valid_transitions_agree_with_can_transition_to() {
        for from in ALL {
            for to in ALL {
                assert_eq!(
                    from.can_transition_to(&to),
                    from.valid_transitions().contains(&to),
                    "{from:?} -> {to:?}"
                );
            }
        }
    }
}

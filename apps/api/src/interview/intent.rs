//! Keyword-based intent detection.
//!
//! Plain substring checks over the lowercased input. No negation handling:
//! "no thanks needed" counts as an ending and "which" counts as a greeting.

const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "greetings",
];

const ENDINGS: &[&str] = &[
    "bye",
    "goodbye",
    "thank you",
    "thanks",
    "see you",
    "see ya",
    "farewell",
    "end",
    "quit",
    "exit",
];

pub fn is_greeting(text: &str) -> bool {
    contains_any(text, GREETINGS)
}

/// True if the candidate appears to want to stop the interview.
pub fn is_ending(text: &str) -> bool {
    contains_any(text, ENDINGS)
}

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    let text = text.to_lowercase();
    phrases.iter().any(|phrase| text.contains(phrase))
}

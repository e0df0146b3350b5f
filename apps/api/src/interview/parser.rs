//! Output parser — scrapes candidate questions out of free-form model output.
//!
//! Contract: `raw text -> numbered question strings`. Knows nothing about the
//! backend that produced the text.

/// Words that mark a line as an echo of the prompt rather than a question.
const META_WORDS: &[&str] = &["generate", "questions", "candidate", "technical", "interview"];

/// Enumeration markers a line may already carry.
const ENUMERATION_MARKERS: &[&str] = &["1.", "2.", "3.", "4.", "5."];

/// Extracts question lines from raw generated text, renumbered from 1.
///
/// A line is kept when it contains a `?` and either already starts with an
/// enumeration marker `1.`–`5.` or contains none of the meta words.
pub fn extract_questions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.contains('?'))
        .filter(|line| is_enumerated(line) || !mentions_meta_word(line))
        .map(strip_marker)
        .filter(|text| !text.is_empty())
        .enumerate()
        .map(|(i, text)| format!("{}. {}", i + 1, text))
        .collect()
}

fn is_enumerated(line: &str) -> bool {
    ENUMERATION_MARKERS
        .iter()
        .any(|marker| line.strip_prefix(marker).is_some_and(ends_marker))
}

/// A marker only counts when followed by whitespace, so "3.5 million" stays whole.
fn ends_marker(rest: &str) -> bool {
    rest.is_empty() || rest.starts_with(char::is_whitespace)
}

fn mentions_meta_word(line: &str) -> bool {
    let lower = line.to_lowercase();
    META_WORDS.iter().any(|word| lower.contains(word))
}

/// Drops a leading "N." / "N)" enumeration or a "-" / "*" bullet.
fn strip_marker(line: &str) -> &str {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let rest = &line[digits..];
    let rest = if digits > 0 {
        rest.strip_prefix('.')
            .or_else(|| rest.strip_prefix(')'))
            .filter(|after| ends_marker(after))
            .unwrap_or(line)
    } else {
        rest.strip_prefix('-')
            .or_else(|| rest.strip_prefix('*'))
            .unwrap_or(rest)
    };
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_lines_are_renumbered_in_order() {
        let raw = "Questions:\n3. What is ownership?\n5. How do lifetimes work?\n";
        assert_eq!(
            extract_questions(raw),
            vec!["1. What is ownership?", "2. How do lifetimes work?"]
        );
    }

    #[test]
    fn test_lines_without_question_mark_are_dropped() {
        let raw = "Here are some ideas.\nWhat is a closure?\nThat is all.";
        assert_eq!(extract_questions(raw), vec!["1. What is a closure?"]);
    }

    #[test]
    fn test_prompt_echo_is_rejected() {
        let raw = "Can you generate 5 technical questions for this candidate?\nWhat is a trait?";
        assert_eq!(extract_questions(raw), vec!["1. What is a trait?"]);
    }

    #[test]
    fn test_enumerated_line_with_meta_word_is_kept() {
        let raw = "1. What technical debt have you paid down recently?";
        assert_eq!(
            extract_questions(raw),
            vec!["1. What technical debt have you paid down recently?"]
        );
    }

    #[test]
    fn test_unnumbered_line_with_meta_word_is_rejected() {
        let raw = "What interview format do you prefer?";
        assert!(extract_questions(raw).is_empty());
    }

    #[test]
    fn test_bullets_and_parens_are_stripped() {
        let raw = "- What is a mutex?\n2) Why use channels?";
        assert_eq!(
            extract_questions(raw),
            vec!["1. What is a mutex?", "2. Why use channels?"]
        );
    }

    #[test]
    fn test_number_without_marker_is_kept_verbatim() {
        let raw = "42 is the answer, but what is the question?";
        assert_eq!(
            extract_questions(raw),
            vec!["1. 42 is the answer, but what is the question?"]
        );
    }

    #[test]
    fn test_decimal_prefix_is_not_a_marker() {
        assert_eq!(
            extract_questions("3.5 million rows: how would you index them?"),
            vec!["1. 3.5 million rows: how would you index them?"]
        );
        assert_eq!(
            extract_questions("2.0 broke the API. What would you change?"),
            vec!["1. 2.0 broke the API. What would you change?"]
        );
        assert_eq!(extract_questions("1)Why?"), vec!["1. 1)Why?"]);
    }

    #[test]
    fn test_decimal_prefix_does_not_count_as_enumerated() {
        // "1.5" is not the enumeration "1.", so the meta word still rejects it
        assert!(extract_questions("1.5 technical debt points per sprint?").is_empty());
        assert!(is_enumerated("1. What?"));
        assert!(is_enumerated("1."));
        assert!(!is_enumerated("1.5x faster?"));
    }

    #[test]
    fn test_overproduction_is_not_truncated_here() {
        let raw = (1..=7)
            .map(|i| format!("Question number {i} about Rust?"))
            .collect::<Vec<_>>()
            .join("\n");
        // "questions" does not occur, so all seven lines survive
        assert_eq!(extract_questions(&raw).len(), 7);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_questions("").is_empty());
        assert!(extract_questions("\n\n   \n").is_empty());
    }
}

// All LLM prompt constants for question generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for question generation.
pub const QUESTION_SYSTEM: &str = "You are an experienced technical interviewer. \
    You write clear, practical interview questions matched to a candidate's background.";

/// Question generation prompt template.
/// Replace: {tech_stack}, {years_experience}, {job_role}
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Generate 5 technical interview questions for a candidate with:
- Technical Stack: {tech_stack}
- Years of Experience: {years_experience}
- Job Role: {job_role}

Create diverse, practical questions that match their experience level. Make them conversational and interview-appropriate.
Write one question per line, numbered 1. to 5.

Questions:"#;

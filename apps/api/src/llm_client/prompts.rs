// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file holds the cross-cutting pieces.

/// System prompt fragment that asks for bare text without markdown decoration.
pub const PLAIN_TEXT_SYSTEM: &str = "Respond in plain text only. \
    Do NOT use markdown headings, bold text, or code fences. \
    Do NOT include explanations or apologies.";

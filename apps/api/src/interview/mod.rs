// Interview engine: question sourcing, intent detection and the conversation
// state machine, plus the HTTP handlers that expose it.
// All LLM calls go through llm_client via the GenerativeBackend trait.

pub mod backend;
pub mod conversation;
pub mod errors;
pub mod generator;
pub mod handlers;
pub mod intent;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod question_bank;
pub mod session;
pub mod state;

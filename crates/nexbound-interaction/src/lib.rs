//! Generative-AI collaborators.
//!
//! - `prompt`: instruction prompt for cold outreach emails
//! - `gemini_api_agent`: drafting service backed by the Gemini REST API

pub mod gemini_api_agent;
pub mod prompt;

pub use gemini_api_agent::{
    EMPTY_RESPONSE_MESSAGE, GENERATION_FAILED_MESSAGE, GeminiDraftingAgent,
    MISSING_API_KEY_MESSAGE,
};
pub use prompt::build_draft_prompt;

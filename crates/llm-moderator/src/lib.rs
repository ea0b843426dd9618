//! LLM-backed moderation oracle for Nebula tool submissions.
//!
//! Wraps an OpenAI-compatible chat-completions endpoint as a
//! [`Moderator`](moderator_core::Moderator), constraining the model to a
//! strict JSON verdict schema.

mod api_types;
mod config;
mod moderator;

pub use config::{LlmModeratorConfig, LlmModeratorConfigBuilder};
pub use moderator::LlmModerator;

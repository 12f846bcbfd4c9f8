//! Prompt assembly for the Gemini text model.
//!
//! The system instruction is a pure function of (platform, tone, format);
//! the user turn carries the topic, context, reference URL and attachment
//! notes of a single request.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod composer;
pub mod user;

pub use composer::compose;
pub use user::build_user_prompt;

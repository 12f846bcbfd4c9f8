// social-architect - brand-voiced social post generator on the Gemini API
// Author: kelexine (https://github.com/kelexine)

pub mod attachments;
pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod prompt;
pub mod server;
pub mod transform;
pub mod utils;

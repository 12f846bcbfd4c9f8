// CLI module for social-architect
// Author: kelexine (https://github.com/kelexine)

mod output;

pub use output::{render_text, save_images};

use crate::models::post::{ImageModelTier, ModelTier, ModelType, Platform, PostFormat, Tone};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// social-architect - brand-voiced LinkedIn and X posts from Gemini
#[derive(Parser, Debug)]
#[command(name = "social-architect", version, about, long_about = None)]
pub struct Args {
    /// Config file (default: ~/.social-architect/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one post and print it
    Generate(GenerateArgs),
    /// Print the system instruction for a platform, tone and format
    Compose(ComposeArgs),
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Print the effective configuration (API key redacted)
    Config,
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// What the post is about
    #[arg(long, default_value = "")]
    pub topic: String,

    /// Extra notes for the model
    #[arg(long, default_value = "")]
    pub context: String,

    #[arg(long, value_enum, default_value_t = Platform::LinkedIn)]
    pub platform: Platform,

    #[arg(long, value_enum, default_value_t = Tone::ThoughtLeader)]
    pub tone: Tone,

    /// Writing mode; `thinking` lets the model reason first
    #[arg(long, value_enum, default_value_t = ModelType::Writing)]
    pub mode: ModelType,

    #[arg(long, value_enum, default_value_t = PostFormat::Standard)]
    pub format: PostFormat,

    /// Reference URL; enables search grounding
    #[arg(long)]
    pub url: Option<String>,

    /// File to use as source material (repeatable)
    #[arg(long = "attach", value_name = "PATH")]
    pub attachments: Vec<PathBuf>,

    /// Text model tier (default from config)
    #[arg(long, value_enum)]
    pub model_tier: Option<ModelTier>,

    /// Image model tier (default from config)
    #[arg(long = "image-tier", value_enum)]
    pub image_model_tier: Option<ImageModelTier>,

    /// Gemini API key for this run; overrides config and environment
    #[arg(long)]
    pub api_key: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Write generated images to this directory
    #[arg(long, value_name = "DIR")]
    pub save_images: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct ComposeArgs {
    #[arg(long, value_enum, default_value_t = Platform::LinkedIn)]
    pub platform: Platform,

    #[arg(long, value_enum, default_value_t = Tone::ThoughtLeader)]
    pub tone: Tone,

    #[arg(long, value_enum, default_value_t = PostFormat::Standard)]
    pub format: PostFormat,
}

#[derive(ClapArgs, Debug)]
pub struct ServeArgs {
    /// Bind address (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port (overrides config)
    #[arg(long)]
    pub port: Option<u16>,
}

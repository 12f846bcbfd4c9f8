// social-architect - brand-voiced social post generator on the Gemini API
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use social_architect::attachments::load_attachments;
use social_architect::cli::{render_text, save_images, Args, Command, ComposeArgs, GenerateArgs, ServeArgs};
use social_architect::config::AppConfig;
use social_architect::generator::PostGenerator;
use social_architect::models::post::{ApiKey, GenerationRequest};
use social_architect::prompt::compose;
use social_architect::server::create_router;
use social_architect::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let config = AppConfig::load_from(args.config.as_deref())?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting social-architect v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Dispatch
    match args.command {
        Command::Generate(generate) => run_generate(config, generate).await,
        Command::Compose(compose) => run_compose(compose),
        Command::Serve(serve) => run_serve(config, serve).await,
        Command::Config => {
            print!("{}", config.to_redacted_toml()?);
            Ok(())
        }
    }
}

async fn run_generate(config: AppConfig, args: GenerateArgs) -> Result<()> {
    let mut settings = config.initial_settings();
    if let Some(tier) = args.model_tier {
        settings.model_tier = tier;
    }
    if let Some(tier) = args.image_model_tier {
        settings.image_model_tier = tier;
    }
    settings.api_key = args.api_key.and_then(ApiKey::new);

    // Every file is read before the request is assembled
    let attachments = load_attachments(&args.attachments).await?;

    let request = GenerationRequest {
        topic: args.topic,
        context: args.context,
        platform: args.platform,
        tone: args.tone,
        model_type: args.mode,
        format: args.format,
        url: args.url,
        attachments,
    };

    let generator = PostGenerator::new(&config)?;
    let content = generator.generate(&request, &settings).await?;

    if let Some(dir) = &args.save_images {
        let written = save_images(&content.images, dir).await?;
        info!("Wrote {} image(s) to {}", written.len(), dir.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else {
        print!("{}", render_text(&content));
    }
    Ok(())
}

fn run_compose(args: ComposeArgs) -> Result<()> {
    println!("{}", compose(args.platform, args.tone, args.format));
    Ok(())
}

async fn run_serve(mut config: AppConfig, args: ServeArgs) -> Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    if config.api_key().is_none() {
        info!("No API key configured; clients must set one via PUT /v1/settings");
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(config)?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}

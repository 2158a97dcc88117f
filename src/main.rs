//! MemoMemo - Personal memory capture assistant
//!
//! Captures notes, links, and files, derives metadata for each capture with
//! a deterministic classification pipeline, and serves the result over a
//! small HTTP API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use memomemo::api::build_app;
use memomemo::chat::{ChatResponder, ChatState};
use memomemo::classify::HeuristicClassifier;
use memomemo::config::MemoConfig;
use memomemo::memory::{CaptureInput, MemoriesState, MemoryStore};
use memomemo::settings::{SettingsState, SettingsStore};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "memomemo")]
#[command(author = "MemoMemo Team")]
#[command(version)]
#[command(about = "Personal memory capture assistant")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "MEMOMEMO_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MemoMemo API server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,

        /// Skip seeding the demo captures
        #[arg(long)]
        no_samples: bool,
    },

    /// Capture one memory and print the classified record
    Capture {
        /// Content to capture (URLs are auto-detected)
        content: String,

        /// Provenance tag for the capture
        #[arg(short, long, default_value = "cli")]
        source: String,
    },

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("memomemo={},tower_http=debug", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = if let Some(config_path) = cli.config {
        let content = std::fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        MemoConfig::default()
    };

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_samples,
        } => {
            run_serve(config, host, port, no_samples).await?;
        }
        Commands::Capture { content, source } => {
            run_capture(config, content, source).await?;
        }
        Commands::Config { default } => {
            show_config(if default { None } else { Some(&config) })?;
        }
    }

    Ok(())
}

async fn run_serve(
    config: MemoConfig,
    host: Option<String>,
    port: Option<u16>,
    no_samples: bool,
) -> Result<()> {
    tracing::info!("Starting MemoMemo");

    let data_dir = config
        .storage
        .data_dir
        .clone()
        .unwrap_or_else(SettingsStore::default_dir);

    let classifier = Arc::new(HeuristicClassifier::with_latency(Duration::from_millis(
        config.classify.latency_ms,
    ))?);
    let store = Arc::new(MemoryStore::new(classifier));

    if config.storage.seed_samples && !no_samples {
        store.seed_samples().await?;
    }

    let responder = Arc::new(ChatResponder::new().with_latency(
        Duration::from_millis(config.chat.base_latency_ms),
        Duration::from_millis(config.chat.jitter_ms),
    ));
    let settings = Arc::new(SettingsStore::new(data_dir).await?);

    let app = build_app(
        MemoriesState { store },
        ChatState { responder },
        SettingsState { store: settings },
        &config.server.cors_origins,
    );

    let host = host.unwrap_or(config.server.host);
    let port = port.unwrap_or(config.server.port);
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    tracing::info!("MemoMemo is listening on {}:{}. Press Ctrl+C to stop.", host, port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}

async fn run_capture(config: MemoConfig, content: String, source: String) -> Result<()> {
    let classifier = Arc::new(HeuristicClassifier::with_latency(Duration::from_millis(
        config.classify.latency_ms,
    ))?);
    let store = MemoryStore::new(classifier);

    let mut input = CaptureInput::quick(content);
    input.source = source;

    let memory = store.create(input).await?;
    println!("{}", serde_json::to_string_pretty(&memory)?);

    Ok(())
}

fn show_config(config: Option<&MemoConfig>) -> Result<()> {
    let config = config.cloned().unwrap_or_default();
    let toml = toml::to_string_pretty(&config)?;
    println!("{}", toml);
    Ok(())
}

/// Study Room Server - goals, study sessions and the ambient catalog
use anyhow::Context;
use clap::{Parser, Subcommand};
use study_core::catalog;
use study_playback::{AudioPlayer, HeadlessAudio, PlayerEvent};
use study_server::{api, config::ServerConfig, state::AppState};
use study_storage::MemoryStorage;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "study-server")]
#[command(about = "Study Room server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml if present)
    #[arg(short, long, global = true, env = "STUDY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// List the available backgrounds and soundscapes
    Catalog,
    /// Play a soundscape on a silent element and log every fade
    Soundcheck {
        /// Soundscape catalog ID (e.g. rain)
        soundscape: String,

        /// Seconds to hold at full volume before stopping
        #[arg(short, long, default_value_t = 1)]
        hold: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "study_server=info,study_playback=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Catalog => print_catalog(),
        Commands::Soundcheck { soundscape, hold } => {
            soundcheck(&config, &soundscape, Duration::from_secs(hold)).await?;
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Study Room server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let storage = Arc::new(MemoryStorage::new());
    tracing::info!("In-memory storage ready (data is lost on exit)");

    let app_state = AppState::new(storage, config.playback.clone());
    let app = api::router(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

fn print_catalog() {
    println!("Backgrounds:");
    for background in catalog::BACKGROUNDS {
        println!("  {:<10} {} ({})", background.id, background.name, background.image);
    }

    println!("Soundscapes:");
    for soundscape in catalog::SOUNDSCAPES {
        let source = if soundscape.is_silence() {
            "silence"
        } else {
            soundscape.url
        };
        println!("  {:<10} {} ({})", soundscape.id, soundscape.name, source);
    }
}

async fn soundcheck(config: &ServerConfig, id: &str, hold: Duration) -> anyhow::Result<()> {
    let soundscape = catalog::soundscape(id).with_context(|| {
        let known: Vec<_> = catalog::SOUNDSCAPES.iter().map(|s| s.id).collect();
        format!("Unknown soundscape '{}' (known: {})", id, known.join(", "))
    })?;

    let options = config.playback.clone();
    let settle = options.fade_in() + options.fade_out() + Duration::from_secs(5);
    let player = AudioPlayer::new(HeadlessAudio::new(), options);

    let mut events = player.subscribe();
    let logger = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                PlayerEvent::FadeStarted {
                    direction,
                    target,
                    duration_ms,
                } => tracing::info!(?direction, target_volume = target, duration_ms, "Fade started"),
                PlayerEvent::FadeFinished { direction } => tracing::info!(?direction, "Fade finished"),
                PlayerEvent::FadeCancelled { direction, volume } => {
                    tracing::info!(?direction, volume, "Fade cancelled");
                }
                PlayerEvent::StatusChanged { status } => tracing::info!(
                    playing = status.is_playing,
                    loading = status.is_loading,
                    url = %status.loaded_url,
                    "Status"
                ),
                PlayerEvent::Failed { message, .. } => tracing::warn!("{}", message),
                PlayerEvent::Stopped => tracing::info!("Stopped"),
            }
        }
    });

    if soundscape.is_silence() {
        tracing::info!("'{}' is silence, nothing to play", soundscape.name);
    } else {
        tracing::info!("Soundcheck: {} ({})", soundscape.name, soundscape.url);
        player.play(soundscape.url);

        tokio::time::timeout(settle, player.wait_for(|s| s.is_playing && !s.is_loading))
            .await
            .context("Fade-in did not finish")??;
        tokio::time::sleep(hold).await;

        player.stop();
        tokio::time::timeout(settle, player.wait_for(|s| !s.is_playing && !s.is_loading))
            .await
            .context("Fade-out did not finish")??;
    }

    player.shutdown().await;
    logger.await?;
    Ok(())
}

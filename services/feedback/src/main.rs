mod agent;
mod config;
mod persona;
mod runtime_adapter;

use crate::config::{Config, TurnMode};
use crate::runtime_adapter::WorkerRuntime;
use anyhow::{Context, Result};
use cafevoice_core::{AgentSession, JobContext, RoomHandle};
use cafevoice_types::{ServerEvent, Session};
use cafevoice_worker::{ClientTx, ServerRx};
use clap::Parser;
use tracing_subscriber::fmt::time::ChronoLocal;

#[derive(Parser)]
#[command(about = "Cafeteria feedback voice agent worker")]
struct Cli {
    /// Override the TURN_DETECTION environment selector
    #[arg(long, value_enum)]
    turn_detection: Option<TurnMode>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // --- 1. Load Configuration ---
    let mut config = Config::from_env().context("Failed to load application configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(ChronoLocal::rfc_3339())
        .init();

    // --- 3. Parse Command-Line Arguments ---
    let args = Cli::parse();
    if let Some(turn_mode) = args.turn_detection {
        config.turn_mode = turn_mode;
    }
    tracing::info!(
        "Configuration loaded successfully. Turn detection: {:?}",
        config.turn_mode
    );

    // --- 4. Register with the agent runtime ---
    // Collaborator credentials ride along at registration so the runtime's
    // provider plugins can open streams on this agent's behalf.
    let worker_config = cafevoice_worker::Config::builder()
        .with_credential("x-sarvam-api-key", &config.sarvam_api_key)
        .with_credential("x-gemini-api-key", &config.gemini_api_key)
        .build();
    let client = cafevoice_worker::connect_with_config(128, worker_config)
        .await
        .context("Failed to connect to the agent runtime")?;
    tracing::info!("Registered with the agent runtime, waiting for jobs");

    // --- 5. Dispatch jobs ---
    // The runtime sends one job.assigned per incoming connection; each job
    // gets its own entrypoint task and its own session configuration.
    let mut jobs = client.server_events().context("Worker is not connected")?;
    loop {
        match jobs.recv().await {
            Ok(ServerEvent::JobAssigned(job)) => {
                let ctx = JobContext::new(RoomHandle::new(job.room_name()));
                let commands = client.client_tx()?;
                let events = client.server_events()?;
                let session_config = agent::session_config(&config)
                    .context("Failed to assemble the session configuration")?;
                tokio::spawn(entrypoint(ctx, commands, events, session_config));
            }
            Ok(ServerEvent::Close { reason }) => {
                tracing::info!("Runtime closed the connection: {:?}", reason);
                break;
            }
            Ok(_) => {}
            Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!("Job stream lagged, skipped {} events", skipped);
            }
            Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
        }
    }

    if let Ok(stats) = client.stats() {
        tracing::info!(
            "Shutting down: {} jobs, {} user turns, {} replies",
            stats.jobs_assigned(),
            stats.turns_committed(),
            stats.replies_completed()
        );
    }
    Ok(())
}

/// Called once per incoming connection: binds the feedback agent to the room
/// and lets the runtime drive the conversation until teardown.
async fn entrypoint(ctx: JobContext, commands: ClientTx, events: ServerRx, config: Session) {
    tracing::info!("User connected to room: {}", ctx.room().name());

    let runtime = WorkerRuntime::new(ctx.room().name(), commands, events);
    match AgentSession::start(runtime, config, ctx.room().clone()).await {
        Ok(session) => {
            if let Err(e) = session.closed().await {
                tracing::warn!(
                    "Session for room {} ended abnormally: {}",
                    ctx.room().name(),
                    e
                );
            }
        }
        Err(e) => {
            tracing::error!(
                "Failed to start session for room {}: {}",
                ctx.room().name(),
                e
            );
        }
    }
}

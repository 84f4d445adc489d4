//! Homework engine - Main entry point.
//!
//! Serves JSON-lines requests on stdin and writes one JSON response per line on
//! stdout. Logs go to stderr.

use std::io::{BufRead, Write};
use std::sync::Arc;

use homework_domain::{Cycle, TemplateCatalog};
use homework_engine::api;
use homework_engine::infrastructure::{clock::SystemClock, config::EngineConfig};
use homework_engine::HomeworkApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting homework engine");

    let config = EngineConfig::from_env();
    let mut app = HomeworkApp::new(
        &config,
        Arc::new(TemplateCatalog::default()),
        Arc::new(SystemClock::new()),
    );
    tracing::info!(
        next_daily = %app.next_reset(Cycle::Daily),
        next_weekly = %app.next_reset(Cycle::Weekly),
        "Waiting for requests on stdin"
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = api::handle_line(&mut app, &line);
        serde_json::to_writer(&mut stdout, &response)?;
        writeln!(stdout)?;
        stdout.flush()?;
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

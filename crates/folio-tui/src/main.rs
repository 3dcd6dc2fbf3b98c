//! Folio Terminal UI.
//!
//! A single-screen portfolio: a scrollable document on the left and a scripted
//! assistant, live coding stats and typewriter fun facts on the right.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

mod app;
mod backend;
mod config;
mod event;
mod state;
mod ui;

use app::App;
use config::Config;
use event::{BackendCommand, UiEvent};
use folio_core::{Section, FALLBACK_COMMITS};
use folio_github::{CommitSource, GitHubClient, OfflineSource};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Terminal portfolio with a scripted assistant")]
#[command(version)]
struct Cli {
    /// GitHub account whose public pushes feed the commit counter
    #[arg(long, default_value = "tahmeedt")]
    github_user: String,

    /// Skip the GitHub lookup and show the fallback commit count
    #[arg(long)]
    offline: bool,

    /// Section to open at (hero, about, projects, experience, contact)
    #[arg(long)]
    section: Option<Section>,

    /// UI poll interval in milliseconds
    #[arg(long, default_value = "50")]
    tick_ms: u64,

    /// Log file path
    #[arg(long, default_value = "/tmp/folio.log")]
    log_file: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            github_user: cli.github_user,
            offline: cli.offline,
            start_section: cli.section,
            tick_rate: std::time::Duration::from_millis(cli.tick_ms.max(1)),
            log_file: cli.log_file,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from(Cli::parse());

    // Write logs to a file to avoid terminal interference
    let log_file = std::fs::File::create(&config.log_file).ok();
    if let Some(file) = log_file {
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_env_filter("folio=debug,folio_core=debug,folio_github=debug")
            .with_ansi(false)
            .init();
    }

    run_portfolio_tui(config)
}

fn commit_source(config: &Config) -> Arc<dyn CommitSource> {
    if config.offline {
        info!("Offline mode, commit counter uses the fallback");
        return Arc::new(OfflineSource);
    }
    match GitHubClient::new(&config.github_user) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            warn!(error = %e, "Failed to build GitHub client, running offline");
            Arc::new(OfflineSource)
        }
    }
}

fn run_portfolio_tui(config: Config) -> Result<(), Box<dyn Error>> {
    info!(
        user = %config.github_user,
        offline = config.offline,
        section = ?config.start_section,
        "Starting portfolio TUI"
    );

    // Create channels for UI <-> backend communication
    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>(16);
    let (cmd_tx, cmd_rx) = mpsc::channel::<BackendCommand>(16);

    // Spawn background thread with its own tokio runtime
    let source = commit_source(&config);
    let bg_handle = std::thread::spawn(move || match tokio::runtime::Runtime::new() {
        Ok(rt) => rt.block_on(backend::run_backend(source, ui_tx, cmd_rx)),
        Err(e) => {
            error!(error = %e, "Failed to create tokio runtime");
            let _ = ui_tx.blocking_send(UiEvent::ActivityResolved(FALLBACK_COMMITS));
        }
    });

    // Initialize terminal (enters alternate screen, enables raw mode)
    let terminal = ratatui::init();

    let mut app = App::new(ui_rx, cmd_tx).start_at(config.start_section);
    let result = app.run(terminal, config.tick_rate);

    // Restore terminal (exits alternate screen, disables raw mode)
    ratatui::restore();

    let _ = bg_handle.join();

    info!("TUI shutdown complete");

    result.map_err(|e| e.into())
}

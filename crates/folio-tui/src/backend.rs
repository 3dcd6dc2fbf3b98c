//! Background task for the activity lookup.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, info};

use folio_github::{resolve_commit_total, CommitSource};

use crate::event::{BackendCommand, UiEvent};

/// Run the backend command loop.
///
/// This function runs in a separate thread with its own tokio runtime. Lookups run
/// as spawned tasks so a slow request never delays `Quit`; outstanding lookups are
/// dropped with the runtime.
pub async fn run_backend(
    source: Arc<dyn CommitSource>,
    ui_tx: mpsc::Sender<UiEvent>,
    mut cmd_rx: mpsc::Receiver<BackendCommand>,
) {
    info!("Backend started");

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            BackendCommand::FetchActivity => {
                debug!("Fetching activity");
                let source = source.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let total = resolve_commit_total(source.as_ref(), Utc::now()).await;
                    let _ = ui_tx.send(UiEvent::ActivityResolved(total)).await;
                });
            }
            BackendCommand::Quit => {
                info!("Received quit command, shutting down backend");
                break;
            }
        }
    }

    info!("Backend shutdown complete");
}

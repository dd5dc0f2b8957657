// Interrupt handling
//
// SIGINT (Ctrl+C) and SIGTERM both stop the accept loop. Nothing is
// buffered and no state persists, so shutdown is immediate once the
// in-flight connection finishes.

use std::sync::Arc;

use tokio::sync::Notify;

use crate::logger;

/// Watch for an interrupt and wake everyone waiting on `shutdown`.
#[cfg(unix)]
pub fn spawn_shutdown_watcher(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let Ok(mut sigint) = signal(SignalKind::interrupt()) else {
            logger::log_error("Failed to register SIGINT handler");
            return;
        };
        let Ok(mut sigterm) = signal(SignalKind::terminate()) else {
            logger::log_error("Failed to register SIGTERM handler");
            return;
        };

        tokio::select! {
            _ = sigint.recv() => {}
            _ = sigterm.recv() => {}
        }
        // notify_one stores a permit, so the signal is not lost when the
        // accept loop is mid-connection rather than parked on notified()
        shutdown.notify_one();
    });
}

/// Windows fallback - only Ctrl+C is supported
#[cfg(not(unix))]
pub fn spawn_shutdown_watcher(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => shutdown.notify_one(),
            Err(e) => logger::log_error(&format!("Failed to listen for Ctrl+C: {e}")),
        }
    });
}

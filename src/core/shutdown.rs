//! Process shutdown handling.
//!
//! [`ShutdownHook`] owns the action that releases the running transport. It
//! runs that action at most once, either when triggered explicitly or when the
//! hook is dropped.

use std::sync::Mutex;

use tracing::{debug, info, warn};

type ReleaseFn = Box<dyn FnOnce() + Send>;

/// One-shot shutdown hook.
pub struct ShutdownHook {
    release: Mutex<Option<ReleaseFn>>,
}

impl ShutdownHook {
    /// Create a hook that runs `release` on shutdown.
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Mutex::new(Some(Box::new(release))),
        }
    }

    /// Run the release action.
    ///
    /// Returns `true` if this call ran it, `false` if it had already run.
    pub fn trigger(&self) -> bool {
        let release = match self.release.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        match release {
            Some(release) => {
                debug!("Running shutdown hook");
                release();
                true
            }
            None => false,
        }
    }
}

impl Drop for ShutdownHook {
    fn drop(&mut self) {
        self.trigger();
    }
}

/// Wait for an interrupt signal (Ctrl-C / SIGINT).
///
/// If the signal handler cannot be installed this never resolves, leaving
/// shutdown to the transport closing.
pub async fn interrupted() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Interrupt received, shutting down"),
        Err(e) => {
            warn!("Failed to listen for interrupt signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

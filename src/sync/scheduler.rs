//! Periodic sync
//!
//! Runs [`sync_once`] on a fixed interval until stopped. The first run
//! happens immediately so a fresh start picks up remote quotes right away.

use crate::store::SharedStore;
use crate::sync::{sync_once, RemoteSource};
use crate::types::MergeResult;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Handle to a running sync loop
///
/// Dropping the handle stops the loop after its current run.
pub struct SyncTask {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl SyncTask {
    /// Spawn the loop on the current tokio runtime
    ///
    /// `on_merge` is called after every run that appended at least one quote.
    pub fn start<F>(
        store: SharedStore,
        remote: Arc<dyn RemoteSource>,
        period: Duration,
        on_merge: F,
    ) -> Self
    where
        F: Fn(MergeResult) + Send + Sync + 'static,
    {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            tracing::info!("Sync started, every {}s", period.as_secs());

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if let Some(result) = sync_once(&store, remote.as_ref()).await {
                            if result.has_changes() {
                                on_merge(result);
                            }
                        }
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }

            tracing::info!("Sync stopped");
        });

        Self {
            shutdown_tx,
            handle,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop the loop and wait for it to exit
    pub async fn stop(self) {
        let _ = self.shutdown_tx.send(true);
        if let Err(e) = self.handle.await {
            tracing::warn!("Sync task ended abnormally: {}", e);
        }
    }
}

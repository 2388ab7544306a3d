//! Remote reconciliation
//!
//! The store never talks to the network itself. A [`RemoteSource`] supplies
//! quotes to merge and accepts published ones; every failure stops here.

pub mod http;
pub mod scheduler;

pub use http::HttpRemote;
pub use scheduler::SyncTask;

use crate::store::{lock_store, SharedStore};
use crate::types::{MergeResult, Quote};
use async_trait::async_trait;
use thiserror::Error;

/// Network errors from the remote endpoint
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Server returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Source of remote quotes
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch the remote quote list
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, SyncError>;
    /// Publish one quote; the response carries nothing the caller needs
    async fn publish_quote(&self, quote: &Quote) -> Result<(), SyncError>;
}

/// Fetch from `remote` and merge into `store`
///
/// Returns `None` when anything failed; the local collection is left as it was.
pub async fn sync_once(store: &SharedStore, remote: &dyn RemoteSource) -> Option<MergeResult> {
    let incoming = match remote.fetch_quotes().await {
        Ok(quotes) => quotes,
        Err(e) => {
            tracing::error!("Error fetching quotes: {}", e);
            return None;
        }
    };

    let merged = lock_store(store).merge(&incoming);
    match merged {
        Ok(result) => {
            tracing::info!(
                "Sync fetched {} quotes, {} new",
                incoming.len(),
                result.added_count
            );
            Some(result)
        }
        Err(e) => {
            tracing::warn!("Fetched quotes could not be saved: {}", e);
            None
        }
    }
}

/// Publish a quote, logging instead of failing
pub async fn publish_best_effort(remote: &dyn RemoteSource, quote: &Quote) -> bool {
    match remote.publish_quote(quote).await {
        Ok(()) => {
            tracing::debug!("Published quote to server");
            true
        }
        Err(e) => {
            tracing::error!("Error posting quote: {}", e);
            false
        }
    }
}

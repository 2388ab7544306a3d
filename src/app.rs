//! Root Dioxus application component
//!
//! Builds the shared state, starts the periodic sync and lays out the widget.

use crate::storage::settings::{load_settings, AppSettings};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::store::transfer::{self, TransferError};
use crate::store::{lock_store, EmptyPolicy, QuoteStore, SharedStore, StoreError};
use crate::sync::{publish_best_effort, HttpRemote, RemoteSource, SyncTask};
use crate::types::{Notice, Quote};
use crate::ui::Layout;
use dioxus::prelude::*;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// Application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    /// `None` when no HTTP client could be built; the widget then runs offline
    pub remote: Option<Arc<dyn RemoteSource>>,
    pub settings: Signal<AppSettings>,
    pub selected_category: Signal<String>,
    pub current_quote: Signal<Option<Quote>>,
    /// Bumped after every change to the collection
    pub revision: Signal<u64>,
    pub notice: Signal<Option<Notice>>,
}

impl AppState {
    pub fn new(settings: AppSettings) -> Self {
        let durable: Arc<dyn KeyValueStore> = match FileStore::in_data_dir() {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::error!("No data directory, quotes will not persist: {}", e);
                Arc::new(MemoryStore::new())
            }
        };
        let session: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let policy = if settings.seed_when_empty {
            EmptyPolicy::Seed
        } else {
            EmptyPolicy::Empty
        };
        let store = QuoteStore::load(durable, session, policy);

        let remote: Option<Arc<dyn RemoteSource>> = match HttpRemote::new(&settings.api_url) {
            Ok(remote) => Some(Arc::new(remote)),
            Err(e) => {
                tracing::error!("Failed to create HTTP client, sync disabled: {}", e);
                None
            }
        };

        let selected = store.selected_category();
        let current = store.pick_for_category(&selected);

        tracing::info!("AppState initialized");
        Self {
            store: store.into_shared(),
            remote,
            settings: Signal::new(settings),
            selected_category: Signal::new(selected),
            current_quote: Signal::new(current),
            revision: Signal::new(0),
            notice: Signal::new(None),
        }
    }

    /// Pick a random quote from the selected category and put it on screen
    pub fn show_new_quote(&mut self) {
        let category = self.selected_category.read().clone();
        let quote = {
            let store = lock_store(&self.store);
            let quote = store.pick_for_category(&category);
            if let Some(quote) = &quote {
                if let Err(e) = store.remember_last_viewed(quote) {
                    tracing::warn!("Failed to remember quote: {}", e);
                }
            }
            quote
        };
        self.current_quote.set(quote);
    }

    pub fn select_category(&mut self, category: &str) {
        if let Err(e) = lock_store(&self.store).set_selected_category(category) {
            tracing::error!("Failed to save selected category: {}", e);
        }
        self.selected_category.set(category.to_string());
        self.show_new_quote();
    }

    /// Add a quote; returns whether it was stored
    pub fn add_quote(&mut self, text: &str, category: &str) -> bool {
        let added = lock_store(&self.store).add(text, category);
        match added {
            Ok(quote) => {
                self.revision += 1;
                self.show_new_quote();
                self.notify(Notice::info("Quote added successfully!"));
                if self.settings.read().publish_on_add {
                    if let Some(remote) = self.remote.clone() {
                        spawn(async move {
                            publish_best_effort(remote.as_ref(), &quote).await;
                        });
                    }
                }
                true
            }
            Err(StoreError::Validation(_)) => {
                self.notify(Notice::error("Please fill in both fields."));
                false
            }
            Err(StoreError::Storage(e)) => {
                self.notify(Notice::error(format!("Could not save quote: {}", e)));
                false
            }
        }
    }

    pub fn export_quotes(&mut self) {
        let result = transfer::default_export_dir().and_then(|dir| {
            let quotes = lock_store(&self.store).quotes().to_vec();
            transfer::export_to_file(&quotes, &dir)
        });
        match result {
            Ok(path) => self.notify(Notice::info(format!("Quotes exported to {}", path.display()))),
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.notify(Notice::error(format!("Export failed: {}", e)));
            }
        }
    }

    pub fn import_quotes(&mut self, path: &Path) {
        let result = transfer::import_file(path).and_then(|quotes| {
            lock_store(&self.store)
                .import_batch(&quotes)
                .map_err(TransferError::from)
        });
        match result {
            Ok(count) => {
                tracing::info!("Imported {} quotes from {}", count, path.display());
                self.revision += 1;
                self.show_new_quote();
                self.notify(Notice::info("Quotes imported successfully!"));
            }
            Err(e) => {
                tracing::error!("Import from {} failed: {}", path.display(), e);
                self.notify(Notice::error(format!("Import failed: {}", e)));
            }
        }
    }

    /// Fill an empty quote card after a sync brought in new quotes
    fn show_synced_quote(&mut self) {
        let category = self.selected_category.read().clone();
        let current = self.current_quote.read().clone();
        let next = quote_after_merge(&lock_store(&self.store), &category, current.clone());
        if next != current {
            self.current_quote.set(next);
        }
    }

    /// Show a banner notice that clears itself after `notification_secs`
    pub fn notify(&mut self, notice: Notice) {
        let lifetime = Duration::from_secs(self.settings.read().notification_secs);
        self.notice.set(Some(notice.clone()));

        let mut slot = self.notice;
        spawn(async move {
            tokio::time::sleep(lifetime).await;
            // A newer notice keeps its own timer.
            let still_shown = *slot.peek() == Some(notice);
            if still_shown {
                slot.set(None);
            }
        });
    }
}

/// Quote to show once a merge has landed: the current one stays, an empty card gets a pick
fn quote_after_merge(store: &QuoteStore, category: &str, current: Option<Quote>) -> Option<Quote> {
    current.or_else(|| store.pick_for_category(category))
}

#[component]
pub fn App() -> Element {
    let app_state = use_hook(|| AppState::new(load_settings()));
    use_context_provider(|| app_state.clone());

    // The task lives in the hook, so unmounting the window drops it and ends the loop.
    let _sync_task = use_hook(|| {
        let remote = app_state.remote.clone()?;
        let period = Duration::from_secs(app_state.settings.read().sync_interval_secs);
        let (merge_tx, mut merge_rx) = tokio::sync::mpsc::unbounded_channel();

        let task = SyncTask::start(app_state.store.clone(), remote, period, move |result| {
            let _ = merge_tx.send(result);
        });

        let mut state = app_state.clone();
        spawn(async move {
            while let Some(result) = merge_rx.recv().await {
                tracing::debug!("{} quotes arrived from sync", result.added_count);
                state.revision += 1;
                state.show_synced_quote();
                state.notify(Notice::info("Quotes synced with server!"));
            }
        });

        Some(Rc::new(task))
    });

    rsx! {
        Layout {}
    }
}

//! Quote store
//!
//! Owns the quote collection and its persistence. Every mutation goes through
//! [`QuoteStore`] and is written to the durable store before it returns.

pub mod transfer;

use crate::storage::{
    KeyValueStore, StorageError, LAST_VIEWED_KEY, QUOTES_KEY, SELECTED_CATEGORY_KEY,
};
use crate::types::quote::seed_quotes;
use crate::types::{MergeResult, Quote, ALL_CATEGORIES};
use rand::seq::SliceRandom;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

/// Store shared between the UI and the sync task
pub type SharedStore = Arc<Mutex<QuoteStore>>;

/// Lock a shared store
///
/// Mutations roll back on failure, so a poisoned lock still guards a
/// consistent collection.
pub fn lock_store(store: &SharedStore) -> MutexGuard<'_, QuoteStore> {
    store.lock().unwrap_or_else(|e| e.into_inner())
}

/// Rejected input on `add`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Quote text must not be empty")]
    EmptyText,
    #[error("Quote category must not be empty")]
    EmptyCategory,
}

/// Errors raised by store mutations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to persist quotes: {0}")]
    Storage(#[from] StorageError),
}

/// What `load` does when storage holds no quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Start with an empty collection
    Empty,
    /// Start with the built-in seed quotes
    Seed,
}

pub struct QuoteStore {
    quotes: Vec<Quote>,
    durable: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
}

impl QuoteStore {
    /// Load the collection from durable storage
    ///
    /// Missing, empty or undecodable data yields the collection chosen by
    /// `policy`; decode problems are logged and never returned.
    pub fn load(
        durable: Arc<dyn KeyValueStore>,
        session: Arc<dyn KeyValueStore>,
        policy: EmptyPolicy,
    ) -> Self {
        let stored = match read_quotes(durable.as_ref()) {
            Ok(quotes) => quotes,
            Err(e) => {
                tracing::warn!("Failed to load stored quotes, starting over: {}", e);
                Vec::new()
            }
        };

        let quotes = if stored.is_empty() && policy == EmptyPolicy::Seed {
            tracing::info!("No stored quotes, using seed set");
            seed_quotes()
        } else {
            stored
        };

        tracing::info!("Loaded {} quotes", quotes.len());
        Self {
            quotes,
            durable,
            session,
        }
    }

    /// Wrap the store for sharing with the sync task
    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Append a new quote and persist it
    pub fn add(&mut self, text: &str, category: &str) -> Result<Quote, StoreError> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText.into());
        }
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory.into());
        }

        let quote = Quote::new(text, category);
        self.quotes.push(quote.clone());
        self.commit(self.quotes.len() - 1)?;

        tracing::info!("Added quote in category {:?}", quote.category);
        Ok(quote)
    }

    /// Quotes in `category`, or every quote for [`ALL_CATEGORIES`]
    pub fn filtered_view(&self, category: &str) -> Vec<Quote> {
        if category == ALL_CATEGORIES {
            return self.quotes.clone();
        }
        self.quotes
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect()
    }

    /// Uniform random choice from `view`
    pub fn pick_random(view: &[Quote]) -> Option<Quote> {
        view.choose(&mut rand::thread_rng()).cloned()
    }

    /// Random quote from the filtered view of `category`
    pub fn pick_for_category(&self, category: &str) -> Option<Quote> {
        Self::pick_random(&self.filtered_view(category))
    }

    /// Append every incoming quote whose text is not already present
    ///
    /// Existing entries are never modified. Storage is written only when
    /// something was appended.
    pub fn merge(&mut self, incoming: &[Quote]) -> Result<MergeResult, StorageError> {
        let before = self.quotes.len();
        for quote in incoming {
            if quote.is_blank() {
                tracing::warn!("Skipping incoming quote without text or category");
                continue;
            }
            if !self.quotes.iter().any(|q| q.same_text(quote)) {
                self.quotes.push(quote.clone());
            }
        }

        let result = MergeResult {
            added_count: self.quotes.len() - before,
        };
        if result.has_changes() {
            self.commit(before)?;
            tracing::info!("Merged {} new quotes", result.added_count);
        }
        Ok(result)
    }

    /// Append every incoming quote as-is, duplicates included
    pub fn import_batch(&mut self, incoming: &[Quote]) -> Result<usize, StorageError> {
        let before = self.quotes.len();
        self.quotes.extend_from_slice(incoming);
        self.commit(before)?;

        tracing::info!("Imported {} quotes", incoming.len());
        Ok(incoming.len())
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for quote in &self.quotes {
            if !categories.contains(&quote.category) {
                categories.push(quote.category.clone());
            }
        }
        categories
    }

    /// Last category chosen in the selector, [`ALL_CATEGORIES`] by default
    pub fn selected_category(&self) -> String {
        match self.durable.read(SELECTED_CATEGORY_KEY) {
            Ok(Some(category)) if !category.is_empty() => category,
            Ok(_) => ALL_CATEGORIES.to_string(),
            Err(e) => {
                tracing::warn!("Failed to read selected category: {}", e);
                ALL_CATEGORIES.to_string()
            }
        }
    }

    pub fn set_selected_category(&self, category: &str) -> Result<(), StorageError> {
        self.durable.write(SELECTED_CATEGORY_KEY, category)
    }

    /// Remember the quote on screen for the rest of the session
    pub fn remember_last_viewed(&self, quote: &Quote) -> Result<(), StorageError> {
        let json = serde_json::to_string(quote)?;
        self.session.write(LAST_VIEWED_KEY, &json)
    }

    /// Persist the collection, dropping everything from `rollback_to` on failure
    fn commit(&mut self, rollback_to: usize) -> Result<(), StorageError> {
        let result = serde_json::to_string(&self.quotes)
            .map_err(StorageError::from)
            .and_then(|json| self.durable.write(QUOTES_KEY, &json));

        if let Err(e) = result {
            tracing::error!("Failed to save quotes: {}", e);
            self.quotes.truncate(rollback_to);
            return Err(e);
        }

        tracing::debug!("Saved {} quotes", self.quotes.len());
        Ok(())
    }
}

fn read_quotes(store: &dyn KeyValueStore) -> Result<Vec<Quote>, StorageError> {
    let quotes: Vec<Quote> = match store.read(QUOTES_KEY)? {
        Some(json) if !json.trim().is_empty() => serde_json::from_str(&json)?,
        _ => return Ok(Vec::new()),
    };

    let total = quotes.len();
    let quotes: Vec<Quote> = quotes.into_iter().filter(|q| !q.is_blank()).collect();
    if quotes.len() < total {
        tracing::warn!(
            "Dropped {} stored quotes without text or category",
            total - quotes.len()
        );
    }
    Ok(quotes)
}

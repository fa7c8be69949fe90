//! Application state with a shared, injected [`UserStore`].
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::Mutex<>>`. Every
//! handler holds the lock for the whole store operation, so concurrent
//! requests are serialized and no reader sees a record mid-update.

use std::sync::Arc;

use userapi_core::{InMemoryStore, UserStore};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The user store (async Mutex -- handlers `.lock().await`).
    pub store: Arc<tokio::sync::Mutex<Box<dyn UserStore>>>,
}

impl AppState {
    /// Wraps any store backend.
    pub fn new(store: impl UserStore + 'static) -> Self {
        let store: Box<dyn UserStore> = Box::new(store);
        AppState {
            store: Arc::new(tokio::sync::Mutex::new(store)),
        }
    }

    /// State backed by an in-memory store holding the three seed records.
    pub fn seeded() -> Self {
        AppState::new(InMemoryStore::seeded())
    }
}

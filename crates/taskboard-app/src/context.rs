//! Composition root wiring
//!
//! One [`AppContext`] is built at startup and handed down to every
//! card and form. Nothing reaches for ambient globals; the store, the
//! API seam and the notifier all arrive through this handle.

use crate::notify::Notifier;
use std::sync::Arc;
use taskboard_api::TaskApi;
use taskboard_store::TaskStore;

/// Shared collaborators for all controllers
pub struct AppContext {
    /// The API seam mutations go through
    pub api: Arc<dyn TaskApi>,
    /// The single writer of the visible task collection
    pub store: Arc<TaskStore>,
    /// Where mutation outcomes are reported
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    /// Wire the context up; the store is built over the same API handle
    /// the mutations use.
    #[must_use]
    pub fn new(api: Arc<dyn TaskApi>, notifier: Arc<dyn Notifier>) -> Arc<Self> {
        let store = Arc::new(TaskStore::new(Arc::clone(&api)));
        Arc::new(Self {
            api,
            store,
            notifier,
        })
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

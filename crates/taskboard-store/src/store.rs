//! The task collection store
//!
//! Owns the client's only writable copy of the task collection. Reads
//! go through a moka cache with a 60-second stale window, so repeated
//! consumers within the window reuse the cached collection without
//! touching the network. Writes are atomic whole-collection snapshot
//! replacements; no record is ever edited in place.

use crate::state::StoreState;
use moka::future::Cache;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use taskboard_api::{ApiError, TaskApi};
use taskboard_model::{map_tasks, MapTaskError, Task};
use tokio::sync::Mutex;

/// How long a fetched collection counts as fresh
pub const STALE_TIME: Duration = Duration::from_secs(60);

/// Singleton cache key for the one task collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CollectionKey;

/// Why a fetch failed
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The list request itself failed
    #[error("could not load tasks: {0}")]
    Fetch(#[from] ApiError),

    /// A record in the response could not be normalized
    #[error("could not load tasks: {0}")]
    Map(#[from] MapTaskError),
}

/// Single source of truth for the task collection
///
/// Handed down from the composition root; every consumer shares one
/// instance. Only this type writes the visible collection.
pub struct TaskStore {
    api: Arc<dyn TaskApi>,
    cache: Cache<CollectionKey, Arc<[Task]>>,
    state: RwLock<StoreState>,
    // Serializes overlapping loads so two rapid mutations cannot race
    // their refetch responses.
    load_lock: Mutex<()>,
}

impl TaskStore {
    /// Store with the default 60-second stale window.
    #[must_use]
    pub fn new(api: Arc<dyn TaskApi>) -> Self {
        Self::with_stale_time(api, STALE_TIME)
    }

    /// Store with a custom stale window.
    #[must_use]
    pub fn with_stale_time(api: Arc<dyn TaskApi>, stale_time: Duration) -> Self {
        Self {
            api,
            cache: Cache::builder()
                .max_capacity(1)
                .time_to_live(stale_time)
                .build(),
            state: RwLock::new(StoreState::Loading),
            load_lock: Mutex::new(()),
        }
    }

    /// Current observable state.
    #[must_use]
    pub fn state(&self) -> StoreState {
        self.state.read().clone()
    }

    /// Fetch the collection, reusing a fresh cached snapshot when one
    /// exists.
    pub async fn fetch(&self) -> Result<Arc<[Task]>, StoreError> {
        if let Some(cached) = self.cache.get(&CollectionKey).await {
            self.install_ready(&cached);
            return Ok(cached);
        }
        self.load().await
    }

    /// Drop the cached snapshot and fetch again.
    ///
    /// An existing `Ready` display state is kept until the new response
    /// lands, so a refetch never flickers back to `Loading`.
    pub async fn refetch(&self) -> Result<Arc<[Task]>, StoreError> {
        self.cache.invalidate(&CollectionKey).await;
        self.load().await
    }

    async fn load(&self) -> Result<Arc<[Task]>, StoreError> {
        let _serialized = self.load_lock.lock().await;

        // A concurrent load may have landed while we waited.
        if let Some(cached) = self.cache.get(&CollectionKey).await {
            self.install_ready(&cached);
            return Ok(cached);
        }

        match self.fetch_and_map().await {
            Ok(snapshot) => {
                self.cache.insert(CollectionKey, Arc::clone(&snapshot)).await;
                self.install_ready(&snapshot);
                tracing::debug!(count = snapshot.len(), "task collection refreshed");
                Ok(snapshot)
            }
            Err(e) => {
                tracing::error!(error = %e, "task collection fetch failed");
                self.install_error(e.to_string());
                Err(e)
            }
        }
    }

    async fn fetch_and_map(&self) -> Result<Arc<[Task]>, StoreError> {
        let wires = self.api.list_tasks().await?;
        let tasks = map_tasks(wires)?;
        Ok(tasks.into())
    }

    fn install_ready(&self, snapshot: &Arc<[Task]>) {
        *self.state.write() = StoreState::Ready(Arc::clone(snapshot));
    }

    fn install_error(&self, message: String) {
        let mut state = self.state.write();
        let retained = state.latest_snapshot();
        *state = StoreState::Error { message, retained };
    }
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("state", &self.state.read())
            .finish_non_exhaustive()
    }
}

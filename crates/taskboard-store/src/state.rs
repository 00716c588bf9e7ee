//! Observable store states
//!
//! The store is always in exactly one of three states. `Ready` may hold
//! an empty collection; `Error` keeps the previous good snapshot around
//! so a failed refetch does not blank an already-rendered list.

use std::sync::Arc;
use taskboard_model::Task;

/// What a consumer of the store can observe
#[derive(Debug, Clone)]
pub enum StoreState {
    /// Initial state; nothing fetched yet
    Loading,
    /// The last fetch failed
    Error {
        /// Human-readable failure description
        message: String,
        /// The previous good collection, if one ever existed
        retained: Option<Arc<[Task]>>,
    },
    /// A collection was fetched and mapped successfully
    Ready(Arc<[Task]>),
}

impl StoreState {
    /// True before the first fetch completes
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True when the last fetch failed
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The current collection, only when the last fetch succeeded
    #[must_use]
    pub fn tasks(&self) -> Option<&[Task]> {
        match self {
            Self::Ready(tasks) => Some(tasks),
            _ => None,
        }
    }

    /// The freshest collection worth showing: the ready one, or the
    /// snapshot retained across a failed refetch
    #[must_use]
    pub fn display_tasks(&self) -> Option<&[Task]> {
        match self {
            Self::Ready(tasks) => Some(tasks),
            Self::Error {
                retained: Some(tasks),
                ..
            } => Some(tasks),
            _ => None,
        }
    }

    /// Snapshot to retain when transitioning into `Error`
    pub(crate) fn latest_snapshot(&self) -> Option<Arc<[Task]>> {
        match self {
            Self::Ready(tasks) => Some(Arc::clone(tasks)),
            Self::Error { retained, .. } => retained.clone(),
            Self::Loading => None,
        }
    }
}

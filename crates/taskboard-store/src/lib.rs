//! taskboard Store - the cached task collection
//!
//! The single source of truth for what the client displays:
//! - fetch-on-demand with a 60-second stale window (moka)
//! - explicit `Loading` / `Error` / `Ready` states
//! - refetch after every mutation, preserving the last good snapshot
//!   so a failed refresh never blanks the screen
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use taskboard_api::{ApiConfig, HttpTaskApi};
//! use taskboard_store::TaskStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig::from_env()?;
//! let store = TaskStore::new(Arc::new(HttpTaskApi::new(&config)));
//!
//! let tasks = store.fetch().await?;
//! println!("{} tasks", tasks.len());
//! # Ok(())
//! # }
//! ```

pub mod state;
pub mod store;

// Re-exports for convenience
pub use state::StoreState;
pub use store::{StoreError, TaskStore, STALE_TIME};

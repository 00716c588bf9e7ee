//! taskboard Model - task records and form drafts
//!
//! The data layer every other taskboard crate builds on:
//! - Wire and internal task representations
//! - The wire-to-internal mapper (the only way to build a [`Task`])
//! - Draft validation shared by the create and update forms
//! - The built-in image gallery
//!
//! # Example
//!
//! ```rust
//! use taskboard_model::{map_task, WireTask};
//!
//! let wire: WireTask = serde_json::from_str(
//!     r#"{"_id":"1","title":"Buy milk","description":"2% from the store",
//!         "completed":false,"images":["http://x/a.png"],
//!         "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#,
//! )?;
//! let task = map_task(wire)?;
//! assert_eq!(task.id().as_str(), "1");
//! assert_eq!(task.revision(), 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod gallery;
pub mod mapper;
pub mod task;
pub mod validation;

// Re-exports for convenience
pub use gallery::{display_images, GALLERY};
pub use mapper::{map_task, map_tasks, MapTaskError};
pub use task::{NewTask, Task, TaskId, TaskPatch, WireTask};
pub use validation::{
    TaskDraft, ValidationErrors, DESCRIPTION_MIN_CHARS, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};

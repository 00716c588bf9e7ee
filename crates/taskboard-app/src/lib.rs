//! taskboard App - views, controllers and the CLI
//!
//! Everything between the store and the terminal:
//! - Pure list derivation (search filter, completion partition)
//! - The card controller (edit dialog, armed delete, completion toggle)
//! - Create/update form controllers with validate-before-network
//! - The notification seam and the plain-text renderer
//!
//! The binary in `main.rs` is the composition root: it builds one
//! [`AppContext`] from environment configuration and hands it down.

pub mod card;
pub mod context;
pub mod forms;
pub mod notify;
pub mod render;
pub mod view;

// Re-exports for convenience
pub use card::TaskCard;
pub use context::AppContext;
pub use forms::{CreateTaskForm, SubmitOutcome, UpdateTaskForm};
pub use notify::{Notification, Notifier, RecordingNotifier, TracingNotifier};
pub use render::{render_card, render_list, render_state};
pub use view::{derive_list, filter_tasks, partition_tasks, ListContent, Partitioned};

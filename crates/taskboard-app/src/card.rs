//! Task card controller
//!
//! One card per task. Local state is the edit dialog plus the armed
//! delete confirmation; everything else is derived from the task
//! record. Mutations are non-optimistic: the displayed state only
//! changes once the refetch after a successful mutation lands.

use crate::context::AppContext;
use crate::forms::{SubmitOutcome, UpdateTaskForm};
use std::sync::Arc;
use taskboard_api::TaskApi;
use taskboard_model::{display_images, Task};

/// Controller for a single rendered task
pub struct TaskCard {
    task: Task,
    editor: Option<UpdateTaskForm>,
    delete_armed: bool,
    ctx: Arc<AppContext>,
}

impl TaskCard {
    /// Card over a task from the store's collection.
    #[must_use]
    pub fn new(task: Task, ctx: Arc<AppContext>) -> Self {
        Self {
            task,
            editor: None,
            delete_armed: false,
            ctx,
        }
    }

    /// The task this card renders
    #[inline]
    #[must_use]
    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Images to render, falling back to the gallery for a bare record
    #[must_use]
    pub fn display_images(&self) -> Vec<String> {
        display_images(self.task.images())
    }

    /// Whether the edit dialog is open
    #[inline]
    #[must_use]
    pub fn editor_open(&self) -> bool {
        self.editor.is_some()
    }

    /// Whether a delete confirmation is pending
    #[inline]
    #[must_use]
    pub fn delete_armed(&self) -> bool {
        self.delete_armed
    }

    /// Flip the completion flag server-side.
    ///
    /// Fire-and-forget from the card's point of view: success notifies
    /// and refetches, failure logs and leaves every piece of local
    /// state exactly as it was. Returns whether the mutation succeeded.
    pub async fn toggle_completion(&self) -> bool {
        match self.ctx.api.toggle_completion(self.task.id()).await {
            Ok(_) => {
                self.ctx.notifier.success("Task updated");
                if let Err(e) = self.ctx.store.refetch().await {
                    tracing::error!(error = %e, "refetch after toggle failed");
                }
                true
            }
            Err(e) => {
                tracing::error!(error = %e, id = %self.task.id(), "toggle completion failed");
                self.ctx.notifier.error("Could not update task");
                false
            }
        }
    }

    /// Arm the delete confirmation dialog.
    pub fn request_delete(&mut self) {
        self.delete_armed = true;
    }

    /// Dismiss the delete confirmation.
    pub fn cancel_delete(&mut self) {
        self.delete_armed = false;
    }

    /// Fire the armed deletion.
    ///
    /// A no-op unless [`request_delete`](Self::request_delete) ran
    /// first. On failure the task stays visible; no refetch happens.
    pub async fn confirm_delete(&mut self) -> bool {
        if !self.delete_armed {
            return false;
        }
        self.delete_armed = false;

        match self.ctx.api.delete_task(self.task.id()).await {
            Ok(()) => {
                self.ctx.notifier.success("Task deleted");
                if let Err(e) = self.ctx.store.refetch().await {
                    tracing::error!(error = %e, "refetch after delete failed");
                }
                true
            }
            Err(e) => {
                tracing::error!(error = %e, id = %self.task.id(), "delete task failed");
                self.ctx.notifier.error("Could not delete task");
                false
            }
        }
    }

    /// Open the edit dialog, pre-populated with the current fields.
    pub fn open_editor(&mut self) -> &mut UpdateTaskForm {
        self.editor
            .get_or_insert_with(|| UpdateTaskForm::for_task(&self.task, Arc::clone(&self.ctx)))
    }

    /// The open edit form, if any.
    pub fn editor_mut(&mut self) -> Option<&mut UpdateTaskForm> {
        self.editor.as_mut()
    }

    /// Close the edit dialog, discarding any unsaved draft.
    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Submit the open edit form; an accepted submission closes the
    /// dialog. Returns `None` when no editor is open.
    pub async fn submit_editor(&mut self) -> Option<SubmitOutcome> {
        let form = self.editor.as_mut()?;
        let outcome = form.submit().await;
        if outcome == SubmitOutcome::Accepted {
            self.editor = None;
        }
        Some(outcome)
    }
}

impl std::fmt::Debug for TaskCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskCard")
            .field("task", &self.task.id())
            .field("editor_open", &self.editor_open())
            .field("delete_armed", &self.delete_armed)
            .finish_non_exhaustive()
    }
}

//! Create and update form controllers
//!
//! Both forms own a [`TaskDraft`] and follow the same submission
//! protocol: validate before any network call, refuse re-entry while a
//! submission is in flight, keep user input on failure, and trigger a
//! store refetch on success. The create form resets to a pristine
//! draft after success; the update form reports acceptance so its
//! owner can close the dialog.

use crate::context::AppContext;
use std::sync::Arc;
use taskboard_api::TaskApi;
use taskboard_model::{Task, TaskDraft, TaskId, ValidationErrors};

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the payload
    Accepted,
    /// Validation failed; no network call was made
    Rejected(ValidationErrors),
    /// The request was sent and failed; user input is preserved
    Failed(String),
    /// A previous submission is still in flight; nothing was done
    InFlight,
}

/// Controller for the create-task form
pub struct CreateTaskForm {
    draft: TaskDraft,
    field_errors: Option<ValidationErrors>,
    error: Option<String>,
    in_flight: bool,
    ctx: Arc<AppContext>,
}

impl CreateTaskForm {
    /// Empty form.
    #[must_use]
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self {
            draft: TaskDraft::new(),
            field_errors: None,
            error: None,
            in_flight: false,
            ctx,
        }
    }

    /// The draft under edit
    #[inline]
    #[must_use]
    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Replace the title field.
    pub fn set_title(&mut self, title: &str) {
        self.draft.title = title.to_owned();
    }

    /// Replace the description field.
    pub fn set_description(&mut self, description: &str) {
        self.draft.description = description.to_owned();
    }

    /// Toggle a gallery URL in the selection.
    pub fn toggle_image(&mut self, url: &str) {
        self.draft.toggle_image(url);
    }

    /// Reset all fields to the pristine empty draft.
    pub fn clear(&mut self) {
        self.draft = TaskDraft::new();
        self.field_errors = None;
        self.error = None;
    }

    /// Whether the submit action is currently enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.in_flight && !self.draft.images.is_empty()
    }

    /// Per-field messages from the last rejected submission
    #[must_use]
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        self.field_errors.as_ref()
    }

    /// Message from the last failed request
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate and submit the draft.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.in_flight {
            return SubmitOutcome::InFlight;
        }

        let payload = match self.draft.clone().into_new_task() {
            Ok(payload) => payload,
            Err(errors) => {
                self.field_errors = Some(errors.clone());
                return SubmitOutcome::Rejected(errors);
            }
        };

        self.in_flight = true;
        let result = self.ctx.api.create_task(payload).await;
        self.in_flight = false;

        match result {
            Ok(_) => {
                self.ctx.notifier.success("Task created");
                self.clear();
                if let Err(e) = self.ctx.store.refetch().await {
                    tracing::error!(error = %e, "refetch after create failed");
                }
                SubmitOutcome::Accepted
            }
            Err(e) => {
                tracing::error!(error = %e, "create task failed");
                self.ctx.notifier.error("Could not create task");
                self.error = Some(e.to_string());
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}

impl std::fmt::Debug for CreateTaskForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateTaskForm")
            .field("draft", &self.draft)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

/// Controller for the update-task form, pre-populated from a card
pub struct UpdateTaskForm {
    task_id: TaskId,
    draft: TaskDraft,
    field_errors: Option<ValidationErrors>,
    error: Option<String>,
    in_flight: bool,
    ctx: Arc<AppContext>,
}

impl UpdateTaskForm {
    /// Form pre-populated with the task's current fields.
    #[must_use]
    pub fn for_task(task: &Task, ctx: Arc<AppContext>) -> Self {
        Self {
            task_id: task.id().clone(),
            draft: TaskDraft::prefilled(task.title(), task.description(), task.images()),
            field_errors: None,
            error: None,
            in_flight: false,
            ctx,
        }
    }

    /// Identifier of the task under edit
    #[inline]
    #[must_use]
    pub fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// The draft under edit
    #[inline]
    #[must_use]
    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Replace the title field.
    pub fn set_title(&mut self, title: &str) {
        self.draft.title = title.to_owned();
    }

    /// Replace the description field.
    pub fn set_description(&mut self, description: &str) {
        self.draft.description = description.to_owned();
    }

    /// Toggle a gallery URL in the selection.
    pub fn toggle_image(&mut self, url: &str) {
        self.draft.toggle_image(url);
    }

    /// Whether the submit action is currently enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.in_flight && !self.draft.images.is_empty()
    }

    /// Per-field messages from the last rejected submission
    #[must_use]
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        self.field_errors.as_ref()
    }

    /// Message from the last failed request
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate and submit the draft against the existing task.
    ///
    /// On `Accepted` the owner is expected to close the dialog; the
    /// draft is left as submitted.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.in_flight {
            return SubmitOutcome::InFlight;
        }

        let patch = match self.draft.clone().into_patch() {
            Ok(patch) => patch,
            Err(errors) => {
                self.field_errors = Some(errors.clone());
                return SubmitOutcome::Rejected(errors);
            }
        };

        self.in_flight = true;
        let result = self.ctx.api.update_task(&self.task_id, patch).await;
        self.in_flight = false;

        match result {
            Ok(_) => {
                self.ctx.notifier.success("Task updated");
                self.field_errors = None;
                self.error = None;
                if let Err(e) = self.ctx.store.refetch().await {
                    tracing::error!(error = %e, "refetch after update failed");
                }
                SubmitOutcome::Accepted
            }
            Err(e) => {
                tracing::error!(error = %e, "update task failed");
                self.ctx.notifier.error("Could not update task");
                self.error = Some(e.to_string());
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}

impl std::fmt::Debug for UpdateTaskForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateTaskForm")
            .field("task_id", &self.task_id)
            .field("draft", &self.draft)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

//! Draft validation for the create and update forms
//!
//! Both forms share one contract: title between 3 and 25 characters,
//! description of at least 10 characters, and at least one
//! syntactically valid image URL. Validation runs before any network
//! call; failures carry per-field messages.

use crate::task::{NewTask, TaskPatch};
use url::Url;

/// Minimum title length, in characters
pub const TITLE_MIN_CHARS: usize = 3;
/// Maximum title length, in characters
pub const TITLE_MAX_CHARS: usize = 25;
/// Minimum description length, in characters
pub const DESCRIPTION_MIN_CHARS: usize = 10;

/// Per-field validation messages
///
/// `None` means the field passed. An all-`None` report never leaves
/// [`TaskDraft::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Title field message
    pub title: Option<String>,
    /// Description field message
    pub description: Option<String>,
    /// Image selection message
    pub images: Option<String>,
}

impl ValidationErrors {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.images.is_none()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if let Some(m) = &self.title {
            parts.push(format!("title: {m}"));
        }
        if let Some(m) = &self.description {
            parts.push(format!("description: {m}"));
        }
        if let Some(m) = &self.images {
            parts.push(format!("images: {m}"));
        }
        write!(f, "{}", parts.join("; "))
    }
}

/// Editable task fields as the user is typing them
///
/// The draft is what a form owns; it only becomes a payload once
/// [`validate`](Self::validate) passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Title under edit
    pub title: String,
    /// Description under edit
    pub description: String,
    /// Currently selected image URLs, in selection order
    pub images: Vec<String>,
}

impl TaskDraft {
    /// Empty draft for the create form
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-populated from existing field values, for the update form
    #[inline]
    #[must_use]
    pub fn prefilled(title: &str, description: &str, images: &[String]) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            images: images.to_vec(),
        }
    }

    /// Toggle a gallery URL's membership in the selection.
    ///
    /// Selecting appends to the end; deselecting removes the first
    /// occurrence by value. Duplicate gallery entries are deliberately
    /// not collapsed.
    pub fn toggle_image(&mut self, url: &str) {
        if let Some(pos) = self.images.iter().position(|i| i == url) {
            self.images.remove(pos);
        } else {
            self.images.push(url.to_owned());
        }
    }

    /// Check the shared form contract.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let title_chars = self.title.chars().count();
        if title_chars < TITLE_MIN_CHARS {
            errors.title = Some(format!(
                "must be at least {TITLE_MIN_CHARS} characters"
            ));
        } else if title_chars > TITLE_MAX_CHARS {
            errors.title = Some(format!("must be at most {TITLE_MAX_CHARS} characters"));
        }

        if self.description.chars().count() < DESCRIPTION_MIN_CHARS {
            errors.description = Some(format!(
                "must be at least {DESCRIPTION_MIN_CHARS} characters"
            ));
        }

        if self.images.is_empty() {
            errors.images = Some("select at least one image".to_owned());
        } else if let Some(bad) = self.images.iter().find(|i| Url::parse(i).is_err()) {
            errors.images = Some(format!("not a valid URL: {bad}"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and convert into a create payload.
    pub fn into_new_task(self) -> Result<NewTask, ValidationErrors> {
        self.validate()?;
        Ok(NewTask {
            title: self.title,
            description: self.description,
            images: self.images,
        })
    }

    /// Validate and convert into an update payload.
    pub fn into_patch(self) -> Result<TaskPatch, ValidationErrors> {
        self.validate()?;
        Ok(TaskPatch {
            title: self.title,
            description: self.description,
            images: self.images,
        })
    }
}

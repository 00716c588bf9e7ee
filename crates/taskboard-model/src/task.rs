//! Task records as the backend serves them and as the client uses them
//!
//! Two representations exist on purpose:
//! - [`WireTask`] mirrors the backend's JSON field-for-field
//! - [`Task`] is the normalized in-memory record every other crate reads
//!
//! A [`Task`] can only be produced by the mapper (see [`crate::mapper`]),
//! so identifier renaming and timestamp parsing always happen together.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend-assigned task identifier
///
/// Opaque and stable once assigned; the client never generates one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Identifier as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task record as the backend serializes it
///
/// The identifier arrives under `_id`, the revision counter under the
/// optional `__v`, and both timestamps as RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTask {
    /// Backend identifier field
    #[serde(rename = "_id")]
    pub id: String,
    /// Task title
    pub title: String,
    /// Task description
    pub description: String,
    /// Completion flag
    pub completed: bool,
    /// Associated image URLs
    #[serde(default)]
    pub images: Vec<String>,
    /// Creation timestamp, RFC 3339
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Last-update timestamp, RFC 3339
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    /// Revision counter; absent on records that were never updated
    #[serde(rename = "__v", default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
}

/// The client's normalized task record
///
/// Fields are read through accessors; construction is reserved to the
/// mapper so no un-normalized record can enter the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    completed: bool,
    images: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    revision: u64,
}

impl Task {
    /// Assemble a normalized record; only the mapper calls this.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn assemble(
        id: TaskId,
        title: String,
        description: String,
        completed: bool,
        images: Vec<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        revision: u64,
    ) -> Self {
        Self {
            id,
            title,
            description,
            completed,
            images,
            created_at,
            updated_at,
            revision,
        }
    }

    /// Backend-assigned identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Task title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Task description
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the task is marked complete
    #[inline]
    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Associated image URLs, in backend order
    #[inline]
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Creation timestamp
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last-update timestamp
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Revision counter (0 for records never updated)
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True when the title or description contains `needle`
    /// case-insensitively; `needle` is expected pre-lowercased.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Payload for creating a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    /// Title of the new task
    pub title: String,
    /// Description of the new task
    pub description: String,
    /// Selected image URLs
    pub images: Vec<String>,
}

/// Payload for replacing a task's editable fields
///
/// The target identifier travels in the request path, not the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPatch {
    /// Replacement title
    pub title: String,
    /// Replacement description
    pub description: String,
    /// Replacement image set
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_json() -> &'static str {
        r#"{
            "_id": "abc123",
            "title": "Buy milk",
            "description": "2% milk from store",
            "completed": false,
            "images": ["http://x/a.png"],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
            "__v": 3
        }"#
    }

    #[test]
    fn wire_task_deserializes_backend_field_names() {
        let wire: WireTask = serde_json::from_str(wire_json()).unwrap();
        assert_eq!(wire.id, "abc123");
        assert_eq!(wire.created_at, "2024-01-01T00:00:00Z");
        assert_eq!(wire.revision, Some(3));
    }

    #[test]
    fn wire_task_revision_defaults_to_absent() {
        let wire: WireTask = serde_json::from_str(
            r#"{"_id":"1","title":"t","description":"d","completed":true,
                "images":[],"createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(wire.revision, None);
    }

    #[test]
    fn wire_task_missing_images_becomes_empty() {
        let wire: WireTask = serde_json::from_str(
            r#"{"_id":"1","title":"t","description":"d","completed":false,
                "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(wire.images.is_empty());
    }

    #[test]
    fn new_task_serializes_body_fields_only() {
        let body = NewTask {
            title: "t".into(),
            description: "d".into(),
            images: vec!["http://x/a.png".into()],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "t",
                "description": "d",
                "images": ["http://x/a.png"],
            })
        );
    }

    #[test]
    fn task_id_display_roundtrip() {
        let id = TaskId::from("abc");
        assert_eq!(id.to_string(), "abc");
        assert_eq!(id.as_str(), "abc");
    }
}

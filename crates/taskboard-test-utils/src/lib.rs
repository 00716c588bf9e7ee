//! Testing utilities for the taskboard workspace
//!
//! Shared wire-record fixtures and helpers for building normalized
//! tasks in store and controller tests.

#![allow(missing_docs)]

use taskboard_model::{map_task, Task, WireTask};

/// A well-formed wire record with the given identity and completion flag.
pub fn wire_task(id: &str, title: &str, completed: bool) -> WireTask {
    WireTask {
        id: id.to_owned(),
        title: title.to_owned(),
        description: format!("description of {title}"),
        completed,
        images: vec!["http://images.test/a.png".to_owned()],
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-01T00:00:00Z".to_owned(),
        revision: None,
    }
}

/// The same record, already normalized.
pub fn task(id: &str, title: &str, completed: bool) -> Task {
    map_task(wire_task(id, title, completed)).expect("fixture must map cleanly")
}

/// A small mixed collection: two pending tasks and one completed.
pub fn sample_wire_tasks() -> Vec<WireTask> {
    vec![
        wire_task("1", "Buy milk", false),
        wire_task("2", "Walk the dog", true),
        wire_task("3", "Write report", false),
    ]
}

/// The JSON value of a wrapped list response over `records`.
pub fn wrapped_response(records: &[WireTask]) -> serde_json::Value {
    serde_json::json!({ "tasks": records })
}

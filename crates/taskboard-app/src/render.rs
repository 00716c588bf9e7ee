//! Plain-text rendering of the list and its cards
//!
//! String building only; all decisions about what to show were already
//! made by the view derivation and the store state.

use crate::view::{derive_list, ListContent, Partitioned};
use taskboard_model::{display_images, Task};
use taskboard_store::StoreState;

const FIRST_RUN_MESSAGE: &str = "No tasks yet - create one to get started.";
const NO_MATCHES_MESSAGE: &str = "No tasks match the current search.";

/// Render one card as an indented block.
#[must_use]
pub fn render_card(task: &Task) -> String {
    let marker = if task.completed() { "[x]" } else { "[ ]" };
    let images = display_images(task.images());
    let mut out = format!("{marker} {}  ({})\n", task.title(), task.id());
    out.push_str(&format!("    {}\n", task.description()));
    out.push_str(&format!(
        "    images: {}\n",
        images.join(", ")
    ));
    out.push_str(&format!(
        "    updated {}\n",
        task.updated_at().format("%Y-%m-%d %H:%M")
    ));
    out
}

fn render_section(title: &str, tasks: &[Task], out: &mut String) {
    out.push_str(&format!("{title} ({})\n", tasks.len()));
    for task in tasks {
        out.push_str(&render_card(task));
    }
}

/// Render the two grouped sections.
#[must_use]
pub fn render_sections(split: &Partitioned) -> String {
    let mut out = String::new();
    render_section("Pending", &split.pending, &mut out);
    out.push('\n');
    render_section("Completed", &split.completed, &mut out);
    out
}

/// Render derived list content.
#[must_use]
pub fn render_list(content: &ListContent) -> String {
    match content {
        ListContent::FirstRun => format!("{FIRST_RUN_MESSAGE}\n"),
        ListContent::NoMatches => format!("{NO_MATCHES_MESSAGE}\n"),
        ListContent::Sections(split) => render_sections(split),
    }
}

/// Render whatever the store currently holds.
///
/// A failed refetch that retained a snapshot shows the stale list under
/// a warning banner; a failure with nothing to show becomes the
/// blocking error view.
#[must_use]
pub fn render_state(state: &StoreState, search: &str) -> String {
    match state {
        StoreState::Loading => "Loading tasks...\n".to_owned(),
        StoreState::Error { message, retained } => match retained {
            Some(tasks) => format!(
                "Could not refresh tasks: {message}\nShowing the last loaded list.\n\n{}",
                render_list(&derive_list(tasks, search))
            ),
            None => format!("Could not load tasks.\n{message}\n"),
        },
        StoreState::Ready(tasks) => render_list(&derive_list(tasks, search)),
    }
}

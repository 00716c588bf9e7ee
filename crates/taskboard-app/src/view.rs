//! List derivation: search filter and completion partition
//!
//! Pure functions over the store's collection; no network calls, no
//! state. The view layer renders whatever these derive.

use taskboard_model::Task;

/// The filtered collection split by completion status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partitioned {
    /// Tasks not yet completed, input order preserved
    pub pending: Vec<Task>,
    /// Completed tasks, input order preserved
    pub completed: Vec<Task>,
}

/// What the list should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    /// The unfiltered collection itself is empty
    FirstRun,
    /// Tasks exist but none match the search
    NoMatches,
    /// The two grouped sections
    Sections(Partitioned),
}

/// Keep tasks whose title or description contains the trimmed,
/// lowercased search string; an empty search matches everything.
#[must_use]
pub fn filter_tasks(tasks: &[Task], search: &str) -> Vec<Task> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return tasks.to_vec();
    }
    tasks
        .iter()
        .filter(|t| t.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Split a collection into pending and completed groups.
#[must_use]
pub fn partition_tasks(tasks: Vec<Task>) -> Partitioned {
    let (completed, pending) = tasks.into_iter().partition(Task::completed);
    Partitioned { pending, completed }
}

/// Derive the full list content from the collection and search string.
#[must_use]
pub fn derive_list(tasks: &[Task], search: &str) -> ListContent {
    if tasks.is_empty() {
        return ListContent::FirstRun;
    }
    let filtered = filter_tasks(tasks, search);
    if filtered.is_empty() {
        return ListContent::NoMatches;
    }
    ListContent::Sections(partition_tasks(filtered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use taskboard_model::{map_task, WireTask};
    use taskboard_test_utils::task;

    #[test]
    fn empty_search_returns_everything_in_order() {
        let tasks = vec![
            task("1", "Buy milk", false),
            task("2", "Walk the dog", true),
            task("3", "Write report", false),
        ];
        let filtered = filter_tasks(&tasks, "");
        assert_eq!(filtered, tasks);
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        let tasks = vec![task("1", "Buy MILK", false), task("2", "Walk the dog", false)];
        let filtered = filter_tasks(&tasks, "  milk ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id().as_str(), "1");
    }

    #[test]
    fn search_matches_description_too() {
        // fixture descriptions are "description of <title>"
        let tasks = vec![task("1", "Buy milk", false), task("2", "Walk", false)];
        let filtered = filter_tasks(&tasks, "of buy");
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn partition_preserves_order_within_groups() {
        let tasks = vec![
            task("1", "a", false),
            task("2", "b", true),
            task("3", "c", false),
            task("4", "d", true),
        ];
        let split = partition_tasks(tasks);
        let pending: Vec<_> = split.pending.iter().map(|t| t.id().as_str()).collect();
        let completed: Vec<_> = split.completed.iter().map(|t| t.id().as_str()).collect();
        assert_eq!(pending, vec!["1", "3"]);
        assert_eq!(completed, vec!["2", "4"]);
    }

    #[test]
    fn empty_collection_is_first_run() {
        assert_eq!(derive_list(&[], ""), ListContent::FirstRun);
        // A search over nothing is still the first-run case.
        assert_eq!(derive_list(&[], "milk"), ListContent::FirstRun);
    }

    #[test]
    fn unmatched_search_is_no_matches() {
        let tasks = vec![task("1", "Buy milk", false)];
        assert_eq!(derive_list(&tasks, "zzz"), ListContent::NoMatches);
    }

    #[test]
    fn matched_search_yields_sections() {
        let tasks = vec![task("1", "Buy milk", false), task("2", "Walk", true)];
        match derive_list(&tasks, "") {
            ListContent::Sections(split) => {
                assert_eq!(split.pending.len(), 1);
                assert_eq!(split.completed.len(), 1);
            }
            other => panic!("expected sections, got {other:?}"),
        }
    }

    fn arb_task() -> impl Strategy<Value = Task> {
        ("[a-z]{1,8}", "[A-Za-z ]{0,20}", "[A-Za-z ]{0,30}", any::<bool>()).prop_map(
            |(id, title, description, completed)| {
                map_task(WireTask {
                    id,
                    title,
                    description,
                    completed,
                    images: vec![],
                    created_at: "2024-01-01T00:00:00Z".to_owned(),
                    updated_at: "2024-01-01T00:00:00Z".to_owned(),
                    revision: None,
                })
                .unwrap()
            },
        )
    }

    proptest! {
        #[test]
        fn filtering_with_empty_search_is_identity(tasks in proptest::collection::vec(arb_task(), 0..16)) {
            prop_assert_eq!(filter_tasks(&tasks, ""), tasks);
        }

        #[test]
        fn partition_is_a_total_disjoint_split(
            tasks in proptest::collection::vec(arb_task(), 0..16),
            search in "[a-z ]{0,6}",
        ) {
            let filtered = filter_tasks(&tasks, &search);
            let total = filtered.len();
            let split = partition_tasks(filtered);

            prop_assert_eq!(split.pending.len() + split.completed.len(), total);
            prop_assert!(split.pending.iter().all(|t| !t.completed()));
            prop_assert!(split.completed.iter().all(Task::completed));
        }
    }
}

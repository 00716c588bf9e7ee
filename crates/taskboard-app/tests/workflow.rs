//! End-to-end controller workflows over a mocked API
//!
//! Each test wires a real store and real controllers over MockTaskApi,
//! then drives the same flows a user would: list, create, edit,
//! toggle, delete.

use mockall::Sequence;
use std::sync::Arc;
use taskboard_api::{decode_list, ApiError, MockTaskApi, TaskApi};
use taskboard_app::{
    derive_list, AppContext, CreateTaskForm, ListContent, Notification, RecordingNotifier,
    SubmitOutcome, TaskCard,
};
use taskboard_model::TaskDraft;
use taskboard_test_utils::{sample_wire_tasks, task, wire_task};

fn app(mock: MockTaskApi) -> (Arc<AppContext>, Arc<RecordingNotifier>) {
    let recorder = Arc::new(RecordingNotifier::new());
    let api: Arc<dyn TaskApi> = Arc::new(mock);
    let notifier: Arc<dyn taskboard_app::Notifier> = recorder.clone();
    let ctx = AppContext::new(api, notifier);
    (ctx, recorder)
}

fn valid_draft(form: &mut CreateTaskForm) {
    form.set_title("Buy milk");
    form.set_description("2% milk from the store");
    form.toggle_image("http://images.test/a.png");
}

#[tokio::test]
async fn wrapped_list_response_yields_one_pending_card() {
    // The exact backend payload shape: one record wrapped under `tasks`.
    let payload = serde_json::json!({
        "tasks": [{
            "_id": "1",
            "title": "Buy milk",
            "description": "2% milk from store",
            "completed": false,
            "images": ["http://x/a.png"],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
        }]
    });
    let wires = decode_list(payload).unwrap();

    let mut mock = MockTaskApi::new();
    mock.expect_list_tasks().times(1).return_once(move || Ok(wires));

    let (ctx, _) = app(mock);
    let tasks = ctx.store.fetch().await.unwrap();

    match derive_list(&tasks, "") {
        ListContent::Sections(split) => {
            assert_eq!(split.pending.len(), 1);
            assert_eq!(split.pending[0].title(), "Buy milk");
            assert!(split.completed.is_empty());
        }
        other => panic!("expected sections, got {other:?}"),
    }
}

#[tokio::test]
async fn short_title_is_rejected_before_any_network_call() {
    let mut mock = MockTaskApi::new();
    mock.expect_create_task().never();
    mock.expect_list_tasks().never();

    let (ctx, recorder) = app(mock);
    let mut form = CreateTaskForm::new(ctx);
    form.set_title("ab");
    form.set_description("long enough description");
    form.toggle_image("http://images.test/a.png");

    match form.submit().await {
        SubmitOutcome::Rejected(errors) => assert!(errors.title.is_some()),
        other => panic!("expected rejection, got {other:?}"),
    }
    // Field messages only; no toast for a validation failure.
    assert!(recorder.events().is_empty());
    // User input survives the rejection.
    assert_eq!(form.draft().title, "ab");
}

#[tokio::test]
async fn create_success_resets_the_form_and_refetches() {
    let mut mock = MockTaskApi::new();
    mock.expect_create_task()
        .times(1)
        .withf(|new_task| new_task.title == "Buy milk")
        .returning(|_| Ok(wire_task("9", "Buy milk", false)));
    // The only list call is the refetch after the create.
    mock.expect_list_tasks()
        .times(1)
        .returning(|| Ok(sample_wire_tasks()));

    let (ctx, recorder) = app(mock);
    let mut form = CreateTaskForm::new(ctx);
    valid_draft(&mut form);

    assert_eq!(form.submit().await, SubmitOutcome::Accepted);
    assert_eq!(form.draft(), &TaskDraft::new());
    assert_eq!(
        recorder.events(),
        vec![Notification::Success("Task created".to_owned())]
    );
}

#[tokio::test]
async fn create_failure_preserves_input_for_retry() {
    let mut mock = MockTaskApi::new();
    mock.expect_create_task().times(1).returning(|_| {
        Err(ApiError::Status {
            status: 500,
            message: "boom".to_owned(),
        })
    });
    mock.expect_list_tasks().never();

    let (ctx, recorder) = app(mock);
    let mut form = CreateTaskForm::new(ctx);
    valid_draft(&mut form);

    match form.submit().await {
        SubmitOutcome::Failed(message) => assert!(message.contains("boom")),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(form.draft().title, "Buy milk");
    assert!(form.error().is_some());
    assert!(recorder.saw_error());
}

#[tokio::test]
async fn failed_toggle_leaves_the_card_in_its_group() {
    let mut mock = MockTaskApi::new();
    // Initial load only; a failed toggle must not refetch.
    mock.expect_list_tasks()
        .times(1)
        .returning(|| Ok(sample_wire_tasks()));
    mock.expect_toggle_completion().times(1).returning(|_| {
        Err(ApiError::Status {
            status: 503,
            message: "unavailable".to_owned(),
        })
    });

    let (ctx, recorder) = app(mock);
    let tasks = ctx.store.fetch().await.unwrap();
    let card = TaskCard::new(tasks[0].clone(), Arc::clone(&ctx));

    assert!(!card.toggle_completion().await);
    assert!(recorder.saw_error());

    // Still pending in the displayed collection.
    let state = ctx.store.state();
    let shown = state.tasks().unwrap();
    assert!(!shown[0].completed());
}

#[tokio::test]
async fn successful_toggle_moves_the_task_after_refetch() {
    let mut seq = Sequence::new();
    let mut mock = MockTaskApi::new();
    mock.expect_list_tasks()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(vec![wire_task("1", "Buy milk", false)]));
    mock.expect_toggle_completion()
        .times(1)
        .withf(|id| id.as_str() == "1")
        .in_sequence(&mut seq)
        .returning(|_| Ok(wire_task("1", "Buy milk", true)));
    mock.expect_list_tasks()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(vec![wire_task("1", "Buy milk", true)]));

    let (ctx, recorder) = app(mock);
    let tasks = ctx.store.fetch().await.unwrap();
    let card = TaskCard::new(tasks[0].clone(), Arc::clone(&ctx));

    assert!(card.toggle_completion().await);
    assert_eq!(
        recorder.events(),
        vec![Notification::Success("Task updated".to_owned())]
    );

    // Non-optimistic: the new group comes from the refetched snapshot.
    let state = ctx.store.state();
    assert!(state.tasks().unwrap()[0].completed());
}

#[tokio::test]
async fn confirmed_delete_removes_the_card_from_the_next_list() {
    let mut seq = Sequence::new();
    let mut mock = MockTaskApi::new();
    mock.expect_list_tasks()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(sample_wire_tasks()));
    mock.expect_delete_task()
        .times(1)
        .withf(|id| id.as_str() == "2")
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    mock.expect_list_tasks()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| {
            Ok(vec![
                wire_task("1", "Buy milk", false),
                wire_task("3", "Write report", false),
            ])
        });

    let (ctx, recorder) = app(mock);
    let tasks = ctx.store.fetch().await.unwrap();
    let doomed = tasks.iter().find(|t| t.id().as_str() == "2").unwrap();
    let mut card = TaskCard::new(doomed.clone(), Arc::clone(&ctx));

    card.request_delete();
    assert!(card.delete_armed());
    assert!(card.confirm_delete().await);
    assert!(!card.delete_armed());
    assert_eq!(
        recorder.events(),
        vec![Notification::Success("Task deleted".to_owned())]
    );

    let state = ctx.store.state();
    assert!(state
        .tasks()
        .unwrap()
        .iter()
        .all(|t| t.id().as_str() != "2"));
}

#[tokio::test]
async fn unarmed_delete_is_a_no_op() {
    let mut mock = MockTaskApi::new();
    mock.expect_delete_task().never();
    mock.expect_list_tasks().never();

    let (ctx, recorder) = app(mock);
    let mut card = TaskCard::new(task("1", "Buy milk", false), ctx);

    // Confirmation without a prior request must not fire the mutation.
    assert!(!card.confirm_delete().await);
    assert!(recorder.events().is_empty());
}

#[tokio::test]
async fn cancelled_delete_keeps_the_task() {
    let mut mock = MockTaskApi::new();
    mock.expect_delete_task().never();
    mock.expect_list_tasks().never();

    let (ctx, _) = app(mock);
    let mut card = TaskCard::new(task("1", "Buy milk", false), ctx);

    card.request_delete();
    card.cancel_delete();
    assert!(!card.delete_armed());
    assert!(!card.confirm_delete().await);
}

#[tokio::test]
async fn editor_opens_prefilled_and_closes_on_accept() {
    let mut mock = MockTaskApi::new();
    mock.expect_update_task()
        .times(1)
        .withf(|id, patch| id.as_str() == "1" && patch.title == "Buy oat milk")
        .returning(|_, _| Ok(wire_task("1", "Buy oat milk", false)));
    mock.expect_list_tasks()
        .times(1)
        .returning(|| Ok(vec![wire_task("1", "Buy oat milk", false)]));

    let (ctx, recorder) = app(mock);
    let original = task("1", "Buy milk", false);
    let mut card = TaskCard::new(original.clone(), ctx);

    let form = card.open_editor();
    assert_eq!(form.draft().title, "Buy milk");
    assert_eq!(form.draft().images, original.images());
    form.set_title("Buy oat milk");

    assert_eq!(card.submit_editor().await, Some(SubmitOutcome::Accepted));
    assert!(!card.editor_open());
    assert_eq!(
        recorder.events(),
        vec![Notification::Success("Task updated".to_owned())]
    );
}

#[tokio::test]
async fn failed_update_keeps_the_editor_open() {
    let mut mock = MockTaskApi::new();
    mock.expect_update_task().times(1).returning(|_, _| {
        Err(ApiError::Status {
            status: 404,
            message: "no such task".to_owned(),
        })
    });
    mock.expect_list_tasks().never();

    let (ctx, recorder) = app(mock);
    let mut card = TaskCard::new(task("1", "Buy milk", false), ctx);

    card.open_editor().set_title("Buy oat milk");
    match card.submit_editor().await {
        Some(SubmitOutcome::Failed(message)) => assert!(message.contains("404")),
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(card.editor_open());
    // The edited draft survives for retry.
    assert_eq!(
        card.editor_mut().unwrap().draft().title,
        "Buy oat milk"
    );
    assert!(recorder.saw_error());
}

//! Tests for the ChatThreadView registry and its typed errors.

use threadview::{ChatThreadView, SubmitOutcome, ThreadId};

use crate::helpers::{input, view_with_threads};

#[test]
fn append_message_lands_in_the_addressed_thread() {
    let mut view = view_with_threads(2);
    let id = ThreadId::new("1");
    let mut buffer = input("hello");

    let outcome = view
        .append_message(&id, &mut buffer)
        .expect("thread 1 is registered");

    assert_eq!(outcome, SubmitOutcome::Appended);
    let thread = view.thread(&id).expect("thread 1 is registered");
    assert_eq!(thread.last().map(|e| e.text()), Some("hello"));
    assert_eq!(buffer.text(), "");
}

#[test]
fn threads_are_isolated_from_each_other() {
    let mut view = view_with_threads(2);
    let a = ThreadId::new("1");
    let b = ThreadId::new("2");

    let mut buffer = input("only for A");
    view.append_message(&a, &mut buffer)
        .expect("thread 1 is registered");

    assert_eq!(view.thread(&a).expect("registered").len(), 1);
    assert_eq!(view.thread(&b).expect("registered").len(), 0);
}

#[test]
fn append_to_unknown_thread_is_a_typed_miss() {
    let mut view = view_with_threads(1);
    let missing = ThreadId::new("7");
    let mut buffer = input("lost");

    let err = view
        .append_message(&missing, &mut buffer)
        .expect_err("thread 7 was never registered");

    assert!(err.is_not_found());
    assert_eq!(err.module(), "view");
    // The buffer is untouched on a miss.
    assert_eq!(buffer.text(), "lost");
}

#[test]
fn clear_thread_empties_entries_and_name_label() {
    let mut view = view_with_threads(1);
    let id = ThreadId::new("1");
    let mut buffer = input("something");
    view.append_message(&id, &mut buffer)
        .expect("thread 1 is registered");

    view.clear_thread(&id).expect("thread 1 is registered");

    let thread = view.thread(&id).expect("thread 1 is registered");
    assert!(thread.is_empty());
    assert_eq!(thread.name(), "");
}

#[test]
fn clear_unknown_thread_leaves_every_other_thread_alone() {
    let mut view = view_with_threads(2);
    let mut buffer = input("kept");
    view.append_message(&ThreadId::new("1"), &mut buffer)
        .expect("thread 1 is registered");

    let err = view
        .clear_thread(&ThreadId::new("7"))
        .expect_err("thread 7 was never registered");

    assert!(err.is_not_found());
    assert_eq!(view.thread(&ThreadId::new("1")).expect("registered").len(), 1);
    assert_eq!(view.thread(&ThreadId::new("2")).expect("registered").len(), 0);
}

#[test]
fn clear_twice_through_the_registry_is_idempotent() {
    let mut view = view_with_threads(1);
    let id = ThreadId::new("1");
    let mut buffer = input("gone soon");
    view.append_message(&id, &mut buffer)
        .expect("thread 1 is registered");

    view.clear_thread(&id).expect("thread 1 is registered");
    view.clear_thread(&id).expect("clearing twice still resolves");

    assert!(view.thread(&id).expect("registered").is_empty());
}

#[test]
fn duplicate_registration_is_a_typed_conflict() {
    let mut view = view_with_threads(1);

    let err = view
        .create_thread("1", "Impostor")
        .expect_err("id 1 is taken");

    assert!(err.is_already_exists());
    assert!(!err.is_not_found());
    // The original thread keeps its name label.
    assert_eq!(
        view.thread(&ThreadId::new("1")).expect("registered").name(),
        "Thread 1"
    );
}

#[test]
fn remove_thread_returns_final_state() {
    let mut view = view_with_threads(2);
    let id = ThreadId::new("2");
    let mut buffer = input("parting words");
    view.append_message(&id, &mut buffer)
        .expect("thread 2 is registered");

    let removed = view.remove_thread(&id).expect("thread 2 is registered");

    assert_eq!(removed.last().map(|e| e.text()), Some("parting words"));
    assert!(!view.contains(&id));
    assert_eq!(view.len(), 1);
    assert!(view.remove_thread(&id).expect_err("already gone").is_not_found());
}

#[test]
fn thread_mut_edits_in_place() {
    let mut view = view_with_threads(1);
    let id = ThreadId::new("1");

    view.thread_mut(&id)
        .expect("thread 1 is registered")
        .set_name("Renamed");

    assert_eq!(view.thread(&id).expect("registered").name(), "Renamed");
}

#[test]
fn ids_iterate_in_sorted_order() {
    let mut view = ChatThreadView::new();
    for id in ["b", "a", "c"] {
        view.create_thread(id, format!("Thread {id}"))
            .expect("fresh ids cannot collide");
    }

    let ids: Vec<&str> = view.ids().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    let names: Vec<&str> = view.iter().map(|(_, t)| t.name()).collect();
    assert_eq!(names, vec!["Thread a", "Thread b", "Thread c"]);
}

#[test]
fn blank_submission_through_the_registry_is_reported_not_errored() {
    let mut view = view_with_threads(1);
    let id = ThreadId::new("1");
    let mut buffer = input("   ");

    let outcome = view
        .append_message(&id, &mut buffer)
        .expect("thread 1 is registered");

    assert_eq!(outcome, SubmitOutcome::IgnoredBlank);
    assert!(!outcome.appended());
    assert_eq!(buffer.text(), "   ");
    assert_eq!(view.thread(&id).expect("registered").len(), 0);
}

#[test]
fn error_display_names_the_addressed_id() {
    let mut view = ChatThreadView::new();
    let err = view
        .clear_thread(&ThreadId::new("7"))
        .expect_err("nothing registered");

    assert_eq!(err.to_string(), "Thread not found: 7");
}

//! Contact flow tests for [`ContactService`] over the in-memory store.
//!
//! [`ContactService`]: portfolio_contact::contact::services::ContactService

use std::io;
use std::sync::Arc;

use crate::in_memory::helpers::{runtime, service_for, store, submission, submit_all};
use portfolio_contact::contact::{
    adapters::memory::InMemoryContactStore,
    domain::ContactSubmission,
    ports::ContactMessageStore,
    services::ContactErrorKind,
};
use rstest::rstest;
use tokio::runtime::Runtime;

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Submitted messages are listed newest first.
#[rstest]
fn lists_messages_newest_first(
    runtime: io::Result<Runtime>,
    store: Arc<InMemoryContactStore>,
) -> TestResult {
    let rt = runtime?;
    let service = service_for(&store);
    submit_all(&rt, &service, &["first", "second", "third"])?;

    let listed = rt.block_on(service.list())?;
    let subjects: Vec<&str> = listed.iter().map(|message| message.subject()).collect();

    assert_eq!(subjects, ["third", "second", "first"]);
    Ok(())
}

/// A stored message is found by the id it was returned with.
#[rstest]
fn looks_up_submitted_message(
    runtime: io::Result<Runtime>,
    store: Arc<InMemoryContactStore>,
) -> TestResult {
    let rt = runtime?;
    let service = service_for(&store);
    let created = rt.block_on(service.submit(&submission("lookup")))?;

    let found = rt.block_on(service.get_by_id(&created.id().to_string()))?;

    assert_eq!(found, created);
    Ok(())
}

/// Deleting removes exactly one message and leaves the rest listed.
#[rstest]
fn delete_removes_only_the_target(
    runtime: io::Result<Runtime>,
    store: Arc<InMemoryContactStore>,
) -> TestResult {
    let rt = runtime?;
    let service = service_for(&store);
    let created = submit_all(&rt, &service, &["keep", "drop"])?;
    let target = created
        .iter()
        .find(|message| message.subject() == "drop")
        .ok_or("submitted message missing")?;

    let removed = rt.block_on(service.delete_by_id(&target.id().to_string()))?;
    assert_eq!(&removed, target);

    let remaining = rt.block_on(service.list())?;
    assert_eq!(remaining.len(), 1);
    assert!(remaining.iter().all(|message| message.subject() == "keep"));
    assert_eq!(rt.block_on(store.count())?, 1);

    let again = rt.block_on(service.delete_by_id(&target.id().to_string()));
    assert!(matches!(again, Err(err) if err.kind() == ContactErrorKind::NotFound));
    Ok(())
}

/// Rejected submissions never reach the store.
#[rstest]
fn invalid_submissions_are_not_stored(
    runtime: io::Result<Runtime>,
    store: Arc<InMemoryContactStore>,
) -> TestResult {
    let rt = runtime?;
    let service = service_for(&store);
    let invalid = [
        ContactSubmission::new("", "jo@x.com", "Hi", "Hello"),
        ContactSubmission::new("Jo", "not-an-email", "Hi", "Hello"),
        ContactSubmission::new("Jo", "jo@x.com", "  ", "Hello"),
        ContactSubmission::default(),
    ];

    for candidate in &invalid {
        let outcome = rt.block_on(service.submit(candidate));
        assert!(
            matches!(&outcome, Err(err) if err.kind() == ContactErrorKind::Validation),
            "expected validation failure for {candidate:?}, got {outcome:?}"
        );
    }

    assert!(rt.block_on(service.list())?.is_empty());
    Ok(())
}

/// Cloned services share the same store.
#[rstest]
fn cloned_services_share_storage(
    runtime: io::Result<Runtime>,
    store: Arc<InMemoryContactStore>,
) -> TestResult {
    let rt = runtime?;
    let service = service_for(&store);
    let clone = service.clone();

    let created = rt.block_on(clone.submit(&submission("shared")))?;

    assert_eq!(rt.block_on(service.count())?, 1);
    assert_eq!(rt.block_on(service.get_by_id(&created.id().to_string()))?, created);
    Ok(())
}

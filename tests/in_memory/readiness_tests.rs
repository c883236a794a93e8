//! Readiness gate tests for submissions over the in-memory store.

use std::io;
use std::sync::Arc;

use crate::in_memory::helpers::{runtime, service_for, store, submission};
use portfolio_contact::contact::{
    adapters::memory::InMemoryContactStore,
    domain::StoreReadiness,
    services::{ContactErrorKind, ContactServiceError},
};
use rstest::rstest;
use tokio::runtime::Runtime;

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Writes are refused in every state except connected.
#[rstest]
#[case(StoreReadiness::Disconnected)]
#[case(StoreReadiness::Connecting)]
#[case(StoreReadiness::Disconnecting)]
fn refuses_submission_unless_connected(
    runtime: io::Result<Runtime>,
    store: Arc<InMemoryContactStore>,
    #[case] readiness: StoreReadiness,
) -> TestResult {
    let rt = runtime?;
    let service = service_for(&store);
    store.set_readiness(readiness);

    let outcome = rt.block_on(service.submit(&submission("refused")));

    match outcome {
        Err(ContactServiceError::ServiceUnavailable(reported)) => {
            assert_eq!(reported, readiness);
        }
        other => return Err(format!("expected service unavailable, got {other:?}").into()),
    }
    Ok(())
}

/// Reads keep working while writes are refused.
#[rstest]
fn reads_continue_while_connecting(
    runtime: io::Result<Runtime>,
    store: Arc<InMemoryContactStore>,
) -> TestResult {
    let rt = runtime?;
    let service = service_for(&store);
    let created = rt.block_on(service.submit(&submission("before")))?;
    store.set_readiness(StoreReadiness::Connecting);

    assert_eq!(rt.block_on(service.list())?, vec![created]);
    assert_eq!(service.readiness(), StoreReadiness::Connecting);
    Ok(())
}

/// Submissions resume once the store reconnects.
#[rstest]
fn accepts_submission_after_reconnect(
    runtime: io::Result<Runtime>,
    store: Arc<InMemoryContactStore>,
) -> TestResult {
    let rt = runtime?;
    let service = service_for(&store);
    store.set_readiness(StoreReadiness::Disconnected);
    let refused = rt.block_on(service.submit(&submission("early")));
    assert!(matches!(refused, Err(err) if err.kind() == ContactErrorKind::ServiceUnavailable));

    store.set_readiness(StoreReadiness::Connected);
    rt.block_on(service.submit(&submission("late")))?;

    assert_eq!(rt.block_on(service.count())?, 1);
    Ok(())
}

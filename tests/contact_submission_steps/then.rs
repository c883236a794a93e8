//! Then steps for contact submission BDD scenarios.

use super::world::{ContactWorld, run_async};
use portfolio_contact::contact::services::ContactErrorKind;
use rstest_bdd_macros::then;

#[then("the submission is stored with a generated id")]
fn submission_is_stored(world: &ContactWorld) -> Result<(), eyre::Report> {
    let created = world
        .last_submit_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submission result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected submission failure: {err}"))?;
    let found = run_async(world.service.get_by_id(&created.id().to_string()))
        .map_err(|err| eyre::eyre!("stored message lookup failed: {err}"))?;
    if &found != created {
        return Err(eyre::eyre!("expected {created:?}, found {found:?}"));
    }
    Ok(())
}

#[then("the submission fails validation")]
fn submission_fails_validation(world: &ContactWorld) -> Result<(), eyre::Report> {
    expect_submit_kind(world, ContactErrorKind::Validation)
}

#[then("the submission is refused as unavailable")]
fn submission_refused(world: &ContactWorld) -> Result<(), eyre::Report> {
    expect_submit_kind(world, ContactErrorKind::ServiceUnavailable)
}

#[then("listing messages returns {count:usize} entries")]
fn listing_returns_count(world: &ContactWorld, count: usize) -> Result<(), eyre::Report> {
    let messages =
        run_async(world.service.list()).map_err(|err| eyre::eyre!("list failed: {err}"))?;
    if messages.len() != count {
        return Err(eyre::eyre!(
            "expected {count} messages, found {}",
            messages.len()
        ));
    }
    Ok(())
}

#[then("the message is reported as not found")]
fn message_not_found(world: &ContactWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_delete_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing delete result in scenario world"))?;
    match result {
        Err(err) if err.kind() == ContactErrorKind::NotFound => Ok(()),
        other => Err(eyre::eyre!("expected not found, got {other:?}")),
    }
}

#[then("looking up the stored message reports not found")]
fn stored_message_gone(world: &ContactWorld) -> Result<(), eyre::Report> {
    let id = world
        .stored
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no stored message in scenario world"))?
        .id()
        .to_string();
    match run_async(world.service.get_by_id(&id)) {
        Err(err) if err.kind() == ContactErrorKind::NotFound => Ok(()),
        other => Err(eyre::eyre!("expected not found, got {other:?}")),
    }
}

fn expect_submit_kind(world: &ContactWorld, expected: ContactErrorKind) -> Result<(), eyre::Report> {
    let result = world
        .last_submit_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submission result in scenario world"))?;
    match result {
        Err(err) if err.kind() == expected => Ok(()),
        other => Err(eyre::eyre!("expected {expected} error, got {other:?}")),
    }
}

//! When steps for contact submission BDD scenarios.

use super::world::{ContactWorld, run_async};
use portfolio_contact::contact::domain::ContactSubmission;
use rstest_bdd_macros::when;

#[when(
    r#"a visitor submits name "{name}", email "{email}", subject "{subject}" and message "{message}""#
)]
fn visitor_submits(
    world: &mut ContactWorld,
    name: String,
    email: String,
    subject: String,
    message: String,
) {
    let submission = ContactSubmission::new(name, email, subject, message);
    world.last_submit_result = Some(run_async(world.service.submit(&submission)));
}

#[when(
    r#"a visitor submits an empty name with email "{email}", subject "{subject}" and message "{message}""#
)]
fn visitor_submits_empty_name(
    world: &mut ContactWorld,
    email: String,
    subject: String,
    message: String,
) {
    let submission = ContactSubmission::new("", email, subject, message);
    world.last_submit_result = Some(run_async(world.service.submit(&submission)));
}

#[when(r#"the owner deletes message "{id}""#)]
fn owner_deletes_message(world: &mut ContactWorld, id: String) {
    world.last_delete_result = Some(run_async(world.service.delete_by_id(&id)));
}

#[when("the owner deletes the stored message")]
fn owner_deletes_stored_message(world: &mut ContactWorld) -> Result<(), eyre::Report> {
    let id = world
        .stored
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no stored message in scenario world"))?
        .id()
        .to_string();
    let removed = run_async(world.service.delete_by_id(&id))
        .map_err(|err| eyre::eyre!("deletion failed: {err}"))?;
    world.last_delete_result = Some(Ok(removed));
    Ok(())
}

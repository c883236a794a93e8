//! Given steps for contact submission BDD scenarios.

use super::world::{ContactWorld, run_async};
use eyre::WrapErr;
use portfolio_contact::contact::domain::{ContactSubmission, StoreReadiness};
use rstest_bdd_macros::given;

#[given("an empty contact store")]
fn an_empty_contact_store(world: &mut ContactWorld) {
    world.store.set_readiness(StoreReadiness::Connected);
}

#[given("a contact store that is still connecting")]
fn a_connecting_store(world: &mut ContactWorld) {
    world.store.set_readiness(StoreReadiness::Connecting);
}

#[given(r#"a stored message from "{name}" with subject "{subject}""#)]
fn a_stored_message(
    world: &mut ContactWorld,
    name: String,
    subject: String,
) -> Result<(), eyre::Report> {
    let email = format!("{}@example.com", name.to_lowercase());
    let submission = ContactSubmission::new(name, email, subject, "Stored for the scenario");
    let created = run_async(world.service.submit(&submission))
        .wrap_err("store message for scenario")?;
    world.stored = Some(created);
    Ok(())
}

//! Given steps for message lifecycle BDD scenarios.

use super::world::{MessageWorld, run_async};
use eyre::WrapErr;
use orgboard::message::services::{CreateMessageRequest, UpdateMessageRequest};
use rstest_bdd_macros::given;

#[given(r#""{org}" has posted a message titled "{title}""#)]
fn message_posted(world: &mut MessageWorld, org: String, title: String) -> Result<(), eyre::Report> {
    let organization_id = world.organization(&org);
    let request = CreateMessageRequest::new(title, "Background message for the scenario");
    let created = run_async(world.service.create(organization_id, Some(request)))
        .wrap_err("create message for scenario setup")?;
    world.current_message = Some(created);
    Ok(())
}

#[given("the message has been finalised")]
fn message_finalised(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let message = world.message()?.clone();
    let request =
        UpdateMessageRequest::new(message.title(), message.content()).deactivating();
    let frozen = run_async(world.service.update(
        message.organization_id(),
        message.id(),
        Some(request),
    ))
    .wrap_err("finalise message for scenario setup")?;
    world.current_message = Some(frozen);
    Ok(())
}

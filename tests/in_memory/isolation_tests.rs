//! Organization isolation tests.
//!
//! A message is only visible to, and only mutable by, the organization that
//! owns it.

use crate::in_memory::helpers::{TestService, create, revise, service};
use orgboard::message::{domain::OrganizationId, services::MessageServiceError};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn same_title_is_allowed_in_different_organizations(service: TestService) {
    let acme = OrganizationId::new();
    let globex = OrganizationId::new();

    let first = service.create(acme, create("All hands")).await;
    let second = service.create(globex, create("ALL HANDS")).await;

    assert!(first.is_ok());
    assert!(second.is_ok());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_only_include_own_messages(service: TestService) {
    let acme = OrganizationId::new();
    let globex = OrganizationId::new();
    for title in ["Roadmap", "Budget"] {
        service.create(acme, create(title)).await.expect("create");
    }
    service
        .create(globex, create("Recruiting"))
        .await
        .expect("create");

    let acme_titles: Vec<String> = service
        .list(acme)
        .await
        .expect("list")
        .iter()
        .map(|message| message.title().to_owned())
        .collect();
    let globex_listing = service.list(globex).await.expect("list");

    assert_eq!(acme_titles, vec!["Budget", "Roadmap"]);
    assert_eq!(globex_listing.len(), 1);
    assert!(
        globex_listing
            .iter()
            .all(|message| message.organization_id() == globex)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn foreign_organization_cannot_touch_a_message(service: TestService) {
    let owner = OrganizationId::new();
    let intruder = OrganizationId::new();
    let created = service
        .create(owner, create("Salary bands"))
        .await
        .expect("create");

    let read = service.get(intruder, created.id()).await.expect("get");
    let update = service
        .update(
            intruder,
            created.id(),
            revise("Salary bands", "Everyone gets a raise"),
        )
        .await;
    let delete = service.delete(intruder, created.id()).await;

    assert!(read.is_none());
    assert_eq!(update, Err(MessageServiceError::NotFound(created.id())));
    assert_eq!(delete, Err(MessageServiceError::NotFound(created.id())));
    let still_there = service.get(owner, created.id()).await.expect("get");
    assert_eq!(still_there, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn renaming_onto_a_title_used_elsewhere_is_allowed(service: TestService) {
    let acme = OrganizationId::new();
    let globex = OrganizationId::new();
    service
        .create(globex, create("Pricing"))
        .await
        .expect("create");
    let draft = service.create(acme, create("Draft")).await.expect("create");

    let renamed = service
        .update(acme, draft.id(), revise("pricing", "Acme pricing notes"))
        .await
        .expect("update");

    assert_eq!(renamed.title(), "pricing");
}

//! Concurrency tests for title uniqueness.
//!
//! Competing writers race for the same title; exactly one must win and the
//! rest must see a conflict, with nothing half-written left behind.

use std::sync::{Arc, Barrier};
use std::thread;

use crate::in_memory::helpers::{TestService, create, organization, revise, shared_service};
use orgboard::message::{
    domain::{Message, OrganizationId},
    services::{MessageServiceError, MessageServiceResult},
};
use rstest::rstest;

const WRITERS: usize = 16;

fn spelling(attempt: usize) -> String {
    match attempt % 4 {
        0 => "Release Notes".to_owned(),
        1 => "release notes".to_owned(),
        2 => "  RELEASE NOTES ".to_owned(),
        _ => "Release notes".to_owned(),
    }
}

fn tally(results: &[MessageServiceResult<Message>]) -> (usize, usize) {
    let created = results.iter().filter(|result| result.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|result| matches!(result, Err(MessageServiceError::Conflict(_))))
        .count();
    (created, conflicts)
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_admit_one_title_owner(
    shared_service: Arc<TestService>,
    organization: OrganizationId,
) {
    let handles: Vec<_> = (0..WRITERS)
        .map(|attempt| {
            let service = Arc::clone(&shared_service);
            tokio::spawn(async move { service.create(organization, create(&spelling(attempt))).await })
        })
        .collect();

    let mut results = Vec::with_capacity(WRITERS);
    for handle in handles {
        results.push(handle.await.expect("task completes"));
    }

    assert_eq!(tally(&results), (1, WRITERS - 1));
    let listed = shared_service.list(organization).await.expect("list");
    assert_eq!(listed.len(), 1);
}

#[rstest]
fn threads_racing_on_separate_runtimes_admit_one_title_owner(
    shared_service: Arc<TestService>,
    organization: OrganizationId,
) {
    let barrier = Barrier::new(WRITERS);

    let results: Vec<MessageServiceResult<Message>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..WRITERS)
            .map(|attempt| {
                let service = &shared_service;
                let start = &barrier;
                scope.spawn(move || {
                    let rt = tokio::runtime::Builder::new_current_thread()
                        .build()
                        .expect("runtime creation");
                    start.wait();
                    rt.block_on(service.create(organization, create(&spelling(attempt))))
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("writer thread completes"))
            .collect()
    });

    assert_eq!(tally(&results), (1, WRITERS - 1));
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_distinct_titles_all_succeed(
    shared_service: Arc<TestService>,
    organization: OrganizationId,
) {
    let handles: Vec<_> = (0..WRITERS)
        .map(|attempt| {
            let service = Arc::clone(&shared_service);
            tokio::spawn(async move {
                service
                    .create(organization, create(&format!("Standup {attempt}")))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle
            .await
            .expect("task completes")
            .expect("distinct titles never conflict");
    }

    let listed = shared_service.list(organization).await.expect("list");
    assert_eq!(listed.len(), WRITERS);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_renames_onto_one_title_admit_one(
    shared_service: Arc<TestService>,
    organization: OrganizationId,
) {
    let mut ids = Vec::with_capacity(WRITERS);
    for attempt in 0..WRITERS {
        let created = shared_service
            .create(organization, create(&format!("Draft {attempt}")))
            .await
            .expect("create");
        ids.push(created.id());
    }

    let handles: Vec<_> = ids
        .into_iter()
        .enumerate()
        .map(|(attempt, id)| {
            let service = Arc::clone(&shared_service);
            tokio::spawn(async move {
                service
                    .update(
                        organization,
                        id,
                        revise(&spelling(attempt), "Everyone wants this title"),
                    )
                    .await
            })
        })
        .collect();

    let mut results = Vec::with_capacity(WRITERS);
    for handle in handles {
        results.push(handle.await.expect("task completes"));
    }

    assert_eq!(tally(&results), (1, WRITERS - 1));
    let holders = shared_service
        .list(organization)
        .await
        .expect("list")
        .iter()
        .filter(|message| message.title_key().as_str() == "release notes")
        .count();
    assert_eq!(holders, 1);
}

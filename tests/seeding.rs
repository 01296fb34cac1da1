// Integration tests for the seeding loop over the real default
// catalog, driven through the public library surface with a recording
// fake in place of the live backend.

use std::cell::RefCell;
use std::time::Duration;

use anyhow::{anyhow, Result};
use serde_json::{json, Value};

use forumseed_cli::api::ForumApi;
use forumseed_cli::catalog::{self, ForumDescriptor};
use forumseed_cli::seeder::{seed_forums, SeedOutcome};

/// Fake backend: records every call it sees and fails the slugs it
/// was told already exist.
struct RecordingApi {
    calls: RefCell<Vec<(String, String)>>,
    existing_slugs: Vec<&'static str>,
}

impl RecordingApi {
    fn new(existing_slugs: Vec<&'static str>) -> Self {
        RecordingApi {
            calls: RefCell::new(Vec::new()),
            existing_slugs,
        }
    }
}

impl ForumApi for RecordingApi {
    fn create_forum(&self, token: &str, forum: &ForumDescriptor) -> Result<Value> {
        self.calls
            .borrow_mut()
            .push((token.to_string(), forum.slug.clone()));
        if self.existing_slugs.contains(&forum.slug.as_str()) {
            return Err(anyhow!(
                "Create forum failed: 409 Conflict - slug \"{}\" already exists",
                forum.slug
            ));
        }
        Ok(json!({"slug": forum.slug, "name": forum.name}))
    }
}

#[test]
fn seeds_the_whole_catalog_in_order() {
    let api = RecordingApi::new(vec![]);
    let forums = catalog::default_forums();

    let outcomes = seed_forums(&api, "tok", &forums, Duration::ZERO);

    assert_eq!(outcomes.len(), forums.len());
    assert!(outcomes.iter().all(SeedOutcome::is_created));
    let calls = api.calls.borrow();
    let called_slugs: Vec<&str> = calls.iter().map(|(_, slug)| slug.as_str()).collect();
    let catalog_slugs: Vec<&str> = forums.iter().map(|f| f.slug.as_str()).collect();
    assert_eq!(called_slugs, catalog_slugs);
    assert!(calls.iter().all(|(token, _)| token == "tok"));
}

#[test]
fn existing_forum_does_not_abort_the_run() {
    // "camera" is the first catalog entry; a conflict there must not
    // stop "video", "analysis" and the rest from being attempted.
    let api = RecordingApi::new(vec!["camera"]);
    let forums = catalog::default_forums();

    let outcomes = seed_forums(&api, "tok", &forums, Duration::ZERO);

    assert_eq!(outcomes.len(), forums.len());
    let calls = api.calls.borrow();
    assert_eq!(calls.len(), forums.len());
    assert_eq!(calls[1].1, "video");
    assert_eq!(calls[2].1, "analysis");

    match &outcomes[0] {
        SeedOutcome::Failed { slug, .. } => assert_eq!(slug, "camera"),
        other => panic!("expected camera to fail, got {:?}", other),
    }
    let created = outcomes.iter().filter(|o| o.is_created()).count();
    assert_eq!(created, forums.len() - 1);
}

#[test]
fn every_failure_still_attempts_the_full_list() {
    struct AlwaysFails;
    impl ForumApi for AlwaysFails {
        fn create_forum(&self, _token: &str, _forum: &ForumDescriptor) -> Result<Value> {
            Err(anyhow!("Create forum failed: 500 Internal Server Error"))
        }
    }

    let forums = catalog::default_forums();
    let outcomes = seed_forums(&AlwaysFails, "tok", &forums, Duration::ZERO);

    assert_eq!(outcomes.len(), forums.len());
    assert!(outcomes.iter().all(|o| !o.is_created()));
}

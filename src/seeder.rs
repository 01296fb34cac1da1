// Seeding loop: walks the forum catalog in order and issues one
// authenticated create call per entry. A failed entry is logged and
// skipped; it never aborts the run. Calls are spaced out with a fixed
// delay to keep the request rate polite toward the backend.

use std::thread;
use std::time::Duration;

use serde_json::Value;

use crate::api::ForumApi;
use crate::catalog::ForumDescriptor;

/// Minimum pause between consecutive create calls.
pub const DEFAULT_INTER_CALL_DELAY: Duration = Duration::from_millis(100);

/// What happened to one catalog entry.
#[derive(Debug)]
pub enum SeedOutcome {
    /// The backend accepted the forum; `forum` is the created resource
    /// as the backend returned it.
    Created { slug: String, forum: Value },
    /// The create call failed. The error is kept whole; the backend
    /// does not distinguish duplicates from validation errors in a way
    /// this tool relies on.
    Failed { slug: String, error: anyhow::Error },
}

impl SeedOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, SeedOutcome::Created { .. })
    }
}

/// Create every forum in `forums`, strictly in list order, waiting
/// `inter_call_delay` between consecutive calls. Always attempts the
/// whole list; the returned outcomes line up with the input order.
pub fn seed_forums<A: ForumApi>(
    api: &A,
    token: &str,
    forums: &[ForumDescriptor],
    inter_call_delay: Duration,
) -> Vec<SeedOutcome> {
    let mut outcomes = Vec::with_capacity(forums.len());
    for (i, forum) in forums.iter().enumerate() {
        match api.create_forum(token, forum) {
            Ok(created) => {
                println!("Created forum: {}", forum.name);
                outcomes.push(SeedOutcome::Created {
                    slug: forum.slug.clone(),
                    forum: created,
                });
            }
            Err(error) => {
                eprintln!("Failed to create forum \"{}\": {}", forum.name, error);
                outcomes.push(SeedOutcome::Failed {
                    slug: forum.slug.clone(),
                    error,
                });
            }
        }
        if i + 1 < forums.len() {
            thread::sleep(inter_call_delay);
        }
    }
    outcomes
}

// Run layer: one seeding pass end to end. Login is fatal on failure
// (nothing can be created without a token); individual create failures
// are reported in the summary but do not fail the run.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::{ApiClient, LoginRequest};
use crate::catalog;
use crate::seeder;

// Admin account the backend is provisioned with.
const ADMIN_EMAIL: &str = "admin@test.com";
const ADMIN_PASSWORD: &str = "admin123";

/// Log in as the admin account, create the default forum set, and
/// print a completion summary. Returns an error only when login
/// itself fails; the caller turns that into a non-zero exit.
pub fn run(api: &ApiClient) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Logging in...");

    let token = api
        .login(&LoginRequest {
            email: ADMIN_EMAIL.into(),
            password: ADMIN_PASSWORD.into(),
        })
        .context("Authentication failed")?;
    spinner.finish_with_message("Login successful");

    let forums = catalog::default_forums();
    println!("Creating {} forums...", forums.len());
    let outcomes = seeder::seed_forums(api, &token, &forums, seeder::DEFAULT_INTER_CALL_DELAY);

    let created = outcomes.iter().filter(|o| o.is_created()).count();
    let failed = outcomes.len() - created;
    println!(
        "Forum seeding completed: {} created, {} failed",
        created, failed
    );
    Ok(())
}

// Entrypoint for the seeding tool.
// - Keeps `main` small: create an API client and hand it to the run layer.
// - Returns `anyhow::Result` so a failed login exits non-zero.

use forumseed_cli::{api::ApiClient, runner};

fn main() -> anyhow::Result<()> {
    // Create API client configured by environment variable `FORUM_API_URL`
    // or default to the local backend. See `api::ApiClient::from_env`.
    let api = ApiClient::from_env()?;

    runner::run(&api)?;
    Ok(())
}

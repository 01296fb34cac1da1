// API client module: contains a small blocking HTTP client that talks
// to the forum backend's REST API. It is intentionally small and
// synchronous; one seeding run is a handful of sequential requests.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::ForumDescriptor;

#[cfg(test)]
use mockall::automock;

/// Simple API client that holds a reqwest blocking client and the base
/// URL of the backend. The bearer token is not stored here; it is
/// passed into each authenticated call by the caller.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Login request payload. Field names mirror the backend's auth DTO.
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The envelope the backend wraps every response in. `data` stays a
/// `serde_json::Value` because its shape differs per endpoint and this
/// tool only ever reads the login token out of it.
#[derive(Deserialize, Debug)]
struct ApiEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

impl ApiEnvelope {
    /// Treat `success: false` as a failure, otherwise hand back the
    /// payload. `what` labels the operation in the error message.
    fn into_data(self, what: &str) -> Result<Value> {
        if !self.success {
            let message = self.message.unwrap_or_else(|| "unknown error".into());
            anyhow::bail!("{} failed: {}", what, message);
        }
        Ok(self.data.unwrap_or(Value::Null))
    }
}

/// Login payload carries `{token, user}`; only the token is used.
#[derive(Deserialize, Debug)]
struct LoginData {
    token: String,
}

/// The one call the seeding loop needs. Split into a trait so the loop
/// can be exercised against a test double instead of a live backend.
#[cfg_attr(test, automock)]
pub trait ForumApi {
    /// Create one forum, authenticated with `token`. Returns the
    /// created resource as opaque JSON.
    fn create_forum(&self, token: &str, forum: &ForumDescriptor) -> Result<Value>;
}

impl ApiClient {
    /// Create an ApiClient configured from the environment variable
    /// `FORUM_API_URL` or fallback to the local backend.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("FORUM_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api/v1".into());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Perform login and return the bearer token for this run. Any
    /// transport error, non-success status or `success: false`
    /// envelope is an error; the caller treats that as fatal.
    pub fn login(&self, req: &LoginRequest) -> Result<String> {
        let url = format!("{}/auth/login", &self.base_url);
        let res = self
            .client
            .post(&url)
            .json(req)
            .send()
            .context("Failed to send login request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Login failed: {} - {}", status, txt);
        }
        let envelope: ApiEnvelope = res.json().context("Parsing login response json")?;
        let data = envelope.into_data("Login")?;
        let login: LoginData =
            serde_json::from_value(data).context("Parsing login payload")?;
        Ok(login.token)
    }

    /// Build the create-forum request without sending it. Kept
    /// separate from the send so tests can inspect exactly what goes
    /// on the wire.
    fn create_forum_request(
        &self,
        token: &str,
        forum: &ForumDescriptor,
    ) -> Result<reqwest::blocking::Request> {
        let url = format!("{}/admin/forums", &self.base_url);
        self.client
            .post(&url)
            .bearer_auth(token)
            .json(forum)
            .build()
            .context("Building create-forum request")
    }
}

impl ForumApi for ApiClient {
    fn create_forum(&self, token: &str, forum: &ForumDescriptor) -> Result<Value> {
        let req = self.create_forum_request(token, forum)?;
        let res = self
            .client
            .execute(req)
            .context("Failed to send create-forum request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Create forum failed: {} - {}", status, txt);
        }
        let envelope: ApiEnvelope =
            res.json().context("Parsing create-forum response json")?;
        envelope.into_data("Create forum")
    }
}

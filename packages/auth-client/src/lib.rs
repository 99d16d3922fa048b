//! Pure REST client for the Teamtree auth API.
//!
//! Thin request/response adapters and nothing else: the profile payload
//! comes back as raw JSON for `teamtree_core::parse_profile`, parent
//! candidates are mapped to the core type, and every non-2xx response is
//! classified into [`AuthApiError`] at the call site.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth_client::AuthClient;
//!
//! let client = AuthClient::new("http://localhost:8080");
//! let raw = client.fetch_profile("tok-1").await?;
//! let tree = teamtree_core::parse_profile(&raw)?;
//! ```

pub mod error;
pub mod types;

pub use error::{AuthApiError, Result};
pub use types::{AuthOutcome, AuthUser, SigninRequest, SignupRequest, UserTypeEntry};

use reqwest::{Client, StatusCode};
use serde_json::Value;
use teamtree_core::{ParentCandidate, Role};

use types::ApiMessage;

pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create from the `TEAMTREE_API_URL` environment variable.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("TEAMTREE_API_URL")
            .map_err(|_| AuthApiError::Config("TEAMTREE_API_URL not set".into()))?;
        Ok(Self::new(base_url))
    }

    /// Fetch the signed-in account's profile tree as raw JSON.
    ///
    /// A 401-class status maps to [`AuthApiError::Unauthorized`], which the
    /// caller must answer with logout-and-redirect.
    pub async fn fetch_profile(&self, token: &str) -> Result<Value> {
        let url = format!("{}/api/auth/profile", self.base_url);
        tracing::debug!(url = %url, "fetching profile");

        let resp = self
            .client
            .get(&url)
            .query(&[("id", token)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                tracing::info!(status = status.as_u16(), "profile fetch rejected");
                return Err(AuthApiError::Unauthorized);
            }
            return Err(api_error(status, body));
        }

        Ok(resp.json().await?)
    }

    /// Fetch the accounts selectable as registration parents.
    ///
    /// Entries whose `type` is not a recognized tier are dropped here so
    /// the tier resolver stays total over [`Role`].
    pub async fn fetch_parent_candidates(&self) -> Result<Vec<ParentCandidate>> {
        let url = format!("{}/api/auth/usertypes", self.base_url);
        tracing::debug!(url = %url, "fetching parent candidates");

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(api_error(status, body));
        }

        let entries: Vec<UserTypeEntry> = resp.json().await?;
        Ok(to_candidates(entries))
    }

    /// Register a new account. The derived tier and parent linkage must
    /// already be on the request; the API re-validates them.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthOutcome> {
        let url = format!("{}/api/auth/signup", self.base_url);
        tracing::info!(tier = %request.tier, "submitting registration");

        let resp = self.client.post(&url).json(request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(api_error(status, body));
        }

        Ok(resp.json().await?)
    }

    /// Authenticate an existing account.
    pub async fn signin(&self, request: &SigninRequest) -> Result<AuthOutcome> {
        let url = format!("{}/api/auth/signin", self.base_url);
        tracing::debug!(url = %url, "signing in");

        let resp = self.client.post(&url).json(request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(api_error(status, body));
        }

        Ok(resp.json().await?)
    }
}

/// Map wire entries to candidates, dropping unrecognized tiers.
fn to_candidates(entries: Vec<UserTypeEntry>) -> Vec<ParentCandidate> {
    entries
        .into_iter()
        .filter_map(|entry| match Role::from_tag(&entry.kind) {
            Some(tier) => Some(ParentCandidate {
                id: entry.id,
                tier,
                name: entry.name,
            }),
            None => {
                tracing::warn!(kind = %entry.kind, "skipping parent candidate with unrecognized tier");
                None
            }
        })
        .collect()
}

/// Non-2xx responses carry `{ "message": … }` on failure paths; fall back
/// to the raw body when they don't.
fn api_error(status: StatusCode, body: String) -> AuthApiError {
    let message = serde_json::from_str::<ApiMessage>(&body)
        .map(|m| m.message)
        .unwrap_or(body);
    AuthApiError::Api {
        status: status.as_u16(),
        message,
    }
}

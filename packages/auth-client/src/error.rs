//! Error types for the auth API client.

use thiserror::Error;

/// Result type for auth API operations.
pub type Result<T> = std::result::Result<T, AuthApiError>;

/// Auth API client errors.
#[derive(Debug, Error)]
pub enum AuthApiError {
    /// Configuration error (missing base URL)
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport failure or undecodable response body
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API rejected the identity token (401 class)
    #[error("the API rejected the current session")]
    Unauthorized,

    /// Any other non-2xx response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl AuthApiError {
    /// True for the authentication-failure class that must trigger
    /// logout-and-redirect rather than an inline message.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthApiError::Unauthorized)
    }
}

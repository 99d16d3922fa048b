use anyhow::Result;
use dotenvy::dotenv;
use std::env;

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            api_base_url: env::var("TEAMTREE_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_to_localhost() {
        // Only meaningful when the variable is not set in the environment.
        if env::var("TEAMTREE_API_URL").is_err() {
            let config = Config::from_env().unwrap();
            assert_eq!(config.api_base_url, "http://localhost:8080");
        }
    }
}

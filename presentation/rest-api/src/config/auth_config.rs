use std::env;

/// The single credential pair the application admits.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl AuthConfig {
    /// Load the credential pair from environment variables
    ///
    /// Environment variables:
    /// - APP_USERNAME: admitted username (default: "admin")
    /// - APP_PASSWORD: admitted password (default: "1234")
    pub fn from_env() -> Self {
        let username = env::var("APP_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let password = env::var("APP_PASSWORD").unwrap_or_else(|_| "1234".to_string());

        Self { username, password }
    }
}

use std::collections::HashMap;
use std::sync::RwLock;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use once_cell::sync::Lazy;
use poem::Request;
use poem_openapi::SecurityScheme;
use rand::RngCore;

static SESSIONS: Lazy<RwLock<HashMap<String, String>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Issues an opaque session token for an authenticated user and records it
/// in the in-memory session store. Sessions do not survive a restart, just
/// like the registry they guard.
pub fn issue_session(username: &str) -> String {
    let mut buf = [0u8; 32];
    rand::rng().fill_bytes(&mut buf);
    let token = URL_SAFE_NO_PAD.encode(buf);
    if let Ok(mut sessions) = SESSIONS.write() {
        sessions.insert(token.clone(), username.to_string());
    }
    token
}

/// Forgets a session token. Revoking an unknown token is a no-op.
pub fn revoke_session(token: &str) {
    if let Ok(mut sessions) = SESSIONS.write() {
        sessions.remove(token);
    }
}

fn session_user(token: &str) -> Option<String> {
    SESSIONS.read().ok()?.get(token).cloned()
}

/// Opaque bearer token backed by the in-memory session store.
///
/// Every guarded route takes this scheme as a parameter, so the session
/// check runs exactly once per request before any handler logic.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", checker = "session_bearer_checker")]
pub struct SessionBearer(pub String);

async fn session_bearer_checker(
    _req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<String> {
    if session_user(&bearer.token).is_none() {
        tracing::warn!("Rejected unknown session token");
        return None;
    }
    Some(bearer.token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_issued_token_until_revoked() {
        let token = issue_session("admin");

        assert_eq!(session_user(&token), Some("admin".to_string()));

        revoke_session(&token);
        assert!(session_user(&token).is_none());
    }

    #[test]
    fn should_reject_unknown_token() {
        assert!(session_user("not-a-token").is_none());
    }

    #[test]
    fn should_issue_distinct_tokens_per_login() {
        let first = issue_session("admin");
        let second = issue_session("admin");

        assert_ne!(first, second);
    }

    #[test]
    fn should_ignore_revoking_unknown_token() {
        revoke_session("never-issued");
    }
}

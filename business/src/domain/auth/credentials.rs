/// The single configured username/password pair admitted by the system.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive equality on both fields. No hashing, no
    /// lockout; there is exactly one identity to admit.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("admin", "1234")
    }

    #[test]
    fn should_accept_exact_pair() {
        assert!(credentials().verify("admin", "1234"));
    }

    #[test]
    fn should_reject_wrong_password() {
        assert!(!credentials().verify("admin", "wrong"));
    }

    #[test]
    fn should_reject_username_with_different_case() {
        assert!(!credentials().verify("Admin", "1234"));
    }

    #[test]
    fn should_reject_empty_pair() {
        assert!(!credentials().verify("", ""));
    }
}

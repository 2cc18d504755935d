#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Single generic failure for both unknown user and wrong password.
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
}

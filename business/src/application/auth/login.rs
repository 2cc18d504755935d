use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::credentials::Credentials;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::logger::Logger;

pub struct LoginUseCaseImpl {
    pub credentials: Credentials,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<(), AuthError> {
        if self.credentials.verify(&params.username, &params.password) {
            self.logger
                .info(&format!("Login succeeded for: {}", params.username));
            Ok(())
        } else {
            // Same error for unknown user and wrong password.
            self.logger
                .warn(&format!("Login failed for: {}", params.username));
            Err(AuthError::InvalidCredentials)
        }
    }
}

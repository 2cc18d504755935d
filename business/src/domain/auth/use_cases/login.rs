use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;

pub struct LoginParams {
    pub username: String,
    pub password: String,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<(), AuthError>;
}

use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::use_cases::login::{LoginParams, LoginUseCase};

use crate::api::auth::dto::{LoginRequest, SessionResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::{SessionBearer, issue_session, revoke_session};
use crate::api::tags::ApiTags;

pub struct AuthApi {
    login_use_case: Arc<dyn LoginUseCase>,
}

impl AuthApi {
    pub fn new(login_use_case: Arc<dyn LoginUseCase>) -> Self {
        Self { login_use_case }
    }
}

/// Authentication API
///
/// Issues and revokes the bearer tokens that guard the product routes.
#[OpenApi]
impl AuthApi {
    /// Log in
    ///
    /// Validates the credential pair and returns a session token.
    /// The response does not distinguish an unknown user from a wrong
    /// password.
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        let username = body.0.username;
        let params = LoginParams {
            username: username.clone(),
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(()) => LoginResponse::Ok(Json(SessionResponse {
                token: issue_session(&username),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                LoginResponse::Unauthorized(json)
            }
        }
    }

    /// Log out
    ///
    /// Revokes the presented session token.
    #[oai(path = "/auth/logout", method = "post", tag = "ApiTags::Auth")]
    async fn logout(&self, auth: SessionBearer) -> LogoutResponse {
        revoke_session(&auth.0);
        LogoutResponse::NoContent
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LogoutResponse {
    #[oai(status = 204)]
    NoContent,
}

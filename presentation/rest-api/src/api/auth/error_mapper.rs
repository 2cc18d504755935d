use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "AuthenticationError",
                "auth.invalid_credentials",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

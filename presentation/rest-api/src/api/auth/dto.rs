use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Session issued after a successful login. Present the token as a bearer
/// credential on every other request.
#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    pub token: String,
}

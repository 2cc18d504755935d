use poem::middleware::Cors;

use super::auth_config::AuthConfig;
use super::server_config::ServerConfig;
use super::upload_config::UploadConfig;
use super::cors_config;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub auth: AuthConfig,
    pub upload: UploadConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            auth: AuthConfig::from_env(),
            upload: UploadConfig::from_env(),
        }
    }
}

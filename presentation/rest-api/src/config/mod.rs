pub mod app_config;
pub mod auth_config;
pub mod cors_config;
pub mod server_config;
pub mod upload_config;

use std::env;
use std::path::PathBuf;

/// Where uploaded product images are written.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub upload_dir: PathBuf,
}

impl UploadConfig {
    /// Load the upload directory from environment variables
    ///
    /// Environment variables:
    /// - UPLOAD_DIR: directory for stored images (default: "static/uploads")
    pub fn from_env() -> Self {
        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "static/uploads".to_string());

        Self {
            upload_dir: PathBuf::from(upload_dir),
        }
    }
}

use std::path::PathBuf;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::fs;
use tracing::{debug, error};

use business::domain::product::services::ImageStore;

const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9._-]+").expect("valid regex")
});

/// Stores uploaded product images under a single directory on the local
/// filesystem. Only the stored filename travels back to the caller; the
/// bytes never reach the business layer again.
pub struct FileImageStore {
    upload_dir: PathBuf,
}

impl FileImageStore {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    fn extension_allowed(filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
            None => false,
        }
    }

    /// Strips any path components and replaces unsafe characters, so the
    /// stored name can never escape the upload directory.
    fn sanitize(filename: &str) -> String {
        let base = filename
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(filename);
        UNSAFE_CHARS
            .replace_all(base, "_")
            .trim_matches(['_', '.'])
            .to_string()
    }
}

#[async_trait]
impl ImageStore for FileImageStore {
    async fn store(&self, filename: &str, bytes: &[u8]) -> Option<String> {
        if !Self::extension_allowed(filename) {
            debug!(filename, "Upload rejected: extension not allowed");
            return None;
        }

        let stored = Self::sanitize(filename);
        if stored.is_empty() {
            debug!(filename, "Upload rejected: empty name after sanitizing");
            return None;
        }

        if let Err(e) = fs::create_dir_all(&self.upload_dir).await {
            error!("Failed to create upload directory: {e}");
            return None;
        }

        let path = self.upload_dir.join(&stored);
        match fs::write(&path, bytes).await {
            Ok(()) => Some(stored),
            Err(e) => {
                error!("Failed to write upload {stored}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> FileImageStore {
        let dir = std::env::temp_dir().join(format!("stockroom-uploads-{}", Uuid::new_v4()));
        FileImageStore::new(dir)
    }

    #[test]
    fn should_allow_image_extensions_case_insensitively() {
        for name in ["a.png", "a.jpg", "a.jpeg", "a.gif", "a.PNG", "photo.JpEg"] {
            assert!(FileImageStore::extension_allowed(name), "{name}");
        }
    }

    #[test]
    fn should_reject_other_extensions_and_missing_ones() {
        for name in ["a.exe", "a.svg", "a.png.sh", "archive.tar.gz", "noext", ""] {
            assert!(!FileImageStore::extension_allowed(name), "{name}");
        }
    }

    #[test]
    fn should_sanitize_path_components_and_unsafe_characters() {
        assert_eq!(FileImageStore::sanitize("../../etc/passwd.png"), "passwd.png");
        assert_eq!(FileImageStore::sanitize("my photo (1).jpg"), "my_photo_1_.jpg");
        assert_eq!(FileImageStore::sanitize("C:\\pics\\hat.gif"), "hat.gif");
        assert_eq!(FileImageStore::sanitize("shirt.png"), "shirt.png");
    }

    #[tokio::test]
    async fn should_store_allowed_upload_and_return_filename() {
        let store = temp_store();

        let stored = store.store("shirt.png", b"fake image bytes").await;

        assert_eq!(stored, Some("shirt.png".to_string()));
        let written = fs::read(store.upload_dir.join("shirt.png")).await.unwrap();
        assert_eq!(written, b"fake image bytes");
    }

    #[tokio::test]
    async fn should_reject_disallowed_upload_without_writing() {
        let store = temp_store();

        let stored = store.store("malware.exe", b"nope").await;

        assert!(stored.is_none());
        assert!(!store.upload_dir.exists());
    }
}

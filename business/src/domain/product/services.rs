use async_trait::async_trait;

/// Raw upload handed over by the HTTP layer.
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Port for storing uploaded product images.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Stores the upload and returns the sanitized filename it was saved
    /// under, or `None` when the file is rejected (disallowed extension) or
    /// the write fails. Rejection is silent; the caller proceeds without an
    /// image reference.
    async fn store(&self, filename: &str, bytes: &[u8]) -> Option<String>;
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ImageStore;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        // Every field is overwritten, but the image reference survives
        // unless a new upload is supplied and accepted by the store.
        let image = match params.image {
            Some(upload) => self
                .image_store
                .store(&upload.filename, &upload.bytes)
                .await
                .or(existing.image),
            None => existing.image,
        };

        let updated = Product::from_repository(
            existing.id,
            params.code,
            params.name,
            params.category,
            params.size,
            params.quantity,
            params.purchase_price,
            params.sale_price,
            params.supplier,
            image,
            existing.created_at,
            chrono::Utc::now(),
        );

        self.repository.save(&updated).await?;

        self.logger.info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ImageStore;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Registering product: {}", params.name));

        // A rejected upload is not an error; the product is registered
        // without an image reference.
        let image = match params.image {
            Some(upload) => self.image_store.store(&upload.filename, &upload.bytes).await,
            None => None,
        };

        let product = Product::new(NewProductProps {
            code: params.code,
            name: params.name,
            category: params.category,
            size: params.size,
            quantity: params.quantity,
            purchase_price: params.purchase_price,
            sale_price: params.sale_price,
            supplier: params.supplier,
            image,
        });

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product registered with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::services::ImageUpload;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Store {}

        #[async_trait]
        impl ImageStore for Store {
            async fn store(&self, filename: &str, bytes: &[u8]) -> Option<String>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(image: Option<ImageUpload>) -> CreateProductParams {
        CreateProductParams {
            code: "1".to_string(),
            name: "Shirt".to_string(),
            category: "Apparel".to_string(),
            size: "M".to_string(),
            quantity: 5,
            purchase_price: 10.0,
            sale_price: 20.0,
            supplier: "Acme".to_string(),
            image,
        }
    }

    #[tokio::test]
    async fn should_register_product_without_image() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));
        let mut mock_store = MockStore::new();
        mock_store.expect_store().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(None)).await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.name, "Shirt");
        assert_eq!(product.quantity, 5);
        assert!(product.image.is_none());
    }

    #[tokio::test]
    async fn should_keep_stored_filename_when_upload_is_accepted() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));
        let mut mock_store = MockStore::new();
        mock_store
            .expect_store()
            .returning(|_, _| Some("shirt.png".to_string()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Some(ImageUpload {
                filename: "shirt.png".to_string(),
                bytes: vec![1, 2, 3],
            })))
            .await;

        assert_eq!(result.unwrap().image, Some("shirt.png".to_string()));
    }

    #[tokio::test]
    async fn should_register_without_image_when_upload_is_rejected() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));
        let mut mock_store = MockStore::new();
        mock_store.expect_store().returning(|_, _| None);

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Some(ImageUpload {
                filename: "shirt.exe".to_string(),
                bytes: vec![1, 2, 3],
            })))
            .await;

        assert!(result.is_ok());
        assert!(result.unwrap().image.is_none());
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Persistence));
        let mock_store = MockStore::new();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(None)).await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}

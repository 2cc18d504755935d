use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryInMemory;
use storage::FileImageStore;

use business::application::auth::login::LoginUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_low_stock::GetLowStockProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::auth::credentials::Credentials;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters. The registry is owned here and lives
        // exactly as long as the process.
        let product_repository = Arc::new(ProductRepositoryInMemory::new());
        let image_store = Arc::new(FileImageStore::new(config.upload.upload_dir.clone()));

        // Auth use case
        let login_use_case = Arc::new(LoginUseCaseImpl {
            credentials: Credentials::new(&config.auth.username, &config.auth.password),
            logger: logger.clone(),
        });

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            image_store: image_store.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_low_stock_use_case = Arc::new(GetLowStockProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            image_store,
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let auth_api = crate::api::auth::routes::AuthApi::new(login_use_case);
        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_low_stock_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api,
            auth_api,
            product_api,
        }
    }
}

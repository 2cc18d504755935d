use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::query::ProductQuery;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, query: ProductQuery) -> Result<Vec<Product>, ProductError> {
        self.logger.debug(&format!("Listing products: {query:?}"));
        let products = query.apply(self.repository.get_all().await?);
        self.logger
            .info(&format!("Listed {} products", products.len()));
        Ok(products)
    }
}

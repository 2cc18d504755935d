use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_low_stock::GetLowStockProductsUseCase;

pub struct GetLowStockProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetLowStockProductsUseCase for GetLowStockProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        let products: Vec<Product> = self
            .repository
            .get_all()
            .await?
            .into_iter()
            .filter(Product::is_low_stock)
            .collect();
        self.logger
            .info(&format!("Found {} low-stock products", products.len()));
        Ok(products)
    }
}

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::services::ImageUpload;

pub struct CreateProductParams {
    pub code: String,
    pub name: String,
    pub category: String,
    pub size: String,
    pub quantity: u32,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub supplier: String,
    pub image: Option<ImageUpload>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::services::ImageUpload;

pub struct UpdateProductParams {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub category: String,
    pub size: String,
    pub quantity: u32,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub supplier: String,
    /// A new image to attach. `None` keeps the existing image reference.
    pub image: Option<ImageUpload>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::services::ImageUpload;

/// Image payload attached to a create or update request.
#[derive(Debug, Clone, Object)]
pub struct ImageUploadDto {
    /// Original filename; decides the extension check
    pub filename: String,
    /// Base64-encoded file content
    pub data_base64: String,
}

impl ImageUploadDto {
    /// Decodes the payload. An undecodable body is treated like any other
    /// rejected upload: the product proceeds without an image.
    pub fn into_domain(self) -> Option<ImageUpload> {
        let bytes = STANDARD.decode(&self.data_base64).ok()?;
        Some(ImageUpload {
            filename: self.filename,
            bytes,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Caller-supplied product code (not checked for uniqueness)
    pub code: String,
    /// Product name
    pub name: String,
    /// Product category
    pub category: String,
    /// Product size
    pub size: String,
    /// Units in stock
    pub quantity: u32,
    /// Purchase price per unit
    pub purchase_price: f64,
    /// Sale price per unit
    pub sale_price: f64,
    /// Supplier name
    pub supplier: String,
    /// Optional image attachment (png, jpg, jpeg or gif)
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<ImageUploadDto>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Caller-supplied product code (not checked for uniqueness)
    pub code: String,
    /// Product name
    pub name: String,
    /// Product category
    pub category: String,
    /// Product size
    pub size: String,
    /// Units in stock
    pub quantity: u32,
    /// Purchase price per unit
    pub purchase_price: f64,
    /// Sale price per unit
    pub sale_price: f64,
    /// Supplier name
    pub supplier: String,
    /// New image attachment; omit to keep the current one
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<ImageUploadDto>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Generated unique identifier
    pub id: String,
    /// Caller-supplied product code
    pub code: String,
    /// Product name
    pub name: String,
    /// Product category
    pub category: String,
    /// Product size
    pub size: String,
    /// Units in stock
    pub quantity: u32,
    /// Purchase price per unit
    pub purchase_price: f64,
    /// Sale price per unit
    pub sale_price: f64,
    /// Supplier name
    pub supplier: String,
    /// Stored image filename
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    /// True when quantity is below the low-stock threshold
    pub low_stock: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let low_stock = product.is_low_stock();
        Self {
            id: product.id.to_string(),
            code: product.code,
            name: product.name,
            category: product.category,
            size: product.size,
            quantity: product.quantity,
            purchase_price: product.purchase_price,
            sale_price: product.sale_price,
            supplier: product.supplier,
            image: product.image,
            low_stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

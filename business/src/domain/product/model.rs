use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Quantity below which a product counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    /// Caller-supplied product code. Not validated for uniqueness; the
    /// generated `id` is the only stable identifier.
    pub code: String,
    pub name: String,
    pub category: String,
    pub size: String,
    pub quantity: u32,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub supplier: String,
    /// Filename of a previously stored image, if any.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub code: String,
    pub name: String,
    pub category: String,
    pub size: String,
    pub quantity: u32,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub supplier: String,
    pub image: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            code: props.code,
            name: props.name,
            category: props.category,
            size: props.size,
            quantity: props.quantity,
            purchase_price: props.purchase_price,
            sale_price: props.sale_price,
            supplier: props.supplier,
            image: props.image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already held by the repository (no generation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        code: String,
        name: String,
        category: String,
        size: String,
        quantity: u32,
        purchase_price: f64,
        sale_price: f64,
        supplier: String,
        image: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            name,
            category,
            size,
            quantity,
            purchase_price,
            sale_price,
            supplier,
            image,
            created_at,
            updated_at,
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

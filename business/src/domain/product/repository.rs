use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Port for the product registry. Implementations must keep insertion order:
/// `get_all` returns products in the order they were first saved, and a
/// delete leaves the relative order of the remaining products untouched.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Inserts a new product at the end, or overwrites an existing one in place.
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Removes the product with the given id. Deleting an unknown id is a no-op.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

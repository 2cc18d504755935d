use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

/// In-memory product registry. The whole inventory lives in one ordered
/// list for the lifetime of the process; nothing survives a restart.
///
/// The lock serializes concurrent mutation, so two simultaneous deletes
/// cannot corrupt the list.
pub struct ProductRepositoryInMemory {
    products: RwLock<Vec<Product>>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
        }
    }
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        match products.iter_mut().find(|p| p.id == product.id) {
            // Overwrite in place so the product keeps its position.
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.products.write().await.retain(|p| p.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::NewProductProps;

    fn product(name: &str) -> Product {
        Product::new(NewProductProps {
            code: "1".to_string(),
            name: name.to_string(),
            category: "Apparel".to_string(),
            size: "M".to_string(),
            quantity: 5,
            purchase_price: 10.0,
            sale_price: 20.0,
            supplier: "Acme".to_string(),
            image: None,
        })
    }

    fn names(products: &[Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[tokio::test]
    async fn should_return_products_in_insertion_order() {
        let repo = ProductRepositoryInMemory::new();
        for name in ["Shirt", "Hat", "Mug"] {
            repo.save(&product(name)).await.unwrap();
        }

        let all = repo.get_all().await.unwrap();

        assert_eq!(names(&all), ["Shirt", "Hat", "Mug"]);
    }

    #[tokio::test]
    async fn should_shift_later_products_after_delete() {
        let repo = ProductRepositoryInMemory::new();
        let shirt = product("Shirt");
        let hat = product("Hat");
        let mug = product("Mug");
        for p in [&shirt, &hat, &mug] {
            repo.save(p).await.unwrap();
        }

        repo.delete(hat.id).await.unwrap();
        let all = repo.get_all().await.unwrap();

        assert_eq!(names(&all), ["Shirt", "Mug"]);
    }

    #[tokio::test]
    async fn should_ignore_delete_of_unknown_id() {
        let repo = ProductRepositoryInMemory::new();
        repo.save(&product("Shirt")).await.unwrap();

        let result = repo.delete(Uuid::new_v4()).await;

        assert!(result.is_ok());
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_overwrite_in_place_and_keep_position() {
        let repo = ProductRepositoryInMemory::new();
        let shirt = product("Shirt");
        let hat = product("Hat");
        repo.save(&shirt).await.unwrap();
        repo.save(&hat).await.unwrap();

        let mut renamed = shirt.clone();
        renamed.name = "Polo".to_string();
        repo.save(&renamed).await.unwrap();
        let all = repo.get_all().await.unwrap();

        assert_eq!(names(&all), ["Polo", "Hat"]);
    }

    #[tokio::test]
    async fn should_find_product_by_id() {
        let repo = ProductRepositoryInMemory::new();
        let shirt = product("Shirt");
        repo.save(&shirt).await.unwrap();

        let found = repo.get_by_id(shirt.id).await.unwrap();
        assert_eq!(found.name, "Shirt");

        let missing = repo.get_by_id(Uuid::new_v4()).await;
        assert!(matches!(missing.unwrap_err(), RepositoryError::NotFound));
    }
}

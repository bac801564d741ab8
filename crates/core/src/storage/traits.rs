use async_trait::async_trait;

use crate::product::{Product, ProductUpdate};

use super::Result;

/// Repository for product operations.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Lists every product in the store.
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Gets a product by its ID.
    async fn get_product(&self, id: &str) -> Result<Option<Product>>;

    /// Writes a product, replacing any existing product with the same ID.
    async fn save_product(&self, product: &Product) -> Result<()>;

    /// Sets the name, description and price of an existing product.
    ///
    /// Returns [`RepositoryError::NotFound`](super::RepositoryError::NotFound)
    /// if no product has the given ID.
    async fn update_product(&self, id: &str, update: &ProductUpdate) -> Result<()>;

    /// Deletes a product by its ID. Deleting a missing product is not an error.
    async fn delete_product(&self, id: &str) -> Result<()>;
}

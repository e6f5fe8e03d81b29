use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, ProductOverwrite};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// List all products, unfiltered and unpaginated
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Overwrite an existing product's fields
    async fn update(&self, id: Uuid, input: ProductOverwrite) -> ProductResult<Product>;

    /// Delete a product by ID, returning whether a record was removed
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;
}

//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::domain::products::{
    data::{NewProduct, ProductUpdate},
    models::{Product, ProductId},
    repository::InMemoryProductsRepository,
};

/// Products service backed by in-memory storage.
#[derive(Debug, Default)]
pub struct InMemoryProductsService {
    repository: InMemoryProductsRepository,
}

impl InMemoryProductsService {
    /// Create a service with empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: InMemoryProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for InMemoryProductsService {
    async fn list_products(&self) -> Vec<Product> {
        self.repository.list_products().collect()
    }

    async fn find_product(&self, product: ProductId) -> Option<Product> {
        self.repository.find_product(&product)
    }

    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, product),
        fields(product_id = tracing::field::Empty)
    )]
    async fn create_product(&self, product: NewProduct) -> Product {
        let created = self.repository.create_product(product);

        tracing::Span::current().record("product_id", tracing::field::display(&created.id));

        debug!(quantity = created.quantity, "created product");

        created
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, product, update),
        fields(product_id = %product)
    )]
    async fn update_product(&self, product: ProductId, update: ProductUpdate) -> Option<Product> {
        let ProductUpdate { name, quantity } = update;

        let updated = self.repository.modify_product(&product, move |existing| {
            existing.name = name;
            existing.quantity = quantity;
        });

        if updated.is_none() {
            debug!("product to update not found");
        }

        updated
    }

    #[tracing::instrument(
        name = "products.service.delete_product",
        skip(self, product),
        fields(product_id = %product)
    )]
    async fn delete_product(&self, product: ProductId) {
        if !self.repository.delete_product(&product) {
            debug!("product to delete not found");
        }
    }
}

/// Product catalog operations.
#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in insertion order.
    async fn list_products(&self) -> Vec<Product>;

    /// Retrieve a single product, or `None` when no product has the id.
    async fn find_product(&self, product: ProductId) -> Option<Product>;

    /// Creates a new product, generating an id when none is given.
    async fn create_product(&self, product: NewProduct) -> Product;

    /// Overwrites the name and quantity of an existing product.
    ///
    /// Returns the stored product after the update, or `None` (with nothing
    /// changed) when no product has the id.
    async fn update_product(&self, product: ProductId, update: ProductUpdate) -> Option<Product>;

    /// Deletes a product. Deleting an unknown id is a no-op.
    async fn delete_product(&self, product: ProductId);
}

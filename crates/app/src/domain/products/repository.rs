//! Products Repository

use std::{
    sync::{Mutex, MutexGuard, PoisonError},
    vec,
};

use crate::domain::products::{
    data::NewProduct,
    models::{Product, ProductId},
};

/// In-memory product storage.
///
/// A single lock guards the whole collection. Every critical section leaves
/// the vector consistent, so a poisoned lock is recovered rather than
/// propagated.
#[derive(Debug, Default)]
pub(crate) struct InMemoryProductsRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a product, assigning a fresh id when none (or an empty one) was given.
    pub(crate) fn create_product(&self, product: NewProduct) -> Product {
        let id = product
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(ProductId::new);

        let product = Product {
            id,
            name: product.name,
            quantity: product.quantity,
        };

        self.lock().push(product.clone());

        product
    }

    pub(crate) fn find_product(&self, id: &ProductId) -> Option<Product> {
        self.lock().iter().find(|product| product.id == *id).cloned()
    }

    /// Snapshot of all products in insertion order.
    pub(crate) fn list_products(&self) -> vec::IntoIter<Product> {
        self.lock().clone().into_iter()
    }

    /// Mutates the first product with the given id while the lock is held.
    pub(crate) fn modify_product<F>(&self, id: &ProductId, modify: F) -> Option<Product>
    where
        F: FnOnce(&mut Product),
    {
        let mut products = self.lock();

        let product = products.iter_mut().find(|product| product.id == *id)?;

        modify(product);

        Some(product.clone())
    }

    /// Removes the first product with the given id; returns whether one was removed.
    pub(crate) fn delete_product(&self, id: &ProductId) -> bool {
        let mut products = self.lock();

        let Some(position) = products.iter().position(|product| product.id == *id) else {
            return false;
        };

        products.remove(position);

        true
    }
}

//! App Context

use std::sync::Arc;

use crate::domain::products::{InMemoryProductsService, ProductsService};

/// Services shared by every request.
#[derive(Clone)]
pub struct AppContext {
    /// Product catalog service.
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build a context around an existing products service.
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products }
    }

    /// Build an application context backed by empty in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductsService::new()))
    }
}

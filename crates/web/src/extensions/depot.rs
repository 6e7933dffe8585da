//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use eshop_app::domain::products::ProductsService;

use crate::state::State;

/// Helpers for reaching injected state from handlers.
pub(crate) trait DepotExt {
    /// The products service, or a 500 when no state was injected.
    fn products_or_500(&self) -> Result<&Arc<dyn ProductsService>, StatusError>;
}

impl DepotExt for Depot {
    fn products_or_500(&self) -> Result<&Arc<dyn ProductsService>, StatusError> {
        self.obtain::<Arc<State>>()
            .map(|state| &state.app.products)
            .map_err(|_ignored| {
                error!("application state missing from depot");

                StatusError::internal_server_error()
            })
    }
}

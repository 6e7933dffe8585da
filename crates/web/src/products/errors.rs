//! Product Page Errors

use thiserror::Error;

/// User-visible outcomes that send the browser back to the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum ProductPageError {
    #[error("Product name cannot be empty and quantity must be at least 0")]
    InvalidForm,

    #[error("Product not found")]
    NotFound,
}

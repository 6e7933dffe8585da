//! Products Data

use crate::domain::products::models::ProductId;

/// New Product Data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProduct {
    /// Caller-chosen id; one is generated when absent or empty.
    pub id: Option<ProductId>,
    /// Display name.
    pub name: String,
    /// Units in stock.
    pub quantity: i32,
}

/// Product Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    /// Replacement name.
    pub name: String,
    /// Replacement quantity.
    pub quantity: i32,
}

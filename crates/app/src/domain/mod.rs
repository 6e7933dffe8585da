//! eshop Domain Concerns

pub mod products;

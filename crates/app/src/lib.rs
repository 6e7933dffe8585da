//! Product catalog domain: entity, in-memory storage and service layer.

pub mod context;
pub mod domain;

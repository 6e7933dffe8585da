//! Products

mod errors;
mod forms;
mod handlers;
mod views;

pub(crate) use handlers::{create, delete, edit, list};

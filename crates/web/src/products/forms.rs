//! Product Forms

use serde::Deserialize;

use eshop_app::domain::products::data::{NewProduct, ProductUpdate};

use crate::products::errors::ProductPageError;

/// Create/edit form fields as submitted by the browser.
///
/// A missing quantity binds to `0`; a missing name fails validation.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProductForm {
    #[serde(rename = "productName", default)]
    pub name: Option<String>,

    #[serde(rename = "productQuantity", default)]
    pub quantity: i32,
}

/// Form fields that passed the presence and sign checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidProductForm {
    pub name: String,
    pub quantity: i32,
}

impl ProductForm {
    pub(crate) fn validate(self) -> Result<ValidProductForm, ProductPageError> {
        match self.name {
            Some(name) if !name.trim().is_empty() && self.quantity >= 0 => Ok(ValidProductForm {
                name,
                quantity: self.quantity,
            }),
            _ => Err(ProductPageError::InvalidForm),
        }
    }
}

impl From<ValidProductForm> for NewProduct {
    fn from(form: ValidProductForm) -> Self {
        NewProduct {
            id: None,
            name: form.name,
            quantity: form.quantity,
        }
    }
}

impl From<ValidProductForm> for ProductUpdate {
    fn from(form: ValidProductForm) -> Self {
        ProductUpdate {
            name: form.name,
            quantity: form.quantity,
        }
    }
}

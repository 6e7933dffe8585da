//! Product Handlers

use salvo::{http::header::LOCATION, prelude::*};
use url::form_urlencoded;

use eshop_app::domain::products::models::ProductId;

use crate::{extensions::*, products::errors::ProductPageError};

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod edit;
pub(crate) mod list;

pub(crate) const LIST_PATH: &str = "/product/list";
pub(crate) const CREATE_PATH: &str = "/product/create";

/// The `{id}` path segment of the matched route.
fn product_id(req: &Request) -> Result<ProductId, StatusError> {
    req.param::<String>("id")
        .map(ProductId::from)
        .ok_or_else(|| StatusError::bad_request().brief("missing product id"))
}

/// Send the browser to the product list, carrying `error` as a query parameter.
fn redirect_to_list(res: &mut Response, error: Option<ProductPageError>) -> Result<(), StatusError> {
    let location = match error {
        Some(error) => {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair("error", &error.to_string())
                .finish();

            format!("{LIST_PATH}?{query}")
        }
        None => LIST_PATH.to_owned(),
    };

    res.add_header(LOCATION, location, true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::FOUND);

    Ok(())
}

//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, http::header::LOCATION, prelude::*};

use eshop_app::{
    context::AppContext,
    domain::products::{
        MockProductsService,
        models::{Product, ProductId},
    },
};

use crate::state::State;

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(products)))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

pub(crate) fn make_product(id: &str, name: &str, quantity: i32) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_string(),
        quantity,
    }
}

/// The `Location` header of a redirect, if present.
pub(crate) fn location(res: &Response) -> Option<&str> {
    res.headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
}

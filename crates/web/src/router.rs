//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{healthcheck, observability::request_logging, products, state::State};

pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(product_router())
}

fn product_router() -> Router {
    Router::with_path("product")
        .push(Router::with_path("list").get(products::list::handler))
        .push(
            Router::with_path("create")
                .get(products::create::page)
                .post(products::create::handler),
        )
        .push(
            Router::with_path("edit/{id}")
                .get(products::edit::page)
                .post(products::edit::handler),
        )
        .push(Router::with_path("delete/{id}").get(products::delete::handler))
}

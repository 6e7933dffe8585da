//! Create Product Handlers

use salvo::{prelude::*, writing::Text};
use tracing::info;

use crate::{
    extensions::*,
    products::{forms::ProductForm, handlers::redirect_to_list, views},
};

/// Create Product Page
#[handler]
pub(crate) async fn page(res: &mut Response) {
    res.render(Text::Html(views::create_page()));
}

/// Create Product Handler
///
/// Invalid input redirects to the list with the validation message and never
/// reaches the service.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let form = req
        .parse_form::<ProductForm>()
        .await
        .or_400("Invalid product form")?;

    let form = match form.validate() {
        Ok(form) => form,
        Err(error) => return redirect_to_list(res, Some(error)),
    };

    let product = depot
        .products_or_500()?
        .create_product(form.into())
        .await;

    info!(product_id = %product.id, quantity = product.quantity, "created product");

    redirect_to_list(res, None)
}

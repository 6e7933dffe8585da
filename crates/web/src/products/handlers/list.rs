//! List Products Handler

use salvo::{prelude::*, writing::Text};

use crate::{extensions::*, products::views};

/// List Products Page
///
/// Shows every product in insertion order, with the `error` query parameter
/// (if any) as a banner above the table.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let error = req.query::<String>("error").filter(|error| !error.is_empty());

    let products = depot.products_or_500()?.list_products().await;

    res.render(Text::Html(views::list_page(&products, error.as_deref())));

    Ok(())
}

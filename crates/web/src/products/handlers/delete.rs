//! Delete Product Handler

use salvo::prelude::*;
use tracing::info;

use crate::{
    extensions::*,
    products::{
        errors::ProductPageError,
        handlers::{product_id, redirect_to_list},
    },
};

/// Delete Product Handler
///
/// Deletes through a plain link, so it answers `GET`. Unknown ids redirect to
/// the list with the not-found message.
#[handler]
#[tracing::instrument(
    name = "products.delete",
    skip(req, depot, res),
    fields(product_id = tracing::field::Empty)
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let id = product_id(req)?;

    tracing::Span::current().record("product_id", tracing::field::display(&id));

    let products = depot.products_or_500()?;

    if products.find_product(id.clone()).await.is_none() {
        return redirect_to_list(res, Some(ProductPageError::NotFound));
    }

    products.delete_product(id).await;

    info!("deleted product");

    redirect_to_list(res, None)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;

    use eshop_app::domain::products::{MockProductsService, models::ProductId};

    use crate::test_helpers::{location, make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(
            products,
            Router::with_path("product/delete/{id}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_existing_product_redirects_to_list() {
        let mut products = MockProductsService::new();

        products
            .expect_find_product()
            .once()
            .withf(|product| product.as_str() == "p-1")
            .return_once(|_| Some(make_product("p-1", "Mouse", 5)));

        products
            .expect_delete_product()
            .once()
            .withf(|product| *product == ProductId::from("p-1"))
            .return_once(|_| ());

        products.expect_create_product().never();
        products.expect_list_products().never();
        products.expect_update_product().never();

        let res = TestClient::get("http://example.com/product/delete/p-1")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
        assert_eq!(location(&res), Some("/product/list"));
    }

    #[tokio::test]
    async fn test_delete_missing_product_redirects_with_error_without_deleting() {
        let mut products = MockProductsService::new();

        products
            .expect_find_product()
            .once()
            .return_once(|_| None);

        products.expect_delete_product().never();
        products.expect_create_product().never();
        products.expect_list_products().never();
        products.expect_update_product().never();

        let res = TestClient::get("http://example.com/product/delete/non-existent-id")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
        assert_eq!(location(&res), Some("/product/list?error=Product+not+found"));
    }
}

//! Edit Product Handlers

use salvo::{prelude::*, writing::Text};
use tracing::info;

use crate::{
    extensions::*,
    products::{
        errors::ProductPageError,
        forms::ProductForm,
        handlers::{product_id, redirect_to_list},
        views,
    },
};

/// Edit Product Page
///
/// Renders the form prefilled with the stored product, or redirects to the
/// list when the id is unknown.
#[handler]
pub(crate) async fn page(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let id = product_id(req)?;

    let Some(product) = depot.products_or_500()?.find_product(id).await else {
        return redirect_to_list(res, Some(ProductPageError::NotFound));
    };

    res.render(Text::Html(views::edit_page(&product)));

    Ok(())
}

/// Update Product Handler
#[handler]
#[tracing::instrument(
    name = "products.update",
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

    let form = req
        .parse_form::<ProductForm>()
        .await
        .or_400("Invalid product form")?;

    let products = depot.products_or_500()?;

    if products.find_product(id.clone()).await.is_none() {
        return redirect_to_list(res, Some(ProductPageError::NotFound));
    }

    let form = match form.validate() {
        Ok(form) => form,
        Err(error) => return redirect_to_list(res, Some(error)),
    };

    // The product may have been deleted since the lookup above.
    let Some(product) = products.update_product(id, form.into()).await else {
        return redirect_to_list(res, Some(ProductPageError::NotFound));
    };

    info!(quantity = product.quantity, "updated product");

    redirect_to_list(res, None)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use eshop_app::domain::products::{
        MockProductsService,
        data::ProductUpdate,
        models::ProductId,
    };

    use crate::test_helpers::{location, make_product, products_service};

    use super::*;

    const NOT_FOUND_REDIRECT: &str = "/product/list?error=Product+not+found";
    const VALIDATION_REDIRECT: &str = "/product/list?error=Product+name+cannot+be+empty+and+quantity+must+be+at+least+0";

    fn make_service(products: MockProductsService) -> Service {
        products_service(
            products,
            Router::with_path("product/edit/{id}").get(page).post(handler),
        )
    }

    fn expect_find(products: &mut MockProductsService, id: &'static str, found: bool) {
        products
            .expect_find_product()
            .once()
            .withf(move |product| product.as_str() == id)
            .return_once(move |_| found.then(|| make_product(id, "Mouse", 5)));
    }

    fn forbid_mutations(products: &mut MockProductsService) {
        products.expect_create_product().never();
        products.expect_list_products().never();
        products.expect_update_product().never();
        products.expect_delete_product().never();
    }

    #[tokio::test]
    async fn test_edit_page_when_found_renders_form() -> TestResult {
        let mut products = MockProductsService::new();

        expect_find(&mut products, "p-1", true);
        forbid_mutations(&mut products);

        let mut res = TestClient::get("http://example.com/product/edit/p-1")
            .send(&make_service(products))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.contains(r#"value="Mouse""#), "form should be prefilled");

        Ok(())
    }

    #[tokio::test]
    async fn test_edit_page_when_missing_redirects_with_error() {
        let mut products = MockProductsService::new();

        expect_find(&mut products, "missing", false);
        forbid_mutations(&mut products);

        let res = TestClient::get("http://example.com/product/edit/missing")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
        assert_eq!(location(&res), Some(NOT_FOUND_REDIRECT));
    }

    #[tokio::test]
    async fn test_update_when_missing_redirects_without_updating() {
        let mut products = MockProductsService::new();

        expect_find(&mut products, "missing", false);
        forbid_mutations(&mut products);

        let res = TestClient::post("http://example.com/product/edit/missing")
            .form(&[("productName", "Keyboard"), ("productQuantity", "3")])
            .send(&make_service(products))
            .await;

        assert_eq!(location(&res), Some(NOT_FOUND_REDIRECT));
    }

    #[tokio::test]
    async fn test_update_with_invalid_input_redirects_without_updating() {
        for form in [
            vec![("productName", ""), ("productQuantity", "-2")],
            vec![("productQuantity", "1")],
            vec![("productName", "Valid Name"), ("productQuantity", "-1")],
        ] {
            let mut products = MockProductsService::new();

            expect_find(&mut products, "p-2", true);
            forbid_mutations(&mut products);

            let res = TestClient::post("http://example.com/product/edit/p-2")
                .form(&form)
                .send(&make_service(products))
                .await;

            assert_eq!(res.status_code, Some(StatusCode::FOUND));
            assert_eq!(location(&res), Some(VALIDATION_REDIRECT));
        }
    }

    #[tokio::test]
    async fn test_update_with_valid_input_updates_and_redirects() {
        let mut products = MockProductsService::new();

        expect_find(&mut products, "p-3", true);

        products
            .expect_update_product()
            .once()
            .withf(|product, update| {
                *product == ProductId::from("p-3")
                    && *update
                        == ProductUpdate {
                            name: "Monitor".to_string(),
                            quantity: 8,
                        }
            })
            .return_once(|_, _| Some(make_product("p-3", "Monitor", 8)));

        products.expect_create_product().never();
        products.expect_list_products().never();
        products.expect_delete_product().never();

        let res = TestClient::post("http://example.com/product/edit/p-3")
            .form(&[("productName", "Monitor"), ("productQuantity", "8")])
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
        assert_eq!(location(&res), Some("/product/list"));
    }

    #[tokio::test]
    async fn test_update_racing_a_delete_redirects_with_not_found() {
        let mut products = MockProductsService::new();

        expect_find(&mut products, "p-4", true);

        products
            .expect_update_product()
            .once()
            .return_once(|_, _| None);

        products.expect_create_product().never();
        products.expect_list_products().never();
        products.expect_delete_product().never();

        let res = TestClient::post("http://example.com/product/edit/p-4")
            .form(&[("productName", "Monitor"), ("productQuantity", "8")])
            .send(&make_service(products))
            .await;

        assert_eq!(location(&res), Some(NOT_FOUND_REDIRECT));
    }
}

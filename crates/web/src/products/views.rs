//! Product Pages
//!
//! Server-rendered HTML for the product list, create and edit pages. Every
//! piece of product data is escaped before it reaches the markup.

use std::fmt::Write as _;

use eshop_app::domain::products::models::Product;

use crate::products::handlers::{CREATE_PATH, LIST_PATH};

pub(crate) fn list_page(products: &[Product], error: Option<&str>) -> String {
    let mut body = String::from("<h2>Product List</h2>\n");

    if let Some(error) = error {
        _ = writeln!(body, r#"<div class="alert" role="alert">{}</div>"#, escape(error));
    }

    _ = writeln!(body, r#"<a href="{CREATE_PATH}">Create Product</a>"#);

    body.push_str(
        "<table>\n<thead><tr><th>Product Name</th><th>Quantity</th><th>Actions</th></tr></thead>\n<tbody>\n",
    );

    for product in products {
        let id = escape(product.id.as_str());

        _ = writeln!(
            body,
            r#"<tr><td>{name}</td><td>{quantity}</td><td><a href="/product/edit/{id}">Edit</a> <a href="/product/delete/{id}">Delete</a></td></tr>"#,
            name = escape(&product.name),
            quantity = product.quantity,
        );
    }

    body.push_str("</tbody>\n</table>\n");

    layout("Product List", &body)
}

pub(crate) fn create_page() -> String {
    layout(
        "Create New Product",
        &product_form("Create New Product", CREATE_PATH, "", None),
    )
}

pub(crate) fn edit_page(product: &Product) -> String {
    let action = format!("/product/edit/{}", escape(product.id.as_str()));

    layout(
        "Edit Product",
        &product_form("Edit Product", &action, &product.name, Some(product.quantity)),
    )
}

fn product_form(heading: &str, action: &str, name: &str, quantity: Option<i32>) -> String {
    let quantity = quantity.map(|q| q.to_string()).unwrap_or_default();

    format!(
        r#"<h3>{heading}</h3>
<form action="{action}" method="post">
<label for="nameInput">Name</label>
<input type="text" id="nameInput" name="productName" value="{name}" placeholder="Enter product name">
<label for="quantityInput">Quantity</label>
<input type="number" id="quantityInput" name="productQuantity" value="{quantity}" placeholder="Enter product quantity">
<button type="submit">Submit</button>
</form>
<a href="{LIST_PATH}">Back to list</a>
"#,
        name = escape(name),
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

/// Escape text for use in HTML content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

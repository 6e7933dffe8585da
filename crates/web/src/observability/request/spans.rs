//! Route names for request spans.

/// Segments whose following segment is a product id.
const ID_PREFIXES: [&str; 2] = ["edit", "delete"];

/// Replace product ids in a request path with `{id}` so logs group by route.
pub(super) fn route_for_path(path: &str) -> String {
    let mut route = String::new();
    let mut id_follows = false;

    for segment in path.trim_start_matches('/').split('/') {
        route.push('/');

        if id_follows && !segment.is_empty() {
            route.push_str("{id}");
        } else {
            route.push_str(segment);
        }

        id_follows = ID_PREFIXES.contains(&segment);
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths_are_unchanged() {
        assert_eq!(route_for_path("/"), "/");
        assert_eq!(route_for_path("/product/list"), "/product/list");
    }

    #[test]
    fn test_product_ids_are_replaced() {
        assert_eq!(
            route_for_path("/product/edit/eb558e9f-1c39-460e-8860-71af6af63bd6"),
            "/product/edit/{id}"
        );
        assert_eq!(route_for_path("/product/delete/p-4"), "/product/delete/{id}");
    }
}

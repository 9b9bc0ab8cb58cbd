//! Record selection and HTML production.

use serde_json::Value;

use crate::backend::FetchedPayload;

use super::compositor::TemplateSet;
use super::{RenderError, RenderResult};

/// Render the fetched payload's first record through the composed template
/// set.
///
/// The record rendered is always `products[0]`; an absent or empty
/// `products` sequence fails with `EmptyResultSet` rather than rendering
/// a document against a missing record.
pub fn render_record(set: &TemplateSet, payload: &FetchedPayload) -> RenderResult<String> {
    let record: &Value = payload
        .products
        .first()
        .ok_or(RenderError::EmptyResultSet)?;

    set.render(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{compose, TemplateLoader};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn template_set() -> (TempDir, TemplateSet) {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("page.html"),
            "<article>{{title}} - {{cardLinks type}}</article>",
        )
        .unwrap();
        let loader = TemplateLoader::new(dir.path());
        let set = compose(&loader, &["page".to_string()]).unwrap();
        (dir, set)
    }

    #[test]
    fn renders_the_first_record() {
        let (_dir, set) = template_set();
        let payload = FetchedPayload {
            products: vec![
                json!({"title": "A", "type": "VIDEO"}),
                json!({"title": "B", "type": "PDF"}),
            ],
        };

        let html = render_record(&set, &payload).unwrap();
        assert_eq!(html, "<article>A - Watch video</article>");
    }

    #[test]
    fn output_is_reproducible() {
        let (_dir, set) = template_set();
        let payload = FetchedPayload {
            products: vec![json!({"title": "A", "type": "LINK"})],
        };

        let first = render_record(&set, &payload).unwrap();
        let second = render_record(&set, &payload).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_products_fails_instead_of_rendering() {
        let (_dir, set) = template_set();
        let payload = FetchedPayload { products: vec![] };

        assert!(matches!(
            render_record(&set, &payload),
            Err(RenderError::EmptyResultSet)
        ));
    }

    #[test]
    fn absent_products_field_decodes_to_empty() {
        let payload: FetchedPayload = serde_json::from_value(json!({})).unwrap();
        assert!(payload.products.is_empty());
    }
}

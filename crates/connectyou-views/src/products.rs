//! Products page: the catalog under a category selector.

use std::fmt::Write as _;

use connectyou_core::{filter_products, Product, ProductFilter, PRODUCT_CATEGORY_OPTIONS};

/// Header with the active selection, then one card per matching product.
#[must_use]
pub fn render_products(catalog: &[Product], filter: &ProductFilter) -> String {
    let shown = filter_products(catalog, filter);
    let mut out = format!(
        "Products  [category: {filter}]  (options: {})\n\n",
        PRODUCT_CATEGORY_OPTIONS.join(", ")
    );

    if shown.is_empty() {
        out.push_str("  No products in this category.\n");
        return out;
    }

    for product in &shown {
        let _ = writeln!(out, "  {}  ({})", product.name, product.category);
        let _ = writeln!(out, "     {}", product.description);
        let _ = writeln!(out, "     {}  [Add to Cart]\n", product.price_label());
    }
    out
}

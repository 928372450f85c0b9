//! Static product catalog shown on the products page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Values offered by the products page category selector.
pub const PRODUCT_CATEGORY_OPTIONS: [&str; 3] = ["all", "groceries", "books"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Price in dollars.
    pub price: f64,
    pub description: String,
    /// Display-cased category name, e.g. `"Groceries"`.
    pub category: String,
    #[serde(rename = "image")]
    pub image_url: String,
}

impl Product {
    fn new(
        id: i64,
        name: &str,
        price: f64,
        description: &str,
        category: &str,
        image_url: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_owned(),
            price,
            description: description.to_owned(),
            category: category.to_owned(),
            image_url: image_url.to_owned(),
        }
    }

    /// `$24.99` style price label.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// The built-in catalog, in display order.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Fresh Vegetables Bundle",
            24.99,
            "A selection of fresh, locally sourced vegetables",
            "Groceries",
            "https://images.unsplash.com/photo-1540420773420-3366772f4999?ixlib=rb-4.0.3",
        ),
        Product::new(
            2,
            "Bestseller Book Collection",
            49.99,
            "Top 3 bestselling novels of the month",
            "Books",
            "https://images.unsplash.com/photo-1516979187457-637abb4f9353?ixlib=rb-4.0.3",
        ),
        Product::new(
            3,
            "Organic Fruit Box",
            34.99,
            "Seasonal organic fruits from local farms",
            "Groceries",
            "https://images.unsplash.com/photo-1610832958506-aa56368176cf?ixlib=rb-4.0.3",
        ),
        Product::new(
            4,
            "Children's Book Set",
            29.99,
            "Educational and fun books for kids",
            "Books",
            "https://images.unsplash.com/photo-1512820790803-83ca734da794?ixlib=rb-4.0.3",
        ),
    ]
}

/// Category selection on the products page.
///
/// Unlike [`crate::CategoryFilter`], matching ignores case: `books` selects
/// products whose category is `"Books"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProductFilter {
    #[default]
    All,
    Category(String),
}

impl ProductFilter {
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::Category(wanted) => product.category.eq_ignore_ascii_case(wanted),
        }
    }
}

impl FromStr for ProductFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Ok(ProductFilter::All)
        } else {
            Ok(ProductFilter::Category(trimmed.to_lowercase()))
        }
    }
}

impl fmt::Display for ProductFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductFilter::All => f.write_str("all"),
            ProductFilter::Category(category) => f.write_str(category),
        }
    }
}

/// Products matching `filter`, preserving catalog order.
#[must_use]
pub fn filter_products(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn all_keeps_whole_catalog_in_order() {
        let catalog = sample_products();
        let shown = filter_products(&catalog, &ProductFilter::All);
        assert_eq!(shown, catalog);
        assert_eq!(shown.len(), 4);
    }

    #[test]
    fn category_match_ignores_case() {
        let catalog = sample_products();
        let filter: ProductFilter = "BOOKS".parse().unwrap();
        assert_eq!(
            names(&filter_products(&catalog, &filter)),
            vec!["Bestseller Book Collection", "Children's Book Set"]
        );

        let filter: ProductFilter = "groceries".parse().unwrap();
        assert_eq!(
            names(&filter_products(&catalog, &filter)),
            vec!["Fresh Vegetables Bundle", "Organic Fruit Box"]
        );
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let filter: ProductFilter = "electronics".parse().unwrap();
        assert!(filter_products(&sample_products(), &filter).is_empty());
    }

    #[test]
    fn blank_and_all_parse_to_all() {
        assert_eq!("".parse::<ProductFilter>().unwrap(), ProductFilter::All);
        assert_eq!(" All ".parse::<ProductFilter>().unwrap(), ProductFilter::All);
        assert_eq!("Books".parse::<ProductFilter>().unwrap().to_string(), "books");
    }

    #[test]
    fn price_label_keeps_cents() {
        let product = &sample_products()[0];
        assert_eq!(product.price_label(), "$24.99");
    }

    #[test]
    fn product_serializes_image_field() {
        let value = serde_json::to_value(&sample_products()[3]).unwrap();
        assert_eq!(value["category"], "Books");
        assert!(value["image"].as_str().unwrap().starts_with("https://"));
    }
}

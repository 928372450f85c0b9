//! Store records as served by the `/stores` endpoint and the seed data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Business category of a store.
///
/// The set is closed, but values outside it are kept as [`StoreCategory::Other`]
/// instead of failing the whole response. Such records only ever match the
/// `all` filter or an identical raw string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StoreCategory {
    Grocery,
    Books,
    Electronics,
    Clothing,
    General,
    Other(String),
}

impl StoreCategory {
    /// The five categories the application knows how to badge.
    pub const KNOWN: [StoreCategory; 5] = [
        StoreCategory::Grocery,
        StoreCategory::Books,
        StoreCategory::Electronics,
        StoreCategory::Clothing,
        StoreCategory::General,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            StoreCategory::Grocery => "grocery",
            StoreCategory::Books => "books",
            StoreCategory::Electronics => "electronics",
            StoreCategory::Clothing => "clothing",
            StoreCategory::General => "general",
            StoreCategory::Other(raw) => raw,
        }
    }

    /// Capitalised label used on list cards and map popups (`"Grocery"`).
    #[must_use]
    pub fn label(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<String> for StoreCategory {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "grocery" => StoreCategory::Grocery,
            "books" => StoreCategory::Books,
            "electronics" => StoreCategory::Electronics,
            "clothing" => StoreCategory::Clothing,
            "general" => StoreCategory::General,
            _ => StoreCategory::Other(raw),
        }
    }
}

impl From<&str> for StoreCategory {
    fn from(raw: &str) -> Self {
        StoreCategory::from(raw.to_owned())
    }
}

impl From<StoreCategory> for String {
    fn from(category: StoreCategory) -> Self {
        match category {
            StoreCategory::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for StoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WGS84 position of a store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon", alias = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A single business listing.
///
/// Immutable once received; a new fetch replaces the whole working set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category: StoreCategory,
    pub address: String,
    #[serde(flatten)]
    pub location: Coordinate,
    /// Average rating on a 0.0 to 5.0 scale.
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hours: String,
    /// Precomputed distance label such as `"0.5 km"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
}

impl Store {
    /// Rating rendered as whole stars, e.g. `4.5` becomes four stars.
    #[must_use]
    pub fn star_string(&self) -> String {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = self.rating.clamp(0.0, 5.0).floor() as usize;
        "\u{2b50}".repeat(whole)
    }
}

#[cfg(test)]
#[path = "stores_test.rs"]
mod tests;

//! Built-in sample stores and seed file loading.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::stores::{Coordinate, Store, StoreCategory};
use crate::CoreError;

/// The five sample listings shown when no backend is configured.
///
/// Two grocery stores, two book stores and one general store around lower
/// Manhattan.
#[must_use]
pub fn sample_stores() -> Vec<Store> {
    vec![
        sample(
            1,
            "Central Grocery",
            StoreCategory::Grocery,
            "123 Main St",
            (40.7128, -74.006),
            (4.5, 120),
            "Fresh produce, dairy and pantry staples.",
            "Mon-Sun 7:00-22:00",
            "0.5 km",
        ),
        sample(
            2,
            "City Books",
            StoreCategory::Books,
            "456 Book Lane",
            (40.7138, -74.009),
            (4.8, 85),
            "Independent bookshop with a large fiction section.",
            "Mon-Sat 9:00-20:00",
            "1.2 km",
        ),
        sample(
            3,
            "Downtown General Store",
            StoreCategory::General,
            "789 Market St",
            (40.7148, -74.008),
            (4.2, 95),
            "Household goods, hardware and everyday essentials.",
            "Mon-Sun 8:00-21:00",
            "0.8 km",
        ),
        sample(
            4,
            "Fresh Mart",
            StoreCategory::Grocery,
            "321 Food Ave",
            (40.7158, -74.009),
            (4.6, 150),
            "Neighbourhood market with a bakery counter.",
            "Mon-Sun 6:00-23:00",
            "1.5 km",
        ),
        sample(
            5,
            "Readers Corner",
            StoreCategory::Books,
            "654 Library Lane",
            (40.7168, -74.010),
            (4.9, 75),
            "Used and rare books, reading nook upstairs.",
            "Tue-Sun 10:00-19:00",
            "2.0 km",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: i64,
    name: &str,
    category: StoreCategory,
    address: &str,
    (latitude, longitude): (f64, f64),
    (rating, reviews): (f64, u32),
    description: &str,
    hours: &str,
    distance: &str,
) -> Store {
    Store {
        id,
        name: name.to_owned(),
        category,
        address: address.to_owned(),
        location: Coordinate::new(latitude, longitude),
        rating,
        reviews,
        description: description.to_owned(),
        hours: hours.to_owned(),
        distance: Some(distance.to_owned()),
    }
}

/// Accepts both `{ "stores": [...] }` and a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeedDocument {
    Wrapped { stores: Vec<Store> },
    Bare(Vec<Store>),
}

impl SeedDocument {
    fn into_stores(self) -> Vec<Store> {
        match self {
            SeedDocument::Wrapped { stores } | SeedDocument::Bare(stores) => stores,
        }
    }
}

/// Load stores from a `.json`, `.yaml` or `.yml` seed file.
///
/// # Errors
///
/// Returns [`CoreError::SeedIo`] if the file cannot be read,
/// [`CoreError::SeedParse`] if it does not decode, and
/// [`CoreError::DuplicateStoreId`] if two records share an id.
pub fn load_seed_file(path: &Path) -> Result<Vec<Store>, CoreError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CoreError::SeedIo {
        path: path.to_path_buf(),
        source,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let document: SeedDocument = if is_yaml {
        serde_yaml::from_str(&raw).map_err(|e| CoreError::SeedParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
    } else {
        serde_json::from_str(&raw).map_err(|e| CoreError::SeedParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
    };

    let stores = document.into_stores();
    ensure_unique_ids(&stores)?;
    tracing::info!(path = %path.display(), count = stores.len(), "loaded seed stores");
    Ok(stores)
}

pub(crate) fn ensure_unique_ids(stores: &[Store]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(stores.len());
    for store in stores {
        if !seen.insert(store.id) {
            return Err(CoreError::DuplicateStoreId(store.id));
        }
    }
    Ok(())
}

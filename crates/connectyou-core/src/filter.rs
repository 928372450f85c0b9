//! The filter engine shared by the list and map views.

use std::fmt;
use std::str::FromStr;

use crate::stores::{Store, StoreCategory};

/// Category half of the query: everything, or one exact category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(StoreCategory),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(&self, category: &StoreCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    /// The `type` query parameter value, or `None` when every category is wanted.
    #[must_use]
    pub fn as_param(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category.as_str()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    /// `""` and `"all"` (any case) select every category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(StoreCategory::from(trimmed)))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

/// Search text plus category selection owned by the stores page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub search_text: String,
    pub category: CategoryFilter,
}

impl QueryState {
    #[must_use]
    pub fn new(search_text: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search_text: search_text.into(),
            category,
        }
    }

    /// Whether a single store satisfies this query.
    ///
    /// Empty search text matches everything; otherwise the lowercased text
    /// must occur in the lowercased name or address.
    #[must_use]
    pub fn matches(&self, store: &Store) -> bool {
        self.category.matches(&store.category) && text_matches(&self.search_text, store)
    }
}

fn text_matches(search_text: &str, store: &Store) -> bool {
    if search_text.is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();
    store.name.to_lowercase().contains(&needle) || store.address.to_lowercase().contains(&needle)
}

/// Returns the stores matching `query`, preserving input order.
///
/// Pure and total: an empty input yields an empty output.
#[must_use]
pub fn filter_stores(stores: &[Store], query: &QueryState) -> Vec<Store> {
    stores
        .iter()
        .filter(|store| query.matches(store))
        .cloned()
        .collect()
}

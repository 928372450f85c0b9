//! Wire envelopes of the store API.

use chrono::NaiveDateTime;
use connectyou_core::Store;
use serde::{Deserialize, Serialize};

/// Response of `GET /stores`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreListResponse {
    pub stores: Vec<Store>,
    pub total: u64,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

/// Response of `GET /store-types`, exposed as `categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(rename = "types")]
    pub categories: Vec<String>,
}

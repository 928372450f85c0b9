//! Domain model for Connect You, the local store locator.
//!
//! Holds the store record types, the pure filter engine shared by the list
//! and map views, the client-side store repository, the product catalog,
//! analytics aggregates, feedback payloads, and environment-driven
//! configuration.

pub mod analytics;
pub mod app_config;
pub mod config;
pub mod feedback;
pub mod filter;
pub mod products;
pub mod repository;
pub mod seed;
pub mod stores;

use std::path::PathBuf;

use thiserror::Error;

pub use analytics::{
    platform_dashboard, shop_dashboard, KeyMetric, MockDashboard, Series, StoreAnalytics,
    Timeframe, TopRatedStore,
};
pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use feedback::{FeedbackPayload, FeedbackReceipt, MAX_RATING, MIN_RATING};
pub use filter::{filter_stores, CategoryFilter, QueryState};
pub use products::{
    filter_products, sample_products, Product, ProductFilter, PRODUCT_CATEGORY_OPTIONS,
};
pub use repository::{Provenance, StoreRepository};
pub use seed::{load_seed_file, sample_stores};
pub use stores::{Coordinate, Store, StoreCategory};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("duplicate store id {0} in working set")]
    DuplicateStoreId(i64),

    #[error("invalid feedback: {0}")]
    InvalidFeedback(String),

    #[error("failed to read seed file {path}: {source}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {reason}")]
    SeedParse { path: PathBuf, reason: String },
}

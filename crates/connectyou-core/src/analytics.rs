//! Analytics aggregates and the placeholder dashboard series.
//!
//! [`StoreAnalytics`] mirrors the `/analytics` response and can also be
//! computed locally from any store set. The dashboards are mocked: their
//! numbers are fixed and only the timeframe label changes.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::stores::{Store, StoreCategory};

const TOP_RATED_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopRatedStore {
    pub name: String,
    pub rating: f64,
    #[serde(rename = "type")]
    pub category: StoreCategory,
}

/// Aggregate counters over a store set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreAnalytics {
    pub total_stores: u64,
    #[serde(default)]
    pub stores_by_type: BTreeMap<String, u64>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub top_rated: Vec<TopRatedStore>,
}

impl StoreAnalytics {
    /// Computes the same aggregates the backend serves.
    ///
    /// `top_rated` holds at most five stores by descending rating; ties keep
    /// their input order. An empty set has an average rating of `0.0`.
    #[must_use]
    pub fn from_stores(stores: &[Store]) -> Self {
        let mut stores_by_type = BTreeMap::new();
        for store in stores {
            *stores_by_type
                .entry(store.category.as_str().to_owned())
                .or_insert(0) += 1;
        }

        let total_reviews = stores.iter().map(|s| u64::from(s.reviews)).sum();

        #[allow(clippy::cast_precision_loss)]
        let average_rating = if stores.is_empty() {
            0.0
        } else {
            stores.iter().map(|s| s.rating).sum::<f64>() / stores.len() as f64
        };

        let mut ranked: Vec<&Store> = stores.iter().collect();
        ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        let top_rated = ranked
            .into_iter()
            .take(TOP_RATED_LIMIT)
            .map(|s| TopRatedStore {
                name: s.name.clone(),
                rating: s.rating,
                category: s.category.clone(),
            })
            .collect();

        Self {
            total_stores: stores.len() as u64,
            stores_by_type,
            average_rating,
            total_reviews,
            top_rated,
        }
    }

    /// Number of distinct categories present.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.stores_by_type.len()
    }
}

/// Reporting window selector shown on the dashboards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Timeframe {
    Week,
    #[default]
    Month,
    Year,
}

impl Timeframe {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Week => "Last Week",
            Timeframe::Month => "Last Month",
            Timeframe::Year => "Last Year",
        }
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(Timeframe::Week),
            "month" => Ok(Timeframe::Month),
            "year" => Ok(Timeframe::Year),
            other => Err(format!("unknown timeframe '{other}' (expected week, month or year)")),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One labelled chart series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub title: &'static str,
    pub labels: Vec<&'static str>,
    pub values: Vec<u64>,
}

impl Series {
    fn new(title: &'static str, labels: &[&'static str], values: &[u64]) -> Self {
        debug_assert_eq!(labels.len(), values.len());
        Self {
            title,
            labels: labels.to_vec(),
            values: values.to_vec(),
        }
    }

    #[must_use]
    pub fn max(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMetric {
    pub label: &'static str,
    pub value: &'static str,
    /// Change against the previous period, e.g. `"+12%"`.
    pub change: Option<&'static str>,
}

impl KeyMetric {
    fn new(label: &'static str, value: &'static str, change: Option<&'static str>) -> Self {
        Self {
            label,
            value,
            change,
        }
    }
}

/// A dashboard fed by hard-coded placeholder numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockDashboard {
    pub title: &'static str,
    pub timeframe: Timeframe,
    pub headline: Vec<KeyMetric>,
    pub charts: Vec<Series>,
    pub key_metrics: Vec<KeyMetric>,
}

/// Platform-wide dashboard: users, stores and orders.
#[must_use]
pub fn platform_dashboard(timeframe: Timeframe) -> MockDashboard {
    MockDashboard {
        title: "Platform Analytics",
        timeframe,
        headline: vec![
            KeyMetric::new("Total Users", "615", Some("+12%")),
            KeyMetric::new("Active Stores", "95", Some("+8%")),
            KeyMetric::new("Total Orders", "2,847", Some("+15%")),
        ],
        charts: vec![
            Series::new(
                "Shop Owners",
                &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
                &[20, 35, 45, 60, 85, 95],
            ),
            Series::new(
                "Customers",
                &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
                &[100, 180, 250, 380, 450, 520],
            ),
            Series::new(
                "Store Types Distribution",
                &["Grocery", "Books", "Electronics", "Fashion", "Others"],
                &[35, 25, 20, 15, 5],
            ),
            Series::new(
                "Stores by Region",
                &["North", "South", "East", "West", "Central"],
                &[120, 98, 140, 108, 87],
            ),
        ],
        key_metrics: vec![
            KeyMetric::new("Average Orders/Store", "30", None),
            KeyMetric::new("Customer Retention Rate", "78%", None),
            KeyMetric::new("Store Activation Rate", "92%", None),
            KeyMetric::new("Platform Growth Rate", "15%", None),
        ],
    }
}

/// Single-shop owner dashboard: sales, products and regions.
#[must_use]
pub fn shop_dashboard(timeframe: Timeframe) -> MockDashboard {
    MockDashboard {
        title: "Shop Dashboard",
        timeframe,
        headline: vec![
            KeyMetric::new("Weekly Sales", "151", Some("+9%")),
            KeyMetric::new("Top Product Units", "300", None),
        ],
        charts: vec![
            Series::new(
                "Daily Sales",
                &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
                &[12, 19, 15, 25, 22, 30, 28],
            ),
            Series::new(
                "Top Products",
                &["Product A", "Product B", "Product C", "Product D", "Product E"],
                &[300, 250, 200, 150, 100],
            ),
            Series::new(
                "Sales by Region",
                &["North", "South", "East", "West", "Central"],
                &[65, 59, 80, 81, 56],
            ),
        ],
        key_metrics: Vec::new(),
    }
}

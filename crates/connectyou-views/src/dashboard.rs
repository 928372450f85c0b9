//! Analytics summary and the mock dashboards, rendered as text.

use std::fmt::Write as _;

use connectyou_core::{KeyMetric, MockDashboard, Series, StoreAnalytics};

const BAR_WIDTH: u64 = 30;

/// Summary cards, a per-category bar chart and the top-rated table.
#[must_use]
pub fn render_store_analytics(analytics: &StoreAnalytics) -> String {
    let mut out = String::from("\u{1f4ca} Store Analytics\n\n");

    let _ = writeln!(out, "  Total Stores    {}", analytics.total_stores);
    let _ = writeln!(out, "  Average Rating  {:.1}\u{2b50}", analytics.average_rating);
    let _ = writeln!(out, "  Total Reviews   {}", analytics.total_reviews);
    let _ = writeln!(out, "  Store Types     {}", analytics.category_count());

    out.push_str("\nStores by Type\n");
    let max = analytics.stores_by_type.values().copied().max().unwrap_or(0);
    let width = label_width(analytics.stores_by_type.keys().map(String::as_str));
    for (category, count) in &analytics.stores_by_type {
        push_bar(&mut out, category, *count, max, width);
    }

    out.push_str("\nTop Rated Stores\n");
    if analytics.top_rated.is_empty() {
        out.push_str("  (none)\n");
    }
    for (rank, store) in analytics.top_rated.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} ({}) {:.1}",
            rank + 1,
            store.name,
            store.category.label(),
            store.rating
        );
    }
    out
}

/// Headline cards, every chart series and the key-metric list.
#[must_use]
pub fn render_dashboard(dashboard: &MockDashboard) -> String {
    let mut out = format!("{} \u{2014} {}\n\n", dashboard.title, dashboard.timeframe);

    for metric in &dashboard.headline {
        push_metric(&mut out, metric);
    }

    for series in &dashboard.charts {
        render_series(&mut out, series);
    }

    if !dashboard.key_metrics.is_empty() {
        out.push_str("\nKey Metrics\n");
        for metric in &dashboard.key_metrics {
            push_metric(&mut out, metric);
        }
    }
    out
}

fn render_series(out: &mut String, series: &Series) {
    let _ = writeln!(out, "\n{}", series.title);
    let max = series.max();
    let width = label_width(series.labels.iter().copied());
    for (label, value) in series.labels.iter().zip(&series.values) {
        push_bar(out, label, *value, max, width);
    }
}

fn push_metric(out: &mut String, metric: &KeyMetric) {
    match metric.change {
        Some(change) => {
            let _ = writeln!(out, "  {}: {} ({change})", metric.label, metric.value);
        }
        None => {
            let _ = writeln!(out, "  {}: {}", metric.label, metric.value);
        }
    }
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0)
}

/// Bar scaled so the largest value fills [`BAR_WIDTH`] cells.
fn push_bar(out: &mut String, label: &str, value: u64, max: u64, width: usize) {
    let cells = if max == 0 { 0 } else { value * BAR_WIDTH / max };
    #[allow(clippy::cast_possible_truncation)]
    let bar = "\u{2588}".repeat(cells as usize);
    let _ = writeln!(out, "  {label:<width$} {bar} {value}");
}

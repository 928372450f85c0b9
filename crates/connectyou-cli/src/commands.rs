//! One-shot command handlers.
//!
//! Data commands read the local seed set unless `--remote` is given, in
//! which case they go through [`StoreApiClient`]. Feedback always goes to
//! the API.

use std::sync::Arc;

use anyhow::Context as _;
use connectyou_client::{LocalSource, StoreApiClient, StoreSource};
use connectyou_core::{
    load_seed_file, platform_dashboard, sample_products, shop_dashboard, AppConfig, CategoryFilter,
    ProductFilter, StoreAnalytics, StoreRepository, Timeframe,
};
use connectyou_views::{
    render_dashboard, render_home, render_products, render_store_analytics, FeedbackForm,
    FeedbackState, GeoJsonProvider, ListState, MapProvider, MapView, StaticMapProvider, StoresPage,
};

use crate::DashboardKind;

pub(crate) const BIN_NAME: &str = "connectyou";

/// The seed file from config when set, otherwise the built-in samples.
pub(crate) fn load_repository(config: &AppConfig) -> anyhow::Result<StoreRepository> {
    match &config.stores_path {
        Some(path) => {
            let stores = load_seed_file(path)?;
            Ok(StoreRepository::from_seed(stores)?)
        }
        None => Ok(StoreRepository::sample()),
    }
}

pub(crate) fn remote_client(config: &AppConfig) -> anyhow::Result<Arc<StoreApiClient>> {
    let client = StoreApiClient::new(config).context("failed to build store API client")?;
    tracing::debug!(base_url = %client.base_url(), "using remote store API");
    Ok(Arc::new(client))
}

pub(crate) fn static_map(config: &AppConfig) -> MapView<StaticMapProvider> {
    let token = config.map_access_token.clone();
    MapView::new(move || StaticMapProvider::connect(token.as_deref()))
}

fn geojson_map(config: &AppConfig) -> MapView<GeoJsonProvider> {
    let token = config.map_access_token.clone();
    MapView::new(move || GeoJsonProvider::connect(token.as_deref()))
}

/// Builds a page for `query`/`category` and runs one load.
async fn loaded_page<S, P>(
    repository: StoreRepository,
    source: S,
    map: MapView<P>,
    query: String,
    category: CategoryFilter,
) -> StoresPage<S, P>
where
    S: StoreSource,
    P: MapProvider,
{
    let mut page = StoresPage::new(repository, source, map);
    page.set_search_text(query);
    page.set_category(category);
    page.refresh().await;
    page
}

fn ensure_loaded<S, P>(page: &StoresPage<S, P>) -> anyhow::Result<()>
where
    S: StoreSource,
    P: MapProvider,
{
    if let ListState::Failed { message } = page.list().state() {
        anyhow::bail!("could not load stores: {message}");
    }
    Ok(())
}

pub(crate) fn run_home() {
    print!("{}", render_home(BIN_NAME));
}

pub(crate) async fn run_stores(
    config: &AppConfig,
    remote: bool,
    query: String,
    category: CategoryFilter,
) -> anyhow::Result<()> {
    let repository = load_repository(config)?;
    let map = static_map(config);
    let rendered = if remote {
        let page = loaded_page(repository, remote_client(config)?, map, query, category).await;
        ensure_loaded(&page)?;
        page.list().render()
    } else {
        let source = LocalSource::new(repository.clone());
        let page = loaded_page(repository, source, map, query, category).await;
        page.list().render()
    };
    print!("{rendered}");
    Ok(())
}

pub(crate) async fn run_map(
    config: &AppConfig,
    remote: bool,
    query: String,
    category: CategoryFilter,
    geojson: bool,
) -> anyhow::Result<()> {
    let repository = load_repository(config)?;

    if geojson {
        let map = geojson_map(config);
        let document = if remote {
            let page = loaded_page(repository, remote_client(config)?, map, query, category).await;
            ensure_loaded(&page)?;
            page.map().provider().map(GeoJsonProvider::to_geojson)
        } else {
            let source = LocalSource::new(repository.clone());
            let page = loaded_page(repository, source, map, query, category).await;
            page.map().provider().map(GeoJsonProvider::to_geojson)
        };
        let Some(document) = document else {
            anyhow::bail!("map unavailable: set CONNECTYOU_MAP_TOKEN to export GeoJSON");
        };
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    let map = static_map(config);
    let (rendered, url) = if remote {
        let page = loaded_page(repository, remote_client(config)?, map, query, category).await;
        ensure_loaded(&page)?;
        (
            page.map().render(),
            page.map().provider().map(StaticMapProvider::image_url),
        )
    } else {
        let source = LocalSource::new(repository.clone());
        let page = loaded_page(repository, source, map, query, category).await;
        (
            page.map().render(),
            page.map().provider().map(StaticMapProvider::image_url),
        )
    };
    print!("{rendered}");
    if let Some(url) = url {
        println!("\n{url}");
    }
    Ok(())
}

pub(crate) async fn run_categories(config: &AppConfig, remote: bool) -> anyhow::Result<()> {
    let categories = if remote {
        remote_client(config)?.list_categories().await?.categories
    } else {
        let repository = load_repository(config)?;
        StoreAnalytics::from_stores(repository.stores())
            .stores_by_type
            .into_keys()
            .collect()
    };
    for category in categories {
        println!("{category}");
    }
    Ok(())
}

pub(crate) fn run_products(category: &ProductFilter) {
    print!("{}", render_products(&sample_products(), category));
}

pub(crate) async fn run_analytics(config: &AppConfig, remote: bool) -> anyhow::Result<()> {
    let analytics = if remote {
        remote_client(config)?.fetch_analytics().await?
    } else {
        StoreAnalytics::from_stores(load_repository(config)?.stores())
    };
    print!("{}", render_store_analytics(&analytics));
    Ok(())
}

pub(crate) fn run_dashboard(kind: DashboardKind, timeframe: Timeframe) {
    let dashboard = match kind {
        DashboardKind::Platform => platform_dashboard(timeframe),
        DashboardKind::Shop => shop_dashboard(timeframe),
    };
    print!("{}", render_dashboard(&dashboard));
}

pub(crate) async fn run_feedback(
    config: &AppConfig,
    rating: u8,
    comment: String,
    store: Option<i64>,
) -> anyhow::Result<()> {
    let client = remote_client(config)?;
    let mut form = FeedbackForm::new();
    form.set_rating(rating);
    form.set_comment(comment);
    form.set_store(store);

    let state = form.submit(&client).await.clone();
    print!("{}", form.render());
    match state {
        FeedbackState::Submitted { .. } => Ok(()),
        FeedbackState::Editing {
            problem: Some(problem),
        } => anyhow::bail!("invalid feedback: {problem}"),
        FeedbackState::Failed { message } => anyhow::bail!("feedback not sent: {message}"),
        FeedbackState::Editing { problem: None } | FeedbackState::Submitting => {
            anyhow::bail!("feedback was not submitted")
        }
    }
}

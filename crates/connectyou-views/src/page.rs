//! The stores page: query state plus the list and map views it feeds.
//!
//! Loads are ticketed. Every [`StoresPage::begin_load`] hands out a ticket
//! with a higher sequence number, and [`StoresPage::finish_load`] only
//! applies a result whose ticket is still the latest. A slow response to an
//! earlier query therefore can never overwrite a newer one.

use chrono::Utc;
use connectyou_client::{GatewayError, StoreSource};
use connectyou_core::{
    filter_stores, CategoryFilter, QueryState, Store, StoreCategory, StoreRepository,
};

use crate::list::ListView;
use crate::map::{MapProvider, MapView};

/// Claim on the page for one outstanding load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    query: QueryState,
}

impl LoadTicket {
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Query snapshot taken when the load began.
    #[must_use]
    pub fn query(&self) -> &QueryState {
        &self.query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load was started; the result was dropped.
    Stale,
}

pub struct StoresPage<S, P> {
    query: QueryState,
    repository: StoreRepository,
    source: S,
    list: ListView,
    map: MapView<P>,
    latest_seq: u64,
    displayed: Vec<Store>,
}

impl<S, P> StoresPage<S, P>
where
    S: StoreSource,
    P: MapProvider,
{
    #[must_use]
    pub fn new(repository: StoreRepository, source: S, map: MapView<P>) -> Self {
        Self {
            query: QueryState::default(),
            repository,
            source,
            list: ListView::new(),
            map,
            latest_seq: 0,
            displayed: Vec::new(),
        }
    }

    #[must_use]
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Updates the search text; the caller starts the next load.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }

    /// Starts a load for the current query. Any earlier ticket becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_seq += 1;
        self.list.loading();
        tracing::debug!(
            seq = self.latest_seq,
            query = %self.query.search_text,
            category = %self.query.category,
            "store load started"
        );
        LoadTicket {
            seq: self.latest_seq,
            query: self.query.clone(),
        }
    }

    /// Applies the result of `ticket`'s load if it is still the latest.
    ///
    /// On success the set is re-filtered against the current query and
    /// handed to both views, so list and map always show the same stores.
    /// On failure the list shows the error and the map keeps its markers.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Store>, GatewayError>,
    ) -> LoadOutcome {
        if ticket.seq != self.latest_seq {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                "discarding superseded store load"
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(stores) => {
                self.displayed = filter_stores(&stores, &self.query);
                if self.source.is_remote() {
                    self.repository.replace(stores, Utc::now());
                }
                self.list.show(&self.displayed);
                self.map.sync(&self.displayed);
                tracing::info!(shown = self.displayed.len(), "stores updated");
            }
            Err(e) => {
                tracing::warn!(error = %e, status = ?e.status(), "store load failed");
                self.list.fail(e.to_string());
            }
        }
        LoadOutcome::Applied
    }

    /// One full load cycle against the page's own source.
    pub async fn refresh(&mut self) -> LoadOutcome {
        let ticket = self.begin_load();
        let result = self.source.fetch_stores(ticket.query()).await;
        self.finish_load(ticket, result)
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn repository(&self) -> &StoreRepository {
        &self.repository
    }

    #[must_use]
    pub fn list(&self) -> &ListView {
        &self.list
    }

    #[must_use]
    pub fn map(&self) -> &MapView<P> {
        &self.map
    }

    /// Reloads the map provider and restores the current markers.
    pub fn reload_map(&mut self) -> bool {
        let ready = self.map.reload();
        if ready {
            self.map.sync(&self.displayed);
        }
        ready
    }

    /// The set both views currently show.
    #[must_use]
    pub fn displayed(&self) -> &[Store] {
        &self.displayed
    }
}

/// Choices for the category selector: "all", then every known category.
#[must_use]
pub fn category_options() -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(StoreCategory::KNOWN.iter().cloned().map(CategoryFilter::Only))
        .collect()
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;

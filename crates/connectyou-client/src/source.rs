//! Seam between the stores page and wherever fresh store sets come from.

use std::future::Future;
use std::sync::Arc;

use connectyou_core::{QueryState, Store, StoreRepository};

use crate::client::StoreApiClient;
use crate::error::GatewayError;

/// Something that can produce the store set for a query.
///
/// Implemented by [`StoreApiClient`] and [`LocalSource`]; tests substitute
/// scripted sources.
pub trait StoreSource {
    fn fetch_stores(
        &self,
        query: &QueryState,
    ) -> impl Future<Output = Result<Vec<Store>, GatewayError>> + Send;

    /// Whether results come from the backend rather than local data.
    fn is_remote(&self) -> bool {
        true
    }
}

impl StoreSource for StoreApiClient {
    async fn fetch_stores(&self, query: &QueryState) -> Result<Vec<Store>, GatewayError> {
        let response = self
            .list_stores(&query.category, &query.search_text)
            .await?;
        Ok(response.stores)
    }
}

/// Filters a fixed working set in memory. Never fails.
#[derive(Debug, Clone, Default)]
pub struct LocalSource {
    repository: StoreRepository,
}

impl LocalSource {
    #[must_use]
    pub fn new(repository: StoreRepository) -> Self {
        Self { repository }
    }

    #[must_use]
    pub fn repository(&self) -> &StoreRepository {
        &self.repository
    }
}

impl StoreSource for LocalSource {
    async fn fetch_stores(&self, query: &QueryState) -> Result<Vec<Store>, GatewayError> {
        Ok(self.repository.filtered(query))
    }

    fn is_remote(&self) -> bool {
        false
    }
}

impl<T> StoreSource for Arc<T>
where
    T: StoreSource + Send + Sync,
{
    fn fetch_stores(
        &self,
        query: &QueryState,
    ) -> impl Future<Output = Result<Vec<Store>, GatewayError>> + Send {
        (**self).fetch_stores(query)
    }

    fn is_remote(&self) -> bool {
        (**self).is_remote()
    }
}

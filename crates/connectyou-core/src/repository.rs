//! Client-side working set of store records.

use chrono::{DateTime, Utc};

use crate::filter::{filter_stores, QueryState};
use crate::seed::{ensure_unique_ids, sample_stores};
use crate::stores::Store;
use crate::CoreError;

/// Where the current working set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    /// Built-in sample data or a local seed file.
    Seed,
    /// The body of the last successful `/stores` fetch.
    Remote { fetched_at: DateTime<Utc> },
}

/// Holds either the static sample list or the result of the last fetch.
///
/// The set is never patched: [`StoreRepository::replace`] swaps it whole.
#[derive(Debug, Clone)]
pub struct StoreRepository {
    stores: Vec<Store>,
    provenance: Provenance,
}

impl StoreRepository {
    /// Repository over the built-in sample stores.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            stores: sample_stores(),
            provenance: Provenance::Seed,
        }
    }

    /// Repository over caller-supplied seed data.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateStoreId`] if two records share an id.
    pub fn from_seed(stores: Vec<Store>) -> Result<Self, CoreError> {
        ensure_unique_ids(&stores)?;
        Ok(Self {
            stores,
            provenance: Provenance::Seed,
        })
    }

    /// Replaces the working set with a fresh remote result.
    ///
    /// The server owns id uniqueness for remote data; duplicates are logged
    /// rather than rejected so a bad row never blanks the page.
    pub fn replace(&mut self, stores: Vec<Store>, fetched_at: DateTime<Utc>) {
        if let Err(e) = ensure_unique_ids(&stores) {
            tracing::warn!(error = %e, "remote store set contains duplicate ids");
        }
        self.stores = stores;
        self.provenance = Provenance::Remote { fetched_at };
    }

    #[must_use]
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    #[must_use]
    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Store> {
        self.stores.iter().find(|s| s.id == id)
    }

    /// Filtered view of the working set.
    #[must_use]
    pub fn filtered(&self, query: &QueryState) -> Vec<Store> {
        filter_stores(&self.stores, query)
    }
}

impl Default for StoreRepository {
    fn default() -> Self {
        Self::sample()
    }
}

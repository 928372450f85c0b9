//! Map view: keeps one marker per store in the filtered set.
//!
//! The mapping backend sits behind [`MapProvider`] so it can be swapped
//! without touching the sync logic here.

use std::fmt::Write as _;

use connectyou_core::{Coordinate, Store};
use thiserror::Error;

/// Content bound to a marker's popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub store_id: i64,
    pub title: String,
    pub address: String,
    pub rating: f64,
    /// Whole stars for the rating, e.g. four for `4.8`.
    pub stars: String,
    pub reviews: u32,
    pub category: String,
}

impl From<&Store> for Popup {
    fn from(store: &Store) -> Self {
        Self {
            store_id: store.id,
            title: store.name.clone(),
            address: store.address.clone(),
            rating: store.rating,
            stars: store.star_string(),
            reviews: store.reviews,
            category: store.category.label(),
        }
    }
}

impl Popup {
    /// One-line summary: name, category, address and rating.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
"{} [{}] {} \u{2014} {} {:.1} ({} reviews)",
            self.title, self.category, self.address, self.stars, self.rating, self.reviews
        )
    }
}

/// Smallest latitude/longitude box containing a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Returns `None` for an empty iterator.
    pub fn covering<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let seed = Self {
            south: first.latitude,
            west: first.longitude,
            north: first.latitude,
            east: first.longitude,
        };
        Some(points.fold(seed, |acc, p| Self {
            south: acc.south.min(p.latitude),
            west: acc.west.min(p.longitude),
            north: acc.north.max(p.latitude),
            east: acc.east.max(p.longitude),
        }))
    }

    /// True when all points coincide.
    #[must_use]
    pub fn is_point(&self) -> bool {
        (self.north - self.south).abs() < f64::EPSILON
            && (self.east - self.west).abs() < f64::EPSILON
    }

    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

/// Capability interface over a concrete mapping backend.
pub trait MapProvider {
    fn create_marker(&mut self, at: Coordinate, popup: &Popup);
    fn clear_all(&mut self);
    /// Animates the viewport so `bounds` is fully visible.
    fn fit_bounds(&mut self, bounds: BoundingBox);
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapInitError {
    #[error("map access token is not configured (set CONNECTYOU_MAP_TOKEN)")]
    MissingCredential,

    #[error("map provider failed to load: {0}")]
    Provider(String),
}

#[derive(Debug)]
pub enum MapState<P> {
    Ready { provider: P, markers: Vec<Popup> },
    /// Terminal until [`MapView::reload`] succeeds.
    Failed { reason: MapInitError },
}

type ProviderInit<P> = Box<dyn FnMut() -> Result<P, MapInitError> + Send>;

/// Map component state.
pub struct MapView<P> {
    init: ProviderInit<P>,
    state: MapState<P>,
}

impl<P> std::fmt::Debug for MapView<P>
where
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapView").field("state", &self.state).finish_non_exhaustive()
    }
}

impl<P: MapProvider> MapView<P> {
    /// Initializes the provider once; failure leaves the view in
    /// [`MapState::Failed`] with no partial map.
    pub fn new<F>(init: F) -> Self
    where
        F: FnMut() -> Result<P, MapInitError> + Send + 'static,
    {
        let mut init: ProviderInit<P> = Box::new(init);
        let state = Self::initialize(&mut init);
        Self { init, state }
    }

    fn initialize(init: &mut ProviderInit<P>) -> MapState<P> {
        match init() {
            Ok(provider) => MapState::Ready {
                provider,
                markers: Vec::new(),
            },
            Err(reason) => {
                tracing::warn!(error = %reason, "map provider failed to initialize");
                MapState::Failed { reason }
            }
        }
    }

    /// Full reload: discards the current provider and initializes afresh.
    ///
    /// Markers are not restored; the caller re-syncs the current set.
    pub fn reload(&mut self) -> bool {
        self.state = Self::initialize(&mut self.init);
        self.is_ready()
    }

    /// Replaces every marker with one per store, then fits the viewport.
    ///
    /// An empty set clears the map and leaves the viewport where it was.
    /// Does nothing while the view is failed.
    pub fn sync(&mut self, stores: &[Store]) {
        let MapState::Ready { provider, markers } = &mut self.state else {
            tracing::debug!("map unavailable; skipping marker sync");
            return;
        };

        provider.clear_all();
        markers.clear();

        for store in stores {
            let popup = Popup::from(store);
            provider.create_marker(store.location, &popup);
            markers.push(popup);
        }

        if let Some(bounds) = BoundingBox::covering(stores.iter().map(|s| s.location)) {
            provider.fit_bounds(bounds);
        }
        tracing::debug!(markers = markers.len(), "map markers synced");
    }

    #[must_use]
    pub fn state(&self) -> &MapState<P> {
        &self.state
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, MapState::Ready { .. })
    }

    #[must_use]
    pub fn provider(&self) -> Option<&P> {
        match &self.state {
            MapState::Ready { provider, .. } => Some(provider),
            MapState::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn markers(&self) -> &[Popup] {
        match &self.state {
            MapState::Ready { markers, .. } => markers,
            MapState::Failed { .. } => &[],
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        match &self.state {
            MapState::Failed { reason } => {
                format!("Map unavailable: {reason}\nReload to try again.\n")
            }
            MapState::Ready { markers, .. } => {
                let mut out = format!("{} stores on map\n", markers.len());
                for popup in markers {
                    let _ = writeln!(out, "  \u{1f4cd} {}", popup.summary());
                }
                out
            }
        }
    }
}

#[cfg(test)]
#[path = "map_test.rs"]
mod tests;

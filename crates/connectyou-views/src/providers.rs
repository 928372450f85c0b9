//! Concrete [`MapProvider`] backends.
//!
//! Both require a map access token before they will connect, matching the
//! hosted tile service they target.

use std::fmt::Write as _;

use connectyou_core::Coordinate;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::{json, Value};

use crate::map::{BoundingBox, MapInitError, MapProvider, Popup};

const STATIC_BASE: &str = "https://api.mapbox.com/styles/v1/mapbox/streets-v12/static";
const IMAGE_SIZE: &str = "800x600";
const PIN_STYLE: &str = "pin-s+3b82f6";
/// Initial viewport: lower Manhattan.
const DEFAULT_CENTER: Coordinate = Coordinate {
    latitude: 40.7128,
    longitude: -74.006,
};
const DEFAULT_ZOOM: u8 = 13;

fn require_token(token: Option<&str>) -> Result<String, MapInitError> {
    match token.map(str::trim) {
        Some(t) if !t.is_empty() => Ok(t.to_owned()),
        _ => Err(MapInitError::MissingCredential),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Viewport {
    Center { at: Coordinate, zoom: u8 },
    Bounds(BoundingBox),
}

/// Renders the map as a static image URL from the hosted styles API.
#[derive(Debug, Clone)]
pub struct StaticMapProvider {
    token: String,
    pins: Vec<(Coordinate, Popup)>,
    viewport: Viewport,
}

impl StaticMapProvider {
    /// # Errors
    ///
    /// Returns [`MapInitError::MissingCredential`] when no token is set.
    pub fn connect(token: Option<&str>) -> Result<Self, MapInitError> {
        let token = require_token(token)?;
        Ok(Self {
            token,
            pins: Vec::new(),
            viewport: Viewport::Center {
                at: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM,
            },
        })
    }

    #[must_use]
    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    /// URL of the rendered image for the current pins and viewport.
    #[must_use]
    pub fn image_url(&self) -> String {
        let mut url = String::from(STATIC_BASE);
        url.push('/');

        if !self.pins.is_empty() {
            let overlay = self
                .pins
                .iter()
                .map(|(at, _)| format!("{PIN_STYLE}({},{})", at.longitude, at.latitude))
                .collect::<Vec<_>>()
                .join(",");
            url.push_str(&overlay);
            url.push('/');
        }

        match &self.viewport {
            Viewport::Bounds(b) if !b.is_point() => {
                let _ = write!(url, "[{},{},{},{}]", b.west, b.south, b.east, b.north);
            }
            Viewport::Bounds(b) => {
                let c = b.center();
                let _ = write!(url, "{},{},{DEFAULT_ZOOM}", c.longitude, c.latitude);
            }
            Viewport::Center { at, zoom } => {
                let _ = write!(url, "{},{},{zoom}", at.longitude, at.latitude);
            }
        }

        let _ = write!(
            url,
            "/{IMAGE_SIZE}?access_token={}",
            utf8_percent_encode(&self.token, NON_ALPHANUMERIC)
        );
        url
    }
}

impl MapProvider for StaticMapProvider {
    fn create_marker(&mut self, at: Coordinate, popup: &Popup) {
        self.pins.push((at, popup.clone()));
    }

    fn clear_all(&mut self) {
        self.pins.clear();
    }

    fn fit_bounds(&mut self, bounds: BoundingBox) {
        self.viewport = Viewport::Bounds(bounds);
    }
}

/// Collects markers into a GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonProvider {
    features: Vec<Value>,
    bbox: Option<BoundingBox>,
}

impl GeoJsonProvider {
    /// # Errors
    ///
    /// Returns [`MapInitError::MissingCredential`] when no token is set.
    pub fn connect(token: Option<&str>) -> Result<Self, MapInitError> {
        require_token(token)?;
        Ok(Self::default())
    }

    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn to_geojson(&self) -> Value {
        let mut collection = json!({
            "type": "FeatureCollection",
            "features": self.features,
        });
        if let Some(b) = self.bbox {
            collection["bbox"] = json!([b.west, b.south, b.east, b.north]);
        }
        collection
    }
}

impl MapProvider for GeoJsonProvider {
    fn create_marker(&mut self, at: Coordinate, popup: &Popup) {
        self.features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [at.longitude, at.latitude],
            },
            "properties": {
                "id": popup.store_id,
                "name": popup.title,
                "address": popup.address,
                "category": popup.category,
                "rating": popup.rating,
                "reviews": popup.reviews,
            },
        }));
    }

    fn clear_all(&mut self) {
        self.features.clear();
    }

    fn fit_bounds(&mut self, bounds: BoundingBox) {
        self.bbox = Some(bounds);
    }
}

//! Page and view state for the Connect You terminal front end.
//!
//! Each view is a small state machine plus a text renderer. The stores page
//! owns the query state and hands the filtered set to the list and map views;
//! neither view reads shared mutable state of its own.

pub mod dashboard;
pub mod feedback;
pub mod home;
pub mod list;
pub mod map;
pub mod page;
pub mod products;
pub mod providers;
pub mod search;

pub use dashboard::{render_dashboard, render_store_analytics};
pub use feedback::{FeedbackForm, FeedbackState};
pub use home::render_home;
pub use list::{ListState, ListView, StoreCard};
pub use map::{BoundingBox, MapInitError, MapProvider, MapState, MapView, Popup};
pub use page::{category_options, LoadOutcome, LoadTicket, StoresPage};
pub use products::render_products;
pub use providers::{GeoJsonProvider, StaticMapProvider};
pub use search::{DebounceTimer, SearchController};

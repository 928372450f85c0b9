//! HTTP gateway to the Connect You store API.
//!
//! Every call is a single request/response exchange with no retry and no
//! caching. All failure modes collapse into [`GatewayError`], whose display
//! string is the message shown to the user.

pub mod client;
pub mod error;
pub mod source;
pub mod types;

pub use client::StoreApiClient;
pub use error::GatewayError;
pub use source::{LocalSource, StoreSource};
pub use types::{CategoriesResponse, StoreListResponse};

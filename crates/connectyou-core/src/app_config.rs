use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Clone)]
pub struct AppConfig {
    /// Base URL of the store API, without a trailing slash requirement.
    pub api_base_url: String,
    /// Access token for the hosted map tiles. Absence is reported by the
    /// map view, not here.
    pub map_access_token: Option<String>,
    pub log_level: String,
    pub search_debounce_ms: u64,
    /// `None` leaves requests without a timeout.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    /// Optional local seed file replacing the built-in sample stores.
    pub stores_path: Option<PathBuf>,
}

impl AppConfig {
    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base_url", &self.api_base_url)
            .field(
                "map_access_token",
                &self.map_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .field("search_debounce_ms", &self.search_debounce_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("stores_path", &self.stores_path)
            .finish()
    }
}

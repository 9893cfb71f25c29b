//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

pub use crate::app::DEFAULT_APP_TITLE;

/// Tracing filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Title of the map application shown in the browser tab
    pub app_title: Option<String>,

    /// Filter directives for tracing-subscriber
    /// Example: info,ewatercycle_launcher_auth=debug
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            app_title: non_empty(std::env::var("APP_TITLE").ok()),
            log_filter: non_empty(std::env::var("RUST_LOG").ok()),
        }
    }

    pub fn app_title(&self) -> &str {
        self.app_title.as_deref().unwrap_or(DEFAULT_APP_TITLE)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

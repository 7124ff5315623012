use std::path::PathBuf;

/// Runtime settings for a circular scrape, read from `CIRCULAR_*` env vars.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Retailer name stamped on every emitted record.
    pub retailer: String,
    /// Circular page URL with a `{store_id}` placeholder.
    pub url_template: String,
    /// Store used when the CLI is not given one.
    pub store_id: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
    /// Where the fetched markup is dumped for offline inspection. `None`
    /// disables the dump.
    pub debug_html_path: Option<PathBuf>,
    /// Optional YAML file replacing the built-in selector table.
    pub selectors_path: Option<PathBuf>,
}

/// Placeholder substituted with the store identifier in `url_template`.
pub const STORE_ID_PLACEHOLDER: &str = "{store_id}";

use std::sync::Arc;

use crate::config::Config;
use crate::scrape::PageFetcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Kept for handlers that need runtime settings; currently only the
    /// fetcher consumes config values (at construction time).
    #[allow(dead_code)]
    pub config: Config,
    /// Pluggable page fetcher. Default: HttpPageFetcher (reqwest + scraper).
    /// Tests swap in a stub so the pipeline runs without network access.
    pub fetcher: Arc<dyn PageFetcher>,
}

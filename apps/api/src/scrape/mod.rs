//! Page fetching and text extraction — the external collaborator of the
//! keyword pipeline. Downloads a job posting with a browser-like user agent
//! (some job boards block non-browser clients), strips script/style content,
//! and returns the visible text of the most plausible content area.

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use url::Url;

use crate::errors::AppError;

/// Some job sites reject requests without a realistic browser UA.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Content-area selectors tried in priority order before falling back to the
/// whole page body.
const CONTENT_SELECTORS: &[&str] = &[
    r#"[class*="job-description"]"#,
    r#"[class*="jobDescription"]"#,
    r#"[class*="job_description"]"#,
    r#"[id*="job-description"]"#,
    r#"[id*="jobDescription"]"#,
    r#"[class*="description"]"#,
    r#"[class*="content"]"#,
    "main",
    "article",
    ".posting-requirements",
    ".job-details",
];

/// A selected content area must carry at least this much raw (un-normalized)
/// text to be trusted over the whole-body fallback.
const MIN_SELECTOR_CONTENT_LEN: usize = 200;

/// Below this many characters of cleaned text the page is considered to have
/// no usable job description.
const MIN_EXTRACTABLE_LEN: usize = 100;

/// The page-fetch collaborator. Carried in `AppState` as `Arc<dyn PageFetcher>`
/// so tests can run the pipeline against canned text without network access.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the page at `url` and returns its extracted visible text,
    /// whitespace-normalized.
    async fn fetch_page_text(&self, url: &Url) -> Result<String, AppError>;
}

/// Production fetcher: reqwest client with an explicit timeout, HTML parsed
/// via `scraper`.
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page_text(&self, url: &Url) -> Result<String, AppError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AppError::FetchFailure(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::FetchFailure(format!(
                "HTTP status {status} from {url}"
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| AppError::FetchFailure(format!("reading body from {url} failed: {e}")))?;

        extract_job_text(&html)
    }
}

/// Extracts the job-description text from raw HTML: tries the content-area
/// selectors in priority order, falls back to whole-body text, and rejects
/// pages with too little extractable content.
pub fn extract_job_text(html: &str) -> Result<String, AppError> {
    let document = Html::parse_document(html);

    let mut content = String::new();

    for selector_str in CONTENT_SELECTORS {
        // All entries in CONTENT_SELECTORS are valid CSS; a parse failure
        // would be a bug in the list, not in the page.
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        // A description split across several matching blocks counts as one
        // content area, so concatenate every match before the length check.
        let text: String = document.select(&selector).map(visible_text).collect();
        if text.len() > MIN_SELECTOR_CONTENT_LEN {
            content = text;
            break;
        }
    }

    // Fallback: whole-body text when no selector produced enough content.
    if content.len() <= MIN_SELECTOR_CONTENT_LEN {
        if let Ok(body_selector) = Selector::parse("body") {
            if let Some(body) = document.select(&body_selector).next() {
                content = visible_text(body);
            }
        }
    }

    let content = normalize_whitespace(&content);

    if content.len() < MIN_EXTRACTABLE_LEN {
        return Err(AppError::InsufficientContent);
    }

    Ok(content)
}

/// Collects the text of all descendants of `root`, skipping text inside
/// script, style, and noscript elements.
fn visible_text(root: ElementRef) -> String {
    let mut out = String::new();
    for node in root.descendants() {
        if let Some(text) = node.value().as_text() {
            let hidden = node.ancestors().any(|a| {
                a.value()
                    .as_element()
                    .is_some_and(|e| matches!(e.name(), "script" | "style" | "noscript"))
            });
            if !hidden {
                out.push_str(text);
                out.push(' ');
            }
        }
    }
    out
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

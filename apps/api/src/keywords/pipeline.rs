//! Pipeline Orchestrator — fetch → extract → categorize for one request.
//!
//! The fetch is the only suspending stage; extraction and categorization are
//! pure computation over in-memory strings and always succeed. Failures are
//! terminal for the request; no retries happen here.

use tracing::debug;
use url::Url;

use crate::errors::AppError;
use crate::keywords::categorize::{categorize_keywords, KeywordResult};
use crate::keywords::scoring::extract_keywords;
use crate::scrape::PageFetcher;

/// Pipeline stages, in execution order. Used to tag log lines so a failed
/// request shows how far it got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Extracting,
    Categorizing,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Fetching => "fetching",
            Stage::Extracting => "extracting",
            Stage::Categorizing => "categorizing",
        }
    }
}

/// Runs the full extraction pipeline for one URL.
///
/// Fetch failures (network error, bad status, insufficient content) surface
/// as the fetcher's `AppError`; everything downstream is infallible, so an
/// empty page body yields a `KeywordResult` with three empty arrays rather
/// than an error.
pub async fn run_extraction(
    fetcher: &dyn PageFetcher,
    url: &Url,
) -> Result<KeywordResult, AppError> {
    debug!(stage = Stage::Fetching.as_str(), %url, "pipeline stage");
    let text = fetcher.fetch_page_text(url).await?;

    debug!(
        stage = Stage::Extracting.as_str(),
        chars = text.len(),
        "pipeline stage"
    );
    let keywords = extract_keywords(&text);

    debug!(
        stage = Stage::Categorizing.as_str(),
        candidates = keywords.len(),
        "pipeline stage"
    );
    Ok(categorize_keywords(&keywords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Canned fetcher for exercising the pipeline without network access.
    enum StubFetcher {
        Text(String),
        FailFetch,
        FailContent,
    }

    #[async_trait]
    impl PageFetcher for StubFetcher {
        async fn fetch_page_text(&self, _url: &Url) -> Result<String, AppError> {
            match self {
                StubFetcher::Text(text) => Ok(text.clone()),
                StubFetcher::FailFetch => {
                    Err(AppError::FetchFailure("connection refused".to_string()))
                }
                StubFetcher::FailContent => Err(AppError::InsufficientContent),
            }
        }
    }

    fn test_url() -> Url {
        Url::parse("https://example.com/job/42").unwrap()
    }

    #[tokio::test]
    async fn test_end_to_end_react_posting() {
        let fetcher = StubFetcher::Text(
            "We need a React developer with strong communication skills. Must know React and Docker."
                .to_string(),
        );
        let result = run_extraction(&fetcher, &test_url()).await.unwrap();

        // react: freq 2, boosted x3 = 6 — tops the ranking
        assert_eq!(result.technical_skills[0], "React");
        assert!(result.tools_and_technologies.contains(&"Docker".to_string()));
        assert!(result.soft_skills.contains(&"Communication".to_string()));
        // "developer" hits the technical fallback
        assert!(result.technical_skills.contains(&"Developer".to_string()));
    }

    #[tokio::test]
    async fn test_no_term_appears_twice_across_arrays() {
        let fetcher = StubFetcher::Text(
            "React react REACT communication Communication docker Docker react docker."
                .to_string(),
        );
        let result = run_extraction(&fetcher, &test_url()).await.unwrap();

        let mut all: Vec<String> = result
            .technical_skills
            .iter()
            .chain(result.soft_skills.iter())
            .chain(result.tools_and_technologies.iter())
            .map(|s| s.to_lowercase())
            .collect();
        let before = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), before, "duplicate normalized term in result");
    }

    #[tokio::test]
    async fn test_content_free_page_yields_empty_arrays() {
        let fetcher = StubFetcher::Text("... !!! ???".to_string());
        let result = run_extraction(&fetcher, &test_url()).await.unwrap();
        assert_eq!(result, KeywordResult::default());
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let fetcher = StubFetcher::FailFetch;
        let err = run_extraction(&fetcher, &test_url()).await.unwrap_err();
        assert!(matches!(err, AppError::FetchFailure(_)));
    }

    #[tokio::test]
    async fn test_insufficient_content_propagates() {
        let fetcher = StubFetcher::FailContent;
        let err = run_extraction(&fetcher, &test_url()).await.unwrap_err();
        assert!(matches!(err, AppError::InsufficientContent));
    }
}

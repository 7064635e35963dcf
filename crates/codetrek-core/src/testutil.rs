//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit and integration tests.
//! All mocks use `Arc<Mutex<_>>` for interior mutability, allowing test
//! assertions on recorded calls.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::AppError;
use crate::models::{DifficultyBreakdown, Provider, ProviderReport, ProviderStatistics};
use crate::traits::{Fetcher, StatsExtractor};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

struct Route {
    url_fragment: String,
    /// Each call pops the first element; once empty, a default page is served.
    responses: Vec<Result<String, AppError>>,
    delay: Duration,
}

/// Mock fetcher that answers by URL substring.
///
/// Routing on the URL keeps the mock deterministic when both providers are
/// fetched concurrently.
#[derive(Clone, Default)]
pub struct MockFetcher {
    routes: Arc<Mutex<Vec<Route>>>,
    /// Every URL passed to `fetch`, in call order.
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for URLs containing `url_fragment`.
    pub fn respond(self, url_fragment: &str, html: &str) -> Self {
        self.push(url_fragment, Ok(html.to_string()))
    }

    /// Fail URLs containing `url_fragment` with `error`.
    pub fn fail(self, url_fragment: &str, error: AppError) -> Self {
        self.push(url_fragment, Err(error))
    }

    /// Wait `delay` before answering URLs containing `url_fragment`.
    pub fn delay(self, url_fragment: &str, delay: Duration) -> Self {
        {
            let mut routes = self.routes.lock().unwrap();
            match routes.iter_mut().find(|r| r.url_fragment == url_fragment) {
                Some(route) => route.delay = delay,
                None => routes.push(Route {
                    url_fragment: url_fragment.to_string(),
                    responses: Vec::new(),
                    delay,
                }),
            }
        }
        self
    }

    fn push(self, url_fragment: &str, response: Result<String, AppError>) -> Self {
        {
            let mut routes = self.routes.lock().unwrap();
            match routes.iter_mut().find(|r| r.url_fragment == url_fragment) {
                Some(route) => route.responses.push(response),
                None => routes.push(Route {
                    url_fragment: url_fragment.to_string(),
                    responses: vec![response],
                    delay: Duration::ZERO,
                }),
            }
        }
        self
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        self.requested.lock().unwrap().push(url.to_string());

        let (response, delay) = {
            let mut routes = self.routes.lock().unwrap();
            match routes.iter_mut().find(|r| url.contains(&r.url_fragment)) {
                Some(route) if !route.responses.is_empty() => {
                    (route.responses.remove(0), route.delay)
                }
                Some(route) => (Ok(default_page()), route.delay),
                None => (Ok(default_page()), Duration::ZERO),
            }
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        response
    }
}

fn default_page() -> String {
    "<html><body>default</body></html>".to_string()
}

// ---------------------------------------------------------------------------
// MockExtractor
// ---------------------------------------------------------------------------

/// Mock extractor that returns fixed statistics and records its inputs.
#[derive(Clone)]
pub struct MockExtractor {
    stats: ProviderStatistics,
    /// Every `(username, document)` pair passed to `extract`.
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockExtractor {
    /// Extractor reporting `total` solved with the given Easy/Medium/Hard split.
    pub fn new(provider: Provider, total: u32, difficulty: (u32, u32, u32)) -> Self {
        let mut stats = ProviderStatistics::fallback(provider, "");
        stats.total_solved = total;
        stats.by_difficulty = DifficultyBreakdown::solved(difficulty.0, difficulty.1, difficulty.2);
        Self::with_stats(stats)
    }

    pub fn with_stats(stats: ProviderStatistics) -> Self {
        Self {
            stats,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl StatsExtractor for MockExtractor {
    fn provider(&self) -> Provider {
        self.stats.provider
    }

    fn extract(&self, username: &str, document: &str) -> ProviderReport {
        self.calls
            .lock()
            .unwrap()
            .push((username.to_string(), document.to_string()));

        let mut stats = self.stats.clone();
        stats.username = username.to_string();
        ProviderReport {
            stats,
            recent_problems: Vec::new(),
        }
    }
}

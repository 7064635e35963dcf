use crate::config::ProviderConfig;
use crate::error::AppError;
use crate::merge::merge;
use crate::models::{CombinedStatistics, ProviderReport, ProviderStatistics, RecentProblem};
use crate::traits::{Fetcher, StatsExtractor};

/// Result of one combined-statistics request.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedReport {
    /// `None` when the GeeksforGeeks pipeline failed.
    pub gfg: Option<ProviderStatistics>,
    /// `None` when the LeetCode pipeline failed.
    pub leetcode: Option<ProviderStatistics>,
    pub combined: CombinedStatistics,
    /// Recently solved problems listed on the GeeksforGeeks page.
    pub recent_problems: Vec<RecentProblem>,
}

/// Orchestrates the profile pipeline: fetch → extract per provider, then merge.
///
/// Generic over the fetcher and both extractors via traits, enabling
/// dependency injection and testability without real HTTP calls.
pub struct StatsService<F, G, L>
where
    F: Fetcher,
    G: StatsExtractor,
    L: StatsExtractor,
{
    fetcher: F,
    gfg: G,
    leetcode: L,
    config: ProviderConfig,
}

impl<F, G, L> StatsService<F, G, L>
where
    F: Fetcher,
    G: StatsExtractor,
    L: StatsExtractor,
{
    pub fn new(fetcher: F, gfg: G, leetcode: L, config: ProviderConfig) -> Self {
        Self {
            fetcher,
            gfg,
            leetcode,
            config,
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Fetch and extract the GeeksforGeeks profile of `username`.
    pub async fn gfg(&self, username: &str) -> Result<ProviderReport, AppError> {
        self.run(&self.gfg, username).await
    }

    /// Fetch and extract the LeetCode profile of `username`.
    pub async fn leetcode(&self, username: &str) -> Result<ProviderReport, AppError> {
        self.run(&self.leetcode, username).await
    }

    /// Run both provider pipelines concurrently and merge the results.
    ///
    /// Both pipelines are awaited before merging. A failed provider is
    /// replaced by its fallback numbers; only when both fail does this return
    /// [`AppError::AggregationError`].
    pub async fn combined(
        &self,
        gfg_username: &str,
        leetcode_username: &str,
    ) -> Result<CombinedReport, AppError> {
        let (gfg, leetcode) = tokio::join!(self.gfg(gfg_username), self.leetcode(leetcode_username));

        let (gfg, leetcode) = match (gfg, leetcode) {
            (Err(gfg_err), Err(leetcode_err)) => {
                tracing::error!(
                    gfg_error = %gfg_err,
                    leetcode_error = %leetcode_err,
                    "Both providers failed"
                );
                return Err(AppError::AggregationError(format!(
                    "GeeksforGeeks: {gfg_err}; LeetCode: {leetcode_err}"
                )));
            }
            (gfg, leetcode) => (gfg.ok(), leetcode.ok()),
        };

        let combined = merge(
            gfg.as_ref().map(|r| &r.stats),
            leetcode.as_ref().map(|r| &r.stats),
        );
        tracing::info!(
            total_solved = combined.total_solved,
            gfg_ok = gfg.is_some(),
            leetcode_ok = leetcode.is_some(),
            "Combined statistics ready"
        );

        let (gfg, recent_problems) = match gfg {
            Some(report) => (Some(report.stats), report.recent_problems),
            None => (None, Vec::new()),
        };

        Ok(CombinedReport {
            gfg,
            leetcode: leetcode.map(|r| r.stats),
            combined,
            recent_problems,
        })
    }

    async fn run<E: StatsExtractor>(
        &self,
        extractor: &E,
        username: &str,
    ) -> Result<ProviderReport, AppError> {
        let provider = extractor.provider();
        let url = self.config.profile_url(provider, username)?;
        let timeout = self.config.fetch_timeout;

        tracing::info!(%provider, %url, "Fetching profile");
        let html = match tokio::time::timeout(timeout, self.fetcher.fetch(&url)).await {
            Ok(Ok(html)) => html,
            Ok(Err(e)) => {
                tracing::warn!(%provider, %username, error = %e, "Profile fetch failed");
                return Err(e);
            }
            Err(_) => {
                let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                tracing::warn!(%provider, %username, timeout_ms, "Profile fetch timed out");
                return Err(AppError::Timeout(timeout_ms));
            }
        };
        tracing::debug!(%provider, bytes = html.len(), "Fetched profile");

        let report = extractor.extract(username, &html);
        tracing::info!(
            %provider,
            %username,
            total_solved = report.stats.total_solved,
            "Extraction complete"
        );
        Ok(report)
    }
}

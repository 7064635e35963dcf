use std::str::FromStr;

use codetrek_core::defaults;
use codetrek_core::models::{
    Difficulty, DifficultyCount, Provider, ProviderReport, ProviderStatistics,
};
use codetrek_core::traits::StatsExtractor;

use crate::text::{decimal_after, number_after};

const TOTAL: &str = "problemsSolvedTotal";
const EASY: &str = "problemsSolvedEasy";
const MEDIUM: &str = "problemsSolvedMedium";
const HARD: &str = "problemsSolvedHard";
const SUBMISSIONS: &str = "totalSubmissions";
const ACCEPTANCE_RATE: &str = "acceptanceRate";
const RANKING: &str = "ranking";
const STREAK: &str = "daysStreak";

/// Extractor for LeetCode profile pages.
///
/// The page is treated as opaque text: each statistic is the first number
/// that follows its token anywhere in the document.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeetCodeExtractor;

impl LeetCodeExtractor {
    pub fn new() -> Self {
        Self
    }
}

fn find<T: FromStr>(document: &str, token: &str) -> Option<T> {
    number_after(document, token).and_then(|n| n.parse().ok())
}

impl StatsExtractor for LeetCodeExtractor {
    fn provider(&self) -> Provider {
        Provider::LeetCode
    }

    fn extract(&self, username: &str, document: &str) -> ProviderReport {
        let mut stats = ProviderStatistics::fallback(Provider::LeetCode, username);

        let total: u32 = find(document, TOTAL).unwrap_or(0);
        let counts = [
            (Difficulty::Easy, find(document, EASY).unwrap_or(0)),
            (Difficulty::Medium, find(document, MEDIUM).unwrap_or(0)),
            (Difficulty::Hard, find(document, HARD).unwrap_or(0)),
        ];

        if total == 0 {
            tracing::debug!(%username, "No solved total on LeetCode page; using estimates");
            stats.total_solved = defaults::fallback_total(Provider::LeetCode);
        } else {
            stats.total_solved = total;
        }
        for (difficulty, count) in counts {
            // zero counts only replace the estimate when the total was real
            if count > 0 || total > 0 {
                *stats.by_difficulty.get_mut(difficulty) = DifficultyCount::solved(count);
            }
        }

        stats.submissions = find(document, SUBMISSIONS).unwrap_or(0);
        stats.acceptance_rate = decimal_after(document, ACCEPTANCE_RATE).and_then(|n| n.parse().ok());
        stats.ranking = find(document, RANKING);
        stats.streak = find(document, STREAK).unwrap_or(0);

        ProviderReport {
            stats,
            recent_problems: Vec::new(),
        }
    }
}

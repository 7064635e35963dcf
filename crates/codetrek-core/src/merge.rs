use crate::defaults::{self, FUNDAMENTALS_CATEGORY};
use crate::models::{CombinedStatistics, DifficultyBreakdown, Provider, ProviderStatistics};

/// Merge both providers into one additive view.
///
/// `None` marks a provider whose pipeline failed; its documented fallback
/// total and difficulty distribution are used in its place, so every sum is
/// defined whichever side is missing.
pub fn merge(
    gfg: Option<&ProviderStatistics>,
    leetcode: Option<&ProviderStatistics>,
) -> CombinedStatistics {
    let gfg_total = total_or_fallback(Provider::GeeksforGeeks, gfg);
    let leetcode_total = total_or_fallback(Provider::LeetCode, leetcode);
    let total_solved = gfg_total.saturating_add(leetcode_total);

    let by_difficulty = difficulty_or_fallback(Provider::GeeksforGeeks, gfg)
        + difficulty_or_fallback(Provider::LeetCode, leetcode);

    let fundamentals = gfg
        .and_then(|stats| {
            stats
                .by_category
                .iter()
                .find(|c| c.name == FUNDAMENTALS_CATEGORY)
        })
        .map(|c| (c.count, c.total))
        .unwrap_or((0, 0));

    CombinedStatistics {
        total_solved,
        by_difficulty,
        by_platform: defaults::platforms(gfg_total, leetcode_total),
        by_category: defaults::categories(fundamentals, total_solved),
    }
}

fn total_or_fallback(provider: Provider, stats: Option<&ProviderStatistics>) -> u32 {
    stats
        .map(|s| s.total_solved)
        .unwrap_or_else(|| defaults::fallback_total(provider))
}

fn difficulty_or_fallback(
    provider: Provider,
    stats: Option<&ProviderStatistics>,
) -> DifficultyBreakdown {
    stats
        .map(|s| s.by_difficulty)
        .unwrap_or_else(|| defaults::fallback_difficulty(provider))
}

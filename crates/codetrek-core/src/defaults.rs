//! Last-known-good placeholder numbers for the demo accounts.
//!
//! None of these are computed. They stand in whenever a provider cannot be
//! scraped so the dashboard always has something to show, and they are
//! indistinguishable from real numbers in the responses.

use crate::models::{
    CategoryStat, CombinedStatistics, DifficultyBreakdown, PlatformStat, Provider,
    ProviderStatistics,
};

/// Username scraped when the caller does not give a GeeksforGeeks handle.
pub const GFG_DEMO_USERNAME: &str = "anilpaj39t";
/// Username scraped when the caller does not give a LeetCode handle.
pub const LEETCODE_DEMO_USERNAME: &str = "anil123_0";

/// GeeksforGeeks total solved when the page yields nothing usable.
pub const GFG_FALLBACK_TOTAL: u32 = 85;
/// GeeksforGeeks Easy/Medium/Hard estimate used until the page says otherwise.
pub const GFG_FALLBACK_DIFFICULTY: (u32, u32, u32) = (40, 35, 10);

/// LeetCode total solved when the page yields no total.
pub const LEETCODE_FALLBACK_TOTAL: u32 = 130;
/// LeetCode Easy/Medium/Hard substituted for zero buckets alongside the fallback total.
pub const LEETCODE_FALLBACK_DIFFICULTY: (u32, u32, u32) = (65, 50, 15);

/// Combined total served on the last-resort path (85 + 130).
pub const COMBINED_FALLBACK_TOTAL: u32 = GFG_FALLBACK_TOTAL + LEETCODE_FALLBACK_TOTAL;

/// Upper bound on recent problems listed per response.
pub const MAX_RECENT_PROBLEMS: usize = 5;

pub const FUNDAMENTALS_CATEGORY: &str = "Fundamentals";
pub const DSA_CATEGORY: &str = "DSA";

const FUNDAMENTALS_COLOR: &str = "from-green-500 to-emerald-600";
const DSA_COLOR: &str = "from-yellow-500 to-amber-600";

/// Platforms shown in breakdowns that are not scraped yet: (name, color).
const PLACEHOLDER_PLATFORMS: [(&str, &str); 2] = [
    ("CodeForces", "from-blue-500 to-indigo-600"),
    ("HackerRank", "from-emerald-500 to-teal-600"),
];

pub fn platform_color(provider: Provider) -> &'static str {
    match provider {
        Provider::GeeksforGeeks => "from-green-500 to-emerald-600",
        Provider::LeetCode => "from-yellow-500 to-amber-600",
    }
}

pub fn fallback_difficulty(provider: Provider) -> DifficultyBreakdown {
    let (easy, medium, hard) = match provider {
        Provider::GeeksforGeeks => GFG_FALLBACK_DIFFICULTY,
        Provider::LeetCode => LEETCODE_FALLBACK_DIFFICULTY,
    };
    DifficultyBreakdown::solved(easy, medium, hard)
}

pub fn fallback_total(provider: Provider) -> u32 {
    match provider {
        Provider::GeeksforGeeks => GFG_FALLBACK_TOTAL,
        Provider::LeetCode => LEETCODE_FALLBACK_TOTAL,
    }
}

/// The two fixed categories: Fundamentals (never exposed by the source, so
/// always 0/0 unless given) and DSA carrying the solved total.
pub fn categories(fundamentals: (u32, u32), dsa_total: u32) -> Vec<CategoryStat> {
    vec![
        CategoryStat {
            name: FUNDAMENTALS_CATEGORY.to_string(),
            count: fundamentals.0,
            total: fundamentals.1,
            color_tag: FUNDAMENTALS_COLOR.to_string(),
        },
        CategoryStat {
            name: DSA_CATEGORY.to_string(),
            count: dsa_total,
            total: dsa_total,
            color_tag: DSA_COLOR.to_string(),
        },
    ]
}

/// Four fixed platform entries: both scraped providers, then the placeholders.
pub fn platforms(gfg_count: u32, leetcode_count: u32) -> Vec<PlatformStat> {
    let scraped = [
        (Provider::GeeksforGeeks, gfg_count),
        (Provider::LeetCode, leetcode_count),
    ]
    .into_iter()
    .map(|(provider, count)| PlatformStat {
        platform_name: provider.display_name().to_string(),
        count,
        color_tag: platform_color(provider).to_string(),
    });

    let placeholders = PLACEHOLDER_PLATFORMS
        .into_iter()
        .map(|(name, color)| PlatformStat {
            platform_name: name.to_string(),
            count: 0,
            color_tag: color.to_string(),
        });

    scraped.chain(placeholders).collect()
}

impl ProviderStatistics {
    /// The fully defaulted record for a provider.
    ///
    /// This is what an extraction of an unusable document produces, and what
    /// the per-provider endpoints serve when the page cannot be fetched.
    pub fn fallback(provider: Provider, username: &str) -> Self {
        let total = fallback_total(provider);
        let by_category = match provider {
            Provider::GeeksforGeeks => categories((0, 0), total),
            Provider::LeetCode => Vec::new(),
        };

        Self {
            provider,
            username: username.to_string(),
            total_solved: total,
            by_difficulty: fallback_difficulty(provider),
            by_category,
            active_days: 0,
            streak: 0,
            activity_history: Vec::new(),
            submissions: 0,
            acceptance_rate: None,
            ranking: None,
        }
    }
}

impl CombinedStatistics {
    /// Static record served when aggregation itself fails.
    pub fn fallback() -> Self {
        Self {
            total_solved: COMBINED_FALLBACK_TOTAL,
            by_difficulty: fallback_difficulty(Provider::GeeksforGeeks)
                + fallback_difficulty(Provider::LeetCode),
            by_platform: platforms(GFG_FALLBACK_TOTAL, LEETCODE_FALLBACK_TOTAL),
            by_category: categories((0, 0), COMBINED_FALLBACK_TOTAL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DifficultyCount;

    #[test]
    fn test_combined_fallback_numbers() {
        let combined = CombinedStatistics::fallback();
        assert_eq!(combined.total_solved, 215);
        assert_eq!(combined.by_difficulty.easy, DifficultyCount::solved(105));
        assert_eq!(combined.by_difficulty.medium, DifficultyCount::solved(85));
        assert_eq!(combined.by_difficulty.hard, DifficultyCount::solved(25));
        assert_eq!(combined.by_category[1].count, 215);
        assert_eq!(combined.by_platform.len(), 4);
    }

    #[test]
    fn test_platforms_are_fixed_and_ordered() {
        let names: Vec<_> = platforms(1, 2)
            .into_iter()
            .map(|p| (p.platform_name, p.count))
            .collect();
        assert_eq!(
            names,
            vec![
                ("GeeksforGeeks".to_string(), 1),
                ("LeetCode".to_string(), 2),
                ("CodeForces".to_string(), 0),
                ("HackerRank".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_provider_fallbacks() {
        let gfg = ProviderStatistics::fallback(Provider::GeeksforGeeks, "someone");
        assert_eq!(gfg.total_solved, 85);
        assert_eq!(gfg.by_category[0].name, "Fundamentals");
        assert_eq!(gfg.by_category[0].total, 0);
        assert_eq!(gfg.by_category[1].count, 85);

        let lc = ProviderStatistics::fallback(Provider::LeetCode, "someone");
        assert_eq!(lc.total_solved, 130);
        assert_eq!(lc.by_difficulty, DifficultyBreakdown::solved(65, 50, 15));
        assert!(lc.by_category.is_empty());
    }
}

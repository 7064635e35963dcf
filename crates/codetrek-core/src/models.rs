use std::fmt;
use std::ops::Add;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// External coding-practice site whose public profile page is scraped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Provider {
    #[serde(rename = "gfg")]
    GeeksforGeeks,
    #[serde(rename = "leetcode")]
    LeetCode,
}

impl Provider {
    /// Human-readable platform name, as shown in platform breakdowns.
    pub fn display_name(self) -> &'static str {
        match self {
            Provider::GeeksforGeeks => "GeeksforGeeks",
            Provider::LeetCode => "LeetCode",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Route a free-form label to a bucket.
    ///
    /// Case-sensitive substring match, checked in `Easy`, `Medium`, `Hard`
    /// order; the first hit wins.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| label.contains(d.as_str()))
    }
}

/// Solved count against the bucket total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DifficultyCount {
    pub count: u32,
    pub total: u32,
}

impl DifficultyCount {
    /// A bucket where every known problem is solved (`count == total`).
    pub fn solved(count: u32) -> Self {
        Self {
            count,
            total: count,
        }
    }
}

impl Add for DifficultyCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            count: self.count.saturating_add(rhs.count),
            total: self.total.saturating_add(rhs.total),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DifficultyBreakdown {
    pub easy: DifficultyCount,
    pub medium: DifficultyCount,
    pub hard: DifficultyCount,
}

impl DifficultyBreakdown {
    pub fn solved(easy: u32, medium: u32, hard: u32) -> Self {
        Self {
            easy: DifficultyCount::solved(easy),
            medium: DifficultyCount::solved(medium),
            hard: DifficultyCount::solved(hard),
        }
    }

    pub fn get(&self, difficulty: Difficulty) -> DifficultyCount {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn get_mut(&mut self, difficulty: Difficulty) -> &mut DifficultyCount {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, DifficultyCount)> + '_ {
        Difficulty::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}

impl Add for DifficultyBreakdown {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            easy: self.easy + rhs.easy,
            medium: self.medium + rhs.medium,
            hard: self.hard + rhs.hard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub name: String,
    pub count: u32,
    pub total: u32,
    pub color_tag: String,
}

/// Submissions recorded on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ActivityDay {
    pub date: NaiveDate,
    pub count: u32,
}

/// Statistics scraped from one provider's profile page.
///
/// Built fresh per request; provider-specific fields stay at their zero
/// value for the provider that does not expose them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProviderStatistics {
    pub provider: Provider,
    pub username: String,
    pub total_solved: u32,
    pub by_difficulty: DifficultyBreakdown,
    /// GeeksforGeeks only.
    pub by_category: Vec<CategoryStat>,
    /// GeeksforGeeks only.
    pub active_days: u32,
    pub streak: u32,
    /// GeeksforGeeks only. Chronological, one entry per date, not gap-filled.
    pub activity_history: Vec<ActivityDay>,
    /// LeetCode only.
    pub submissions: u32,
    /// LeetCode only, as a percentage (e.g. `61.3`).
    pub acceptance_rate: Option<f64>,
    /// LeetCode only.
    pub ranking: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecentProblem {
    pub name: String,
    pub difficulty: String,
    pub time_ago: String,
    pub platform: String,
}

/// Output of one provider extraction: the statistics plus the recently
/// solved problems the page lists (empty for providers without one).
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderReport {
    pub stats: ProviderStatistics,
    pub recent_problems: Vec<RecentProblem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlatformStat {
    pub platform_name: String,
    pub count: u32,
    pub color_tag: String,
}

/// Additive view over both providers' (real or defaulted) statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CombinedStatistics {
    pub total_solved: u32,
    pub by_difficulty: DifficultyBreakdown,
    pub by_platform: Vec<PlatformStat>,
    pub by_category: Vec<CategoryStat>,
}

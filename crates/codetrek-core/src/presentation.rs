//! View models for the dashboard components.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::models::{ActivityDay, Difficulty, PlatformStat, RecentProblem};
use crate::stats::CombinedReport;

/// Months of empty heatmap shown when there is no activity at all.
const EMPTY_HEATMAP_MONTHS: u32 = 6;

/// Longest span of history the heatmap covers.
const MAX_HEATMAP_MONTHS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub count: u32,
    /// Color intensity 0–4.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HeatmapView {
    /// One cell per day, contiguous from first to last date.
    pub days: Vec<HeatmapCell>,
    /// Sunday-started weeks; `None` pads the first week before the first day.
    pub weeks: Vec<Vec<Option<HeatmapCell>>>,
}

impl HeatmapView {
    pub fn new(history: &[ActivityDay], today: NaiveDate) -> Self {
        let days: Vec<HeatmapCell> = fill_history(history, today)
            .into_iter()
            .map(|day| HeatmapCell {
                date: day.date,
                count: day.count,
                level: intensity(day.count),
            })
            .collect();
        let weeks = group_weeks(&days);
        Self { days, weeks }
    }
}

/// Sorted, one entry per date, every gap between the first and last date
/// filled with zero. Dates after `today` are ignored and the range covers at
/// most the twelve months ending at the latest date. An empty history becomes
/// the last six months of zeros ending `today`.
pub fn fill_history(history: &[ActivityDay], today: NaiveDate) -> Vec<ActivityDay> {
    let mut by_date: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for day in history.iter().filter(|day| day.date <= today) {
        let count = by_date.entry(day.date).or_default();
        *count = count.saturating_add(day.count);
    }

    let (start, end) = match (by_date.keys().next(), by_date.keys().next_back()) {
        (Some(first), Some(last)) => {
            let earliest = last
                .checked_sub_months(Months::new(MAX_HEATMAP_MONTHS))
                .unwrap_or(*first);
            ((*first).max(earliest), *last)
        }
        _ => {
            let start = today
                .checked_sub_months(Months::new(EMPTY_HEATMAP_MONTHS))
                .unwrap_or(today);
            (start, today)
        }
    };

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| ActivityDay {
            date,
            count: by_date.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

pub fn intensity(count: u32) -> u8 {
    match count {
        0 => 0,
        1 => 1,
        2 => 2,
        3 => 3,
        _ => 4,
    }
}

fn group_weeks(days: &[HeatmapCell]) -> Vec<Vec<Option<HeatmapCell>>> {
    let Some(first) = days.first() else {
        return Vec::new();
    };

    let mut weeks = Vec::new();
    let mut week: Vec<Option<HeatmapCell>> =
        vec![None; first.date.weekday().num_days_from_sunday() as usize];

    for cell in days {
        week.push(Some(*cell));
        if cell.date.weekday().num_days_from_sunday() == 6 {
            weeks.push(std::mem::take(&mut week));
        }
    }
    if !week.is_empty() {
        weeks.push(week);
    }
    weeks
}

/// Whole-number percentage for progress bars; 0 when `total` is 0.
pub fn percent(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(count) / f64::from(total) * 100.0).round() as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProgressItem {
    pub name: String,
    pub count: u32,
    pub total: u32,
    pub percent: u32,
    pub color_tag: String,
}

fn difficulty_color(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "text-green-500",
        Difficulty::Medium => "text-yellow-500",
        Difficulty::Hard => "text-red-500",
    }
}

/// Everything the combined dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub total_solved: u32,
    pub categories: Vec<ProgressItem>,
    pub difficulties: Vec<ProgressItem>,
    pub platforms: Vec<PlatformStat>,
    pub recent_problems: Vec<RecentProblem>,
    pub active_days: u32,
    pub streak: u32,
    pub heatmap: HeatmapView,
}

impl DashboardView {
    pub fn new(report: &CombinedReport, today: NaiveDate) -> Self {
        let combined = &report.combined;

        let categories = combined
            .by_category
            .iter()
            .map(|c| ProgressItem {
                name: c.name.clone(),
                count: c.count,
                total: c.total,
                percent: percent(c.count, c.total),
                color_tag: c.color_tag.clone(),
            })
            .collect();

        let difficulties = combined
            .by_difficulty
            .iter()
            .map(|(difficulty, bucket)| ProgressItem {
                name: difficulty.as_str().to_string(),
                count: bucket.count,
                total: bucket.total,
                percent: percent(bucket.count, bucket.total),
                color_tag: difficulty_color(difficulty).to_string(),
            })
            .collect();

        let history = report
            .gfg
            .as_ref()
            .map(|s| s.activity_history.as_slice())
            .unwrap_or_default();
        let streak = [report.gfg.as_ref(), report.leetcode.as_ref()]
            .into_iter()
            .flatten()
            .map(|s| s.streak)
            .max()
            .unwrap_or(0);

        Self {
            total_solved: combined.total_solved,
            categories,
            difficulties,
            platforms: combined.by_platform.clone(),
            recent_problems: report.recent_problems.clone(),
            active_days: report.gfg.as_ref().map(|s| s.active_days).unwrap_or(0),
            streak,
            heatmap: HeatmapView::new(history, today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::merge;
    use crate::models::{Provider, ProviderStatistics};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn day(s: &str, count: u32) -> ActivityDay {
        ActivityDay {
            date: date(s),
            count,
        }
    }

    #[test]
    fn test_fill_history_sorts_and_fills_gaps() {
        let filled = fill_history(
            &[day("2024-01-04", 2), day("2024-01-01", 1)],
            date("2024-06-01"),
        );
        let counts: Vec<_> = filled.iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![1, 0, 0, 2]);
        assert_eq!(filled[0].date, date("2024-01-01"));
        assert_eq!(filled[3].date, date("2024-01-04"));
    }

    #[test]
    fn test_fill_history_collapses_duplicate_dates() {
        let filled = fill_history(
            &[day("2024-01-01", 1), day("2024-01-01", 2)],
            date("2024-06-01"),
        );
        assert_eq!(filled, vec![day("2024-01-01", 3)]);
    }

    #[test]
    fn test_fill_history_saturates_duplicate_dates() {
        let filled = fill_history(
            &[day("2024-01-01", u32::MAX), day("2024-01-01", 1)],
            date("2024-06-01"),
        );
        assert_eq!(filled, vec![day("2024-01-01", u32::MAX)]);
    }

    #[test]
    fn test_fill_history_spans_at_most_twelve_months() {
        let filled = fill_history(
            &[
                day("0001-01-01", 1),
                day("2024-03-01", 2),
                day("9999-12-31", 3),
            ],
            date("2024-06-01"),
        );
        assert_eq!(filled.first().unwrap(), &day("2023-03-01", 0));
        assert_eq!(filled.last().unwrap(), &day("2024-03-01", 2));
        assert_eq!(filled.len(), 367);
    }

    #[test]
    fn test_fill_history_ignores_future_dates() {
        let today = date("2024-07-15");
        let filled = fill_history(&[day("2030-01-01", 5)], today);
        assert_eq!(filled.first().unwrap().date, date("2024-01-15"));
        assert!(filled.iter().all(|d| d.count == 0));
    }

    #[test]
    fn test_empty_history_is_six_months_of_zeros() {
        let today = date("2024-07-15");
        let filled = fill_history(&[], today);
        assert_eq!(filled.first().unwrap().date, date("2024-01-15"));
        assert_eq!(filled.last().unwrap().date, today);
        assert!(filled.iter().all(|d| d.count == 0));
    }

    #[test]
    fn test_intensity_levels() {
        let levels: Vec<_> = [0, 1, 2, 3, 4, 40].into_iter().map(intensity).collect();
        assert_eq!(levels, vec![0, 1, 2, 3, 4, 4]);
    }

    #[test]
    fn test_weeks_start_on_sunday() {
        // 2024-01-03 is a Wednesday.
        let view = HeatmapView::new(
            &[day("2024-01-03", 1), day("2024-01-08", 1)],
            date("2024-06-01"),
        );
        assert_eq!(view.days.len(), 6);
        assert_eq!(view.weeks.len(), 2);
        assert_eq!(view.weeks[0].len(), 7);
        assert!(view.weeks[0][..3].iter().all(Option::is_none));
        assert_eq!(view.weeks[0][3].unwrap().date, date("2024-01-03"));
        assert_eq!(view.weeks[1].len(), 2);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(85, 85), 100);
    }

    #[test]
    fn test_dashboard_from_degraded_report() {
        let mut lc = ProviderStatistics::fallback(Provider::LeetCode, "bob");
        lc.total_solved = 10;
        lc.streak = 4;
        let report = CombinedReport {
            gfg: None,
            combined: merge(None, Some(&lc)),
            leetcode: Some(lc),
            recent_problems: Vec::new(),
        };

        let view = DashboardView::new(&report, date("2024-07-15"));

        assert_eq!(view.total_solved, 95);
        assert_eq!(view.streak, 4);
        assert_eq!(view.active_days, 0);
        assert_eq!(view.difficulties.len(), 3);
        assert_eq!(view.difficulties[0].name, "Easy");
        assert_eq!(view.difficulties[0].percent, 100);
        assert_eq!(view.categories[0].percent, 0);
        assert_eq!(view.platforms.len(), 4);
        assert!(view.heatmap.days.iter().all(|d| d.count == 0));
    }
}

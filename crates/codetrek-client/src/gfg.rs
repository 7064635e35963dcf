use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use codetrek_core::defaults::{self, MAX_RECENT_PROBLEMS};
use codetrek_core::error::AppError;
use codetrek_core::models::{
    ActivityDay, Difficulty, DifficultyCount, Provider, ProviderReport, ProviderStatistics,
    RecentProblem,
};
use codetrek_core::traits::StatsExtractor;
use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;

use crate::text::{array_literal_after, leading_int};

const HEATMAP_TOKEN: &str = "heatmap_data";

struct Selectors {
    profile_detail: Selector,
    profile_value: Selector,
    script: Selector,
    difficulty_block: Selector,
    difficulty_heading: Selector,
    difficulty_value: Selector,
    recent_problem: Selector,
    recent_name: Selector,
    recent_difficulty: Selector,
    recent_time: Selector,
}

/// Extractor for GeeksforGeeks profile pages.
///
/// Reads the page as a DOM with CSS selectors. Each field is extracted in its
/// own phase; a phase that fails leaves its field at the fallback value and
/// the remaining phases still run.
#[derive(Clone)]
pub struct GfgExtractor {
    selectors: Arc<Selectors>,
}

impl GfgExtractor {
    pub fn new() -> Result<Self, AppError> {
        let selectors = Selectors {
            profile_detail: selector(".profile_details_container .profile_details")?,
            profile_value: selector(".profile_details_value")?,
            script: selector("script")?,
            difficulty_block: selector(".difficulty-breakup-container .difficulty-breakup")?,
            difficulty_heading: selector(".difficulty-breakup-heading")?,
            difficulty_value: selector(".difficulty-breakup-value")?,
            recent_problem: selector(".recent-problems-container .recent-problem")?,
            recent_name: selector(".recent-problem-name")?,
            recent_difficulty: selector(".recent-problem-difficulty")?,
            recent_time: selector(".recent-problem-time")?,
        };

        Ok(Self {
            selectors: Arc::new(selectors),
        })
    }

    /// Value node of the profile detail whose text contains `label`.
    fn detail_value(&self, html: &Html, label: &str) -> Result<String, AppError> {
        let s = &self.selectors;
        html.select(&s.profile_detail)
            .find(|detail| text_of(*detail).contains(label))
            .and_then(|detail| detail.select(&s.profile_value).next())
            .map(text_of)
            .ok_or_else(|| AppError::extraction("profile_details", format!("no '{label}' value")))
    }

    fn total_solved(&self, html: &Html) -> Result<u32, AppError> {
        let value = self.detail_value(html, "Problems Solved")?;
        match leading_int(&value) {
            Some(total) if total > 0 => Ok(total),
            _ => Err(AppError::extraction(
                "total_solved",
                format!("unusable value '{value}'"),
            )),
        }
    }

    fn detail_count(&self, html: &Html, field: &'static str, label: &str) -> Result<u32, AppError> {
        let value = self.detail_value(html, label)?;
        leading_int(&value)
            .ok_or_else(|| AppError::extraction(field, format!("not a number: '{value}'")))
    }

    /// The `heatmap_data = [...]` array embedded in a script block.
    ///
    /// A page without the token has no activity history; that is not an error.
    fn activity_history(&self, html: &Html, document: &str) -> Result<Vec<ActivityDay>, AppError> {
        let script = html
            .select(&self.selectors.script)
            .map(text_of)
            .find(|text| text.contains(HEATMAP_TOKEN));
        let source = script.as_deref().unwrap_or(document);

        match array_literal_after(source, HEATMAP_TOKEN) {
            Some(literal) => parse_heatmap(literal),
            None => Ok(Vec::new()),
        }
    }

    fn difficulty_counts(&self, html: &Html) -> Vec<(Difficulty, u32)> {
        let s = &self.selectors;
        html.select(&s.difficulty_block)
            .filter_map(|block| {
                let label = block
                    .select(&s.difficulty_heading)
                    .next()
                    .map(text_of)
                    .unwrap_or_default();
                let count = block
                    .select(&s.difficulty_value)
                    .next()
                    .map(text_of)
                    .and_then(|v| leading_int(&v))
                    .unwrap_or(0);
                if count == 0 {
                    return None;
                }
                Difficulty::from_label(&label).map(|d| (d, count))
            })
            .collect()
    }

    fn recent_problems(&self, html: &Html) -> Vec<RecentProblem> {
        let s = &self.selectors;
        let field = |el: ElementRef<'_>, sel: &Selector, default: &str| {
            el.select(sel)
                .next()
                .map(text_of)
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        html.select(&s.recent_problem)
            .take(MAX_RECENT_PROBLEMS)
            .map(|el| RecentProblem {
                name: field(el, &s.recent_name, "Unknown Problem"),
                difficulty: field(el, &s.recent_difficulty, "Medium"),
                time_ago: field(el, &s.recent_time, "Recently"),
                platform: Provider::GeeksforGeeks.display_name().to_string(),
            })
            .collect()
    }
}

impl StatsExtractor for GfgExtractor {
    fn provider(&self) -> Provider {
        Provider::GeeksforGeeks
    }

    fn extract(&self, username: &str, document: &str) -> ProviderReport {
        let html = Html::parse_document(document);
        let mut stats = ProviderStatistics::fallback(Provider::GeeksforGeeks, username);

        if let Some(total) = recover(self.total_solved(&html)) {
            stats.total_solved = total;
        }
        if let Some(days) = recover(self.detail_count(&html, "active_days", "Active Days")) {
            stats.active_days = days;
        }
        if let Some(streak) = recover(self.detail_count(&html, "streak", "Streak")) {
            stats.streak = streak;
        }
        if let Some(history) = recover(self.activity_history(&html, document)) {
            stats.activity_history = history;
        }
        for (difficulty, count) in self.difficulty_counts(&html) {
            *stats.by_difficulty.get_mut(difficulty) = DifficultyCount::solved(count);
        }
        stats.by_category = defaults::categories((0, 0), stats.total_solved);

        ProviderReport {
            stats,
            recent_problems: self.recent_problems(&html),
        }
    }
}

fn selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css).map_err(|e| AppError::extraction("selector", format!("{css}: {e}")))
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Log a failed phase and fall back to the field's default.
fn recover<T>(result: Result<T, AppError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(provider = %Provider::GeeksforGeeks, error = %e, "Keeping default");
            None
        }
    }
}

#[derive(Deserialize)]
struct HeatmapEntry {
    date: String,
    count: u32,
}

/// Parse the single-quoted array literal into chronological, per-date entries.
fn parse_heatmap(literal: &str) -> Result<Vec<ActivityDay>, AppError> {
    let entries: Vec<HeatmapEntry> = serde_json::from_str(&literal.replace('\'', "\""))?;

    let mut by_date: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for entry in entries {
        match NaiveDate::parse_from_str(entry.date.trim(), "%Y-%m-%d") {
            Ok(date) => {
                let count = by_date.entry(date).or_default();
                *count = count.saturating_add(entry.count);
            }
            Err(_) => tracing::debug!(date = %entry.date, "Skipping heatmap entry"),
        }
    }

    Ok(by_date
        .into_iter()
        .map(|(date, count)| ActivityDay { date, count })
        .collect())
}

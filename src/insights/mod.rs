// SPDX-License-Identifier: MIT
//! Dashboard derived metrics — streak, average mood, spectrum distribution,
//! the seven-day trend series, and the insight callouts.
//!
//! Every date-sensitive function takes `today` explicitly so callers (and
//! tests) control the clock.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, NaiveDate};
use serde::Serialize;

use crate::checkin::CheckinEntry;
use crate::mood::{self, Spectrum};

/// Emoji used for trend days with no check-in.
const GAP_EMOJI: &str = "❓";

fn entry_date(entry: &CheckinEntry) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(&entry.date)
        .ok()
        .map(|dt| dt.date_naive())
}

// ─── Core metrics ─────────────────────────────────────────────────────────────

/// Count of consecutive calendar days ending `today` with at least one
/// check-in, stopping at the first gap.
pub fn streak(entries: &[CheckinEntry], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = entries.iter().filter_map(entry_date).collect();
    let mut count = 0u32;
    let mut day = today;
    while days.contains(&day) {
        count += 1;
        day -= Duration::days(1);
    }
    count
}

/// Arithmetic mean of the entries' mood scores, one decimal place. Unknown
/// moods score 0; an empty collection averages 0.0.
pub fn average_mood_score(entries: &[CheckinEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let sum: u32 = entries
        .iter()
        .map(|entry| mood::mood_score(&entry.mood_id) as u32)
        .sum();
    let mean = sum as f64 / entries.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Check-in count for one spectrum category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpectrumCount {
    pub spectrum: Spectrum,
    pub count: u64,
}

/// Check-in counts grouped by spectrum category, in catalog order.
/// Zero-count categories (and unknown moods) are excluded.
pub fn mood_distribution(entries: &[CheckinEntry]) -> Vec<SpectrumCount> {
    let mut counts: HashMap<Spectrum, u64> = HashMap::new();
    for entry in entries {
        if let Some(mood) = mood::mood_by_id(&entry.mood_id) {
            *counts.entry(mood.spectrum).or_insert(0) += 1;
        }
    }
    Spectrum::ALL
        .iter()
        .filter_map(|spectrum| {
            counts.get(spectrum).map(|&count| SpectrumCount {
                spectrum: *spectrum,
                count,
            })
        })
        .collect()
}

// ─── Seven-day trend ──────────────────────────────────────────────────────────

/// One day of the dashboard's mood-trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Mood score for the day's first check-in, 0 on gap days.
    pub score: u8,
    pub emoji: String,
}

/// The last seven days (oldest first, ending `today`), each with the mood of
/// the day's first check-in or a gap marker.
pub fn mood_trend(entries: &[CheckinEntry], today: NaiveDate) -> Vec<TrendPoint> {
    (0..7)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            let mood = entries
                .iter()
                .find(|entry| entry_date(entry) == Some(day))
                .and_then(|entry| mood::mood_by_id(&entry.mood_id));
            TrendPoint {
                date: day,
                score: mood.map(|m| m.score).unwrap_or(0),
                emoji: mood
                    .map(|m| m.emoji.to_string())
                    .unwrap_or_else(|| GAP_EMOJI.to_string()),
            }
        })
        .collect()
}

// ─── Insight callouts ─────────────────────────────────────────────────────────

/// Short insight strings for the dashboard header.
pub fn insight_messages(entries: &[CheckinEntry], today: NaiveDate) -> Vec<String> {
    let mut insights = Vec::new();

    let current_streak = streak(entries, today);
    if current_streak >= 3 {
        insights.push(format!(
            "Amazing {current_streak}-day streak! Keep it going! 🔥"
        ));
    }

    if entries.len() >= 7 {
        let recent = &entries[entries.len() - 7..];
        let avg: f64 = recent
            .iter()
            .map(|entry| mood::mood_score(&entry.mood_id) as u32)
            .sum::<u32>() as f64
            / 7.0;
        if avg >= 4.0 {
            insights.push("You've been feeling great this week! ✨".to_string());
        }
    }

    if let Some(last) = entries.last() {
        if let Some(mood) = mood::mood_by_id(&last.mood_id) {
            insights.push(format!("Last check-in: {} {}", mood.label, mood.emoji));
        }
    }

    if insights.is_empty() {
        insights.push("Start checking in daily to unlock insights!".to_string());
    }
    insights
}

// ─── Summary ──────────────────────────────────────────────────────────────────

/// Everything the dashboard needs, computed in one pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_checkins: usize,
    pub streak: u32,
    pub average_mood: f64,
    pub distribution: Vec<SpectrumCount>,
    pub trend: Vec<TrendPoint>,
    pub insights: Vec<String>,
}

pub fn summary(entries: &[CheckinEntry], today: NaiveDate) -> DashboardSummary {
    DashboardSummary {
        total_checkins: entries.len(),
        streak: streak(entries, today),
        average_mood: average_mood_score(entries),
        distribution: mood_distribution(entries),
        trend: mood_trend(entries, today),
        insights: insight_messages(entries, today),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

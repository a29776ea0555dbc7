// SPDX-License-Identifier: MIT
//! Reflection-prompt and micro-action suggestion engine.
//!
//! Prompt selection mixes a short-term trend reading of the user's recent
//! check-ins with the mood catalog's pools. The random source is a caller
//! supplied [`RngCore`] so tests can run deterministically.

use rand_core::RngCore;

use crate::checkin::CheckinEntry;
use crate::mood::{self, Spectrum};

/// Maximum prompts surfaced per check-in.
pub const PROMPT_LIMIT: usize = 3;

/// How many trailing history entries feed the trend reading.
const TREND_WINDOW: usize = 6;

// ─── Trend ────────────────────────────────────────────────────────────────────

/// Direction of the short-term mood trend across the trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Upswing,
    Downswing,
    Steady,
}

impl Trend {
    pub fn prompt(self) -> &'static str {
        match self {
            Trend::Upswing => {
                "You have been trending brighter. What support helped you rise, and how can \
                 you honour it?"
            }
            Trend::Downswing => {
                "Your recent moods dipped a little. What gentle boundary or rest might help \
                 you today?"
            }
            Trend::Steady => {
                "You have been steady lately. Is there a routine worth celebrating or adjusting?"
            }
        }
    }
}

/// Classify the trailing window of history: the score delta between the most
/// recent entry and the oldest in the window. A swing of at least 2 in either
/// direction counts as a trend. `None` with fewer than two entries to compare.
pub fn history_trend(history: &[CheckinEntry]) -> Option<Trend> {
    let window = &history[history.len().saturating_sub(TREND_WINDOW)..];
    if window.len() < 2 {
        return None;
    }
    let newest = mood::mood_score(&window[window.len() - 1].mood_id) as i32;
    let oldest = mood::mood_score(&window[0].mood_id) as i32;
    let delta = newest - oldest;
    Some(if delta >= 2 {
        Trend::Upswing
    } else if delta <= -2 {
        Trend::Downswing
    } else {
        Trend::Steady
    })
}

// ─── Prompt set ───────────────────────────────────────────────────────────────

fn push_unique(collection: &mut Vec<String>, candidate: &str) {
    if candidate.is_empty() {
        return;
    }
    if collection.iter().any(|have| have == candidate) {
        return;
    }
    collection.push(candidate.to_string());
}

/// Build up to [`PROMPT_LIMIT`] unique reflection prompts for a mood.
///
/// The trend prompt (when the history window supports one) comes first, then
/// the mood's own pool, then uniform random draws from the full cross-mood
/// pool until the quota is met or the pool is exhausted. Unknown moods get
/// an empty set.
pub fn build_prompt_set<R: RngCore>(
    mood_id: &str,
    history: &[CheckinEntry],
    rng: &mut R,
) -> Vec<String> {
    let mut prompts = Vec::new();
    if mood::mood_by_id(mood_id).is_none() {
        return prompts;
    }

    if let Some(trend) = history_trend(history) {
        push_unique(&mut prompts, trend.prompt());
    }

    for prompt in mood::prompts_for(mood_id) {
        push_unique(&mut prompts, prompt);
    }

    while prompts.len() < PROMPT_LIMIT {
        let remaining: Vec<&str> = mood::ALL_PROMPTS
            .iter()
            .copied()
            .filter(|candidate| !prompts.iter().any(|have| have == candidate))
            .collect();
        if remaining.is_empty() {
            break;
        }
        let pick = remaining[(rng.next_u32() as usize) % remaining.len()];
        prompts.push(pick.to_string());
    }

    prompts.truncate(PROMPT_LIMIT);
    prompts
}

// ─── Micro-actions ────────────────────────────────────────────────────────────

const POSITIVE_ACTIONS: [&str; 3] = [
    "Celebrate the moment by sharing a win with someone you trust.",
    "Capture one detail you want to remember if a harder day arrives.",
    "Channel the energy into a tiny act of kindness for yourself or another.",
];

const NEUTRAL_ACTIONS: [&str; 3] = [
    "Name a simple ritual that helps you feel grounded right now.",
    "List two things you can release before the day ends.",
    "Plan a five-minute pause to check in again later tonight.",
];

const SOFT_ACTIONS: [&str; 3] = [
    "Offer yourself one sentence of validation as if you were a close friend.",
    "Choose a comfort activity to schedule within the next hour.",
    "Reach out to someone who can sit with you — even silently.",
];

const INTENSE_ACTIONS: [&str; 3] = [
    "Practice a 4-7-8 breath cycle to reset your nervous system.",
    "Identify one safety anchor nearby (texture, scent, sound).",
    "Message the community with what support would feel good right now.",
];

const DEFAULT_ACTIONS: [&str; 3] = [
    "Step outside for sixty seconds and notice three things you can see.",
    "Write a sentence that starts with “Today, I am grateful for…”.",
    "Drink a glass of water while naming a hope you have for tomorrow.",
];

const HIGH_ENERGY_ACTIONS: [&str; 2] = [
    "Take a celebratory snapshot of today’s highlight.",
    "Invest extra energy into a future-you kindness.",
];

const LOW_ENERGY_ACTIONS: [&str; 2] = [
    "Schedule a calming ritual within the next hour.",
    "Ask for support — even if it is a simple check-in emoji.",
];

fn base_actions(spectrum: Option<Spectrum>) -> &'static [&'static str] {
    match spectrum {
        Some(Spectrum::Positive) => &POSITIVE_ACTIONS,
        Some(Spectrum::Neutral) => &NEUTRAL_ACTIONS,
        Some(Spectrum::Soft) => &SOFT_ACTIONS,
        Some(Spectrum::Intense) => &INTENSE_ACTIONS,
        None => &DEFAULT_ACTIONS,
    }
}

/// Suggest exactly three micro-actions for a mood/energy combination.
///
/// The mood's spectrum picks the base list (unknown moods fall back to the
/// default list); energy at 4+ or 2- appends its extras; the default list is
/// always appended as filler; duplicates collapse in insertion order and the
/// first three survive.
pub fn suggest_micro_actions(mood_id: &str, energy: u8) -> Vec<String> {
    let spectrum = mood::mood_by_id(mood_id).map(|mood| mood.spectrum);

    let mut combined: Vec<&str> = base_actions(spectrum).to_vec();
    if energy >= 4 {
        combined.extend(HIGH_ENERGY_ACTIONS);
    } else if energy <= 2 {
        combined.extend(LOW_ENERGY_ACTIONS);
    }
    combined.extend(DEFAULT_ACTIONS);

    let mut actions = Vec::new();
    for action in combined {
        push_unique(&mut actions, action);
    }
    actions.truncate(3);
    actions
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood;
    use std::collections::HashSet;

    /// Deterministic counter rng — `next_u32` yields 0, 1, 2, …
    struct StepRng(u32);

    impl RngCore for StepRng {
        fn next_u32(&mut self) -> u32 {
            let value = self.0;
            self.0 = self.0.wrapping_add(1);
            value
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest {
                *byte = self.next_u32() as u8;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn entry(mood_id: &str) -> CheckinEntry {
        CheckinEntry {
            id: format!("c-{mood_id}"),
            mood_id: mood_id.to_string(),
            energy: 3,
            tags: Vec::new(),
            notes: String::new(),
            prompt: String::new(),
            suggested_actions: Vec::new(),
            date: "2026-08-01T09:00:00Z".to_string(),
        }
    }

    #[test]
    fn prompt_set_is_bounded_and_unique() {
        let mut rng = StepRng(0);
        let history: Vec<CheckinEntry> = vec![entry(mood::STORMY), entry(mood::RADIANT)];
        let prompts = build_prompt_set(mood::RADIANT, &history, &mut rng);
        assert!(prompts.len() <= PROMPT_LIMIT);
        let unique: HashSet<&String> = prompts.iter().collect();
        assert_eq!(unique.len(), prompts.len());
    }

    #[test]
    fn unknown_mood_yields_no_prompts() {
        let mut rng = StepRng(0);
        assert!(build_prompt_set("ecstatic", &[], &mut rng).is_empty());
    }

    #[test]
    fn trend_prompt_leads_when_history_swings_up() {
        let mut rng = StepRng(0);
        let history = vec![entry(mood::STORMY), entry(mood::RADIANT)];
        let prompts = build_prompt_set(mood::RADIANT, &history, &mut rng);
        assert_eq!(prompts[0], Trend::Upswing.prompt());
    }

    #[test]
    fn trend_prompt_leads_when_history_swings_down() {
        let mut rng = StepRng(0);
        let history = vec![entry(mood::RADIANT), entry(mood::STORMY)];
        let prompts = build_prompt_set(mood::STORMY, &history, &mut rng);
        assert_eq!(prompts[0], Trend::Downswing.prompt());
    }

    #[test]
    fn short_history_skips_the_trend_prompt() {
        let mut rng = StepRng(0);
        let history = vec![entry(mood::STORMY)];
        let prompts = build_prompt_set(mood::TENDER, &history, &mut rng);
        for trend in [Trend::Upswing, Trend::Downswing, Trend::Steady] {
            assert!(!prompts.contains(&trend.prompt().to_string()));
        }
    }

    #[test]
    fn trend_window_ignores_entries_older_than_six() {
        // Seven entries: the stormy head falls outside the window, so the
        // comparison runs steady-to-steady.
        let mut history = vec![entry(mood::STORMY)];
        history.extend((0..6).map(|_| entry(mood::STEADY)));
        assert_eq!(history_trend(&history), Some(Trend::Steady));
    }

    #[test]
    fn delta_boundaries_classify_exactly() {
        // +2 exactly: tender(2) -> hopeful(4)
        let up = vec![entry(mood::TENDER), entry(mood::HOPEFUL)];
        assert_eq!(history_trend(&up), Some(Trend::Upswing));
        // -2 exactly: hopeful(4) -> tender(2)
        let down = vec![entry(mood::HOPEFUL), entry(mood::TENDER)];
        assert_eq!(history_trend(&down), Some(Trend::Downswing));
        // +1: steady(3) -> hopeful(4)
        let flat = vec![entry(mood::STEADY), entry(mood::HOPEFUL)];
        assert_eq!(history_trend(&flat), Some(Trend::Steady));
    }

    #[test]
    fn quota_fills_from_the_cross_mood_pool() {
        // No trend (empty history): the mood pool has exactly 3 prompts, so
        // the set is full without random draws.
        let mut rng = StepRng(0);
        let prompts = build_prompt_set(mood::NUMB, &[], &mut rng);
        assert_eq!(prompts.len(), PROMPT_LIMIT);
        for prompt in mood::prompts_for(mood::NUMB) {
            assert!(prompts.contains(&prompt.to_string()));
        }
    }

    #[test]
    fn micro_actions_always_exactly_three_and_unique() {
        for mood_id in [mood::RADIANT, mood::STEADY, mood::TENDER, mood::NUMB, "unknown"] {
            for energy in 1..=5u8 {
                let actions = suggest_micro_actions(mood_id, energy);
                assert_eq!(actions.len(), 3, "{mood_id} energy {energy}");
                let unique: HashSet<&String> = actions.iter().collect();
                assert_eq!(unique.len(), 3);
            }
        }
    }

    #[test]
    fn known_mood_micro_actions_come_from_its_spectrum() {
        let actions = suggest_micro_actions(mood::STORMY, 3);
        assert_eq!(actions, INTENSE_ACTIONS.map(String::from).to_vec());
    }

    #[test]
    fn unknown_mood_micro_actions_fall_back_to_default() {
        let actions = suggest_micro_actions("unknown", 3);
        assert_eq!(actions, DEFAULT_ACTIONS.map(String::from).to_vec());
    }
}

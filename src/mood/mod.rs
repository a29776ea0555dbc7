// SPDX-License-Identifier: MIT
//! Mood catalog — static reference data for the mood definitions offered by
//! the check-in flow, their reflection-prompt pools, and the energy labels.
//!
//! This list is the canonical source of truth: one definition per id, and
//! the `score` ordering is what every trend/average computation relies on.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ─── Mood id constants ────────────────────────────────────────────────────────

pub const RADIANT: &str = "radiant";
pub const HOPEFUL: &str = "hopeful";
pub const STEADY: &str = "steady";
pub const TENDER: &str = "tender";
pub const STORMY: &str = "stormy";
pub const NUMB: &str = "numb";

// ─── Spectrum ─────────────────────────────────────────────────────────────────

/// Coarse category of a mood definition, used to bucket distribution stats
/// and pick micro-actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spectrum {
    Positive,
    Neutral,
    Soft,
    Intense,
}

impl Spectrum {
    /// Every category, in display order.
    pub const ALL: [Spectrum; 4] = [
        Spectrum::Positive,
        Spectrum::Neutral,
        Spectrum::Soft,
        Spectrum::Intense,
    ];

    /// Human-readable label, e.g. `"Positive"`.
    pub fn label(&self) -> &'static str {
        match self {
            Spectrum::Positive => "Positive",
            Spectrum::Neutral => "Neutral",
            Spectrum::Soft => "Soft",
            Spectrum::Intense => "Intense",
        }
    }
}

// ─── Mood definitions ─────────────────────────────────────────────────────────

/// A single mood option offered by the check-in flow.
#[derive(Debug, Clone, Serialize)]
pub struct MoodDefinition {
    pub id: &'static str,
    pub emoji: &'static str,
    pub label: &'static str,
    /// Short descriptive phrase shown under the label.
    pub tone: &'static str,
    pub spectrum: Spectrum,
    /// Subjective intensity score, 1 (heaviest) to 5 (brightest).
    pub score: u8,
    /// Hex accent color used by the presentation layer.
    pub color: &'static str,
}

pub const MOODS: &[MoodDefinition] = &[
    MoodDefinition {
        id: RADIANT,
        emoji: "🌈",
        label: "Radiant",
        tone: "glowing with gratitude",
        spectrum: Spectrum::Positive,
        score: 5,
        color: "#facc15",
    },
    MoodDefinition {
        id: HOPEFUL,
        emoji: "🌤️",
        label: "Hopeful",
        tone: "quietly optimistic",
        spectrum: Spectrum::Positive,
        score: 4,
        color: "#34d399",
    },
    MoodDefinition {
        id: STEADY,
        emoji: "🌱",
        label: "Steady",
        tone: "grounded and present",
        spectrum: Spectrum::Neutral,
        score: 3,
        color: "#38bdf8",
    },
    MoodDefinition {
        id: TENDER,
        emoji: "🌧️",
        label: "Tender",
        tone: "soft around the edges",
        spectrum: Spectrum::Soft,
        score: 2,
        color: "#f472b6",
    },
    MoodDefinition {
        id: STORMY,
        emoji: "⛈️",
        label: "Stormy",
        tone: "navigating big feelings",
        spectrum: Spectrum::Intense,
        score: 1,
        color: "#6366f1",
    },
    MoodDefinition {
        id: NUMB,
        emoji: "🌫️",
        label: "Numb",
        tone: "needing gentle care",
        spectrum: Spectrum::Intense,
        score: 1,
        color: "#94a3b8",
    },
];

/// Look up a mood definition by id.
pub fn mood_by_id(id: &str) -> Option<&'static MoodDefinition> {
    MOODS.iter().find(|mood| mood.id == id)
}

/// Mood score used by trend and average math. Unknown ids score 0.
pub fn mood_score(id: &str) -> u8 {
    mood_by_id(id).map(|mood| mood.score).unwrap_or(0)
}

// ─── Reflection prompts ───────────────────────────────────────────────────────

/// The per-mood reflection prompt pool. Unknown ids get an empty slice.
pub fn prompts_for(mood_id: &str) -> &'static [&'static str] {
    match mood_id {
        RADIANT => &[
            "What went right today that you want to remember on tougher days?",
            "Who or what helped you feel supported? How can you thank them (or yourself)?",
            "Capture a sensory memory from today that you want to savour later.",
        ],
        HOPEFUL => &[
            "What small step are you proud of taking toward something meaningful?",
            "Where do you notice hope in your body right now?",
            "How can you nurture this spark of optimism tomorrow?",
        ],
        STEADY => &[
            "What rhythms or rituals kept you steady today?",
            "Name one quiet win that deserves to be seen.",
            "Is there anything you want to release before resting tonight?",
        ],
        TENDER => &[
            "What emotion is visiting you? If it had a voice, what would it ask for?",
            "Who or what could offer you softness tonight?",
            "Recall a moment today that reminded you you’re human—and that’s okay.",
        ],
        STORMY => &[
            "Which thought loop feels the loudest? Try answering it with compassion.",
            "If you could ask for help without hesitation, what would you say?",
            "Name three things keeping you safe and grounded right now.",
        ],
        NUMB => &[
            "What do you think your body is protecting you from feeling?",
            "List tiny sensory anchors (a scent, a texture) you might explore gently.",
            "Who could hold space for you—even in silence—if you reached out?",
        ],
        _ => &[],
    }
}

/// The flattened cross-mood prompt pool, in catalog order.
pub static ALL_PROMPTS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    MOODS
        .iter()
        .flat_map(|mood| prompts_for(mood.id).iter().copied())
        .collect()
});

// ─── Energy ───────────────────────────────────────────────────────────────────

/// Labels for the 1–5 energy slider, lowest first.
pub const ENERGY_LABELS: [&str; 5] = ["Drained", "Low", "Even", "Bright", "Electric"];

/// Label for an energy value; out-of-range values clamp to the ends.
pub fn energy_label(energy: u8) -> &'static str {
    let idx = (energy.clamp(1, 5) - 1) as usize;
    ENERGY_LABELS[idx]
}

// ─── Tests ────────────────────────────────────────────────────────────────────

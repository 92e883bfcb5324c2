//! Generation inputs: the user profile, generation toggles, and the taste
//! classifier that turns free-form industry text into a fixed category.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// Optional per-user overrides. Each hint replaces the random archetype pick
/// it names; jitter inside the chosen archetype still applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Name of a base color scheme, e.g. "ocean".
    #[serde(default)]
    pub color_scheme: Option<String>,
    #[serde(default)]
    pub layout_style: Option<String>,
    #[serde(default)]
    pub animation_style: Option<String>,
    /// Accessibility preference. `None` keeps reduced motion on.
    #[serde(default)]
    pub reduced_motion: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub personality: Vec<String>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
}

impl UserProfile {
    pub fn preferences(&self) -> Preferences {
        self.preferences.clone().unwrap_or_default()
    }
}

/// Toggles deciding whether each synthesizer jitters around its base choice
/// or returns the unperturbed base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub randomize_colors: bool,
    pub randomize_layout: bool,
    pub randomize_animations: bool,
    pub randomize_components: bool,
    /// Recorded in metadata; text enhancement happens downstream.
    pub ai_enhancement: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            randomize_colors: true,
            randomize_layout: true,
            randomize_animations: true,
            randomize_components: true,
            ai_enhancement: false,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Taste classification
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TasteCategory {
    Professional,
    Creative,
    Corporate,
}

const PROFESSIONAL_KEYWORDS: &[&str] = &[
    "technology",
    "tech",
    "software",
    "engineering",
    "finance",
    "consulting",
    "healthcare",
    "legal",
    "science",
    "research",
];

const CREATIVE_KEYWORDS: &[&str] = &[
    "design",
    "art",
    "media",
    "music",
    "fashion",
    "photography",
    "film",
    "entertainment",
    "gaming",
    "advertising",
];


impl TasteCategory {
    /// Classifies free-form industry text. Total: every input maps to exactly
    /// one category. Professional keywords are checked before creative ones;
    /// everything else (business, banking, retail, unknown text) is `Corporate`.
    pub fn classify(industry: &str) -> Self {
        let industry = industry.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|kw| industry.contains(kw));

        if matches(PROFESSIONAL_KEYWORDS) {
            TasteCategory::Professional
        } else if matches(CREATIVE_KEYWORDS) {
            TasteCategory::Creative
        } else {
            TasteCategory::Corporate
        }
    }
}

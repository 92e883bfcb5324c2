//! Design scoring: advisory uniqueness and performance metrics.
//!
//! Default: `HeuristicScorer` (checksum dispersion + fixed penalties).
//! `AppState` holds an `Arc<dyn DesignScorer>` so the backend can be swapped
//! without touching the orchestrator or handlers.
//!
//! Uniqueness is a weak checksum for display only. It is not collision
//! resistant and must not be used as a dedup key.

use serde::{Deserialize, Serialize};

use crate::design::animation::AnimationConfig;
use crate::design::composer::SectionPlan;
use crate::design::layout::LayoutConfig;
use crate::design::palette::ColorPalette;

pub const PERFORMANCE_FLOOR: u32 = 70;
const PERFORMANCE_START: u32 = 100;
const BOUNCE_PENALTY: u32 = 10;
const DENSE_GRID_PENALTY: u32 = 5;
const MANY_COMPONENTS_PENALTY: u32 = 5;
const DENSE_GRID_SECTION_LIMIT: usize = 5;
const COMPONENT_LIMIT: usize = 6;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Borrowed view of the parts of a customization bundle the scorer reads.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub palette: &'a ColorPalette,
    pub layout: &'a LayoutConfig,
    pub animation: &'a AnimationConfig,
    pub sections: &'a SectionPlan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignScores {
    /// 0 – 100
    pub uniqueness: u32,
    /// 70 – 100
    pub performance: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends. Scoring must be a pure function
/// of its input so regenerating from a seed reproduces the same scores.
pub trait DesignScorer: Send + Sync {
    fn score(&self, input: &ScoringInput<'_>) -> DesignScores;

    /// Short backend name recorded in logs.
    fn backend(&self) -> &'static str;
}

pub struct HeuristicScorer;

impl DesignScorer for HeuristicScorer {
    fn score(&self, input: &ScoringInput<'_>) -> DesignScores {
        DesignScores {
            uniqueness: uniqueness_score(input.palette, input.layout, input.animation),
            performance: performance_score(input.layout, input.animation, input.sections),
        }
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Heuristics
// ────────────────────────────────────────────────────────────────────────────

/// Sum of UTF-16 code units mod 100, the same character codes the seed
/// hash folds.
fn checksum(canonical: &str) -> u64 {
    canonical.encode_utf16().map(u64::from).sum::<u64>() % 100
}

/// Averages the checksums of the canonical JSON of palette, layout and
/// animation, rounded and clamped to `[0, 100]`.
pub fn uniqueness_score(
    palette: &ColorPalette,
    layout: &LayoutConfig,
    animation: &AnimationConfig,
) -> u32 {
    // These types hold only strings, numbers and bools; serializing cannot fail.
    let canonical = [
        serde_json::to_string(palette).unwrap_or_default(),
        serde_json::to_string(layout).unwrap_or_default(),
        serde_json::to_string(animation).unwrap_or_default(),
    ];
    let total: u64 = canonical.iter().map(|s| checksum(s)).sum();
    let average = total as f64 / canonical.len() as f64;
    average.round().clamp(0.0, 100.0) as u32
}

/// Starts at 100 and subtracts fixed penalties for heavier designs, never
/// dropping below [`PERFORMANCE_FLOOR`].
pub fn performance_score(
    layout: &LayoutConfig,
    animation: &AnimationConfig,
    sections: &SectionPlan,
) -> u32 {
    let mut penalty = 0;

    if animation.enabled && animation.style == "bounce" {
        penalty += BOUNCE_PENALTY;
    }
    if layout.container == "grid" && layout.sections.len() > DENSE_GRID_SECTION_LIMIT {
        penalty += DENSE_GRID_PENALTY;
    }
    if sections.len() > COMPONENT_LIMIT {
        penalty += MANY_COMPONENTS_PENALTY;
    }

    PERFORMANCE_START
        .saturating_sub(penalty)
        .max(PERFORMANCE_FLOOR)
}

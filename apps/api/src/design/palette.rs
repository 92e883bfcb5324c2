//! Palette synthesis: picks a base scheme for the taste category and
//! optionally jitters it in HSL space.
//!
//! Draw order (randomized mode): scheme pick, then (h, s, l) for primary,
//! secondary and accent, then background, surface, text and text_muted picks.

use serde::{Deserialize, Serialize};

use crate::design::color::{hsl_to_rgb, is_hex_color, parse_hex, rgb_to_hsl, to_hex, Hsl};
use crate::design::errors::DesignError;
use crate::design::profile::{GenerationOptions, TasteCategory};
use crate::design::rng::SeededRandom;

pub const SUCCESS: &str = "#10B981";
pub const WARNING: &str = "#F59E0B";
pub const ERROR: &str = "#EF4444";

pub const DEFAULT_BACKGROUND: &str = "#0F172A";
pub const DEFAULT_SURFACE: &str = "#1E293B";
pub const DEFAULT_TEXT: &str = "#FFFFFF";
pub const DEFAULT_TEXT_MUTED: &str = "#94A3B8";

const BACKGROUNDS: [&str; 5] = ["#0F172A", "#111827", "#18181B", "#0C0A09", "#020617"];
const SURFACES: [&str; 5] = ["#1E293B", "#1F2937", "#27272A", "#1C1917", "#0F172A"];
const TEXTS: [&str; 5] = ["#FFFFFF", "#F8FAFC", "#F9FAFB", "#FAFAFA", "#F1F5F9"];
const TEXTS_MUTED: [&str; 5] = ["#94A3B8", "#9CA3AF", "#A1A1AA", "#A8A29E", "#CBD5E1"];

const HUE_JITTER: f64 = 0.2; // ±0.1 turn
const TONE_JITTER: f64 = 0.1; // ±0.05
const SATURATION_BOUNDS: (f64, f64) = (0.3, 0.8);
const LIGHTNESS_BOUNDS: (f64, f64) = (0.2, 0.8);

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// The ten named colors of a generated design. All values are `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_muted: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

impl ColorPalette {
    /// `(field name, value)` pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 10] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("surface", &self.surface),
            ("text", &self.text),
            ("text_muted", &self.text_muted),
            ("success", &self.success),
            ("warning", &self.warning),
            ("error", &self.error),
        ]
    }

    /// Post-generation check: every entry must be `#` + six hex digits.
    /// A failure means a static table is broken, so it is never retried.
    pub fn validate(&self) -> Result<(), DesignError> {
        match self.entries().into_iter().find(|(_, v)| !is_hex_color(v)) {
            Some((field, value)) => Err(DesignError::InvalidPalette {
                field,
                value: value.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// A named three-color starting point for one taste category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseScheme {
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl BaseScheme {
    fn new(name: &str, primary: &str, secondary: &str, accent: &str) -> Self {
        Self {
            name: name.to_string(),
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
        }
    }
}

/// Base schemes per taste category. Built once at startup and read-only after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorSchemeTable {
    pub professional: Vec<BaseScheme>,
    pub creative: Vec<BaseScheme>,
    pub corporate: Vec<BaseScheme>,
}

impl ColorSchemeTable {
    pub fn builtin() -> Self {
        Self {
            professional: vec![
                BaseScheme::new("cobalt", "#1E40AF", "#3B82F6", "#06B6D4"),
                BaseScheme::new("slate", "#334155", "#64748B", "#0EA5E9"),
                BaseScheme::new("evergreen", "#065F46", "#10B981", "#34D399"),
                BaseScheme::new("indigo", "#3730A3", "#6366F1", "#A5B4FC"),
                BaseScheme::new("steel", "#1F2937", "#4B5563", "#2563EB"),
            ],
            creative: vec![
                BaseScheme::new("sunset", "#DB2777", "#F97316", "#FACC15"),
                BaseScheme::new("violet", "#7C3AED", "#EC4899", "#22D3EE"),
                BaseScheme::new("coral", "#F43F5E", "#FB923C", "#FDE68A"),
                BaseScheme::new("lagoon", "#0D9488", "#8B5CF6", "#F472B6"),
                BaseScheme::new("neon", "#A3E635", "#22D3EE", "#E879F9"),
            ],
            corporate: vec![
                BaseScheme::new("navy", "#1E3A8A", "#1D4ED8", "#F59E0B"),
                BaseScheme::new("charcoal", "#111827", "#374151", "#DC2626"),
                BaseScheme::new("forest", "#14532D", "#15803D", "#CA8A04"),
                BaseScheme::new("burgundy", "#7F1D1D", "#991B1B", "#D97706"),
                BaseScheme::new("ocean", "#0C4A6E", "#0369A1", "#38BDF8"),
            ],
        }
    }

    pub fn for_category(&self, category: TasteCategory) -> &[BaseScheme] {
        match category {
            TasteCategory::Professional => &self.professional,
            TasteCategory::Creative => &self.creative,
            TasteCategory::Corporate => &self.corporate,
        }
    }

    /// Startup check: every category non-empty and every constant well-formed.
    pub fn validate(&self) -> Result<(), DesignError> {
        for category in [
            TasteCategory::Professional,
            TasteCategory::Creative,
            TasteCategory::Corporate,
        ] {
            let schemes = self.for_category(category);
            if schemes.is_empty() {
                return Err(DesignError::InvalidSchemeTable(format!(
                    "no base schemes for {category:?}"
                )));
            }
            for scheme in schemes {
                for hex in [&scheme.primary, &scheme.secondary, &scheme.accent] {
                    if !is_hex_color(hex) {
                        return Err(DesignError::InvalidSchemeTable(format!(
                            "scheme '{}' has malformed color '{hex}'",
                            scheme.name
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// The palette together with the base scheme it was derived from.
#[derive(Debug, Clone)]
pub struct SynthesizedPalette {
    pub scheme_name: String,
    pub category: TasteCategory,
    pub palette: ColorPalette,
}

// ────────────────────────────────────────────────────────────────────────────
// Synthesis
// ────────────────────────────────────────────────────────────────────────────

/// Builds the palette for `industry`. A `scheme_hint` naming one of the
/// category's schemes replaces the random scheme pick.
pub fn synthesize_palette(
    schemes: &ColorSchemeTable,
    industry: &str,
    scheme_hint: Option<&str>,
    options: &GenerationOptions,
    rng: &mut SeededRandom,
) -> Result<SynthesizedPalette, DesignError> {
    let category = TasteCategory::classify(industry);
    let candidates = schemes.for_category(category);

    let hinted = scheme_hint.and_then(|hint| {
        candidates
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(hint.trim()))
    });
    let base = match hinted {
        Some(scheme) => scheme,
        None => rng.try_pick(candidates).ok_or_else(|| {
            DesignError::InvalidSchemeTable(format!("no base schemes for {category:?}"))
        })?,
    };

    let palette = if options.randomize_colors {
        ColorPalette {
            primary: jitter_color(&base.primary, rng),
            secondary: jitter_color(&base.secondary, rng),
            accent: jitter_color(&base.accent, rng),
            background: rng.pick(&BACKGROUNDS).to_string(),
            surface: rng.pick(&SURFACES).to_string(),
            text: rng.pick(&TEXTS).to_string(),
            text_muted: rng.pick(&TEXTS_MUTED).to_string(),
            success: SUCCESS.to_string(),
            warning: WARNING.to_string(),
            error: ERROR.to_string(),
        }
    } else {
        ColorPalette {
            primary: base.primary.clone(),
            secondary: base.secondary.clone(),
            accent: base.accent.clone(),
            background: DEFAULT_BACKGROUND.to_string(),
            surface: DEFAULT_SURFACE.to_string(),
            text: DEFAULT_TEXT.to_string(),
            text_muted: DEFAULT_TEXT_MUTED.to_string(),
            success: SUCCESS.to_string(),
            warning: WARNING.to_string(),
            error: ERROR.to_string(),
        }
    };

    palette.validate()?;

    Ok(SynthesizedPalette {
        scheme_name: base.name.clone(),
        category,
        palette,
    })
}

/// Shifts hue by up to ±0.1 turn and nudges saturation/lightness inside their
/// bounds. Always three draws, even for a malformed input, which passes
/// through unchanged and is caught by [`ColorPalette::validate`].
fn jitter_color(hex: &str, rng: &mut SeededRandom) -> String {
    let dh = (rng.next() - 0.5) * HUE_JITTER;
    let ds = (rng.next() - 0.5) * TONE_JITTER;
    let dl = (rng.next() - 0.5) * TONE_JITTER;

    let Some(rgb) = parse_hex(hex) else {
        return hex.to_string();
    };
    let hsl = rgb_to_hsl(rgb);
    let jittered = Hsl {
        h: (hsl.h + dh).rem_euclid(1.0),
        s: (hsl.s.clamp(SATURATION_BOUNDS.0, SATURATION_BOUNDS.1) + ds)
            .clamp(SATURATION_BOUNDS.0, SATURATION_BOUNDS.1),
        l: (hsl.l.clamp(LIGHTNESS_BOUNDS.0, LIGHTNESS_BOUNDS.1) + dl)
            .clamp(LIGHTNESS_BOUNDS.0, LIGHTNESS_BOUNDS.1),
    };
    to_hex(hsl_to_rgb(jittered))
}

//! Layout synthesis: container, per-section box model, spacing and alignment.
//!
//! Draw order: archetype pick (skipped when a preference is given), container,
//! then width/alignment/padding/margin for each of the five canonical
//! sections, then spacing, then alignment.

use serde::{Deserialize, Serialize};

use crate::design::profile::GenerationOptions;
use crate::design::rng::SeededRandom;

pub const ARCHETYPES: [&str; 7] = [
    "minimal",
    "modern",
    "creative",
    "corporate",
    "grid",
    "masonry",
    "timeline",
];

const LAYOUT_SECTIONS: [&str; 5] = ["hero", "about", "projects", "skills", "contact"];
const WIDTHS: [&str; 3] = ["full", "half", "third"];
const ALIGNMENTS: [&str; 3] = ["left", "center", "right"];

const PADDING_REM: (f64, f64) = (2.0, 6.0);
const MARGIN_REM: (f64, f64) = (0.0, 2.0);
const BASE_PADDING_REM: f64 = 4.0;
const BASE_MARGIN_REM: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    pub section: String,
    pub width: String,
    pub alignment: String,
    pub padding: String,
    pub margin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub style: String,
    pub container: String,
    pub sections: Vec<SectionLayout>,
    pub spacing: String,
    pub alignment: String,
}

fn container_options(archetype: &str) -> &'static [&'static str] {
    match archetype {
        "minimal" => &["centered", "full-width"],
        "modern" => &["full-width", "centered", "split"],
        "creative" => &["asymmetric", "full-width", "split"],
        "corporate" => &["centered", "boxed"],
        "grid" => &["grid", "full-width"],
        "masonry" => &["masonry", "grid"],
        "timeline" => &["centered", "timeline"],
        _ => &["centered"],
    }
}

fn spacing_options(archetype: &str) -> &'static [&'static str] {
    match archetype {
        "minimal" => &["spacious", "relaxed"],
        "modern" => &["comfortable", "relaxed"],
        "creative" => &["dynamic", "spacious", "compact"],
        "corporate" => &["comfortable", "compact"],
        "grid" => &["compact", "comfortable"],
        "masonry" => &["compact", "tight"],
        "timeline" => &["comfortable", "relaxed"],
        _ => &["comfortable"],
    }
}

fn alignment_options(archetype: &str) -> &'static [&'static str] {
    match archetype {
        "minimal" => &["center", "left"],
        "modern" => &["left", "center"],
        "creative" => &["left", "center", "right"],
        "corporate" => &["left"],
        "grid" => &["center", "left"],
        "masonry" => &["left", "center"],
        "timeline" => &["center"],
        _ => &["left"],
    }
}

fn rem(value: f64) -> String {
    format!("{value:.2}rem")
}

/// Builds the layout. An unrecognized `style_hint` is kept as the style name
/// and resolves to single-option shortlists.
pub fn synthesize_layout(
    style_hint: Option<&str>,
    options: &GenerationOptions,
    rng: &mut SeededRandom,
) -> LayoutConfig {
    let style = match style_hint.map(str::trim).filter(|s| !s.is_empty()) {
        Some(hint) => hint.to_lowercase(),
        None => rng.pick(&ARCHETYPES).to_string(),
    };

    if !options.randomize_layout {
        return base_layout(style);
    }

    let container = rng.pick(container_options(&style)).to_string();

    let sections = LAYOUT_SECTIONS
        .iter()
        .map(|section| SectionLayout {
            section: section.to_string(),
            width: rng.pick(&WIDTHS).to_string(),
            alignment: rng.pick(&ALIGNMENTS).to_string(),
            padding: rem(rng.range(PADDING_REM.0, PADDING_REM.1)),
            margin: rem(rng.range(MARGIN_REM.0, MARGIN_REM.1)),
        })
        .collect();

    let spacing = rng.pick(spacing_options(&style)).to_string();
    let alignment = rng.pick(alignment_options(&style)).to_string();

    LayoutConfig {
        style,
        container,
        sections,
        spacing,
        alignment,
    }
}

/// The unperturbed layout for an archetype: first shortlist entries and
/// centered full-width sections.
fn base_layout(style: String) -> LayoutConfig {
    let sections = LAYOUT_SECTIONS
        .iter()
        .map(|section| SectionLayout {
            section: section.to_string(),
            width: WIDTHS[0].to_string(),
            alignment: ALIGNMENTS[1].to_string(),
            padding: rem(BASE_PADDING_REM),
            margin: rem(BASE_MARGIN_REM),
        })
        .collect();

    LayoutConfig {
        container: container_options(&style)[0].to_string(),
        spacing: spacing_options(&style)[0].to_string(),
        alignment: alignment_options(&style)[0].to_string(),
        style,
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_rem(value: &str) -> f64 {
        value.trim_end_matches("rem").parse().unwrap()
    }

    #[test]
    fn test_five_canonical_sections_in_order() {
        let mut rng = SeededRandom::new("layout");
        let layout = synthesize_layout(None, &GenerationOptions::default(), &mut rng);
        let names: Vec<&str> = layout.sections.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(names, LAYOUT_SECTIONS);
    }

    #[test]
    fn test_random_archetype_is_known_and_container_in_shortlist() {
        for i in 0..100 {
            let mut rng = SeededRandom::new(&format!("l{i}"));
            let layout = synthesize_layout(None, &GenerationOptions::default(), &mut rng);
            assert!(ARCHETYPES.contains(&layout.style.as_str()));
            assert!(container_options(&layout.style).contains(&layout.container.as_str()));
            assert!(spacing_options(&layout.style).contains(&layout.spacing.as_str()));
            assert!(alignment_options(&layout.style).contains(&layout.alignment.as_str()));
        }
    }

    #[test]
    fn test_padding_and_margin_bounds() {
        for i in 0..100 {
            let mut rng = SeededRandom::new(&format!("box{i}"));
            let layout = synthesize_layout(None, &GenerationOptions::default(), &mut rng);
            for s in &layout.sections {
                let padding = parse_rem(&s.padding);
                let margin = parse_rem(&s.margin);
                assert!((2.0..=6.0).contains(&padding), "padding {padding}");
                assert!((0.0..=2.0).contains(&margin), "margin {margin}");
                assert!(WIDTHS.contains(&s.width.as_str()));
                assert!(ALIGNMENTS.contains(&s.alignment.as_str()));
            }
        }
    }

    #[test]
    fn test_preference_skips_archetype_draw_but_keeps_jitter() {
        let mut a = SeededRandom::new("pref");
        let mut b = SeededRandom::new("pref");
        let minimal_a = synthesize_layout(Some("minimal"), &GenerationOptions::default(), &mut a);
        let minimal_b = synthesize_layout(Some("Minimal"), &GenerationOptions::default(), &mut b);
        assert_eq!(minimal_a.style, "minimal");
        assert_eq!(minimal_a, minimal_b);
        assert!(["centered", "full-width"].contains(&minimal_a.container.as_str()));
    }

    #[test]
    fn test_unrecognized_archetype_falls_back_to_single_options() {
        let mut rng = SeededRandom::new("weird");
        let layout = synthesize_layout(Some("brutalist"), &GenerationOptions::default(), &mut rng);
        assert_eq!(layout.style, "brutalist");
        assert_eq!(layout.container, "centered");
        assert_eq!(layout.spacing, "comfortable");
        assert_eq!(layout.alignment, "left");
    }

    #[test]
    fn test_fixed_layout_is_the_base_shape() {
        let options = GenerationOptions {
            randomize_layout: false,
            ..GenerationOptions::default()
        };
        let mut rng = SeededRandom::new("fixed");
        let layout = synthesize_layout(Some("grid"), &options, &mut rng);
        assert_eq!(layout.container, "grid");
        assert!(layout
            .sections
            .iter()
            .all(|s| s.width == "full" && s.alignment == "center" && s.padding == "4.00rem"));
    }
}

//! Design generation: orchestrates the full synthesis pipeline for one seed.
//!
//! Flow: seed → SeededRandom → palette → layout → typography → animation →
//!       components → score → GeneratedTemplate.
//!
//! The random source is created and dropped inside `generate_with_seed`. Every
//! synthesizer borrows it in the order above; reordering the calls changes
//! the output for every stored seed without any error, so new synthesizers
//! must be appended after the component step.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::design::animation::{synthesize_animation, AnimationConfig};
use crate::design::catalog::SectionKind;
use crate::design::composer::{compose_components, OrganismAssignment, SectionPlan};
use crate::design::errors::DesignError;
use crate::design::layout::{synthesize_layout, LayoutConfig};
use crate::design::library::DesignLibrary;
use crate::design::palette::{synthesize_palette, ColorPalette};
use crate::design::profile::{GenerationOptions, TasteCategory, UserProfile};
use crate::design::rng::SeededRandom;
use crate::design::scoring::{DesignScorer, ScoringInput};
use crate::design::typography::{synthesize_typography, TypographyConfig};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for design generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub base_template_name: String,
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub options: GenerationOptions,
    /// Reuse a stored seed to regenerate an identical design. Minted when absent.
    #[serde(default)]
    pub seed: Option<String>,
}

/// Everything the stylesheet compiler needs to render a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationBundle {
    pub colors: ColorPalette,
    pub layout: LayoutConfig,
    pub typography: TypographyConfig,
    pub animations: AnimationConfig,
    /// Page sections in render order.
    pub components: SectionPlan,
    /// Catalog organism per section kind (plus header and footer).
    pub organisms: OrganismAssignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMetadata {
    pub seed: String,
    pub base_template: String,
    pub color_scheme: String,
    pub taste_category: TasteCategory,
    pub ai_enhanced: bool,
    /// Advisory, 0 – 100. Not a dedup key.
    pub uniqueness_score: u32,
    /// Advisory, 70 – 100.
    pub performance_score: u32,
}

/// Immutable output of one generation call. `id` and `created_at` are per
/// call; everything else is a pure function of seed, profile and options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedTemplate {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub customization: CustomizationBundle,
    pub metadata: TemplateMetadata,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Generates a design, minting a fresh seed when the request carries none.
pub fn generate(
    library: &DesignLibrary,
    scorer: &dyn DesignScorer,
    request: &GenerateRequest,
) -> Result<GeneratedTemplate, DesignError> {
    let seed = match request.seed.as_deref() {
        Some(seed) => seed.to_string(),
        None => Uuid::new_v4().to_string(),
    };
    generate_with_seed(
        library,
        scorer,
        &request.base_template_name,
        &request.profile,
        &request.options,
        &seed,
    )
}

/// Runs the seeded pipeline.
///
/// Steps:
/// 1. synthesize_palette() → ColorPalette (validated)
/// 2. synthesize_layout() → LayoutConfig
/// 3. synthesize_typography() → TypographyConfig
/// 4. synthesize_animation() → AnimationConfig
/// 5. compose_components() → SectionPlan + OrganismAssignment
/// 6. scorer.score() → uniqueness / performance
pub fn generate_with_seed(
    library: &DesignLibrary,
    scorer: &dyn DesignScorer,
    base_template_name: &str,
    profile: &UserProfile,
    options: &GenerationOptions,
    seed: &str,
) -> Result<GeneratedTemplate, DesignError> {
    let preferences = profile.preferences();

    let (palette, layout, typography, animation, components) = {
        let mut rng = SeededRandom::new(seed);
        let palette = synthesize_palette(
            &library.schemes,
            &profile.industry,
            preferences.color_scheme.as_deref(),
            options,
            &mut rng,
        )?;
        let layout = synthesize_layout(preferences.layout_style.as_deref(), options, &mut rng);
        let typography = synthesize_typography(&mut rng);
        let animation = synthesize_animation(&preferences, options, &mut rng);
        let components =
            compose_components(&library.catalog, &profile.profession, options, &mut rng);
        (palette, layout, typography, animation, components)
    };

    debug!(
        "Seed {seed:?}: {:?} palette '{}', layout {}/{}, sections {:?}, hero organism {:?}",
        palette.category,
        palette.scheme_name,
        layout.style,
        layout.container,
        components.sections.kinds(),
        components.organisms.organism_for(SectionKind::Hero)
    );

    let scores = scorer.score(&ScoringInput {
        palette: &palette.palette,
        layout: &layout,
        animation: &animation,
        sections: &components.sections,
    });

    info!(
        "Generated design from '{}' (seed {seed:?}): uniqueness {}/100, \
         performance {}/100 [{} scorer]",
        base_template_name,
        scores.uniqueness,
        scores.performance,
        scorer.backend()
    );

    let name = format!(
        "{} ({}, {})",
        base_template_name.trim(),
        layout.style,
        palette.scheme_name
    );

    Ok(GeneratedTemplate {
        id: Uuid::new_v4(),
        name,
        created_at: Utc::now(),
        customization: CustomizationBundle {
            colors: palette.palette,
            layout,
            typography,
            animations: animation,
            components: components.sections,
            organisms: components.organisms,
        },
        metadata: TemplateMetadata {
            seed: seed.to_string(),
            base_template: base_template_name.to_string(),
            color_scheme: palette.scheme_name,
            taste_category: palette.category,
            ai_enhanced: options.ai_enhancement,
            uniqueness_score: scores.uniqueness,
            performance_score: scores.performance,
        },
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::color::is_hex_color;
    use crate::design::palette::ColorSchemeTable;
    use crate::design::scoring::HeuristicScorer;

    fn library() -> DesignLibrary {
        DesignLibrary::builtin("test")
    }

    fn profile(profession: &str, industry: &str) -> UserProfile {
        UserProfile {
            profession: profession.to_string(),
            industry: industry.to_string(),
            experience: "5 years".to_string(),
            skills: vec!["Rust".to_string(), "TypeScript".to_string()],
            personality: vec!["curious".to_string()],
            preferences: None,
        }
    }

    fn run(seed: &str, profile: &UserProfile, options: &GenerationOptions) -> GeneratedTemplate {
        generate_with_seed(&library(), &HeuristicScorer, "Modern Portfolio", profile, options, seed)
            .unwrap()
    }

    #[test]
    fn test_same_inputs_produce_byte_identical_output() {
        let p = profile("Backend Engineer", "software");
        let options = GenerationOptions::default();
        let a = run("determinism", &p, &options);
        let b = run("determinism", &p, &options);

        assert_eq!(
            serde_json::to_string(&a.customization).unwrap(),
            serde_json::to_string(&b.customization).unwrap()
        );
        assert_eq!(
            serde_json::to_string(&a.metadata).unwrap(),
            serde_json::to_string(&b.metadata).unwrap()
        );
        assert_eq!(a.name, b.name);
        assert_ne!(a.id, b.id, "ids are per call");
    }

    #[test]
    fn test_range_invariants_across_many_seeds() {
        let p = profile("Frontend Developer", "media");
        for i in 0..150 {
            let t = run(&format!("inv-{i}"), &p, &GenerationOptions::default());
            for (field, value) in t.customization.colors.entries() {
                assert!(is_hex_color(value), "{field} = {value} for inv-{i}");
            }
            assert!((70..=100).contains(&t.metadata.performance_score));
            assert!(t.metadata.uniqueness_score <= 100);
            for kind in [
                SectionKind::Hero,
                SectionKind::About,
                SectionKind::Projects,
                SectionKind::Contact,
            ] {
                assert!(t.customization.components.contains(kind), "{kind} missing for inv-{i}");
            }
        }
    }

    /// Seed "abc", colors fixed, technology industry.
    #[test]
    fn test_fixed_colors_for_technology_use_professional_base() {
        let options = GenerationOptions {
            randomize_colors: false,
            ..GenerationOptions::default()
        };
        let t = run("abc", &profile("Engineer", "technology"), &options);
        let colors = &t.customization.colors;
        let table = ColorSchemeTable::builtin();

        assert_eq!(t.metadata.taste_category, TasteCategory::Professional);
        assert!(table.professional.iter().any(|s| s.primary == colors.primary
            && s.secondary == colors.secondary
            && s.accent == colors.accent));
        assert_eq!(colors.background, "#0F172A");
        assert_eq!(colors.surface, "#1E293B");
        assert_eq!(colors.text, "#FFFFFF");
        assert_eq!(colors.text_muted, "#94A3B8");
    }

    /// Seed "xyz123", profession "Senior Developer": showcase decision is stable.
    #[test]
    fn test_showcase_decision_is_stable_for_seed() {
        let p = profile("Senior Developer", "technology");
        let options = GenerationOptions::default();
        let first = run("xyz123", &p, &options);
        let second = run("xyz123", &p, &options);
        assert_eq!(
            first.customization.components.contains(SectionKind::Showcase3d),
            second.customization.components.contains(SectionKind::Showcase3d)
        );
        assert_eq!(
            first.customization.components.kinds(),
            second.customization.components.kinds()
        );
    }

    #[test]
    fn test_scores_are_idempotent_per_seed_and_vary_across_seeds() {
        let p = profile("Photographer", "photography");
        let options = GenerationOptions::default();
        let mut distinct = std::collections::HashSet::new();
        for i in 0..30 {
            let seed = format!("score-{i}");
            let a = run(&seed, &p, &options);
            let b = run(&seed, &p, &options);
            assert_eq!(a.metadata.uniqueness_score, b.metadata.uniqueness_score);
            assert_eq!(a.metadata.performance_score, b.metadata.performance_score);
            distinct.insert(a.metadata.uniqueness_score);
        }
        assert!(distinct.len() > 1, "30 seeds should not all share one score");
    }

    #[test]
    fn test_missing_experience_organisms_degrade_gracefully() {
        let mut library = library();
        library
            .catalog
            .organisms
            .retain(|o| o.kind != SectionKind::Experience);

        for i in 0..50 {
            let t = generate_with_seed(
                &library,
                &HeuristicScorer,
                "Classic",
                &profile("Analyst", "finance"),
                &GenerationOptions::default(),
                &format!("noexp-{i}"),
            )
            .unwrap();
            let components = &t.customization.components;
            assert!(!components.contains(SectionKind::Experience));
            assert!(components.contains(SectionKind::Hero));
            assert!(components.contains(SectionKind::About));
            assert!(components.contains(SectionKind::Projects));
            assert!(components.contains(SectionKind::Contact));
        }
    }

    #[test]
    fn test_broken_scheme_constant_is_fatal() {
        let mut library = library();
        for scheme in &mut library.schemes.corporate {
            scheme.primary = "navy".to_string();
        }
        let err = generate_with_seed(
            &library,
            &HeuristicScorer,
            "Classic",
            &profile("Clerk", "retail"),
            &GenerationOptions::default(),
            "broken",
        )
        .unwrap_err();
        assert!(matches!(err, DesignError::InvalidPalette { field: "primary", .. }));
        assert!(err.to_string().contains("invalid generated palette"));
    }

    #[test]
    fn test_preferences_override_archetype_picks() {
        let mut p = profile("Writer", "publishing");
        p.preferences = Some(crate::design::profile::Preferences {
            color_scheme: Some("forest".to_string()),
            layout_style: Some("timeline".to_string()),
            animation_style: Some("fade".to_string()),
            reduced_motion: Some(false),
        });
        let t = run("prefs", &p, &GenerationOptions::default());
        assert_eq!(t.metadata.color_scheme, "forest");
        assert_eq!(t.customization.layout.style, "timeline");
        assert_eq!(t.customization.animations.style, "fade");
        assert!(!t.customization.animations.reduced_motion);
        assert_eq!(t.name, "Modern Portfolio (timeline, forest)");
    }

    #[test]
    fn test_generate_mints_seed_when_absent_and_reuses_given_seed() {
        let library = library();
        let mut request = GenerateRequest {
            base_template_name: "Bold".to_string(),
            profile: profile("Designer", "design"),
            options: GenerationOptions {
                ai_enhancement: true,
                ..GenerationOptions::default()
            },
            seed: None,
        };
        let minted = generate(&library, &HeuristicScorer, &request).unwrap();
        assert!(!minted.metadata.seed.is_empty());
        assert!(minted.metadata.ai_enhanced);

        request.seed = Some(minted.metadata.seed.clone());
        let replayed = generate(&library, &HeuristicScorer, &request).unwrap();
        assert_eq!(replayed.customization, minted.customization);
        assert_eq!(replayed.metadata, minted.metadata);
    }

    #[test]
    fn test_empty_seed_is_valid() {
        let t = run("", &profile("", ""), &GenerationOptions::default());
        assert_eq!(t.metadata.seed, "");
        assert_eq!(t.metadata.taste_category, TasteCategory::Corporate);
    }

    #[test]
    fn test_fully_fixed_options_still_vary_only_by_picks() {
        let options = GenerationOptions {
            randomize_colors: false,
            randomize_layout: false,
            randomize_animations: false,
            randomize_components: false,
            ai_enhancement: false,
        };
        let p = profile("Designer", "art");
        let t = run("fixed", &p, &options);
        assert!(t.customization.animations.enabled);
        assert_eq!(t.customization.components.len(), 6);
        assert!(!t.customization.components.contains(SectionKind::Showcase3d));
    }

    #[test]
    fn test_generate_request_deserialization_defaults() {
        let json = serde_json::json!({
            "base_template_name": "Minimal",
            "profile": {"profession": "Developer", "industry": "tech"}
        });
        let request: GenerateRequest = serde_json::from_value(json).unwrap();
        assert!(request.seed.is_none());
        assert_eq!(request.options, GenerationOptions::default());
    }
}

//! Animation synthesis: style, timing, easing, and playback flags.
//!
//! Draw order: style pick (skipped when a preference is given), enabled gate
//! (only when randomizing animations), duration, easing, stagger.

use serde::{Deserialize, Serialize};

use crate::design::profile::{GenerationOptions, Preferences};
use crate::design::rng::SeededRandom;

pub const STYLES: [&str; 7] = [
    "fade", "slide", "zoom", "bounce", "elastic", "parallax", "minimal",
];

const ENABLED_THRESHOLD: f64 = 0.3;
const STAGGER_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub style: String,
    pub enabled: bool,
    pub duration_ms: u32,
    pub easing: String,
    pub stagger: bool,
    /// Render-time accessibility override: when true the renderer suppresses
    /// playback regardless of `enabled`.
    pub reduced_motion: bool,
}

/// Timing profile for one style.
struct StyleProfile {
    duration_ms: (u32, u32),
    easings: &'static [&'static str],
}

fn style_profile(style: &str) -> StyleProfile {
    match style {
        "fade" => StyleProfile {
            duration_ms: (300, 800),
            easings: &["ease-in-out", "ease-out", "linear"],
        },
        "slide" => StyleProfile {
            duration_ms: (400, 900),
            easings: &["ease-out", "cubic-bezier(0.22, 1, 0.36, 1)"],
        },
        "zoom" => StyleProfile {
            duration_ms: (300, 700),
            easings: &["ease-out", "cubic-bezier(0.34, 1.56, 0.64, 1)"],
        },
        "bounce" => StyleProfile {
            duration_ms: (600, 1400),
            easings: &[
                "cubic-bezier(0.68, -0.55, 0.265, 1.55)",
                "cubic-bezier(0.34, 1.56, 0.64, 1)",
                "cubic-bezier(0.175, 0.885, 0.32, 1.275)",
            ],
        },
        "elastic" => StyleProfile {
            duration_ms: (800, 1600),
            easings: &[
                "cubic-bezier(0.5, 1.8, 0.5, 0.8)",
                "cubic-bezier(0.68, -0.6, 0.32, 1.6)",
            ],
        },
        "parallax" => StyleProfile {
            duration_ms: (1000, 2000),
            easings: &["linear", "ease-in-out"],
        },
        "minimal" => StyleProfile {
            duration_ms: (150, 400),
            easings: &["ease", "ease-out"],
        },
        _ => StyleProfile {
            duration_ms: (300, 600),
            easings: &["ease"],
        },
    }
}

pub fn synthesize_animation(
    preferences: &Preferences,
    options: &GenerationOptions,
    rng: &mut SeededRandom,
) -> AnimationConfig {
    let style = match preferences
        .animation_style
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(hint) => hint.to_lowercase(),
        None => rng.pick(&STYLES).to_string(),
    };

    let enabled = if options.randomize_animations {
        rng.chance(ENABLED_THRESHOLD)
    } else {
        true
    };

    let profile = style_profile(&style);
    let (min, max) = profile.duration_ms;
    let duration_ms = rng.range(f64::from(min), f64::from(max)).floor() as u32;
    let easing = rng.pick(profile.easings).to_string();
    let stagger = rng.chance(STAGGER_THRESHOLD);

    AnimationConfig {
        style,
        enabled,
        duration_ms,
        easing,
        stagger,
        reduced_motion: preferences.reduced_motion.unwrap_or(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounce_duration_and_easing_ranges() {
        let prefs = Preferences {
            animation_style: Some("bounce".to_string()),
            ..Preferences::default()
        };
        for i in 0..200 {
            let mut rng = SeededRandom::new(&format!("b{i}"));
            let a = synthesize_animation(&prefs, &GenerationOptions::default(), &mut rng);
            assert_eq!(a.style, "bounce");
            assert!((600..1400).contains(&a.duration_ms), "duration {}", a.duration_ms);
            assert!(a.easing.starts_with("cubic-bezier"), "easing {}", a.easing);
        }
    }

    #[test]
    fn test_enabled_gate_follows_first_draw() {
        let prefs = Preferences {
            animation_style: Some("fade".to_string()),
            ..Preferences::default()
        };
        for i in 0..50 {
            let seed = format!("gate{i}");
            let mut rng = SeededRandom::new(&seed);
            let mut control = SeededRandom::new(&seed);
            let a = synthesize_animation(&prefs, &GenerationOptions::default(), &mut rng);
            assert_eq!(a.enabled, control.next() > 0.3);
        }
    }

    #[test]
    fn test_not_randomized_is_always_enabled() {
        let options = GenerationOptions {
            randomize_animations: false,
            ..GenerationOptions::default()
        };
        for i in 0..50 {
            let mut rng = SeededRandom::new(&format!("on{i}"));
            let a = synthesize_animation(&Preferences::default(), &options, &mut rng);
            assert!(a.enabled);
            assert!(STYLES.contains(&a.style.as_str()));
        }
    }

    #[test]
    fn test_reduced_motion_defaults_on_and_honors_preference() {
        let mut rng = SeededRandom::new("rm");
        let options = GenerationOptions::default();
        let a = synthesize_animation(&Preferences::default(), &options, &mut rng);
        assert!(a.reduced_motion, "no preference keeps the accessibility override on");

        let prefs = Preferences {
            reduced_motion: Some(false),
            ..Preferences::default()
        };
        let mut rng = SeededRandom::new("rm");
        let b = synthesize_animation(&prefs, &GenerationOptions::default(), &mut rng);
        assert!(!b.reduced_motion);
        // the preference is not a draw; everything else matches
        assert_eq!((a.style, a.duration_ms, a.easing), (b.style, b.duration_ms, b.easing));
    }

    #[test]
    fn test_unknown_style_uses_generic_profile() {
        let prefs = Preferences {
            animation_style: Some("wobble".to_string()),
            ..Preferences::default()
        };
        let mut rng = SeededRandom::new("wobble");
        let a = synthesize_animation(&prefs, &GenerationOptions::default(), &mut rng);
        assert_eq!(a.easing, "ease");
        assert!((300..600).contains(&a.duration_ms));
    }
}

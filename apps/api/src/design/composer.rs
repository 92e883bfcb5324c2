//! Component composition: decides which sections a page has, in what order,
//! how each is customized, and which catalog organism renders each kind.
//!
//! Two linked outputs, joined by [`SectionKind`]:
//! - [`SectionPlan`]: the ordered logical sections with their customization;
//! - [`OrganismAssignment`]: the catalog variant chosen per kind.
//!
//! Draw order (randomized): skills gate, experience gate, showcase gate and
//! nominal position (creative professions only), then per section in nominal
//! order a position jitter followed by its customization draws, then one
//! organism pick per assigned kind.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::design::catalog::{Catalog, SectionKind};
use crate::design::profile::GenerationOptions;
use crate::design::rng::SeededRandom;

const SKILLS_THRESHOLD: f64 = 0.3;
const EXPERIENCE_THRESHOLD: f64 = 0.4;
const SHOWCASE_THRESHOLD: f64 = 0.5;
const SHOWCASE_POSITION: (f64, f64) = (2.0, 5.0);
/// Positions move by at most this much in either direction.
const POSITION_JITTER: f64 = 1.0;

const SHOWCASE_PROFESSIONS: [&str; 2] = ["developer", "designer"];

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One selected and customized section instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub id: String,
    pub kind: SectionKind,
    /// Continuous sort key; lower renders first.
    pub position: f64,
    pub enabled: bool,
    pub customization: Map<String, Value>,
}

/// Ordered logical sections of the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionPlan {
    pub sections: Vec<ComponentConfig>,
}

impl SectionPlan {
    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }

    pub fn contains(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }
}

/// Catalog organism id chosen for each rendered kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganismAssignment {
    pub organisms: BTreeMap<SectionKind, String>,
}

impl OrganismAssignment {
    pub fn organism_for(&self, kind: SectionKind) -> Option<&str> {
        self.organisms.get(&kind).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentPlan {
    pub sections: SectionPlan,
    pub organisms: OrganismAssignment,
}

// ────────────────────────────────────────────────────────────────────────────
// Customization tables
// ────────────────────────────────────────────────────────────────────────────

/// How one customization key is drawn. The base value is the first option,
/// `true`, or the `base` count respectively.
enum Choice {
    OneOf(&'static [&'static str]),
    Flag,
    Count { min: u64, max: u64, base: u64 },
}

fn customization_table(kind: SectionKind) -> &'static [(&'static str, Choice)] {
    match kind {
        SectionKind::Hero => &[
            (
                "background_style",
                Choice::OneOf(&["gradient", "solid", "particles", "mesh", "image"]),
            ),
            ("layout", Choice::OneOf(&["centered", "split", "left-aligned"])),
            (
                "entrance_animation",
                Choice::OneOf(&["fade-up", "slide-in", "zoom-in", "typewriter"]),
            ),
        ],
        SectionKind::About => &[
            ("layout", Choice::OneOf(&["side-by-side", "stacked", "card"])),
            ("show_avatar", Choice::Flag),
        ],
        SectionKind::Projects => &[
            ("layout", Choice::OneOf(&["grid", "masonry", "carousel", "list"])),
            ("columns", Choice::Count { min: 2, max: 4, base: 3 }),
            ("hover_effect", Choice::OneOf(&["lift", "glow", "tilt", "zoom"])),
        ],
        SectionKind::Skills => &[
            ("display", Choice::OneOf(&["bars", "tags", "radial", "icons"])),
            ("show_levels", Choice::Flag),
        ],
        SectionKind::Experience => &[
            ("display", Choice::OneOf(&["timeline", "cards", "list"])),
            ("show_logos", Choice::Flag),
        ],
        SectionKind::Contact => &[
            ("layout", Choice::OneOf(&["form", "split", "minimal"])),
            ("show_socials", Choice::Flag),
        ],
        SectionKind::Showcase3d => &[
            ("scene", Choice::OneOf(&["orbit", "floating-cards", "particles", "gallery"])),
            ("interactive", Choice::Flag),
        ],
        SectionKind::Header | SectionKind::Footer => &[],
    }
}

/// Draws a customization bag, or returns the base bag when `rng` is `None`.
fn customize(kind: SectionKind, mut rng: Option<&mut SeededRandom>) -> Map<String, Value> {
    customization_table(kind)
        .iter()
        .map(|(key, choice)| {
            let value = match (choice, rng.as_deref_mut()) {
                (Choice::OneOf(options), Some(rng)) => Value::from(*rng.pick(options)),
                (Choice::OneOf(options), None) => Value::from(options[0]),
                (Choice::Flag, Some(rng)) => Value::from(rng.chance(0.5)),
                (Choice::Flag, None) => Value::from(true),
                (Choice::Count { min, max, .. }, Some(rng)) => {
                    Value::from(min + rng.index((max - min + 1) as usize) as u64)
                }
                (Choice::Count { base, .. }, None) => Value::from(*base),
            };
            (key.to_string(), value)
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Composition
// ────────────────────────────────────────────────────────────────────────────

/// True if `profession` mentions a role that gets the 3D showcase offer.
pub fn qualifies_for_showcase(profession: &str) -> bool {
    let profession = profession.to_lowercase();
    SHOWCASE_PROFESSIONS.iter().any(|p| profession.contains(p))
}

/// Selects, orders, and customizes page sections.
///
/// Hero, about, projects and contact are always planned. A planned kind with
/// no catalog organisms is dropped silently. With `randomize_components` off
/// the result is fully deterministic: all six canonical sections, nominal
/// order, base customization, first organism per kind, and no draws.
pub fn compose_components(
    catalog: &Catalog,
    profession: &str,
    options: &GenerationOptions,
    rng: &mut SeededRandom,
) -> ComponentPlan {
    if !options.randomize_components {
        return compose_base(catalog);
    }

    let mut planned: Vec<(SectionKind, f64)> = vec![
        (SectionKind::Hero, 1.0),
        (SectionKind::About, 2.0),
        (SectionKind::Projects, 3.0),
    ];
    if rng.chance(SKILLS_THRESHOLD) {
        planned.push((SectionKind::Skills, 4.0));
    }
    if rng.chance(EXPERIENCE_THRESHOLD) {
        planned.push((SectionKind::Experience, 5.0));
    }
    planned.push((SectionKind::Contact, 6.0));

    if qualifies_for_showcase(profession) && rng.chance(SHOWCASE_THRESHOLD) {
        let nominal = rng.range(SHOWCASE_POSITION.0, SHOWCASE_POSITION.1);
        planned.push((SectionKind::Showcase3d, nominal));
    }

    planned.retain(|(kind, _)| !kind.is_catalog_backed() || catalog.has_kind(*kind));
    planned.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut sections: Vec<ComponentConfig> = planned
        .into_iter()
        .map(|(kind, nominal)| {
            let position = nominal + (rng.next() - 0.5) * 2.0 * POSITION_JITTER;
            section(kind, position, customize(kind, Some(&mut *rng)))
        })
        .collect();
    sections.sort_by(|a, b| a.position.total_cmp(&b.position));

    let sections = SectionPlan { sections };
    let organisms = assign_organisms(catalog, &sections, Some(rng));

    ComponentPlan {
        sections,
        organisms,
    }
}

fn compose_base(catalog: &Catalog) -> ComponentPlan {
    let sections = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Contact,
    ]
    .into_iter()
    .filter(|kind| catalog.has_kind(*kind))
    .enumerate()
    .map(|(i, kind)| section(kind, (i + 1) as f64, customize(kind, None)))
    .collect();

    let sections = SectionPlan { sections };
    let organisms = assign_organisms(catalog, &sections, None);
    ComponentPlan {
        sections,
        organisms,
    }
}

fn section(kind: SectionKind, position: f64, customization: Map<String, Value>) -> ComponentConfig {
    ComponentConfig {
        id: format!("{kind}-section"),
        kind,
        position,
        enabled: true,
        customization,
    }
}

/// Picks one organism for the page chrome (header, footer) and for every
/// catalog-backed kind in the plan, in catalog kind order.
fn assign_organisms(
    catalog: &Catalog,
    plan: &SectionPlan,
    mut rng: Option<&mut SeededRandom>,
) -> OrganismAssignment {
    let mut organisms = BTreeMap::new();

    for kind in SectionKind::CATALOG_KINDS {
        let chrome = matches!(kind, SectionKind::Header | SectionKind::Footer);
        if !chrome && !plan.contains(kind) {
            continue;
        }
        let variants = catalog.by_kind(kind);
        let chosen = match rng.as_deref_mut() {
            Some(rng) => rng.try_pick(&variants),
            None => variants.first(),
        };
        if let Some(organism) = chosen {
            organisms.insert(kind, organism.id.clone());
        }
    }

    OrganismAssignment { organisms }
}

//! Organism catalog: the static registry of section-level design variants.
//!
//! Each organism is one way to render a section kind: the sub-components it
//! is assembled from, the style variants it supports, its default props, and
//! its responsive layout. The catalog is built once at startup and only read
//! afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// ────────────────────────────────────────────────────────────────────────────
// Section kinds
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Hero,
    About,
    Projects,
    Skills,
    Experience,
    Contact,
    Footer,
    /// Interactive 3D project showcase. Not catalog-backed.
    #[serde(rename = "showcase3d")]
    Showcase3d,
}

impl SectionKind {
    /// The eight kinds the catalog is tagged with, in page order.
    pub const CATALOG_KINDS: [SectionKind; 8] = [
        SectionKind::Header,
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Contact,
        SectionKind::Footer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Experience => "experience",
            SectionKind::Contact => "contact",
            SectionKind::Footer => "footer",
            SectionKind::Showcase3d => "showcase3d",
        }
    }

    pub fn is_catalog_backed(self) -> bool {
        self != SectionKind::Showcase3d
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::CATALOG_KINDS
            .into_iter()
            .chain([SectionKind::Showcase3d])
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown section kind '{s}'"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Organisms
// ────────────────────────────────────────────────────────────────────────────

/// Responsive layout of an organism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganismLayout {
    pub container: String,
    /// Ordered sub-sections inside the container.
    pub sections: Vec<String>,
    /// Breakpoint name → container class override.
    pub breakpoints: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    pub id: String,
    pub kind: SectionKind,
    pub name: String,
    pub components: Vec<String>,
    pub variants: Vec<String>,
    pub default_props: Value,
    pub layout: OrganismLayout,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub version: String,
    pub organisms: Vec<Organism>,
}

impl Catalog {
    pub fn new(version: impl Into<String>, organisms: Vec<Organism>) -> Self {
        Self {
            version: version.into(),
            organisms,
        }
    }

    /// Organisms of one kind, in catalog order.
    pub fn by_kind(&self, kind: SectionKind) -> Vec<&Organism> {
        self.organisms.iter().filter(|o| o.kind == kind).collect()
    }

    pub fn has_kind(&self, kind: SectionKind) -> bool {
        self.organisms.iter().any(|o| o.kind == kind)
    }

    /// Entry count for each catalog kind, zeros included.
    pub fn counts(&self) -> BTreeMap<SectionKind, usize> {
        SectionKind::CATALOG_KINDS
            .into_iter()
            .map(|kind| (kind, self.by_kind(kind).len()))
            .collect()
    }

    /// The built-in catalog: 50 organisms across the eight section kinds.
    pub fn builtin(version: impl Into<String>) -> Self {
        use SectionKind::*;

        let organisms = vec![
            // ── header ───────────────────────────────────────────────
            organism("header-minimal", Header, "Minimal Bar")
                .with_components(&["logo", "nav-links"])
                .with_variants(&["transparent", "solid"])
                .with_props(json!({"sticky": true}))
                .with_container("flex-between")
                .with_sections(&["brand", "nav"])
                .with_breakpoints(&[("mobile", "stack")]),
            organism("header-centered", Header, "Centered Brand")
                .with_components(&["logo", "nav-links", "divider"])
                .with_variants(&["light", "dark"])
                .with_props(json!({"sticky": false}))
                .with_container("flex-center")
                .with_sections(&["brand", "nav"])
                .with_breakpoints(&[("mobile", "stack")]),
            organism("header-glass", Header, "Glass Navigation")
                .with_components(&["logo", "nav-links", "cta-button"])
                .with_variants(&["frosted", "tinted"])
                .with_props(json!({"sticky": true, "blur": 12}))
                .with_container("flex-between")
                .with_sections(&["brand", "nav", "cta"])
                .with_breakpoints(&[("mobile", "drawer")]),
            organism("header-sidebar", Header, "Side Rail")
                .with_components(&["logo", "nav-links", "social-icons"])
                .with_variants(&["compact", "expanded"])
                .with_props(json!({"position": "left"}))
                .with_container("column")
                .with_sections(&["brand", "nav", "social"])
                .with_breakpoints(&[("tablet", "top-bar"), ("mobile", "drawer")]),
            organism("header-split", Header, "Split Header")
                .with_components(&["logo", "nav-links", "theme-toggle"])
                .with_variants(&["outline", "filled"])
                .with_props(json!({"sticky": true}))
                .with_container("grid-3")
                .with_sections(&["brand", "nav", "actions"])
                .with_breakpoints(&[("mobile", "stack")]),
            // ── hero ─────────────────────────────────────────────────
            organism("hero-centered", Hero, "Centered Statement")
                .with_components(&["heading", "subheading", "cta-button"])
                .with_variants(&["gradient", "solid"])
                .with_props(json!({"headline_size": "xl"}))
                .with_container("center")
                .with_sections(&["headline", "tagline", "actions"])
                .with_breakpoints(&[("mobile", "center")]),
            organism("hero-split", Hero, "Split Portrait")
                .with_components(&["heading", "avatar", "cta-button"])
                .with_variants(&["left-image", "right-image"])
                .with_props(json!({"image_ratio": "1:1"}))
                .with_container("grid-2")
                .with_sections(&["copy", "media"])
                .with_breakpoints(&[("mobile", "stack")]),
            organism("hero-typewriter", Hero, "Typewriter Intro")
                .with_components(&["heading", "typewriter-text", "scroll-hint"])
                .with_variants(&["mono", "sans"])
                .with_props(json!({"type_speed_ms": 60}))
                .with_container("center")
                .with_sections(&["headline", "typed", "hint"])
                .with_breakpoints(&[("mobile", "center")]),
            organism("hero-particles", Hero, "Particle Field")
                .with_components(&["heading", "particle-canvas", "cta-button"])
                .with_variants(&["dense", "sparse"])
                .with_props(json!({"particle_count": 120}))
                .with_container("full-bleed")
                .with_sections(&["canvas", "headline", "actions"])
                .with_breakpoints(&[("mobile", "static-bg")]),
            organism("hero-video", Hero, "Video Backdrop")
                .with_components(&["heading", "video-background", "cta-button"])
                .with_variants(&["muted", "dimmed"])
                .with_props(json!({"autoplay": true}))
                .with_container("full-bleed")
                .with_sections(&["media", "headline"])
                .with_breakpoints(&[("mobile", "poster")]),
            organism("hero-gradient-mesh", Hero, "Gradient Mesh")
                .with_components(&["heading", "mesh-background", "badge"])
                .with_variants(&["warm", "cool"])
                .with_props(json!({"animated": true}))
                .with_container("center")
                .with_sections(&["badge", "headline", "tagline"])
                .with_breakpoints(&[("mobile", "center")]),
            organism("hero-minimal-text", Hero, "Minimal Text")
                .with_components(&["heading", "subheading"])
                .with_variants(&["serif", "sans"])
                .with_props(json!({"headline_size": "lg"}))
                .with_container("left")
                .with_sections(&["headline", "tagline"])
                .with_breakpoints(&[("mobile", "left")]),
            organism("hero-stats", Hero, "Headline With Stats")
                .with_components(&["heading", "stat-counter", "cta-button"])
                .with_variants(&["cards", "inline"])
                .with_props(json!({"stat_count": 3}))
                .with_container("grid-2")
                .with_sections(&["copy", "stats"])
                .with_breakpoints(&[("mobile", "stack")]),
            // ── about ────────────────────────────────────────────────
            organism("about-side-by-side", About, "Side By Side")
                .with_components(&["avatar", "bio-text", "highlights"])
                .with_variants(&["image-left", "image-right"])
                .with_props(json!({"avatar_shape": "rounded"}))
                .with_container("grid-2")
                .with_sections(&["media", "bio"])
                .with_breakpoints(&[("mobile", "stack")]),
            organism("about-card", About, "Profile Card")
                .with_components(&["avatar", "bio-text", "social-icons"])
                .with_variants(&["elevated", "outlined"])
                .with_props(json!({"max_width": "720px"}))
                .with_container("center")
                .with_sections(&["card"])
                .with_breakpoints(&[("mobile", "full")]),
            organism("about-story", About, "Story Blocks")
                .with_components(&["heading", "bio-text", "quote"])
                .with_variants(&["alternating", "stacked"])
                .with_props(json!({"paragraphs": 3}))
                .with_container("column")
                .with_sections(&["intro", "story", "quote"])
                .with_breakpoints(&[("mobile", "column")]),
            organism("about-facts", About, "Quick Facts")
                .with_components(&["bio-text", "fact-list", "avatar"])
                .with_variants(&["grid", "list"])
                .with_props(json!({"fact_count": 4}))
                .with_container("grid-2")
                .with_sections(&["bio", "facts"])
                .with_breakpoints(&[("mobile", "stack")]),
            organism("about-timeline-intro", About, "Intro Timeline")
                .with_components(&["bio-text", "mini-timeline"])
                .with_variants(&["vertical", "horizontal"])
                .with_props(json!({"milestones": 4}))
                .with_container("column")
                .with_sections(&["bio", "timeline"])
                .with_breakpoints(&[("mobile", "vertical")]),
            organism("about-minimal", About, "Minimal Bio")
                .with_components(&["bio-text"])
                .with_variants(&["plain"])
                .with_container("narrow")
                .with_sections(&["bio"]),
            // ── projects ─────────────────────────────────────────────
            organism("projects-grid", Projects, "Card Grid")
                .with_components(&["project-card", "tag-list", "filter-bar"])
                .with_variants(&["shadow", "border"])
                .with_props(json!({"columns": 3}))
                .with_container("grid-3")
                .with_sections(&["filters", "grid"])
                .with_breakpoints(&[("tablet", "grid-2"), ("mobile", "grid-1")]),
            organism("projects-masonry", Projects, "Masonry Wall")
                .with_components(&["project-card", "image-thumb"])
                .with_variants(&["tight", "loose"])
                .with_props(json!({"columns": 3}))
                .with_container("masonry")
                .with_sections(&["wall"])
                .with_breakpoints(&[("mobile", "grid-1")]),
            organism("projects-carousel", Projects, "Carousel")
                .with_components(&["project-card", "carousel-controls"])
                .with_variants(&["peek", "full"])
                .with_props(json!({"autoplay": false}))
                .with_container("scroll-x")
                .with_sections(&["track", "controls"])
                .with_breakpoints(&[("mobile", "scroll-x")]),
            organism("projects-list", Projects, "Detailed List")
                .with_components(&["project-row", "tag-list", "link-button"])
                .with_variants(&["striped", "plain"])
                .with_props(json!({"show_dates": true}))
                .with_container("column")
                .with_sections(&["list"]),
            organism("projects-featured", Projects, "Featured Plus Grid")
                .with_components(&["featured-card", "project-card"])
                .with_variants(&["hero-first", "balanced"])
                .with_props(json!({"featured_count": 1}))
                .with_container("grid-2")
                .with_sections(&["featured", "grid"])
                .with_breakpoints(&[("mobile", "stack")]),
            organism("projects-case-study", Projects, "Case Studies")
                .with_components(&["case-study-block", "image-thumb", "metric-badge"])
                .with_variants(&["long", "summary"])
                .with_props(json!({"max_items": 4}))
                .with_container("column")
                .with_sections(&["studies"]),
            organism("projects-tilt", Projects, "Tilt Cards")
                .with_components(&["tilt-card", "tag-list"])
                .with_variants(&["glare", "flat"])
                .with_props(json!({"max_tilt_deg": 10}))
                .with_container("grid-3")
                .with_sections(&["grid"])
                .with_breakpoints(&[("mobile", "grid-1")]),
            organism("projects-bento", Projects, "Bento Grid")
                .with_components(&["project-card", "image-thumb", "stat-counter"])
                .with_variants(&["mixed", "uniform"])
                .with_props(json!({"columns": 4}))
                .with_container("bento")
                .with_sections(&["grid"])
                .with_breakpoints(&[("tablet", "grid-2"), ("mobile", "grid-1")]),
            // ── skills ───────────────────────────────────────────────
            organism("skills-bars", Skills, "Progress Bars")
                .with_components(&["skill-bar", "heading"])
                .with_variants(&["thin", "thick"])
                .with_props(json!({"show_percent": true}))
                .with_container("grid-2")
                .with_sections(&["bars"])
                .with_breakpoints(&[("mobile", "grid-1")]),
            organism("skills-tags", Skills, "Tag Cloud")
                .with_components(&["tag-list"])
                .with_variants(&["pill", "square"])
                .with_props(json!({"group_by_category": true}))
                .with_container("flow")
                .with_sections(&["tags"]),
            organism("skills-radial", Skills, "Radial Gauges")
                .with_components(&["radial-gauge", "heading"])
                .with_variants(&["ring", "pie"])
                .with_props(json!({"size": 96}))
                .with_container("grid-4")
                .with_sections(&["gauges"])
                .with_breakpoints(&[("mobile", "grid-2")]),
            organism("skills-icons", Skills, "Icon Grid")
                .with_components(&["skill-icon", "tooltip"])
                .with_variants(&["mono", "color"])
                .with_props(json!({"icon_size": 48}))
                .with_container("grid-6")
                .with_sections(&["icons"])
                .with_breakpoints(&[("tablet", "grid-4"), ("mobile", "grid-3")]),
            organism("skills-matrix", Skills, "Skill Matrix")
                .with_components(&["matrix-table", "level-dot"])
                .with_variants(&["dots", "stars"])
                .with_props(json!({"levels": 5}))
                .with_container("table")
                .with_sections(&["matrix"])
                .with_breakpoints(&[("mobile", "list")]),
            organism("skills-categories", Skills, "Category Columns")
                .with_components(&["category-card", "tag-list"])
                .with_variants(&["cards", "columns"])
                .with_props(json!({"max_categories": 4}))
                .with_container("grid-3")
                .with_sections(&["categories"])
                .with_breakpoints(&[("mobile", "stack")]),
            // ── experience ───────────────────────────────────────────
            organism("experience-timeline", Experience, "Vertical Timeline")
                .with_components(&["timeline-item", "company-logo"])
                .with_variants(&["left", "alternating"])
                .with_props(json!({"show_dates": true}))
                .with_container("timeline")
                .with_sections(&["items"])
                .with_breakpoints(&[("mobile", "left")]),
            organism("experience-cards", Experience, "Role Cards")
                .with_components(&["role-card", "company-logo", "tag-list"])
                .with_variants(&["elevated", "flat"])
                .with_props(json!({"expandable": true}))
                .with_container("grid-2")
                .with_sections(&["cards"])
                .with_breakpoints(&[("mobile", "grid-1")]),
            organism("experience-list", Experience, "Compact List")
                .with_components(&["role-row"])
                .with_variants(&["dense", "relaxed"])
                .with_props(json!({"show_location": false}))
                .with_container("column")
                .with_sections(&["rows"]),
            organism("experience-tabs", Experience, "Company Tabs")
                .with_components(&["tab-bar", "role-detail"])
                .with_variants(&["vertical", "horizontal"])
                .with_props(json!({"default_tab": 0}))
                .with_container("grid-2")
                .with_sections(&["tabs", "detail"])
                .with_breakpoints(&[("mobile", "accordion")]),
            organism("experience-horizontal", Experience, "Horizontal Timeline")
                .with_components(&["timeline-item", "scroll-hint"])
                .with_variants(&["dots", "bars"])
                .with_props(json!({"snap": true}))
                .with_container("scroll-x")
                .with_sections(&["track"])
                .with_breakpoints(&[("mobile", "timeline")]),
            organism("experience-resume", Experience, "Resume Block")
                .with_components(&["role-row", "download-button"])
                .with_variants(&["classic", "modern"])
                .with_props(json!({"show_download": true}))
                .with_container("column")
                .with_sections(&["rows", "actions"]),
            // ── contact ──────────────────────────────────────────────
            organism("contact-form", Contact, "Contact Form")
                .with_components(&["input-field", "textarea", "submit-button"])
                .with_variants(&["boxed", "underline"])
                .with_props(json!({"fields": ["name", "email", "message"]}))
                .with_container("narrow")
                .with_sections(&["form"]),
            organism("contact-split", Contact, "Split Form")
                .with_components(&["contact-info", "input-field", "submit-button"])
                .with_variants(&["info-left", "info-right"])
                .with_props(json!({"show_map": false}))
                .with_container("grid-2")
                .with_sections(&["info", "form"])
                .with_breakpoints(&[("mobile", "stack")]),
            organism("contact-minimal", Contact, "Email Link")
                .with_components(&["heading", "email-link"])
                .with_variants(&["large", "inline"])
                .with_container("center")
                .with_sections(&["cta"]),
            organism("contact-social", Contact, "Social Grid")
                .with_components(&["social-icons", "email-link"])
                .with_variants(&["icons", "labels"])
                .with_props(json!({"networks": 4}))
                .with_container("center")
                .with_sections(&["links"]),
            organism("contact-calendar", Contact, "Booking Embed")
                .with_components(&["calendar-embed", "heading"])
                .with_variants(&["inline", "popup"])
                .with_props(json!({"provider": "external"}))
                .with_container("narrow")
                .with_sections(&["embed"]),
            organism("contact-cta-banner", Contact, "CTA Banner")
                .with_components(&["heading", "cta-button"])
                .with_variants(&["gradient", "solid"])
                .with_props(json!({"full_width": true}))
                .with_container("full-bleed")
                .with_sections(&["banner"])
                .with_breakpoints(&[("mobile", "center")]),
            // ── footer ───────────────────────────────────────────────
            organism("footer-minimal", Footer, "Minimal Footer")
                .with_components(&["copyright"])
                .with_variants(&["light", "dark"])
                .with_container("center")
                .with_sections(&["legal"]),
            organism("footer-social", Footer, "Social Footer")
                .with_components(&["social-icons", "copyright"])
                .with_variants(&["icons", "labels"])
                .with_container("flex-between")
                .with_sections(&["social", "legal"])
                .with_breakpoints(&[("mobile", "stack")]),
            organism("footer-columns", Footer, "Link Columns")
                .with_components(&["link-column", "copyright", "logo"])
                .with_variants(&["three", "four"])
                .with_props(json!({"columns": 3}))
                .with_container("grid-4")
                .with_sections(&["brand", "links", "legal"])
                .with_breakpoints(&[("mobile", "stack")]),
            organism("footer-back-to-top", Footer, "Back To Top")
                .with_components(&["scroll-top-button", "copyright"])
                .with_variants(&["floating", "inline"])
                .with_container("flex-between")
                .with_sections(&["legal", "actions"]),
            organism("footer-newsletter", Footer, "Newsletter Footer")
                .with_components(&["input-field", "submit-button", "copyright"])
                .with_variants(&["boxed", "inline"])
                .with_props(json!({"double_opt_in": true}))
                .with_container("grid-2")
                .with_sections(&["signup", "legal"])
                .with_breakpoints(&[("mobile", "stack")]),
        ];

        Catalog::new(version, organisms)
    }
}

fn organism(id: &str, kind: SectionKind, name: &str) -> Organism {
    Organism {
        id: id.to_string(),
        kind,
        name: name.to_string(),
        components: Vec::new(),
        variants: Vec::new(),
        default_props: json!({}),
        layout: OrganismLayout {
            container: String::new(),
            sections: Vec::new(),
            breakpoints: BTreeMap::new(),
        },
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// Row builders for the built-in table.
impl Organism {
    fn with_components(mut self, components: &[&str]) -> Self {
        self.components = owned(components);
        self
    }

    fn with_variants(mut self, variants: &[&str]) -> Self {
        self.variants = owned(variants);
        self
    }

    fn with_props(mut self, default_props: Value) -> Self {
        self.default_props = default_props;
        self
    }

    fn with_container(mut self, container: &str) -> Self {
        self.layout.container = container.to_string();
        self
    }

    fn with_sections(mut self, sections: &[&str]) -> Self {
        self.layout.sections = owned(sections);
        self
    }

    fn with_breakpoints(mut self, breakpoints: &[(&str, &str)]) -> Self {
        self.layout.breakpoints = breakpoints
            .iter()
            .map(|(bp, class)| (bp.to_string(), class.to_string()))
            .collect();
        self
    }
}

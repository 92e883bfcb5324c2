//! Typography synthesis. One font family for headings and body, and a
//! five-step type scale offset from fixed minimums.
//!
//! Font and scale are not profile-conditioned.

use serde::{Deserialize, Serialize};

use crate::design::rng::SeededRandom;

pub const FONT_FAMILIES: [&str; 10] = [
    "Inter",
    "Poppins",
    "Montserrat",
    "Playfair Display",
    "Roboto",
    "Lato",
    "Open Sans",
    "Raleway",
    "Source Sans Pro",
    "Nunito",
];

/// `(min, max)` in rem per scale step, in draw order.
const H1_REM: (f64, f64) = (3.0, 5.0);
const H2_REM: (f64, f64) = (2.0, 3.5);
const H3_REM: (f64, f64) = (1.5, 2.5);
const BODY_REM: (f64, f64) = (0.875, 1.125);
const SMALL_REM: (f64, f64) = (0.75, 0.875);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeScale {
    pub h1: String,
    pub h2: String,
    pub h3: String,
    pub body: String,
    pub small: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    pub light: u16,
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

impl Default for FontWeights {
    fn default() -> Self {
        Self {
            light: 300,
            normal: 400,
            medium: 500,
            bold: 700,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyConfig {
    pub heading_font: String,
    pub body_font: String,
    pub scale: TypeScale,
    pub weights: FontWeights,
}

fn step(rng: &mut SeededRandom, (min, max): (f64, f64)) -> String {
    format!("{:.3}rem", rng.range(min, max))
}

/// Six draws: font, then h1, h2, h3, body, small.
pub fn synthesize_typography(rng: &mut SeededRandom) -> TypographyConfig {
    let font = rng.pick(&FONT_FAMILIES).to_string();
    let scale = TypeScale {
        h1: step(rng, H1_REM),
        h2: step(rng, H2_REM),
        h3: step(rng, H3_REM),
        body: step(rng, BODY_REM),
        small: step(rng, SMALL_REM),
    };

    TypographyConfig {
        heading_font: font.clone(),
        body_font: font,
        scale,
        weights: FontWeights::default(),
    }
}

// Procedural design engine.
// Implements: seeded randomness, palette/layout/typography/animation synthesis,
// catalog-driven section composition, advisory scoring, generation.
// Everything here is synchronous and free of I/O; handlers are the only async edge.

pub mod animation;
pub mod catalog;
pub mod color;
pub mod composer;
pub mod errors;
pub mod generator;
pub mod handlers;
pub mod layout;
pub mod library;
pub mod palette;
pub mod profile;
pub mod rng;
pub mod scoring;
pub mod typography;

use thiserror::Error;

/// Failures of the design engine. All of them point at broken static data,
/// so none are retried.
#[derive(Debug, Error)]
pub enum DesignError {
    #[error("invalid generated palette: {field} = '{value}'")]
    InvalidPalette { field: &'static str, value: String },

    #[error("invalid color scheme table: {0}")]
    InvalidSchemeTable(String),
}

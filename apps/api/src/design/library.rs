use crate::design::catalog::Catalog;
use crate::design::errors::DesignError;
use crate::design::palette::ColorSchemeTable;

/// The immutable static data a generation reads: the organism catalog and the
/// base color schemes. Built and validated once at startup, then shared
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct DesignLibrary {
    pub catalog: Catalog,
    pub schemes: ColorSchemeTable,
}

impl DesignLibrary {
    pub fn new(catalog: Catalog, schemes: ColorSchemeTable) -> Self {
        Self { catalog, schemes }
    }

    pub fn builtin(catalog_version: &str) -> Self {
        Self::new(Catalog::builtin(catalog_version), ColorSchemeTable::builtin())
    }

    /// Fails fast on malformed static data so it never reaches a request.
    pub fn validate(&self) -> Result<(), DesignError> {
        self.schemes.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_library_validates() {
        let library = DesignLibrary::builtin("2024.1");
        assert!(library.validate().is_ok());
        assert_eq!(library.catalog.version, "2024.1");
    }
}

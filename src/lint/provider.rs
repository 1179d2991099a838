//! Maps the configured linter type to a backend adapter.

use crate::config::Config;
use crate::lint::biome::Biome;
use crate::lint::eslint::ESLint;
use crate::lint::golangci::GolangciLint;
use crate::lint::linter::Linter;

/// Select the backend adapter for the configured linter type.
///
/// Selection is pure: no subprocess is spawned here. `None` means
/// linting is disabled; unknown and absent linter types both land there,
/// and callers skip invocation entirely.
pub fn select_linter(config: &Config) -> Option<Box<dyn Linter>> {
    match config.linter_type.as_deref() {
        Some("eslint") => Some(Box::new(ESLint::new())),
        Some("golangci-lint") => Some(Box::new(GolangciLint::new())),
        Some("biome") => Some(Box::new(Biome::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_linter_types_select_their_adapter() {
        for (linter_type, name) in [
            ("eslint", "eslint"),
            ("golangci-lint", "golangci-lint"),
            ("biome", "biome"),
        ] {
            let config = Config::new().with_linter_type(linter_type);
            let linter = select_linter(&config).expect(linter_type);
            assert_eq!(linter.name(), name);
        }
    }

    #[test]
    fn test_absent_linter_type_selects_none() {
        assert!(select_linter(&Config::new()).is_none());
    }

    #[test]
    fn test_unknown_linter_type_selects_none() {
        let config = Config::new().with_linter_type("pylint");
        assert!(select_linter(&config).is_none());
    }
}

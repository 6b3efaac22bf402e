//! Optional TOML profile supplying generation defaults
//!
//! Every field is optional; explicit command-line options win over profile
//! values, which win over the built-in defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use sylph_core::CaseMode;

/// Defaults applied beneath explicit command-line options
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Profile {
    /// Minimum password length
    pub length: Option<usize>,
    /// Inject decimal digits
    pub digits: Option<bool>,
    /// Symbol alphabet; non-empty enables symbol injection
    pub symbols: Option<String>,
    /// Casing mode
    pub case: Option<CaseMode>,
    /// Avoid doubled consonants
    pub more_pronounceable: Option<bool>,
    /// Seed for reproducible output
    pub seed: Option<u32>,
    /// Number of passwords to generate
    pub count: Option<u32>,
}

impl Profile {
    /// Loads a profile from a TOML file
    pub fn load(path: &Path) -> Result<Profile> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid profile {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_profile() {
        let profile: Profile = toml::from_str(
            r#"
            length = 16
            digits = true
            symbols = "!@#"
            case = "random-mixed"
            more-pronounceable = true
            seed = 99
            count = 3
            "#,
        )
        .unwrap();
        assert_eq!(profile.length, Some(16));
        assert_eq!(profile.digits, Some(true));
        assert_eq!(profile.symbols.as_deref(), Some("!@#"));
        assert_eq!(profile.case, Some(CaseMode::RandomMixed));
        assert_eq!(profile.more_pronounceable, Some(true));
        assert_eq!(profile.seed, Some(99));
        assert_eq!(profile.count, Some(3));
    }

    #[test]
    fn empty_profile_leaves_every_field_unset() {
        let profile: Profile = toml::from_str("").unwrap();
        assert_eq!(profile.length, None);
        assert_eq!(profile.case, None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<Profile, _> = toml::from_str("strength = 11");
        assert!(result.is_err());
    }
}

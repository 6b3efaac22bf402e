//! Phonetic units
//!
//! A unit is the smallest token a word is assembled from: one or two letters
//! validated against the unit catalog, or a synthetic digit/symbol/separator
//! that participates in word assembly but never in digram legality checks.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::flags::UnitFlags;
use crate::rng::Prng;

/// Distinguishes catalog-backed letters from synthetic tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// One or two letters validated against the unit catalog
    Letter,
    /// A single decimal digit
    Digit,
    /// A single character from a configured symbol alphabet
    Symbol,
    /// A single separator character
    Separator,
}

/// An immutable phonetic token with a flag set.
///
/// Units are cheap, disposable values: clones are deep and independently
/// owned, and a unit is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    text: String,
    flags: UnitFlags,
    kind: UnitKind,
}

impl Unit {
    /// Looks up `text` in the unit catalog (case-insensitively).
    ///
    /// Fails with [`Error::UnknownUnit`] when the catalog has no such unit.
    pub fn lookup(catalog: &Catalog, text: &str) -> Result<Unit> {
        let text = text.to_lowercase();
        let flags = catalog
            .unit_flags(&text)
            .ok_or_else(|| Error::UnknownUnit { text: text.clone() })?;
        Ok(Unit {
            text,
            flags,
            kind: UnitKind::Letter,
        })
    }

    /// Picks a uniformly random catalog unit whose flags satisfy the masks.
    ///
    /// Empty masks mean no filtering. A non-empty filter that matches nothing
    /// is a data inconsistency: the catalog is expected to cover every mask
    /// combination the syllable rules can produce.
    pub fn random(
        prng: &mut Prng,
        catalog: &Catalog,
        required: UnitFlags,
        forbidden: UnitFlags,
    ) -> Result<Unit> {
        let candidates: Vec<(&str, UnitFlags)> = catalog
            .units()
            .iter()
            .filter(|(_, flags)| flags.satisfies(required, forbidden))
            .copied()
            .collect();
        if candidates.is_empty() {
            return Err(Error::DataInconsistency {
                reason: format!("no unit satisfies required {required} forbidden {forbidden}"),
            });
        }
        let (text, flags) = candidates[prng.next_below(candidates.len() as u32) as usize];
        Ok(Unit {
            text: text.to_string(),
            flags,
            kind: UnitKind::Letter,
        })
    }

    /// Builds a letter unit from an already-validated catalog entry
    pub(crate) fn from_entry(text: &str, flags: UnitFlags) -> Unit {
        Unit {
            text: text.to_string(),
            flags,
            kind: UnitKind::Letter,
        }
    }

    /// Creates a unit for a random decimal digit
    pub fn random_digit(prng: &mut Prng) -> Unit {
        Unit {
            text: prng.next_int(0, 10).to_string(),
            flags: UnitFlags::DIGIT,
            kind: UnitKind::Digit,
        }
    }

    /// Creates a unit for a random character of `alphabet`.
    ///
    /// `alphabet` must be non-empty; symbol injection is disabled upstream
    /// when it is.
    pub fn random_symbol(prng: &mut Prng, alphabet: &[char]) -> Unit {
        let ch = alphabet[prng.next_below(alphabet.len() as u32) as usize];
        Unit {
            text: ch.to_string(),
            flags: UnitFlags::DIGIT, // treated like digits
            kind: UnitKind::Symbol,
        }
    }

    /// Creates a separator unit for `ch`
    pub fn separator(ch: char) -> Unit {
        Unit {
            text: ch.to_string(),
            flags: UnitFlags::SEPARATOR,
            kind: UnitKind::Separator,
        }
    }

    /// The unit's text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The unit's flag set
    pub fn flags(&self) -> UnitFlags {
        self.flags
    }

    /// The unit's kind
    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Number of characters in the unit
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// True when the unit has no text (unused by generation; units always
    /// carry at least one character)
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True for catalog-backed letter units
    pub fn is_letter(&self) -> bool {
        self.kind == UnitKind::Letter
    }

    /// True when the unit carries the vowel flag
    pub fn is_vowel(&self) -> bool {
        self.flags.intersects(UnitFlags::VOWEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_cataloged_units() {
        let catalog = Catalog::english();
        let unit = Unit::lookup(catalog, "qu").unwrap();
        assert_eq!(unit.text(), "qu");
        assert_eq!(unit.len(), 2);
        assert!(unit.is_letter());
        assert!(unit.flags().intersects(UnitFlags::DOUBLE_CHAR));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = Catalog::english();
        let unit = Unit::lookup(catalog, "A").unwrap();
        assert_eq!(unit.text(), "a");
        assert!(unit.is_vowel());
    }

    #[test]
    fn lookup_rejects_unknown_text() {
        let catalog = Catalog::english();
        let err = Unit::lookup(catalog, "zz").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownUnit {
                text: "zz".to_string()
            }
        );
    }

    #[test]
    fn random_respects_masks() {
        let catalog = Catalog::english();
        let mut prng = Prng::seeded(7);
        for _ in 0..64 {
            let unit =
                Unit::random(&mut prng, catalog, UnitFlags::VOWEL, UnitFlags::NONE).unwrap();
            assert!(unit.is_vowel());
            let unit = Unit::random(
                &mut prng,
                catalog,
                UnitFlags::NONE,
                UnitFlags::NOT_BEGIN_SYLLABLE,
            )
            .unwrap();
            assert!(!unit.flags().intersects(UnitFlags::NOT_BEGIN_SYLLABLE));
        }
    }

    #[test]
    fn random_reports_unsatisfiable_masks_as_data_error() {
        let catalog = Catalog::english();
        let mut prng = Prng::seeded(7);
        let err = Unit::random(
            &mut prng,
            catalog,
            UnitFlags::VOWEL,
            UnitFlags::VOWEL,
        )
        .unwrap_err();
        assert!(matches!(err, Error::DataInconsistency { .. }));
    }

    #[test]
    fn synthetic_units_carry_fixed_flags() {
        let mut prng = Prng::seeded(3);
        let digit = Unit::random_digit(&mut prng);
        assert_eq!(digit.kind(), UnitKind::Digit);
        assert!(digit.flags().intersects(UnitFlags::DIGIT));
        assert!(digit.text().chars().all(|c| c.is_ascii_digit()));

        let symbol = Unit::random_symbol(&mut prng, &['#', '!']);
        assert_eq!(symbol.kind(), UnitKind::Symbol);
        assert!(symbol.flags().intersects(UnitFlags::DIGIT));

        let separator = Unit::separator('-');
        assert_eq!(separator.kind(), UnitKind::Separator);
        assert!(separator.flags().intersects(UnitFlags::SEPARATOR));
        assert_eq!(separator.text(), "-");
    }
}

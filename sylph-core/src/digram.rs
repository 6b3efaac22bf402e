//! Digrams: ordered pairs of adjacent units
//!
//! A digram is valid iff the pair appears in the digram catalog; its flags
//! always come from the catalog entry. Synthetic digit/symbol/separator units
//! never form digrams.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::flags::{DigramFlags, UnitFlags};
use crate::rng::Prng;
use crate::unit::Unit;

/// An ordered pair of units with the catalog's flags for that pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digram {
    first: Unit,
    second: Unit,
    flags: DigramFlags,
}

impl Digram {
    /// Looks up the exact pair `(first, second)` in the digram catalog.
    ///
    /// Used for legality checks on already-emitted units, never for random
    /// selection. Fails with [`Error::UnknownDigram`] when the pair is absent
    /// or either unit is synthetic.
    pub fn lookup(catalog: &Catalog, first: &Unit, second: &Unit) -> Result<Digram> {
        if !first.is_letter() || !second.is_letter() {
            return Err(Error::UnknownDigram {
                text: format!("{}{}", first.text(), second.text()),
            });
        }
        let flags = catalog
            .digram_flags(first.text(), second.text())
            .ok_or_else(|| Error::UnknownDigram {
                text: format!("{}{}", first.text(), second.text()),
            })?;
        Ok(Digram {
            first: first.clone(),
            second: second.clone(),
            flags,
        })
    }

    /// Randomly selects a continuation of `first` under the given masks.
    ///
    /// Candidates are the catalog rows keyed by `first`, filtered first by
    /// the digram masks and then by the candidate second unit's own flag
    /// masks; the survivor is picked uniformly. Returns `Ok(None)` when
    /// `first` starts no digram at all or filtering leaves no candidate; the
    /// caller treats that as "no legal continuation" and backtracks. An
    /// inconsistent catalog row surfaces as a fatal error instead.
    pub fn random(
        prng: &mut Prng,
        catalog: &Catalog,
        first: &Unit,
        required: DigramFlags,
        forbidden: DigramFlags,
        unit_required: UnitFlags,
        unit_forbidden: UnitFlags,
    ) -> Result<Option<Digram>> {
        if !first.is_letter() {
            return Err(Error::UnknownDigram {
                text: first.text().to_string(),
            });
        }
        let mut candidates = Vec::new();
        for (second, flags) in catalog.continuations(first.text()) {
            if !flags.satisfies(required, forbidden) {
                continue;
            }
            let unit_flags = catalog
                .unit_flags(second)
                .ok_or_else(|| Error::DataInconsistency {
                    reason: format!("digram '{}{}' names an unknown unit", first.text(), second),
                })?;
            if unit_flags.satisfies(unit_required, unit_forbidden) {
                candidates.push((*second, *flags, unit_flags));
            }
        }
        if candidates.is_empty() {
            return Ok(None);
        }
        let (second, flags, unit_flags) =
            candidates[prng.next_below(candidates.len() as u32) as usize];
        Ok(Some(Digram {
            first: first.clone(),
            second: Unit::from_entry(second, unit_flags),
            flags,
        }))
    }

    /// True when `(first, second)` forms a valid digram
    pub fn is_valid(catalog: &Catalog, first: &Unit, second: &Unit) -> bool {
        Digram::lookup(catalog, first, second).is_ok()
    }

    /// The first unit of the pair
    pub fn first(&self) -> &Unit {
        &self.first
    }

    /// The second unit of the pair
    pub fn second(&self) -> &Unit {
        &self.second
    }

    /// The catalog flags of the pair
    pub fn flags(&self) -> DigramFlags {
        self.flags
    }

    /// Consumes the digram, yielding both units in order
    pub fn into_parts(self) -> (Unit, Unit) {
        (self.first, self.second)
    }

    /// The pair's text, first and second unit concatenated
    pub fn text(&self) -> String {
        format!("{}{}", self.first.text(), self.second.text())
    }

    /// Number of characters across both units
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    /// Always false; digrams carry two non-empty units
    pub fn is_empty(&self) -> bool {
        false
    }
}

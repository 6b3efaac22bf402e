//! Syllables and the syllable-construction state machine
//!
//! A syllable is grown unit by unit under the digram legality rules. The
//! builder keeps a rolling two-unit context, backtracks when no legal
//! continuation exists, and hands material that turned out to belong to the
//! *next* syllable back to the caller as a leftover fragment.

use std::cell::Cell;

use crate::catalog::Catalog;
use crate::digram::Digram;
use crate::error::{Error, Result};
use crate::flags::{DigramFlags, UnitFlags};
use crate::rng::Prng;
use crate::unit::Unit;

/// Step budget for one syllable; exceeding it indicates a rule-table bug
const MAX_STEPS: usize = 10_000;

/// An ordered run of units forming one pronounceable block.
///
/// The `has_vowel`/`has_consonant` predicates are monotonic: once a vowel or
/// consonant has been observed the predicate stays true for the syllable's
/// lifetime, even if the unit that triggered it is later removed during
/// backtracking. The construction rules tolerate (and lean on) that latitude,
/// so it is preserved rather than recomputed.
#[derive(Debug, Default)]
pub struct Syllable {
    units: Vec<Unit>,
    vowel_seen: Cell<bool>,
    consonant_seen: Cell<bool>,
}

impl Syllable {
    /// Creates an empty syllable
    pub fn new() -> Syllable {
        Syllable::default()
    }

    /// Creates a syllable holding a single unit
    pub fn from_unit(unit: Unit) -> Syllable {
        Syllable {
            units: vec![unit],
            ..Syllable::default()
        }
    }

    /// Creates a syllable holding both units of a digram
    pub fn from_digram(digram: Digram) -> Syllable {
        let (first, second) = digram.into_parts();
        Syllable {
            units: vec![first, second],
            ..Syllable::default()
        }
    }

    /// Appends a unit
    pub fn push(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    /// Removes and returns the last unit, if any.
    ///
    /// Does not roll back the vowel/consonant predicates.
    pub fn remove_last(&mut self) -> Option<Unit> {
        self.units.pop()
    }

    /// Number of units in the syllable
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// True when the syllable holds no units
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The units in phonetic order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// The last unit, if any
    pub fn last(&self) -> Option<&Unit> {
        self.units.last()
    }

    /// Concatenated text of all units
    pub fn text(&self) -> String {
        self.units.iter().map(Unit::text).collect()
    }

    /// Number of characters across all units
    pub fn char_len(&self) -> usize {
        self.units.iter().map(Unit::len).sum()
    }

    /// True once a vowel-flagged unit has been observed in the syllable
    pub fn has_vowel(&self) -> bool {
        if self.vowel_seen.get() {
            return true;
        }
        let found = self.units.iter().any(Unit::is_vowel);
        if found {
            self.vowel_seen.set(true);
        }
        found
    }

    /// True once a unit without the vowel flag has been observed
    pub fn has_consonant(&self) -> bool {
        if self.consonant_seen.get() {
            return true;
        }
        let found = self.units.iter().any(|unit| !unit.is_vowel());
        if found {
            self.consonant_seen.set(true);
        }
        found
    }
}

impl Clone for Syllable {
    /// Deep copy; the copy shares nothing with the original and starts with
    /// fresh vowel/consonant predicates.
    fn clone(&self) -> Syllable {
        Syllable {
            units: self.units.clone(),
            vowel_seen: Cell::new(false),
            consonant_seen: Cell::new(false),
        }
    }
}

impl PartialEq for Syllable {
    fn eq(&self, other: &Syllable) -> bool {
        self.units == other.units
    }
}

impl Eq for Syllable {}

/// Builds one syllable at a time against a catalog.
///
/// The builder itself is stateless; all carried state (the preceding units
/// and the leftover fragment) is threaded through [`SyllableBuilder::build`]
/// by the caller.
#[derive(Debug, Clone, Copy)]
pub struct SyllableBuilder<'a> {
    catalog: &'a Catalog,
    more_pronounceable: bool,
}

impl<'a> SyllableBuilder<'a> {
    /// Creates a builder over `catalog`.
    ///
    /// With `more_pronounceable` set, doubled consonants are avoided in
    /// addition to the always-on tripled-consonant rule.
    pub fn new(catalog: &'a Catalog, more_pronounceable: bool) -> Self {
        Self {
            catalog,
            more_pronounceable,
        }
    }

    /// Builds the next syllable.
    ///
    /// `prev1` and `prev2` are the two units immediately preceding the new
    /// syllable (`None` means start of word; `prev2` is the closer of the
    /// two). `leftover` is the fragment a previous call pre-positioned for
    /// this syllable. Returns the finalized syllable together with the
    /// leftover fragment for the *next* call.
    pub fn build(
        &self,
        prng: &mut Prng,
        prev1: Option<&Unit>,
        prev2: Option<&Unit>,
        leftover: Option<Syllable>,
    ) -> Result<(Syllable, Option<Syllable>)> {
        let mut prev1 = prev1.cloned();
        let mut prev2 = prev2.cloned();

        // Digits and symbols reset the phonetic context.
        if prev2
            .as_ref()
            .is_some_and(|u| u.flags().intersects(UnitFlags::DIGIT))
        {
            prev1 = None;
            prev2 = None;
        } else if prev1
            .as_ref()
            .is_some_and(|u| u.flags().intersects(UnitFlags::DIGIT))
        {
            prev1 = None;
        }

        let orig_prev1 = prev1.clone();
        let orig_prev2 = prev2.clone();

        if prev1
            .as_ref()
            .is_some_and(|u| u.flags().intersects(UnitFlags::SEPARATOR))
            && prev2
                .as_ref()
                .is_some_and(|u| u.flags().intersects(UnitFlags::SEPARATOR))
        {
            return Err(Error::SeparatorContext);
        }

        // A leftover fragment is folded into the new syllable, and its tail
        // becomes the effective preceding context.
        let mut generated = leftover.unwrap_or_default();
        if let Some(last) = generated.last().cloned() {
            prev1 = prev2.take();
            if generated.len() > 1 {
                prev1 = Some(generated.units()[generated.len() - 2].clone());
            }
            prev2 = Some(last);
        }

        let pseudo_vowel = Unit::lookup(self.catalog, "y")?;

        for _ in 0..MAX_STEPS {
            let mut digram_required = DigramFlags::NONE;
            let mut digram_forbidden = DigramFlags::NONE;
            let mut unit_required = UnitFlags::NONE;
            let mut unit_forbidden = UnitFlags::NONE;
            let mut next_digram: Option<Digram> = None;
            let mut next_unit: Option<Unit>;
            let mut prev_digram: Option<Digram> = None;

            if let Some(p2) = prev2.clone() {
                if let Some(p1) = prev1.as_ref() {
                    prev_digram = Some(Digram::lookup(self.catalog, p1, &p2)?);
                }

                if generated.is_empty() {
                    // Beginning of a syllable but not of the word.
                    unit_forbidden |= UnitFlags::NOT_BEGIN_SYLLABLE;
                } else if generated.len() == 1 {
                    // Only one unit so far; do not end the syllable yet.
                    digram_forbidden |= DigramFlags::NOT_BEGIN;
                    if !generated.units()[0].is_vowel() {
                        // No one-consonant syllables.
                        digram_forbidden |= DigramFlags::BREAK;
                    }
                    if generated.units()[0].text() == "y" && prev1.is_none() {
                        // "y" opening the word acts as a vowel and must not
                        // stand alone.
                        unit_required |= UnitFlags::VOWEL;
                        digram_forbidden |= DigramFlags::BREAK;
                    }
                } else {
                    if !generated.has_vowel() {
                        // 6 vowels out of 36 units; deliberately not the
                        // natural vowel frequency, to resist statistical
                        // attacks.
                        if prng.next_int(0, 35) < 6 {
                            digram_forbidden |= DigramFlags::BREAK | DigramFlags::BEGIN;
                            unit_required |= UnitFlags::VOWEL;
                        } else {
                            digram_forbidden |=
                                DigramFlags::BREAK | DigramFlags::BEGIN | DigramFlags::END;
                        }
                    }
                    if prev_digram
                        .as_ref()
                        .is_some_and(|d| d.flags().intersects(DigramFlags::NOT_END))
                    {
                        digram_forbidden |= DigramFlags::BREAK;
                    }
                    if let Some(p1) = prev1.as_ref() {
                        if !p1.is_vowel() && !p2.is_vowel() {
                            // Two consecutive consonants; a vowel is due.
                            unit_required |= UnitFlags::VOWEL;
                        }
                        if p1.is_vowel() && p2.is_vowel() {
                            // Two consecutive vowels; a consonant is due.
                            unit_forbidden |= UnitFlags::VOWEL;
                        }
                    }
                    if generated.len() > 2 {
                        let len = generated.len();
                        let tail = Digram::lookup(
                            self.catalog,
                            &generated.units()[len - 3],
                            &generated.units()[len - 2],
                        )?;
                        if tail.flags().intersects(DigramFlags::NOT_END) {
                            digram_forbidden |= DigramFlags::BEGIN;
                        }
                    }
                }

                if let (Some(p1), Some(pd)) = (prev1.as_ref(), prev_digram.as_ref()) {
                    if generated.len() > 1 && pd.flags().intersects(DigramFlags::SUFFIX) {
                        unit_required |= UnitFlags::VOWEL;
                    }
                    if !p1.is_vowel() {
                        digram_forbidden |= DigramFlags::PREFIX;
                    }

                    let true_vowel = |u: &Unit| {
                        u.flags().intersects(UnitFlags::VOWEL)
                            && !u.flags().intersects(UnitFlags::ALTERNATE_VOWEL)
                    };
                    if true_vowel(p1) && true_vowel(&p2) {
                        // No triple vowels; the pseudo-vowel "y" is an
                        // occasional escape hatch.
                        if Digram::is_valid(self.catalog, &p2, &pseudo_vowel) {
                            let vowel_forbidden = unit_forbidden.intersects(UnitFlags::VOWEL);
                            let rare_roll = prng.next_int(0, 35) == 0;
                            if vowel_forbidden || rare_roll {
                                unit_required |= UnitFlags::ALTERNATE_VOWEL;
                            } else {
                                unit_forbidden |= UnitFlags::VOWEL;
                            }
                        } else {
                            unit_forbidden |= UnitFlags::VOWEL;
                        }
                    }

                    if self.more_pronounceable && !p2.is_vowel() {
                        // No doubled consonants.
                        unit_required |= UnitFlags::VOWEL;
                    } else if !p1.is_vowel() && !p2.is_vowel() {
                        // No tripled consonants.
                        unit_required |= UnitFlags::VOWEL;
                    }
                }

                // A contradictory mask combination cannot be satisfied;
                // treat it like a failed continuation.
                if digram_required.intersects(digram_forbidden)
                    || unit_required.intersects(unit_forbidden)
                {
                    self.backtrack(&mut generated, &mut prev1, &mut prev2, &orig_prev1, &orig_prev2)?;
                    continue;
                }

                match Digram::random(
                    prng,
                    self.catalog,
                    &p2,
                    digram_required,
                    digram_forbidden,
                    unit_required,
                    unit_forbidden,
                )? {
                    Some(digram) => {
                        next_unit = Some(digram.second().clone());
                        next_digram = Some(digram);
                    }
                    None => {
                        self.backtrack(
                            &mut generated,
                            &mut prev1,
                            &mut prev2,
                            &orig_prev1,
                            &orig_prev2,
                        )?;
                        continue;
                    }
                }
            } else {
                // The very first letter of the whole word.
                next_unit = Some(Unit::random(
                    prng,
                    self.catalog,
                    UnitFlags::NONE,
                    UnitFlags::NOT_BEGIN_SYLLABLE,
                )?);
            }

            if let Some(digram) = next_digram.take() {
                let first_vowel = digram.first().is_vowel();
                let second_vowel = digram.second().is_vowel();

                if digram.flags().intersects(DigramFlags::BREAK)
                    || (!first_vowel && !second_vowel && generated.has_vowel())
                {
                    // The candidate unit opens the next syllable.
                    if prev_digram
                        .as_ref()
                        .is_some_and(|d| d.flags().intersects(DigramFlags::NOT_END))
                    {
                        // The syllable must not end here; discard the
                        // candidate and try again.
                        next_unit = None;
                    } else if !generated.is_empty() {
                        let stash = next_unit.take().map(Syllable::from_unit);
                        return Ok((generated, stash));
                    }
                } else if (generated.len() > 1 && digram.flags().intersects(DigramFlags::BEGIN))
                    || (!first_vowel && second_vowel && generated.has_vowel())
                {
                    // The candidate pair opens the next syllable.
                    let len = generated.len();
                    if len == 2
                        && !generated.units()[0].is_vowel()
                        && generated.units()[1].is_vowel()
                    {
                        next_unit = None;
                    } else if len > 2 {
                        let tail = Digram::lookup(
                            self.catalog,
                            &generated.units()[len - 3],
                            &generated.units()[len - 2],
                        )?;
                        if !tail.flags().intersects(DigramFlags::NOT_END) {
                            generated.remove_last();
                            return Ok((generated, Some(Syllable::from_digram(digram))));
                        }
                        // The shortened syllable could not end either; keep
                        // the candidate unit after all.
                    } else {
                        generated.remove_last();
                        return Ok((generated, Some(Syllable::from_digram(digram))));
                    }
                } else if digram.flags().intersects(DigramFlags::END) {
                    // Natural termination.
                    if let Some(unit) = next_unit.take() {
                        generated.push(unit);
                    }
                    return Ok((generated, None));
                }
            }

            if let Some(unit) = next_unit.take() {
                generated.push(unit.clone());
                prev1 = prev2.take();
                prev2 = Some(unit);
            }
        }

        Err(Error::IterationCeiling { limit: MAX_STEPS })
    }

    /// Drops the most recently accepted unit and recomputes the preceding
    /// context from what remains, falling back to the pre-loop context once
    /// the syllable is empty. An already-empty syllable is a dead end.
    fn backtrack(
        &self,
        generated: &mut Syllable,
        prev1: &mut Option<Unit>,
        prev2: &mut Option<Unit>,
        orig_prev1: &Option<Unit>,
        orig_prev2: &Option<Unit>,
    ) -> Result<()> {
        if generated.is_empty() {
            return Err(Error::NoSyllable);
        }
        generated.remove_last();
        if generated.is_empty() {
            *prev1 = orig_prev1.clone();
            *prev2 = orig_prev2.clone();
        } else {
            let units = generated.units();
            *prev2 = units.last().cloned();
            *prev1 = if units.len() > 1 {
                Some(units[units.len() - 2].clone())
            } else {
                orig_prev2.clone()
            };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(text: &str) -> Unit {
        Unit::lookup(Catalog::english(), text).unwrap()
    }

    #[test]
    fn text_concatenates_units_in_order() {
        let mut syllable = Syllable::new();
        syllable.push(unit("s"));
        syllable.push(unit("t"));
        syllable.push(unit("a"));
        assert_eq!(syllable.text(), "sta");
        assert_eq!(syllable.len(), 3);
        assert_eq!(syllable.char_len(), 3);

        let removed = syllable.remove_last().unwrap();
        assert_eq!(removed.text(), "a");
        assert_eq!(syllable.text(), "st");
    }

    #[test]
    fn vowel_predicate_latches_once_observed() {
        let mut syllable = Syllable::new();
        syllable.push(unit("s"));
        syllable.push(unit("a"));
        assert!(syllable.has_vowel());

        // Removing the only vowel does not reset the predicate.
        syllable.remove_last();
        assert!(syllable.has_vowel());
        assert_eq!(syllable.text(), "s");
    }

    #[test]
    fn vowel_predicate_stays_false_without_an_observation() {
        let mut syllable = Syllable::new();
        syllable.push(unit("s"));
        syllable.push(unit("a"));
        // No has_vowel() call before the removal: nothing was observed.
        syllable.remove_last();
        assert!(!syllable.has_vowel());
    }

    #[test]
    fn consonant_predicate_latches_like_the_vowel_one() {
        let mut syllable = Syllable::from_unit(unit("t"));
        assert!(syllable.has_consonant());
        syllable.remove_last();
        assert!(syllable.has_consonant());
    }

    #[test]
    fn clone_is_deep_and_resets_predicates() {
        let mut syllable = Syllable::new();
        syllable.push(unit("s"));
        syllable.push(unit("a"));
        assert!(syllable.has_vowel());
        syllable.remove_last();

        let copy = syllable.clone();
        assert_eq!(copy, syllable);
        assert!(syllable.has_vowel());
        assert!(!copy.has_vowel());
    }

    #[test]
    fn builder_rejects_double_separator_context() {
        let builder = SyllableBuilder::new(Catalog::english(), false);
        let mut prng = Prng::seeded(1);
        let sep = Unit::separator('-');
        let err = builder
            .build(&mut prng, Some(&sep), Some(&sep), None)
            .unwrap_err();
        assert_eq!(err, Error::SeparatorContext);
    }

    #[test]
    fn builder_starts_words_with_begin_capable_units() {
        let builder = SyllableBuilder::new(Catalog::english(), false);
        for seed in 0..32 {
            let mut prng = Prng::seeded(seed);
            let (syllable, _) = builder.build(&mut prng, None, None, None).unwrap();
            assert!(!syllable.is_empty());
            let opener = &syllable.units()[0];
            assert!(!opener.flags().intersects(UnitFlags::NOT_BEGIN_SYLLABLE));
        }
    }

    #[test]
    fn builder_emits_only_cataloged_digrams() {
        let catalog = Catalog::english();
        let builder = SyllableBuilder::new(catalog, false);
        for seed in 0..64 {
            let mut prng = Prng::seeded(seed);
            let (syllable, _) = builder.build(&mut prng, None, None, None).unwrap();
            for pair in syllable.units().windows(2) {
                assert!(
                    Digram::is_valid(catalog, &pair[0], &pair[1]),
                    "'{}' holds an illegal pair",
                    syllable.text()
                );
            }
        }
    }

    #[test]
    fn builder_digit_context_behaves_like_word_start() {
        let builder = SyllableBuilder::new(Catalog::english(), false);
        let mut prng_a = Prng::seeded(77);
        let mut prng_b = Prng::seeded(77);
        let digit = Unit::random_digit(&mut Prng::seeded(0));

        let (from_digit, _) = builder
            .build(&mut prng_a, None, Some(&digit), None)
            .unwrap();
        let (from_start, _) = builder.build(&mut prng_b, None, None, None).unwrap();
        assert_eq!(from_digit, from_start);
    }

    #[test]
    fn builder_folds_leftover_into_the_syllable() {
        let catalog = Catalog::english();
        let builder = SyllableBuilder::new(catalog, false);
        for seed in 0..32 {
            let mut prng = Prng::seeded(seed);
            let leftover = Syllable::from_unit(unit("t"));
            let prev = unit("a");
            let (syllable, _) = builder
                .build(&mut prng, None, Some(&prev), Some(leftover))
                .unwrap();
            assert_eq!(syllable.units()[0].text(), "t");
            assert!(syllable.len() > 1);
        }
    }

    #[test]
    fn builder_threads_leftovers_across_calls() {
        let catalog = Catalog::english();
        let builder = SyllableBuilder::new(catalog, false);
        let mut prng = Prng::seeded(42);

        let mut leftover = None;
        let mut previous: Option<Syllable> = None;
        for _ in 0..16 {
            let (prev1, prev2) = match previous.as_ref() {
                Some(s) => {
                    let units = s.units();
                    let p2 = units.last();
                    let p1 = (units.len() > 1).then(|| &units[units.len() - 2]);
                    (p1, p2)
                }
                None => (None, None),
            };
            let (syllable, next_leftover) =
                builder.build(&mut prng, prev1, prev2, leftover.take()).unwrap();
            leftover = next_leftover;
            if let Some(stash) = leftover.as_ref() {
                assert!((1..=2).contains(&stash.len()));
            }
            previous = Some(syllable);
        }
    }
}

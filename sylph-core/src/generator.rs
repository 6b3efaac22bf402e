//! Password generation: configuration, word assembly, and casing
//!
//! The generator drives the syllable builder until the configured minimum
//! length is met, interleaving digit/symbol units per configuration, then
//! renders the final casing.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::rng::Prng;
use crate::syllable::{Syllable, SyllableBuilder};
use crate::unit::Unit;
use crate::word::Word;

/// Casing applied when rendering an assembled word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum CaseMode {
    /// Raw lowercase text
    Lower,
    /// Everything uppercased
    Upper,
    /// First character of every syllable uppercased
    #[default]
    Mixed,
    /// Per-character coin flip
    Random,
    /// Per-syllable coin flip on the leading character
    RandomMixed,
}

/// Generation options
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case", default)
)]
pub struct GeneratorConfig {
    /// Target character length before the trailing digit/symbol
    pub min_length: usize,
    /// Inject decimal digits mid-word and as the trailing character
    pub digits: bool,
    /// Symbol alphabet; non-empty enables symbol injection
    pub symbols: String,
    /// Casing applied to the rendered word
    pub case: CaseMode,
    /// Avoid doubled consonants for easier pronunciation
    pub more_pronounceable: bool,
    /// Seed selecting the deterministic random source over the secure one
    pub seed: Option<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_length: 24,
            digits: false,
            symbols: String::new(),
            case: CaseMode::default(),
            more_pronounceable: false,
            seed: None,
        }
    }
}

/// Pronounceable password generator.
///
/// Owns its random source: reusing one generator for a batch draws from a
/// single stream, while independent generators take independent streams
/// (distinct seeds, or separate handles on the system CSPRNG).
#[derive(Debug)]
pub struct Generator {
    catalog: &'static Catalog,
    prng: Prng,
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator for `config`.
    ///
    /// A configured seed selects the deterministic random source; otherwise
    /// the system CSPRNG is used.
    pub fn new(config: GeneratorConfig) -> Generator {
        let prng = match config.seed {
            Some(seed) => Prng::seeded(seed),
            None => Prng::secure(),
        };
        Generator::with_prng(config, prng)
    }

    /// Creates a generator drawing from an explicit random source, ignoring
    /// any configured seed
    pub fn with_prng(config: GeneratorConfig, prng: Prng) -> Generator {
        Generator {
            catalog: Catalog::english(),
            prng,
            config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates one password
    pub fn generate(&mut self) -> Result<String> {
        let word = self.assemble()?;
        Ok(self.render(&word))
    }

    /// Assembles one word without applying casing, exposing its syllable
    /// structure
    pub fn generate_word(&mut self) -> Result<Word> {
        self.assemble()
    }

    fn assemble(&mut self) -> Result<Word> {
        let inject = self.config.digits || !self.config.symbols.is_empty();
        // Reserve room for the mandatory trailing digit/symbol.
        let min_length = if inject {
            self.config.min_length.saturating_sub(1)
        } else {
            self.config.min_length
        };
        let symbols: Vec<char> = self.config.symbols.chars().collect();
        let builder = SyllableBuilder::new(self.catalog, self.config.more_pronounceable);

        let mut word = Word::new();
        let mut leftover: Option<Syllable> = None;
        while word.char_len() < min_length {
            let remaining = (min_length - word.char_len()) as u32;
            if !word.is_empty() && inject && self.prng.next_int(0, remaining) == 0 {
                let filler = self.filler_unit(&symbols);
                word.push(Syllable::from_unit(filler));
                continue;
            }
            let (prev1, prev2) = trailing_context(word.last());
            let (syllable, stash) = builder.build(&mut self.prng, prev1, prev2, leftover.take())?;
            leftover = stash;
            word.push(syllable);
        }
        if inject {
            let filler = self.filler_unit(&symbols);
            word.push(Syllable::from_unit(filler));
        }
        Ok(word)
    }

    /// Picks the digit or symbol unit to inject, per configuration
    fn filler_unit(&mut self, symbols: &[char]) -> Unit {
        if symbols.is_empty() {
            Unit::random_digit(&mut self.prng)
        } else if !self.config.digits {
            Unit::random_symbol(&mut self.prng, symbols)
        } else if self.prng.next_below(2) == 1 {
            Unit::random_digit(&mut self.prng)
        } else {
            Unit::random_symbol(&mut self.prng, symbols)
        }
    }

    fn render(&mut self, word: &Word) -> String {
        match self.config.case {
            CaseMode::Lower => word.text(),
            CaseMode::Upper => word.text().to_uppercase(),
            CaseMode::Mixed => word.capitalized(),
            CaseMode::Random => {
                let text = word.text();
                let mut out = String::with_capacity(text.len());
                for ch in text.chars() {
                    if self.prng.next_below(2) > 0 {
                        out.extend(ch.to_uppercase());
                    } else {
                        out.push(ch);
                    }
                }
                out
            }
            CaseMode::RandomMixed => word.capitalized_random(&mut self.prng),
        }
    }
}

/// Last one or two units of the previous syllable, closest last
fn trailing_context(previous: Option<&Syllable>) -> (Option<&Unit>, Option<&Unit>) {
    match previous {
        Some(syllable) if !syllable.is_empty() => {
            let units = syllable.units();
            let prev2 = units.last();
            let prev1 = (units.len() > 1).then(|| &units[units.len() - 2]);
            (prev1, prev2)
        }
        _ => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(config: GeneratorConfig) -> Generator {
        Generator::new(config)
    }

    #[test]
    fn default_config_matches_documented_values() {
        let config = GeneratorConfig::default();
        assert_eq!(config.min_length, 24);
        assert!(!config.digits);
        assert!(config.symbols.is_empty());
        assert_eq!(config.case, CaseMode::Mixed);
        assert!(!config.more_pronounceable);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let config = GeneratorConfig {
            min_length: 12,
            case: CaseMode::Lower,
            seed: Some(42),
            ..GeneratorConfig::default()
        };
        let a = seeded(config.clone()).generate().unwrap();
        let b = seeded(config).generate().unwrap();
        assert_eq!(a, b);
        assert!(a.len() >= 12);
    }

    #[test]
    fn trailing_digit_fills_a_one_character_request() {
        let mut generator = seeded(GeneratorConfig {
            min_length: 1,
            digits: true,
            case: CaseMode::Lower,
            seed: Some(3),
            ..GeneratorConfig::default()
        });
        let text = generator.generate().unwrap();
        assert_eq!(text.len(), 1);
        assert!(text.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn zero_length_without_fillers_is_empty() {
        let mut generator = seeded(GeneratorConfig {
            min_length: 0,
            case: CaseMode::Lower,
            seed: Some(5),
            ..GeneratorConfig::default()
        });
        assert_eq!(generator.generate().unwrap(), "");
    }

    #[test]
    fn symbols_only_config_ends_with_a_symbol() {
        let mut generator = seeded(GeneratorConfig {
            min_length: 10,
            symbols: "#!".to_string(),
            case: CaseMode::Lower,
            seed: Some(11),
            ..GeneratorConfig::default()
        });
        let text = generator.generate().unwrap();
        assert!(text.len() >= 10);
        let last = text.chars().last().unwrap();
        assert!(last == '#' || last == '!');
    }
}

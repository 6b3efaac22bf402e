//! Words: ordered sequences of syllables
//!
//! A word accumulates syllables append-only; rendering and casing transforms
//! are purely textual post-processing over the syllable sequence.

use crate::rng::Prng;
use crate::syllable::Syllable;

/// An ordered, append-only sequence of syllables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    syllables: Vec<Syllable>,
}

impl Word {
    /// Creates an empty word
    pub fn new() -> Word {
        Word::default()
    }

    /// Appends a syllable
    pub fn push(&mut self, syllable: Syllable) {
        self.syllables.push(syllable);
    }

    /// Number of syllables
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    /// True when the word holds no syllables
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// The syllables in order
    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    /// The last syllable, if any
    pub fn last(&self) -> Option<&Syllable> {
        self.syllables.last()
    }

    /// Number of characters across all syllables
    pub fn char_len(&self) -> usize {
        self.syllables.iter().map(Syllable::char_len).sum()
    }

    /// Concatenated text of all syllables
    pub fn text(&self) -> String {
        self.syllables.iter().map(|s| s.text()).collect()
    }

    /// Text with the first character of every syllable uppercased
    pub fn capitalized(&self) -> String {
        let mut text = String::with_capacity(self.char_len());
        for syllable in &self.syllables {
            push_capitalized(&mut text, &syllable.text());
        }
        text
    }

    /// Text with each syllable's first character uppercased on a coin flip
    pub fn capitalized_random(&self, prng: &mut Prng) -> String {
        let mut text = String::with_capacity(self.char_len());
        for syllable in &self.syllables {
            let rendered = syllable.text();
            if prng.next_below(2) > 0 {
                push_capitalized(&mut text, &rendered);
            } else {
                text.push_str(&rendered);
            }
        }
        text
    }

    /// Text with syllables joined by hyphens, exposing the syllable structure
    pub fn hyphenated(&self) -> String {
        self.syllables
            .iter()
            .map(|s| s.text())
            .collect::<Vec<_>>()
            .join("-")
    }
}

fn push_capitalized(out: &mut String, syllable: &str) {
    let mut chars = syllable.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

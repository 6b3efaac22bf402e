//! Pronounceable password generation
//!
//! This crate generates random strings that approximate pronounceable words:
//! sequences of phonetic units (letters or letter pairs) chosen so that every
//! adjacent pair obeys a digram legality table encoding English phonotactics.
//! Words are assembled one syllable at a time by a backtracking constraint
//! machine over the table, driven by a bounded-uniform random source.
//!
//! # Example
//!
//! ```rust
//! use sylph_core::{CaseMode, Generator, GeneratorConfig};
//!
//! let mut generator = Generator::new(GeneratorConfig {
//!     min_length: 12,
//!     case: CaseMode::Lower,
//!     seed: Some(42),
//!     ..GeneratorConfig::default()
//! });
//!
//! let password = generator.generate().unwrap();
//! assert!(password.len() >= 12);
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod digram;
pub mod error;
pub mod flags;
pub mod generator;
pub mod rng;
pub mod syllable;
pub mod unit;
pub mod word;

pub use catalog::Catalog;
pub use digram::Digram;
pub use error::{Error, Result};
pub use flags::{DigramFlags, UnitFlags};
pub use generator::{CaseMode, Generator, GeneratorConfig};
pub use rng::Prng;
pub use syllable::{Syllable, SyllableBuilder};
pub use unit::{Unit, UnitKind};
pub use word::Word;

//! Error types for the generation engine

use thiserror::Error;

/// Errors surfaced by catalog lookups and syllable construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The built-in catalog violated one of its own guarantees
    #[error("catalog data inconsistency: {reason}")]
    DataInconsistency {
        /// What the catalog failed to guarantee
        reason: String,
    },

    /// Text that does not name a cataloged unit
    #[error("'{text}' is not a valid unit")]
    UnknownUnit {
        /// The rejected unit text
        text: String,
    },

    /// A pair of units that the digram catalog does not allow
    #[error("'{text}' is not a valid digram")]
    UnknownDigram {
        /// The rejected pair, first and second unit concatenated
        text: String,
    },

    /// Two separator units were supplied as syllable context
    #[error("at most one separator unit may precede a syllable")]
    SeparatorContext,

    /// Backtracking emptied the syllable and the surrounding context admits
    /// no continuation at all
    #[error("no syllable can follow the previous one")]
    NoSyllable,

    /// Defensive guard against a rule-table bug causing non-termination
    #[error("syllable construction did not terminate within {limit} steps")]
    IterationCeiling {
        /// The step budget that was exhausted
        limit: usize,
    },
}

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, Error>;

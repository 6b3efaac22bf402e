//! Built-in English phonetic catalog
//!
//! Two read-only tables drive generation: the unit table maps every legal
//! phonetic unit (a letter or letter pair) to its role flags, and the digram
//! table lists, per first unit, every second unit that may legally follow it
//! together with positional flags for the pair. Pairs absent from the digram
//! table are illegal. The tables are linguistic data, not algorithm; the
//! engine only depends on the documented flag semantics.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::flags::{DigramFlags, UnitFlags};

const VOW: UnitFlags = UnitFlags::VOWEL;
const ALT: UnitFlags = UnitFlags::ALTERNATE_VOWEL;
const NFS: UnitFlags = UnitFlags::NO_FINAL_SPLIT;
const NBS: UnitFlags = UnitFlags::NOT_BEGIN_SYLLABLE;
const DBL: UnitFlags = UnitFlags::DOUBLE_CHAR;
const UN: UnitFlags = UnitFlags::NONE;

const ANY: DigramFlags = DigramFlags::NONE;
const END: DigramFlags = DigramFlags::END;
const NB: DigramFlags = DigramFlags::NOT_BEGIN;
/// Legal only as a syllable onset, and a vowel must follow
const ONSET: DigramFlags = DigramFlags::BEGIN
    .union(DigramFlags::SUFFIX)
    .union(DigramFlags::NOT_END);
/// Onset cluster that additionally may only follow a vowel or word start
const ONSET_P: DigramFlags = ONSET.union(DigramFlags::PREFIX);
/// A syllable boundary always falls between the two units
const SPLIT: DigramFlags = DigramFlags::BREAK
    .union(DigramFlags::NOT_BEGIN)
    .union(DigramFlags::NOT_END);
/// The second unit opens the next syllable
const BRK: DigramFlags = DigramFlags::BREAK.union(DigramFlags::NOT_END);

/// Every legal phonetic unit with its role flags
pub const UNITS: &[(&str, UnitFlags)] = &[
    ("a", VOW),
    ("b", UN),
    ("c", UN),
    ("d", UN),
    ("e", VOW.union(NFS)),
    ("f", UN),
    ("g", UN),
    ("h", UN),
    ("i", VOW),
    ("j", UN),
    ("k", UN),
    ("l", UN),
    ("m", UN),
    ("n", UN),
    ("o", VOW),
    ("p", UN),
    ("r", UN),
    ("s", UN),
    ("t", UN),
    ("u", VOW),
    ("v", UN),
    ("w", UN),
    ("x", NBS),
    ("y", VOW.union(ALT)),
    ("z", UN),
    ("ch", DBL),
    ("gh", DBL.union(NBS)),
    ("ph", DBL),
    ("rh", DBL),
    ("sh", DBL),
    ("th", DBL),
    ("wh", DBL),
    ("qu", DBL),
    ("ck", DBL.union(NBS)),
];

/// Every legal digram, grouped by first unit
pub const DIGRAMS: &[(&str, &[(&str, DigramFlags)])] = &[
    (
        "a",
        &[
            ("i", ANY),
            ("u", ANY),
            ("w", END),
            ("y", END),
            ("b", ANY),
            ("c", ANY),
            ("d", ANY),
            ("f", ANY),
            ("g", ANY),
            ("h", BRK),
            ("j", SPLIT),
            ("k", ANY),
            ("l", ANY),
            ("m", ANY),
            ("n", ANY),
            ("p", ANY),
            ("r", ANY),
            ("s", ANY),
            ("t", ANY),
            ("v", ANY),
            ("x", ANY),
            ("z", ANY),
            ("ch", ANY),
            ("ck", ANY),
            ("gh", NB),
            ("ph", ANY),
            ("qu", BRK),
            ("sh", ANY),
            ("th", ANY),
        ],
    ),
    (
        "b",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("b", SPLIT),
            ("l", ONSET),
            ("r", ONSET),
        ],
    ),
    (
        "c",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("c", SPLIT),
            ("l", ONSET),
            ("r", ONSET),
            ("t", NB),
        ],
    ),
    (
        "d",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("d", SPLIT),
            ("r", ONSET),
            ("w", ONSET),
        ],
    ),
    (
        "e",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("w", END),
            ("y", END),
            ("b", ANY),
            ("c", ANY),
            ("d", ANY),
            ("f", ANY),
            ("g", ANY),
            ("h", BRK),
            ("j", SPLIT),
            ("k", ANY),
            ("l", ANY),
            ("m", ANY),
            ("n", ANY),
            ("p", ANY),
            ("r", ANY),
            ("s", ANY),
            ("t", ANY),
            ("v", ANY),
            ("x", ANY),
            ("z", ANY),
            ("ch", ANY),
            ("ck", ANY),
            ("gh", NB),
            ("ph", ANY),
            ("qu", BRK),
            ("sh", ANY),
            ("th", ANY),
        ],
    ),
    (
        "f",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("f", NB),
            ("l", ONSET),
            ("r", ONSET),
            ("t", NB),
        ],
    ),
    (
        "g",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("g", SPLIT),
            ("l", ONSET),
            ("n", ONSET_P),
            ("r", ONSET),
        ],
    ),
    (
        "h",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
        ],
    ),
    (
        "i",
        &[
            ("a", ANY),
            ("e", ANY),
            ("o", ANY),
            ("u", ANY),
            ("b", ANY),
            ("c", ANY),
            ("d", ANY),
            ("f", ANY),
            ("g", ANY),
            ("h", BRK),
            ("j", SPLIT),
            ("k", ANY),
            ("l", ANY),
            ("m", ANY),
            ("n", ANY),
            ("p", ANY),
            ("r", ANY),
            ("s", ANY),
            ("t", ANY),
            ("v", ANY),
            ("x", ANY),
            ("z", ANY),
            ("ch", ANY),
            ("ck", ANY),
            ("gh", NB),
            ("ph", ANY),
            ("qu", BRK),
            ("sh", ANY),
            ("th", ANY),
        ],
    ),
    (
        "j",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
        ],
    ),
    (
        "k",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("n", ONSET_P),
        ],
    ),
    (
        "l",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("d", NB),
            ("f", NB),
            ("k", NB),
            ("l", NB),
            ("m", NB),
            ("p", NB),
            ("t", NB),
            ("ch", NB),
        ],
    ),
    (
        "m",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("b", SPLIT),
            ("m", SPLIT),
            ("p", NB),
            ("ph", NB),
        ],
    ),
    (
        "n",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("d", NB),
            ("g", NB),
            ("k", NB),
            ("n", SPLIT),
            ("t", NB),
            ("ch", NB),
            ("th", NB),
        ],
    ),
    (
        "o",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("w", END),
            ("y", END),
            ("b", ANY),
            ("c", ANY),
            ("d", ANY),
            ("f", ANY),
            ("g", ANY),
            ("h", BRK),
            ("j", SPLIT),
            ("k", ANY),
            ("l", ANY),
            ("m", ANY),
            ("n", ANY),
            ("p", ANY),
            ("r", ANY),
            ("s", ANY),
            ("t", ANY),
            ("v", ANY),
            ("x", ANY),
            ("z", ANY),
            ("ch", ANY),
            ("ck", ANY),
            ("gh", NB),
            ("ph", ANY),
            ("qu", BRK),
            ("sh", ANY),
            ("th", ANY),
        ],
    ),
    (
        "p",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("l", ONSET),
            ("p", SPLIT),
            ("r", ONSET),
            ("t", NB),
        ],
    ),
    (
        "r",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("d", NB),
            ("k", NB),
            ("l", NB),
            ("m", NB),
            ("n", NB),
            ("p", NB),
            ("r", SPLIT),
            ("t", NB),
            ("ch", NB),
            ("sh", NB),
            ("th", NB),
        ],
    ),
    (
        "s",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("c", ANY),
            ("k", ANY),
            ("l", ONSET),
            ("m", ONSET),
            ("n", ONSET),
            ("p", ANY),
            ("s", NB),
            ("t", ANY),
            ("w", ONSET),
            ("ch", ONSET),
            ("qu", ONSET),
        ],
    ),
    (
        "t",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("r", ONSET),
            ("t", SPLIT),
            ("w", ONSET),
            ("ch", NB),
        ],
    ),
    (
        "u",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("y", END),
            ("b", ANY),
            ("c", ANY),
            ("d", ANY),
            ("f", ANY),
            ("g", ANY),
            ("h", BRK),
            ("j", SPLIT),
            ("k", ANY),
            ("l", ANY),
            ("m", ANY),
            ("n", ANY),
            ("p", ANY),
            ("r", ANY),
            ("s", ANY),
            ("t", ANY),
            ("v", ANY),
            ("x", ANY),
            ("z", ANY),
            ("ch", ANY),
            ("ck", ANY),
            ("gh", NB),
            ("ph", ANY),
            ("sh", ANY),
            ("th", ANY),
        ],
    ),
    (
        "v",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
        ],
    ),
    (
        "w",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("r", ONSET_P),
        ],
    ),
    (
        "x",
        &[
            ("a", BRK),
            ("e", BRK),
            ("i", BRK),
            ("o", BRK),
            ("u", BRK),
            ("t", NB),
        ],
    ),
    (
        "y",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("n", NB),
            ("s", NB),
            ("th", NB),
        ],
    ),
    (
        "z",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("z", NB),
        ],
    ),
    (
        "ch",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("r", ONSET),
        ],
    ),
    (
        "gh",
        &[
            ("a", BRK),
            ("e", BRK),
            ("i", BRK),
            ("o", BRK),
            ("u", BRK),
            ("t", NB),
        ],
    ),
    (
        "ph",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("l", ONSET),
            ("r", ONSET),
        ],
    ),
    (
        "rh",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
        ],
    ),
    (
        "sh",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("r", ONSET),
        ],
    ),
    (
        "th",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("u", ANY),
            ("y", ANY),
            ("r", ONSET),
        ],
    ),
    (
        "wh",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
            ("y", ANY),
        ],
    ),
    (
        "qu",
        &[
            ("a", ANY),
            ("e", ANY),
            ("i", ANY),
            ("o", ANY),
        ],
    ),
    (
        "ck",
        &[
            ("a", BRK),
            ("e", BRK),
            ("i", BRK),
            ("o", BRK),
            ("u", BRK),
            ("s", NB),
        ],
    ),
];

/// Indexed, read-only view over the unit and digram tables.
///
/// Lookups are O(1) on the first unit; rows are short enough that second-unit
/// scans stay cheap. A `Catalog` is safely shared across any number of
/// concurrent generations.
#[derive(Debug)]
pub struct Catalog {
    unit_index: HashMap<&'static str, UnitFlags>,
    digram_index: HashMap<&'static str, &'static [(&'static str, DigramFlags)]>,
}

impl Catalog {
    /// Returns the built-in English catalog
    pub fn english() -> &'static Catalog {
        static ENGLISH: OnceLock<Catalog> = OnceLock::new();
        ENGLISH.get_or_init(Catalog::build)
    }

    fn build() -> Catalog {
        let unit_index = UNITS.iter().copied().collect();
        let digram_index = DIGRAMS.iter().copied().collect();
        Catalog {
            unit_index,
            digram_index,
        }
    }

    /// Flags of the unit named by `text`, or `None` when it is not cataloged
    pub fn unit_flags(&self, text: &str) -> Option<UnitFlags> {
        self.unit_index.get(text).copied()
    }

    /// All cataloged units in table order
    pub fn units(&self) -> &'static [(&'static str, UnitFlags)] {
        UNITS
    }

    /// All legal continuations of `first`, empty when it starts no digram
    pub fn continuations(&self, first: &str) -> &'static [(&'static str, DigramFlags)] {
        self.digram_index.get(first).copied().unwrap_or(&[])
    }

    /// Flags of the exact pair `(first, second)`, or `None` when illegal
    pub fn digram_flags(&self, first: &str, second: &str) -> Option<DigramFlags> {
        self.continuations(first)
            .iter()
            .find(|(text, _)| *text == second)
            .map(|(_, flags)| *flags)
    }
}

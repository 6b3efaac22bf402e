//! Determinism and distinctness of the random sources
//!
//! A configured seed must reproduce byte-identical output across repeated
//! calls and across fresh generator instances (the seed is the only state, so
//! equality across fresh instances covers process restarts). The secure
//! source must not repeat itself in practice.

use std::collections::HashSet;

use sylph_core::{CaseMode, Generator, GeneratorConfig};

fn lower(min_length: usize, seed: u32) -> GeneratorConfig {
    GeneratorConfig {
        min_length,
        case: CaseMode::Lower,
        seed: Some(seed),
        ..GeneratorConfig::default()
    }
}

#[test]
fn identical_seed_and_config_reproduce_identical_output() {
    let first = Generator::new(lower(8, 42)).generate().unwrap();
    let second = Generator::new(lower(8, 42)).generate().unwrap();
    assert_eq!(first, second);
    assert!(first.len() >= 8);
    assert!(first.chars().all(|c| c.is_ascii_lowercase()));
}

#[test]
fn reproducibility_holds_across_configurations() {
    let configs = [
        lower(10, 7),
        GeneratorConfig {
            digits: true,
            ..lower(10, 7)
        },
        GeneratorConfig {
            symbols: "!@".to_string(),
            ..lower(16, 99)
        },
        GeneratorConfig {
            more_pronounceable: true,
            case: CaseMode::Mixed,
            ..lower(20, 123)
        },
        GeneratorConfig {
            case: CaseMode::Random,
            ..lower(14, 8)
        },
    ];
    for config in configs {
        let first = Generator::new(config.clone()).generate().unwrap();
        let second = Generator::new(config.clone()).generate().unwrap();
        assert_eq!(first, second, "config {config:?} not reproducible");
    }
}

#[test]
fn distinct_seeds_give_distinct_output() {
    // Not a hard guarantee, but a collision across these seeds would point
    // at a broken stream selection.
    let passwords: HashSet<_> = (0..16)
        .map(|seed| Generator::new(lower(16, seed)).generate().unwrap())
        .collect();
    assert!(passwords.len() >= 15);
}

#[test]
fn seeded_batch_differs_within_itself() {
    // One stream, consecutive draws: the second password continues the
    // stream instead of restarting it.
    let mut generator = Generator::new(lower(16, 31));
    let first = generator.generate().unwrap();
    let second = generator.generate().unwrap();
    assert_ne!(first, second);
}

#[test]
fn secure_source_does_not_repeat_consecutively() {
    let config = GeneratorConfig {
        min_length: 16,
        case: CaseMode::Lower,
        ..GeneratorConfig::default()
    };
    let mut generator = Generator::new(config);
    let first = generator.generate().unwrap();
    let second = generator.generate().unwrap();
    assert_ne!(first, second);
}

#[test]
fn unseeded_batch_of_five_is_distinct_and_conforming() {
    let config = GeneratorConfig {
        min_length: 12,
        case: CaseMode::Lower,
        ..GeneratorConfig::default()
    };
    let mut generator = Generator::new(config);
    let batch: HashSet<_> = (0..5)
        .map(|_| {
            let password = generator.generate().unwrap();
            assert!(password.len() >= 12);
            password
        })
        .collect();
    assert_eq!(batch.len(), 5);
}

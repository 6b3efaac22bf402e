//! sylph: pronounceable random password generator
//!
//! Thin command-line layer over `sylph-core`: argument parsing, optional
//! TOML profile defaults, logging setup, and the batch generation loop.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sylph_core::{CaseMode, Generator, GeneratorConfig};

mod profile;

use profile::Profile;

/// All typeable symbols on a standard 101-key keyboard
const DEFAULT_SYMBOLS: &str = "!@#$%^&*()_+[]{}~`;:,./?<>'\"\\|";

#[derive(Debug, Parser)]
#[command(
    name = "sylph",
    version,
    about = "Generate pronounceable random passwords"
)]
struct Cli {
    /// Minimum password length
    #[arg(short = 'l', long, value_name = "CHARS")]
    length: Option<usize>,

    /// Number of passwords to generate
    #[arg(short = 'n', long, value_name = "N")]
    count: Option<u32>,

    /// Inject decimal digits
    #[arg(short, long)]
    digits: bool,

    /// Inject symbols, drawn from SET when given
    #[arg(
        short,
        long,
        value_name = "SET",
        num_args = 0..=1,
        default_missing_value = DEFAULT_SYMBOLS
    )]
    symbols: Option<String>,

    /// Casing of the generated passwords
    #[arg(short, long, value_enum, value_name = "MODE")]
    case: Option<CaseArg>,

    /// Avoid doubled consonants
    #[arg(short, long)]
    more_pronounceable: bool,

    /// Seed for reproducible output (selects the deterministic source)
    #[arg(long, value_name = "N")]
    seed: Option<u32>,

    /// Show syllable boundaries with hyphens (lowercase output)
    #[arg(long)]
    hyphenate: bool,

    /// TOML profile supplying defaults for unset options
    #[arg(short, long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Casing modes accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CaseArg {
    /// Raw lowercase text
    Lower,
    /// Everything uppercased
    Upper,
    /// First character of every syllable uppercased
    Mixed,
    /// Per-character coin flip
    Random,
    /// Per-syllable coin flip on the leading character
    RandomMixed,
}

impl From<CaseArg> for CaseMode {
    fn from(case: CaseArg) -> CaseMode {
        match case {
            CaseArg::Lower => CaseMode::Lower,
            CaseArg::Upper => CaseMode::Upper,
            CaseArg::Mixed => CaseMode::Mixed,
            CaseArg::Random => CaseMode::Random,
            CaseArg::RandomMixed => CaseMode::RandomMixed,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);
    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let profile = match &cli.profile {
        Some(path) => Profile::load(path)?,
        None => Profile::default(),
    };
    let count = cli.count.or(profile.count).unwrap_or(1);
    let config = build_config(cli, &profile);
    log::info!(
        "generating {count} password(s), minimum length {}",
        config.min_length
    );
    log::debug!("configuration: {config:?}");

    let mut generator = Generator::new(config);
    for _ in 0..count {
        // A failure aborts the batch, but lines already printed stand.
        let line = if cli.hyphenate {
            generator
                .generate_word()
                .context("password generation failed")?
                .hyphenated()
        } else {
            generator.generate().context("password generation failed")?
        };
        println!("{line}");
    }
    Ok(())
}

/// Resolves the effective configuration: explicit options win over the
/// profile, which wins over the built-in defaults
fn build_config(cli: &Cli, profile: &Profile) -> GeneratorConfig {
    let defaults = GeneratorConfig::default();
    GeneratorConfig {
        min_length: cli
            .length
            .or(profile.length)
            .unwrap_or(defaults.min_length),
        digits: cli.digits || profile.digits.unwrap_or(false),
        symbols: cli
            .symbols
            .clone()
            .or_else(|| profile.symbols.clone())
            .unwrap_or_default(),
        case: cli
            .case
            .map(CaseMode::from)
            .or(profile.case)
            .unwrap_or(defaults.case),
        more_pronounceable: cli.more_pronounceable
            || profile.more_pronounceable.unwrap_or(false),
        seed: cli.seed.or(profile.seed),
    }
}

fn init_logging(cli: &Cli) {
    if cli.quiet {
        return;
    }
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

//! CLI for generating verified deduction cases.
//!
//! # Usage
//!
//! ```bash
//! # Built-in level
//! cargo run -p alibi-generator --bin alibi-generate -- --level 3
//!
//! # Custom configuration, reproducible, with the solution shown
//! cargo run -p alibi-generator --bin alibi-generate -- \
//!     --suspects 7 --culprits 2 --difficulty 5 --min-liars 2 --max-liars 4 --seed 7 --reveal
//!
//! # Machine-readable output
//! cargo run -p alibi-generator --bin alibi-generate -- --level 8 --json
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use alibi_core::{CaseConfig, LiarConstraints, LEVEL_COUNT};
use alibi_engine::Case;
use alibi_generator::{CaseGenerator, CaseRng, GenerationStats, GeneratorConfig};

/// Generate a liar/culprit deduction case with exactly one solution.
#[derive(Debug, Parser)]
#[command(name = "alibi-generate", version)]
struct Cli {
    /// Built-in level preset (overrides the custom options below)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=LEVEL_COUNT as i64))]
    level: Option<u8>,

    /// Number of suspects
    #[arg(long, default_value_t = 3)]
    suspects: usize,

    /// Number of culprits
    #[arg(long, default_value_t = 1)]
    culprits: usize,

    /// Highest template tier admitted, plus one
    #[arg(long, default_value_t = 1)]
    difficulty: u8,

    #[arg(long)]
    min_liars: Option<usize>,

    #[arg(long)]
    max_liars: Option<usize>,

    #[arg(long)]
    min_truths: Option<usize>,

    #[arg(long)]
    max_truths: Option<usize>,

    /// PRNG seed; random when absent
    #[arg(short, long, env = "ALIBI_SEED")]
    seed: Option<u64>,

    /// Attempt budget (default: 5000)
    #[arg(short = 'n', long)]
    max_attempts: Option<u32>,

    /// Small attempt budget
    #[arg(long, conflicts_with = "thorough")]
    quick: bool,

    /// Large attempt budget
    #[arg(long)]
    thorough: bool,

    /// Print the case as JSON
    #[arg(long)]
    json: bool,

    /// Show culprits and liars
    #[arg(long)]
    reveal: bool,
}

impl Cli {
    fn case_config(&self) -> Option<CaseConfig> {
        match self.level {
            Some(level) => CaseConfig::level(level),
            None => Some(CaseConfig::new(
                self.suspects,
                self.culprits,
                self.difficulty,
                LiarConstraints {
                    min_liars: self.min_liars,
                    max_liars: self.max_liars,
                    min_truths: self.min_truths,
                    max_truths: self.max_truths,
                },
            )),
        }
    }

    fn generator_config(&self) -> GeneratorConfig {
        let mut config = if self.quick {
            GeneratorConfig::quick()
        } else if self.thorough {
            GeneratorConfig::thorough()
        } else {
            GeneratorConfig::default()
        };
        if let Some(max) = self.max_attempts {
            config.max_attempts = max;
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("alibi_generator=info,alibi_engine=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(case_config) = cli.case_config() else {
        eprintln!("Error: unknown level");
        return ExitCode::FAILURE;
    };

    let mut rng = match cli.seed {
        Some(seed) => CaseRng::new(seed),
        None => CaseRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), "Using seed");

    let generator = CaseGenerator::new(cli.generator_config());
    let (case, stats) = match generator.generate_with_stats(&case_config, &mut rng) {
        Ok(generated) => generated,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        let output = serde_json::json!({
            "seed": rng.seed(),
            "case": case,
            "stats": stats,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Failed to serialize case: {}", e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    match print_case(&case, &stats, rng.seed(), cli.reveal) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_case(
    case: &Case,
    stats: &GenerationStats,
    seed: u64,
    reveal: bool,
) -> Result<(), alibi_engine::EngineError> {
    let config = &case.config;
    let liars = config.liar_range();

    println!("Case (seed {})", seed);
    println!("=========================");
    println!(
        "{} suspects, {} culprit(s), {}..={} liar(s)",
        config.suspect_count,
        config.culprit_count,
        liars.start(),
        liars.end()
    );
    println!();

    for suspect in case.suspects()? {
        let text = case
            .statement(suspect.id)
            .map_or("(silent)", |s| s.text.as_str());
        println!(
            "  {:<8} {:>3}cm {:<10} \"{}\"",
            suspect.name,
            suspect.height_cm,
            suspect.diet.noun(),
            text
        );
    }

    if reveal {
        let names = |set: alibi_core::SuspectSet| {
            set.iter()
                .filter_map(alibi_core::lookup)
                .map(|s| s.name)
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!();
        println!("Culprits: {}", names(case.solution.culprits));
        println!("Liars:    {}", names(case.solution.liars));
    }

    println!();
    println!("{}", stats.format_summary());
    Ok(())
}

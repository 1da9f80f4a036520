//! vmgen — synthetic voicemail triage fixture generator
//!
//! Generates voicemail transcripts tagged by the rule-based triage classifier
//! and writes them as a JSON fixture for the triage UI.
//!
//! Usage:
//!   cargo run -p vmgen
//!   cargo run -p vmgen -- generate --count 40 --seed 7 --out fixtures/voicemails.json
//!   cargo run -p vmgen -- classify script
//!   cargo run -p vmgen -- verify mock_voicemails.json

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vmtriage_artifact::{read_artifact_value, write_artifact, ArtifactManifest};
use vmtriage_contracts::{
    error::{FixtureError, FixtureResult},
    record::VoicemailRecord,
};
use vmtriage_core::{GenerationConfig, Generator};
use vmtriage_fixtures::TemplateSelector;
use vmtriage_rules::RuleClassifier;
use vmtriage_verify::FixtureVerifier;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Synthetic voicemail fixtures for the triage UI.
///
/// With no subcommand, generates the default fixture: 15 records written to
/// mock_voicemails.json.
#[derive(Parser)]
#[command(
    name = "vmgen",
    about = "Generate synthetic voicemail triage fixtures",
    long_about = "Generates synthetic voicemail transcripts, tags each one with the\n\
                  rule-based triage classifier, verifies the sequence, and writes it\n\
                  as a JSON fixture."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate records and write the fixture artifact.
    Generate(GenerateArgs),
    /// Print the triage result for one category label.
    Classify {
        /// Category label; unrecognized labels take the fallback row.
        category: String,
        /// Seed for the confidence sample.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check an existing artifact against the fixture rules.
    Verify {
        /// Path to the artifact.
        path: PathBuf,
    },
}

#[derive(clap::Args, Default)]
struct GenerateArgs {
    /// Number of records (default 15).
    #[arg(long)]
    count: Option<usize>,
    /// Output path (default mock_voicemails.json).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file with generation settings. Flags override it.
    #[arg(long)]
    config: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see one event per record.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => run_generate(GenerateArgs::default()),
        Some(Command::Generate(args)) => run_generate(args),
        Some(Command::Classify { category, seed }) => run_classify(&category, seed),
        Some(Command::Verify { path }) => run_verify(&path),
    };

    if let Err(e) = result {
        eprintln!("vmgen error: {}", e);
        std::process::exit(1);
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_generate(args: GenerateArgs) -> FixtureResult<()> {
    let config = resolve_config(&args)?;

    let generator = Generator::new(
        Box::new(TemplateSelector::new()),
        Box::new(RuleClassifier::new()),
        &config,
    )?;

    let mut rng = seeded_rng(config.seed);
    let records = generator.generate(config.count, &mut rng)?;

    let manifest = write_verified(&config.output, &records)?;
    info!(seed = ?config.seed, "generation run finished");

    println!(
        "Generated {} mock voicemails in '{}'",
        manifest.record_count,
        manifest.path.display()
    );
    println!("  sha256: {}", manifest.sha256);
    Ok(())
}

/// Merge settings: defaults, then the `--config` file, then flags.
fn resolve_config(args: &GenerateArgs) -> FixtureResult<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::from_file(path)?,
        None => GenerationConfig::default(),
    };
    if let Some(count) = args.count {
        config.count = count;
    }
    if let Some(out) = &args.out {
        config.output = out.clone();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

/// Verify `records` and write them only if every rule passes.
fn write_verified(path: &Path, records: &[VoicemailRecord]) -> FixtureResult<ArtifactManifest> {
    let report = FixtureVerifier::new().verify(records)?;
    if !report.passed {
        return Err(FixtureError::VerificationFailed {
            reason: report.summary(),
        });
    }
    write_artifact(path, records)
}

fn run_classify(label: &str, seed: Option<u64>) -> FixtureResult<()> {
    let mut rng = seeded_rng(seed);
    let result = RuleClassifier::new().classify_label(label, &mut rng);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn run_verify(path: &Path) -> FixtureResult<()> {
    let value = read_artifact_value(path)?;
    let report = FixtureVerifier::new().verify_value(&value);

    if report.passed {
        println!("'{}': PASS", path.display());
        Ok(())
    } else {
        for failure in &report.failures {
            println!("  [{}] {}", failure.rule_id, failure.message);
        }
        Err(FixtureError::VerificationFailed {
            reason: format!("{} failure(s) in '{}'", report.failures.len(), path.display()),
        })
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

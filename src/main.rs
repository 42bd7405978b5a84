use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use nkgen::{
    class::{ClassBounds, ClassDescriptor, EVAL_CONSTS},
    generation::{GenerationLauncher, GenerationOptions, Split},
    GeneratorError,
};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation failed: {0}")]
    Generation(#[from] GeneratorError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "nkgen", version, about = "Problem Class Generator")]
struct Cli {
    /// Seed for the random number generator (drawn and recorded if absent).
    #[arg(long)]
    seed: Option<u64>,
    /// Output folder.
    #[arg(long, default_value = "problems")]
    folder: PathBuf,
    /// Number of training instances to generate.
    #[arg(long, default_value_t = 200)]
    training: usize,
    /// Number of testing instances to generate.
    #[arg(long, default_value_t = 50)]
    testing: usize,
    /// Reproduce the run recorded in a prior meta.txt.
    #[arg(long, value_name = "META_FILE", conflicts_with = "seed")]
    meta: Option<PathBuf>,
    /// Smallest problem size to sample.
    #[arg(long, default_value_t = 50)]
    n_min: usize,
    /// Largest problem size to sample.
    #[arg(long, default_value_t = 300)]
    n_max: usize,
    /// Smallest epistasis to sample.
    #[arg(long, default_value_t = 1)]
    k_min: usize,
    /// Largest epistasis to sample.
    #[arg(long, default_value_t = 5)]
    k_max: usize,
    /// Only log warnings and errors.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));
    init_logging(cli.quiet);
    run(cli)
}

fn run(cli: Cli) -> Result<(), CliError> {
    if cli.n_min > cli.n_max || cli.k_min > cli.k_max {
        return Err(CliError::InvalidConfig(format!(
            "empty sampling range: N {}..={}, K {}..={}",
            cli.n_min, cli.n_max, cli.k_min, cli.k_max
        )));
    }

    let bounds = ClassBounds {
        n: cli.n_min..=cli.n_max,
        k: cli.k_min..=cli.k_max,
        eval_consts: EVAL_CONSTS.to_vec(),
    };

    let mut builder = GenerationOptions::builder()
        .folder(cli.folder)
        .training(cli.training)
        .testing(cli.testing)
        .bounds(bounds);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    if let Some(meta) = cli.meta {
        let descriptor = ClassDescriptor::read_file(&meta)?;
        info!(meta = %meta.display(), "replaying recorded class");
        builder = builder.replay(descriptor);
    }

    let report = GenerationLauncher::new(builder.build()).run()?;
    for split in Split::ALL {
        if let Some(manifest) = report.manifest(split) {
            info!(split = %split, files = manifest.count(), "manifest written");
        }
    }
    info!(seed = report.descriptor.seed, "done");
    Ok(())
}

fn init_logging(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber installed by an embedding process takes precedence.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Rewrites single-dash long flags (`-seed 7`) to their `--seed` form.
///
/// Negative numbers and genuine short flags are left untouched.
fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(s) if is_legacy_long_flag(s) => OsString::from(format!("-{}", s)),
            _ => arg,
        })
        .collect()
}

fn is_legacy_long_flag(arg: &str) -> bool {
    arg.strip_prefix('-').is_some_and(|name| {
        name.len() > 1 && !name.starts_with('-') && name.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
    })
}

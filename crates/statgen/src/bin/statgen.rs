use clap::Parser;
use clap::error::ErrorKind;
use statgen::{Config, Sampling, input};
use std::io;

#[derive(Parser)]
#[command(name = "statgen")]
#[command(about = "Random athlete stat line generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Fixed seed for a reproducible stat line (defaults to the current second)
    #[arg(long, env = "STATGEN_SEED")]
    seed: Option<u64>,

    #[arg(long, value_enum, env = "STATGEN_SAMPLING", default_value_t = Sampling::Modulo)]
    sampling: Sampling,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    dotenvy::dotenv().ok();

    // Bad arguments or settings never stop the run; only help and version exit early.
    let parsed = match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => Err(e),
    };

    let verbose = parsed.as_ref().is_ok_and(|cli| cli.verbose);
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("statgen={},roster={}", log_level, log_level).into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = match parsed {
        Ok(cli) => Config {
            seed: cli.seed,
            sampling: cli.sampling,
        },
        Err(e) => {
            tracing::warn!(
                "Ignoring invalid arguments, using defaults: {}",
                e.to_string().trim_end()
            );
            Config::default()
        }
    };

    if let Err(e) = input::prompt(io::stderr()) {
        tracing::warn!("Failed to write prompt: {}", e);
    }

    if let Err(e) = statgen::run(&config, io::stdin().lock(), io::stdout().lock()) {
        tracing::warn!("{}", e);
    }
}

//! Random athlete stat lines for the console.
//!
//! A run reads one player name, draws points, assists and rebounds from an
//! owned random source, and prints a four-line report.
pub mod config;
pub mod error;
pub mod generator;
pub mod input;
pub mod report;
pub mod rng;

use std::io::{BufRead, Write};

pub use config::Config;
pub use error::{Result, StatGenError};
pub use generator::StatGenerator;
pub use rng::Sampling;
pub use roster::{Athlete, StatRange};

/// Runs the whole procedure: seed, read the name, generate, print.
///
/// Reading never fails; only writing the report can.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, output: W) -> Result<Athlete> {
    let mut generator = config.generator();
    let name = input::read_name(input);
    let athlete = generator.generate(name);
    tracing::debug!(
        "Generated stat line: {} pts, {} ast, {} reb",
        athlete.points,
        athlete.assists,
        athlete.rebounds
    );
    report::display_stats(&athlete, output)?;
    Ok(athlete)
}

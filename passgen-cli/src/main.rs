#![deny(missing_docs)]
//! A command-line driver for the password and OTP generation library.

use clap::{Parser, Subcommand};
use log::info;
use passgen_core::generator::PasswordGenerator;
use passgen_core::random::RandomSource;
use passgen_core::validator;
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a one-time password
    Otp,
    /// Generate random passwords
    Password {
        /// How many passwords to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
    /// Check a candidate password against the policy
    Validate {
        /// The candidate password to check
        candidate: String,
    },
    /// Generate and validate passwords in a loop and report the rejection rate
    Simulate {
        /// How many generate-then-validate runs to perform
        #[arg(short, long, default_value_t = 100_000)]
        runs: usize,

        /// Emit the report as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

/// Aggregate outcome of a simulation run.
#[derive(Serialize)]
struct SimulationReport {
    runs: usize,
    valid: usize,
    invalid: usize,
    rejection_rate_percent: f64,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let mut generator = PasswordGenerator::from_entropy();

    match cli.command {
        Commands::Otp => println!("{}", generator.generate_otp()),
        Commands::Password { count } => {
            for _ in 0..count {
                println!("{}", generator.generate_password());
            }
        }
        Commands::Validate { candidate } => {
            if validator::validate_password(&candidate) {
                println!("valid");
            } else {
                println!("invalid");
            }
        }
        Commands::Simulate { runs, json } => run_simulation(&mut generator, runs, json),
    }
}

fn run_simulation<R: RandomSource>(generator: &mut PasswordGenerator<R>, runs: usize, json: bool) {
    info!("Running {runs} generate-then-validate iterations.");
    let mut valid = 0_usize;
    let mut invalid = 0_usize;
    for _ in 0..runs {
        if validator::validate_password(&generator.generate_password()) {
            valid += 1;
        } else {
            invalid += 1;
        }
    }
    let report = SimulationReport {
        runs,
        valid,
        invalid,
        rejection_rate_percent: rejection_rate(invalid, runs),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("Failed to serialize report")
        );
    } else {
        println!("Number of runs: {}", report.runs);
        println!("Valid: {} Invalid: {}", report.valid, report.invalid);
        println!("Rejection rate: {:.2}%", report.rejection_rate_percent);
    }
}

#[allow(clippy::cast_precision_loss)]
fn rejection_rate(invalid: usize, runs: usize) -> f64 {
    if runs == 0 {
        return 0.0;
    }
    (invalid as f64 / runs as f64) * 100.0
}

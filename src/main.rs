//! Command-line entry point for the Monte Carlo call pricer.
//!
//! Reads the five pricing inputs as positional arguments, prices once, and
//! prints the rounded estimate on stdout. Diagnostics go to stderr via
//! `tracing` and stay silent unless a filter raises the level.

use clap::Parser;

use montecall::core::PricingError;
use montecall::mc::MonteCarloCallEngine;
use montecall::params::{PricingParameters, SimulationConfig};

/// Monte Carlo pricer for a European call option under geometric Brownian motion.
#[derive(Parser, Debug)]
#[command(name = "montecall", version, about)]
struct Cli {
    /// Initial stock price.
    initial_price: f64,
    /// Strike price (swapped with the initial price if larger).
    strike_price: f64,
    /// Annualized volatility, in (0, 1).
    volatility: f64,
    /// Continuously compounded risk-free rate, in (0, 1).
    risk_free_rate: f64,
    /// Days to maturity, in [1, 30].
    days_to_maturity: u32,
}

fn run(cli: &Cli) -> Result<(), PricingError> {
    let params = PricingParameters::new(
        cli.initial_price,
        cli.strike_price,
        cli.volatility,
        cli.risk_free_rate,
        cli.days_to_maturity,
    )?;

    let engine = MonteCarloCallEngine::new(SimulationConfig::default());
    let result = engine.price(&params)?;
    tracing::debug!(
        seed = result.seed,
        raw_price = result.price,
        stderr = result.stderr,
        "simulation complete"
    );

    println!("{}", result.rounded_price());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("montecall failed: {err}");
        std::process::exit(1);
    }
}

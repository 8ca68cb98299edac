//! Monte Carlo machinery: path simulation, seed selection, and the engine.
//!
//! References: Glasserman (2004) for the estimator; Hull (11th ed.) Ch. 21
//! for discrete GBM stepping.
//!
//! Key types: [`GbmPathSimulator`] produces one terminal price per call,
//! [`SeedChooser`] decides which deterministic seed drives a pricing call,
//! and [`MonteCarloCallEngine`] ties both together into the discounted
//! average-payoff estimate.

mod engine;
mod path;
mod seed;

pub use engine::MonteCarloCallEngine;
pub use path::GbmPathSimulator;
pub use seed::{CoinFlipSeedChooser, FixedSeedChooser, SeedChooser};

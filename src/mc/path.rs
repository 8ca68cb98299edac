//! Discretized geometric Brownian motion terminal-price simulation.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::params::{DAYS_PER_YEAR, PricingParameters};

/// Simulates one terminal stock price by stepping a GBM path day by day.
///
/// Only the final price matters to the call payoff, so intermediate points
/// are never stored. Inputs are documented preconditions (positive initial
/// price, volatility and rate in `(0, 1)`, at least one day to maturity);
/// the simulator does not re-check what [`PricingParameters`] already
/// validated.
#[derive(Debug, Clone, Copy)]
pub struct GbmPathSimulator {
    /// Price at the start of the path.
    pub initial_price: f64,
    /// Annualized volatility.
    pub volatility: f64,
    /// Continuously compounded risk-free rate.
    pub risk_free_rate: f64,
    /// Number of daily steps to simulate.
    pub days_to_maturity: u32,
}

impl GbmPathSimulator {
    /// Builds a simulator from validated pricing parameters.
    pub fn from_params(params: &PricingParameters) -> Self {
        Self {
            initial_price: params.initial_price(),
            volatility: params.volatility(),
            risk_free_rate: params.risk_free_rate(),
            days_to_maturity: params.days_to_maturity(),
        }
    }

    /// Steps the path one day at a time and returns the terminal price.
    ///
    /// Draws exactly `days_to_maturity` standard-normal deviates from `rng`,
    /// advancing it in place; no other state is touched.
    pub fn terminal_price<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let dt = 1.0 / DAYS_PER_YEAR;
        let drift = (self.risk_free_rate - 0.5 * self.volatility * self.volatility) * dt;
        let diffusion = self.volatility * dt.sqrt();

        let mut price = self.initial_price;
        for _ in 0..self.days_to_maturity {
            let z: f64 = StandardNormal.sample(rng);
            price *= (drift + diffusion * z).exp();
        }
        price
    }
}

//! Discounted-average-payoff Monte Carlo engine for European calls.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::{PricingError, PricingResult};
use crate::mc::path::GbmPathSimulator;
use crate::mc::seed::{CoinFlipSeedChooser, SeedChooser};
use crate::params::{PricingParameters, SimulationConfig};

/// Monte Carlo pricing engine for a European call option.
///
/// One pricing call selects a seed, runs `config.num_simulations` GBM paths
/// off a single generator instance (advanced across iterations, never
/// reseeded), and discounts the average payoff back to present value.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonteCarloCallEngine {
    /// Simulation constants.
    pub config: SimulationConfig,
}

impl MonteCarloCallEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Prices with the production coin-flip seed chooser.
    ///
    /// Repeated calls may land on either candidate seed, so two runs with
    /// identical parameters can differ; see [`CoinFlipSeedChooser`]. Use
    /// [`MonteCarloCallEngine::price_with_chooser`] to pin the stream.
    ///
    /// # Errors
    /// Same conditions as [`MonteCarloCallEngine::price_with_chooser`].
    pub fn price(&self, params: &PricingParameters) -> Result<PricingResult, PricingError> {
        self.price_with_chooser(params, &mut CoinFlipSeedChooser::new())
    }

    /// Prices with an injected seed-selection strategy.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidArgument`] when the configuration asks
    /// for zero simulations, and [`PricingError::DomainViolation`] when
    /// `seed_probability` lies outside `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use montecall::mc::{FixedSeedChooser, MonteCarloCallEngine};
    /// use montecall::params::{PricingParameters, SimulationConfig};
    ///
    /// let params = PricingParameters::new(5000.0, 4500.0, 0.2, 0.05, 10).unwrap();
    /// let engine = MonteCarloCallEngine::new(SimulationConfig::default());
    ///
    /// let a = engine
    ///     .price_with_chooser(&params, &mut FixedSeedChooser::new(123))
    ///     .unwrap();
    /// let b = engine
    ///     .price_with_chooser(&params, &mut FixedSeedChooser::new(123))
    ///     .unwrap();
    /// assert_eq!(a.price, b.price);
    /// ```
    pub fn price_with_chooser<C: SeedChooser>(
        &self,
        params: &PricingParameters,
        chooser: &mut C,
    ) -> Result<PricingResult, PricingError> {
        if self.config.num_simulations == 0 {
            return Err(PricingError::InvalidArgument(
                "num_simulations must be >= 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.config.seed_probability) {
            return Err(PricingError::DomainViolation(
                "seed_probability must lie in [0, 1]".to_string(),
            ));
        }

        let seed = chooser.choose_seed(&self.config);
        let mut rng = StdRng::seed_from_u64(seed);
        let simulator = GbmPathSimulator::from_params(params);
        let strike = params.strike_price();

        let mut sum = 0.0_f64;
        let mut sum_sq = 0.0_f64;
        for _ in 0..self.config.num_simulations {
            let terminal = simulator.terminal_price(&mut rng);
            let payoff = (terminal - strike).max(0.0);
            sum += payoff;
            sum_sq += payoff * payoff;
        }

        let n = f64::from(self.config.num_simulations);
        let mean = sum / n;
        let discount = (-params.risk_free_rate() * params.year_fraction()).exp();

        let variance = if self.config.num_simulations > 1 {
            ((sum_sq - sum * sum / n) / (n - 1.0)).max(0.0)
        } else {
            0.0
        };

        Ok(PricingResult {
            price: discount * mean,
            stderr: discount * (variance / n).sqrt(),
            seed,
        })
    }
}

//! Common result/error structures and the presentation rounding rule.

/// Errors surfaced by parameter construction, configuration, and the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// An input could not be used as the expected numeric type or shape.
    InvalidArgument(String),
    /// A numeric input lies outside its documented range.
    DomainViolation(String),
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::DomainViolation(msg) => write!(f, "domain violation: {msg}"),
        }
    }
}

impl std::error::Error for PricingError {}

/// Discounted Monte Carlo estimate for one pricing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult {
    /// Discounted average payoff, unrounded.
    pub price: f64,
    /// Sample standard error of the discounted estimate.
    pub stderr: f64,
    /// Seed that drove the simulation generator.
    pub seed: u64,
}

impl PricingResult {
    /// Price rounded to 2 decimal places for presentation.
    ///
    /// Round-half-away-from-zero on the scaled value
    /// (`(price * 100).round() / 100`): `123.455` presents as `123.46` and
    /// `123.444` as `123.44`.
    pub fn rounded_price(&self) -> f64 {
        round_to_cents(self.price)
    }
}

/// Rounds to 2 decimal places, half away from zero.
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

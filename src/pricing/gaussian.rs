//! Gaussian spread pricing model
//!
//! Assumes the score differential between two teams follows a Normal
//! distribution X ~ N(mu, sigma^2). The mean comes straight from the point
//! spread; the volatility is backed out of the vig-free moneyline win
//! probability by inverting the standard Normal quantile:
//!
//!   Z = (X - mu) / sigma  =>  sigma = |mu| / |Z|
//!
//! Every numeric pathology (degenerate quotes, near even-money, implausible
//! volatility) is absorbed here with deterministic fallbacks so one bad
//! quote never aborts a batch.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

use super::odds::{implied_probability, remove_vig};
use crate::domain::GameOdds;

/// Volatility band for NBA score differentials, in points. A solved sigma
/// outside the open interval is implausible and falls back to the default.
pub const MIN_SIGMA: f64 = 5.0;
pub const MAX_SIGMA: f64 = 25.0;

/// League-average game volatility, used whenever the solve degenerates.
pub const DEFAULT_SIGMA: f64 = 13.5;

/// Below this |z| the game is effectively even-money and the sigma
/// division is unstable.
const Z_EPSILON: f64 = 0.01;

/// Fitted Normal parameters for one game's score differential.
///
/// Created fresh per game per evaluation cycle; `sigma` always lies inside
/// `(MIN_SIGMA, MAX_SIGMA)` after solving.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameParameters {
    /// Mean expected score differential (points)
    pub mu: f64,
    /// Implied game volatility (points)
    pub sigma: f64,
}

impl GameParameters {
    /// Probability (0-100) that the differential exceeds `threshold`,
    /// via the Normal survival function.
    pub fn fair_value(&self, threshold: f64) -> f64 {
        fair_value(self.mu, self.sigma, threshold)
    }
}

fn standard_normal() -> Normal {
    Normal::new(0.0, 1.0).expect("standard normal parameters are valid")
}

/// Derive Gaussian parameters (mu, sigma) from a point spread and a
/// moneyline pair.
///
/// Infallible by design: a degenerate quote on either leg, a non-finite
/// spread, an unstable z-score, or an out-of-band sigma all collapse to
/// `DEFAULT_SIGMA` (and `mu = 0` for a non-finite spread) rather than
/// surfacing an error.
pub fn solve_parameters(
    spread_points: f64,
    favorite_odds: f64,
    underdog_odds: f64,
) -> GameParameters {
    let mu = spread_points.abs();
    if !mu.is_finite() {
        debug!(spread_points, "non-finite spread, using default parameters");
        return GameParameters {
            mu: 0.0,
            sigma: DEFAULT_SIGMA,
        };
    }

    let true_p_favorite = match (
        implied_probability(favorite_odds),
        implied_probability(underdog_odds),
    ) {
        (Ok(fav), Ok(dog)) => Some(remove_vig(fav, dog) / 100.0),
        _ => None,
    };

    let sigma = match true_p_favorite {
        Some(p) => {
            let z = standard_normal().inverse_cdf(1.0 - p);
            if !z.is_finite() {
                debug!(p, "quantile inversion degenerate, using default volatility");
                DEFAULT_SIGMA
            } else if z.abs() < Z_EPSILON {
                // Even-money game: sigma is unidentifiable from the quote
                DEFAULT_SIGMA
            } else {
                mu / z.abs()
            }
        }
        None => {
            debug!(
                favorite_odds,
                underdog_odds, "degenerate moneyline pair, using default volatility"
            );
            DEFAULT_SIGMA
        }
    };

    let sigma = if sigma > MIN_SIGMA && sigma < MAX_SIGMA {
        sigma
    } else {
        debug!(sigma, "solved volatility outside plausible band, clamping");
        DEFAULT_SIGMA
    };

    GameParameters { mu, sigma }
}

/// Solve directly from a sportsbook record.
pub fn solve_game(odds: &GameOdds) -> GameParameters {
    solve_parameters(odds.spread_points, odds.favorite_odds, odds.underdog_odds)
}

/// Probability (0-100) that the score differential exceeds `threshold`,
/// computed as the survival function of `(threshold - mu) / sigma`.
///
/// Non-finite inputs fall back to the defaults (mu 0, sigma `DEFAULT_SIGMA`)
/// so the result is always a valid percentage.
pub fn fair_value(mu: f64, sigma: f64, threshold: f64) -> f64 {
    let mu = if mu.is_finite() { mu } else { 0.0 };
    let sigma = if sigma.is_finite() && sigma > 0.0 {
        sigma
    } else {
        DEFAULT_SIGMA
    };
    standard_normal().sf((threshold - mu) / sigma) * 100.0
}

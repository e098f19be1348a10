//! Per-game pricing pipeline
//!
//! Takes a sportsbook quote from raw odds to a tradeable fair value:
//! - `odds` - American/decimal odds to implied probability, vig removal
//! - `gaussian` - Normal model fit (mu, sigma) and fair-value pricing
//! - `edge` - fair value vs market ask, fee-aware edge and ROI gating

pub mod edge;
pub mod gaussian;
pub mod odds;

pub use edge::{EdgeAssessment, EdgeCalculator};
pub use gaussian::{
    fair_value, solve_game, solve_parameters, GameParameters, DEFAULT_SIGMA, MAX_SIGMA, MIN_SIGMA,
};
pub use odds::{implied_probability, remove_vig};

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod hodge;
pub mod pricing;

pub use config::AppConfig;
pub use domain::{load_slate, GameOdds, SpreadObservation};
pub use error::{GambitError, Result};
pub use hodge::{
    decompose, market_inconsistency, ArbitrageLoop, ConsistencyReport, HodgeDecomposition,
    MarketGraph, TeamRating,
};
pub use pricing::{
    fair_value, solve_game, solve_parameters, EdgeAssessment, EdgeCalculator, GameParameters,
};

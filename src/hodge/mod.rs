//! Graph-based market consistency analysis
//!
//! One cycle's spread observations become a flow network over teams:
//! - `graph` - simple undirected graph construction, last write wins
//! - `decompose` - Hodge split into global ratings plus cyclic residuals
//! - `report` - ranked ratings, curl energy, flagged arbitrage loops

pub mod decompose;
pub mod graph;
pub mod report;

pub use decompose::{
    decompose, ArbitrageLoop, HodgeDecomposition, ResidualEdge, DISCREPANCY_THRESHOLD_POINTS,
};
pub use graph::{FlowEdge, MarketGraph};
pub use report::{
    assemble, market_inconsistency, ConsistencyReport, TeamRating, HIGH_CURL_ENERGY,
};

//! Consistency report assembly
//!
//! Pure data packaging on top of the decomposition: ranked ratings, the
//! aggregate curl energy, and the flagged loops. No numerical work happens
//! here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::decompose::{decompose, ArbitrageLoop, HodgeDecomposition};
use super::graph::MarketGraph;
use crate::domain::SpreadObservation;
use crate::error::Result;

/// Curl energy above which the whole market counts as highly inefficient.
pub const HIGH_CURL_ENERGY: f64 = 100.0;

/// One team's fitted global rating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRating {
    pub team: String,
    pub potential: f64,
}

/// Cycle-level consistency report for one batch of spread observations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// Ratings sorted descending by potential; ties break alphabetically
    pub rankings: Vec<TeamRating>,
    /// Sum of squared residuals over all edges
    pub total_curl_energy: f64,
    pub arbitrage_loops: Vec<ArbitrageLoop>,
    pub generated_at: DateTime<Utc>,
}

impl ConsistencyReport {
    /// Whether aggregate inconsistency crosses the standard alert level
    pub fn is_highly_inefficient(&self) -> bool {
        self.total_curl_energy > HIGH_CURL_ENERGY
    }
}

/// Package a decomposition into report shape. Energy and flagged loops pass
/// through unchanged; only the rankings are sorted here.
pub fn assemble(graph: &MarketGraph, decomposition: &HodgeDecomposition) -> ConsistencyReport {
    let mut rankings: Vec<TeamRating> = graph
        .nodes()
        .iter()
        .zip(decomposition.potentials.iter())
        .map(|(team, &potential)| TeamRating {
            team: team.clone(),
            potential,
        })
        .collect();
    rankings.sort_by(|a, b| {
        b.potential
            .total_cmp(&a.potential)
            .then_with(|| a.team.cmp(&b.team))
    });

    ConsistencyReport {
        rankings,
        total_curl_energy: decomposition.total_curl_energy,
        arbitrage_loops: decomposition.arbitrage_loops.clone(),
        generated_at: Utc::now(),
    }
}

/// One-shot pipeline for a cycle's batch: build the graph, decompose it,
/// assemble the report.
pub fn market_inconsistency(observations: &[SpreadObservation]) -> Result<ConsistencyReport> {
    let graph = MarketGraph::build(observations);
    let decomposition = decompose(&graph)?;
    let report = assemble(&graph, &decomposition);
    if report.is_highly_inefficient() {
        warn!(
            total_curl_energy = report.total_curl_energy,
            "high market inefficiency, cyclic arbitrage likely present"
        );
    }
    Ok(report)
}

//! Discrete Hodge decomposition of the market graph
//!
//! Splits observed pairwise spreads into a gradient component (pairwise
//! differences of one global rating per team) and a cyclic residual the
//! ratings cannot explain. The residual is the tradeable signal: spreads
//! around a cycle that do not sum to zero cannot all be fair.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::graph::MarketGraph;
use crate::error::{GambitError, Result};

/// Residual above which an edge is flagged as a cyclic arbitrage signal
/// (points).
pub const DISCREPANCY_THRESHOLD_POINTS: f64 = 3.0;

/// Singular values below this are treated as the Laplacian's null space.
const PINV_EPSILON: f64 = 1e-10;

/// Per-edge split of observed flow into gradient and residual parts.
#[derive(Debug, Clone, Copy)]
pub struct ResidualEdge {
    /// Tail node index (away team)
    pub from: usize,
    /// Head node index (home team)
    pub to: usize,
    /// Observed spread (points)
    pub observed_flow: f64,
    /// Flow implied by the fitted potentials
    pub gradient_implied_flow: f64,
    /// observed_flow - gradient_implied_flow
    pub residual: f64,
}

/// An edge whose residual exceeds the discrepancy threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbitrageLoop {
    /// Human-readable matchup, "<away> vs <home>"
    pub matchup: String,
    /// Observed market spread (points)
    pub vegas_spread: f64,
    /// Spread implied by the global ratings
    pub hodge_implied: f64,
    /// vegas_spread - hodge_implied
    pub discrepancy: f64,
}

/// Full decomposition output for one market graph.
#[derive(Debug, Clone)]
pub struct HodgeDecomposition {
    /// One rating per node index. Meaningful only up to an additive
    /// constant; compare differences, never absolute values.
    pub potentials: Vec<f64>,
    pub residual_edges: Vec<ResidualEdge>,
    /// Sum of squared residuals over all edges
    pub total_curl_energy: f64,
    pub arbitrage_loops: Vec<ArbitrageLoop>,
}

/// Decompose a market graph into global ratings and cyclic residuals.
///
/// Solves `L s = div` for the minimum-norm potential vector via the
/// Moore-Penrose pseudo-inverse; `L` is singular (rows sum to zero) so the
/// pseudo-inverse fixes the gauge. Fails with `InsufficientData` when the
/// graph has fewer than 2 nodes.
pub fn decompose(graph: &MarketGraph) -> Result<HodgeDecomposition> {
    let n = graph.node_count();
    if n < 2 {
        return Err(GambitError::InsufficientData { nodes: n });
    }
    debug!(
        nodes = n,
        edges = graph.edge_count(),
        "decomposing market graph"
    );

    // Net flow into each node
    let mut divergence = DVector::<f64>::zeros(n);
    for edge in graph.edges() {
        divergence[edge.to] += edge.weight;
        divergence[edge.from] -= edge.weight;
    }

    // Unweighted structural Laplacian L = D - A; connectivity only, flow
    // magnitudes enter through the divergence
    let mut laplacian = DMatrix::<f64>::zeros(n, n);
    for edge in graph.edges() {
        laplacian[(edge.from, edge.from)] += 1.0;
        laplacian[(edge.to, edge.to)] += 1.0;
        laplacian[(edge.from, edge.to)] -= 1.0;
        laplacian[(edge.to, edge.from)] -= 1.0;
    }

    let pinv = laplacian
        .pseudo_inverse(PINV_EPSILON)
        .map_err(|e| GambitError::Numeric(format!("Laplacian pseudo-inverse failed: {e}")))?;
    let potentials = pinv * divergence;

    let mut residual_edges = Vec::with_capacity(graph.edge_count());
    let mut arbitrage_loops = Vec::new();
    let mut total_curl_energy = 0.0;

    for edge in graph.edges() {
        let implied = potentials[edge.to] - potentials[edge.from];
        let residual = edge.weight - implied;
        total_curl_energy += residual * residual;

        if residual.abs() > DISCREPANCY_THRESHOLD_POINTS {
            let matchup = format!("{} vs {}", graph.label(edge.from), graph.label(edge.to));
            info!(
                %matchup,
                observed = edge.weight,
                implied,
                residual,
                "cyclic arbitrage signal"
            );
            arbitrage_loops.push(ArbitrageLoop {
                matchup,
                vegas_spread: edge.weight,
                hodge_implied: implied,
                discrepancy: residual,
            });
        }

        residual_edges.push(ResidualEdge {
            from: edge.from,
            to: edge.to,
            observed_flow: edge.weight,
            gradient_implied_flow: implied,
            residual,
        });
    }

    debug!(total_curl_energy, "decomposition complete");

    Ok(HodgeDecomposition {
        potentials: potentials.iter().copied().collect(),
        residual_edges,
        total_curl_energy,
        arbitrage_loops,
    })
}

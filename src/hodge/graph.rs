//! Market graph construction from pairwise spread observations
//!
//! Teams become nodes, matchups become edges. The graph is simple and
//! undirected; orientation lives entirely in the weight sign plus the fixed
//! (away, home) ordering, so one signed scalar per unordered pair is enough.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::SpreadObservation;

/// One stored flow between two teams.
///
/// `from` and `to` are node indices with flow oriented from -> to
/// (away -> home); a positive weight favors `to`.
#[derive(Debug, Clone, Copy)]
pub struct FlowEdge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// Simple undirected graph over team labels.
///
/// Invariant: at most one edge per unordered pair. A later observation for
/// an already-seen matchup replaces the stored edge entirely, weight and
/// orientation both (last write wins).
#[derive(Debug, Clone, Default)]
pub struct MarketGraph {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<FlowEdge>,
}

impl MarketGraph {
    /// Build a graph from one cycle's batch of spread observations.
    ///
    /// Nodes are indexed in first-appearance order. Observations naming the
    /// same team on both sides carry no pairwise information and are
    /// dropped.
    pub fn build(observations: &[SpreadObservation]) -> Self {
        let mut graph = Self::default();
        let mut slot_by_pair: HashMap<(usize, usize), usize> = HashMap::new();

        for obs in observations {
            if obs.away == obs.home {
                debug!(team = %obs.home, "skipping self-referential observation");
                continue;
            }
            let from = graph.intern(&obs.away);
            let to = graph.intern(&obs.home);
            let edge = FlowEdge {
                from,
                to,
                weight: obs.spread,
            };

            let pair = (from.min(to), from.max(to));
            match slot_by_pair.get(&pair) {
                Some(&slot) => {
                    debug!(
                        home = %obs.home,
                        away = %obs.away,
                        weight = obs.spread,
                        "duplicate matchup, overwriting stored edge"
                    );
                    graph.edges[slot] = edge;
                }
                None => {
                    slot_by_pair.insert(pair, graph.edges.len());
                    graph.edges.push(edge);
                }
            }
        }

        graph
    }

    fn intern(&mut self, label: &str) -> usize {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(label.to_string());
        self.index.insert(label.to_string(), idx);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Team labels in index order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    /// Label for a node index produced by this graph
    pub fn label(&self, idx: usize) -> &str {
        &self.nodes[idx]
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(home: &str, away: &str, spread: f64) -> SpreadObservation {
        SpreadObservation::new(home, away, spread)
    }

    #[test]
    fn test_nodes_indexed_in_first_appearance_order() {
        let graph = MarketGraph::build(&[
            obs("LAL", "GSW", 5.5),
            obs("BOS", "LAL", 2.0),
        ]);

        // Away team interns before home team per observation
        assert_eq!(graph.nodes(), &["GSW", "LAL", "BOS"]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.index_of("LAL"), Some(1));
        assert_eq!(graph.label(2), "BOS");
    }

    #[test]
    fn test_flow_runs_away_to_home() {
        let graph = MarketGraph::build(&[obs("LAL", "GSW", 5.5)]);

        let edge = graph.edges()[0];
        assert_eq!(graph.label(edge.from), "GSW");
        assert_eq!(graph.label(edge.to), "LAL");
        assert_eq!(edge.weight, 5.5);
    }

    #[test]
    fn test_duplicate_pair_last_write_wins() {
        let graph = MarketGraph::build(&[
            obs("LAL", "GSW", 5.5),
            obs("LAL", "GSW", 7.0),
        ]);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges()[0].weight, 7.0);
    }

    #[test]
    fn test_duplicate_pair_replaces_orientation_too() {
        // Second record flips home and away for the same unordered pair
        let graph = MarketGraph::build(&[
            obs("LAL", "GSW", 5.5),
            obs("GSW", "LAL", 2.0),
        ]);

        assert_eq!(graph.edge_count(), 1);
        let edge = graph.edges()[0];
        assert_eq!(graph.label(edge.from), "LAL");
        assert_eq!(graph.label(edge.to), "GSW");
        assert_eq!(edge.weight, 2.0);
    }

    #[test]
    fn test_self_referential_observation_dropped() {
        let graph = MarketGraph::build(&[
            obs("LAL", "LAL", 3.0),
            obs("BOS", "MIA", 4.0),
        ]);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.index_of("LAL"), None);
    }

    #[test]
    fn test_empty_batch_builds_empty_graph() {
        let graph = MarketGraph::build(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}

//! Per-strategy aggregates over the whole results file.

use crate::series::{ResultSeries, Series};
use average::{Estimate, Max, Mean};
use std::fmt;

/// Aggregates for one placement strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategySummary {
    /// Total fragments over all requests.
    pub total_fragments: f64,
    /// Mean fragments per request.
    pub mean_fragments: f64,
    /// Largest fragment count seen for a single request.
    pub max_fragments: f64,
    /// Total free-list nodes visited.
    pub total_nodes: f64,
    /// Mean nodes visited per request.
    pub mean_nodes: f64,
}

impl StrategySummary {
    fn new(fragments: &Series, nodes: &Series) -> Self {
        let mut mean_frag = Mean::new();
        let mut max_frag = Max::new();
        for &v in fragments.values() {
            mean_frag.add(v);
            max_frag.add(v);
        }
        let mut mean_nodes = Mean::new();
        for &v in nodes.values() {
            mean_nodes.add(v);
        }

        StrategySummary {
            total_fragments: fragments.values().iter().sum(),
            mean_fragments: mean_frag.mean(),
            max_fragments: max_frag.max(),
            total_nodes: nodes.values().iter().sum(),
            mean_nodes: mean_nodes.mean(),
        }
    }
}

/// First-fit and best-fit side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of requests in the file.
    pub requests: usize,
    /// First-fit aggregates.
    pub first_fit: StrategySummary,
    /// Best-fit aggregates.
    pub best_fit: StrategySummary,
}

impl Summary {
    /// Summarizes extracted results.
    pub fn from_results(results: &ResultSeries) -> Summary {
        Summary {
            requests: results.len(),
            first_fit: StrategySummary::new(&results.first_fit_fragments, &results.first_fit_nodes),
            best_fit: StrategySummary::new(&results.best_fit_fragments, &results.best_fit_nodes),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Total Requests: {}", self.requests)?;
        for &(name, s) in &[("First-Fit", self.first_fit), ("Best-Fit", self.best_fit)] {
            writeln!(f, "======================================")?;
            writeln!(f, "{} Fragment Count: {}", name, s.total_fragments)?;
            writeln!(f, "Average {} Fragment Count: {:.4}", name, s.mean_fragments)?;
            writeln!(f, "Maximum {} Fragment Count: {}", name, s.max_fragments)?;
            writeln!(f, "{} Nodes Traversed: {}", name, s.total_nodes)?;
            writeln!(f, "Average {} Nodes Traversed: {:.4}", name, s.mean_nodes)?;
        }
        write!(f, "======================================")
    }
}

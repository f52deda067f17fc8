//! Top-level orchestration: wires the pipeline from a validated [`Graph`]
//! to a turn log.

use crate::distribute::{distribute, normalize};
use crate::error::{EngineError, Result};
use crate::graph::Graph;
use crate::pathfind::extract_disjoint_paths;
use crate::select::select_best;
use crate::simulate::simulate;
use petgraph::graph::NodeIndex;
use tracing::{info, instrument};

/// The full result of one pipeline run: the turn log plus the chosen paths
/// and per-path ant counts that produced it, for callers (e.g. the CLI's
/// optional JSON report) that want more than the turn log alone.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub turns: Vec<String>,
    pub paths: Vec<Vec<NodeIndex>>,
    pub counts: Vec<usize>,
}

/// Runs the full routing-and-simulation pipeline on `graph`, returning the
/// turn log: `Graph → Disjoint-Path Extractor → Path-Set Selector → Ant
/// Distributor → Movement Simulator`.
pub fn run(graph: &Graph) -> Result<Vec<String>> {
    Ok(run_detailed(graph)?.turns)
}

/// Like [`run`], but also returns the chosen paths and ant distribution
/// that produced the turn log.
#[instrument(skip(graph), fields(rooms = graph.num_rooms(), ants = graph.ants()))]
pub fn run_detailed(graph: &Graph) -> Result<RunResult> {
    let pool = extract_disjoint_paths(graph);
    if pool.is_empty() {
        return Err(EngineError::Unreachable);
    }
    info!(candidates = pool.len(), "extracted candidate paths");

    let chosen = select_best(&pool, graph.ants());
    let lengths: Vec<usize> = chosen.iter().map(|p| p.len() - 1).collect();
    let mut counts = distribute(&lengths, graph.ants());
    normalize(&mut counts, graph.ants());
    info!(paths = chosen.len(), ?counts, "selected paths and distribution");

    let turns = simulate(graph, &chosen, &counts)?;
    info!(turns = turns.len(), "simulation complete");
    Ok(RunResult {
        turns,
        paths: chosen,
        counts,
    })
}

#[cfg(test)]
#[path = "unit_tests/engine.rs"]
mod tests;

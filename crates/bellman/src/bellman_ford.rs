//! Bellman-Ford relaxation with early exit and path tracking.
//!
//! The engine keeps two tables indexed by vertex id: the best known distance from vertex `0`
//! and, in lockstep, the vertex sequence that realises it. Rounds scan every vertex in id order
//! and every outgoing edge in stored order; a round with no strict improvement ends the run,
//! and no run ever exceeds `n - 1` rounds.
//!
//! Negative cycles are not detected. The round cap still guarantees termination, but distances
//! downstream of such a cycle are meaningless.

use crate::graphlib::{Graph, VertexId};
use tracing::{debug, trace};

/// Distance of a vertex that has not been reached.
pub const INF: i64 = i64::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BellmanFordOptions {
    /// Stop as soon as a full round makes no improvement. When disabled the engine always runs
    /// `n - 1` rounds.
    pub early_exit: bool,
}

impl Default for BellmanFordOptions {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelaxStats {
    /// Rounds executed.
    pub rounds: usize,
    /// Strict improvements applied across all rounds.
    pub improvements: usize,
    /// Set once a round completes without any improvement.
    pub converged: bool,
}

/// Step-wise Bellman-Ford run over a borrowed [`Graph`], sourced at vertex `0`.
#[derive(Debug, Clone)]
pub struct BellmanFord<'g> {
    graph: &'g Graph,
    options: BellmanFordOptions,
    dist: Vec<i64>,
    paths: Vec<Option<Vec<VertexId>>>,
    stats: RelaxStats,
}

impl<'g> BellmanFord<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_options(graph, BellmanFordOptions::default())
    }

    pub fn with_options(graph: &'g Graph, options: BellmanFordOptions) -> Self {
        let n = graph.vertex_count();
        let mut dist = vec![INF; n];
        let mut paths: Vec<Option<Vec<VertexId>>> = vec![None; n];
        if n > 0 {
            dist[0] = 0;
            paths[0] = Some(Vec::new());
        }
        Self {
            graph,
            options,
            dist,
            paths,
            stats: RelaxStats::default(),
        }
    }

    /// Hard cap on the number of rounds: `n - 1`.
    pub fn max_rounds(&self) -> usize {
        self.graph.vertex_count().saturating_sub(1)
    }

    pub fn is_finished(&self) -> bool {
        self.stats.rounds >= self.max_rounds() || (self.options.early_exit && self.stats.converged)
    }

    pub fn distances(&self) -> &[i64] {
        &self.dist
    }

    pub fn path(&self, v: VertexId) -> Option<&[VertexId]> {
        self.paths[v].as_deref()
    }

    pub fn stats(&self) -> RelaxStats {
        self.stats
    }

    /// Runs one relaxation round. Returns `true` if any distance improved.
    ///
    /// Once the run is finished this is a no-op returning `false`.
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        let improvements = self.relax_round();
        self.stats.rounds += 1;
        self.stats.improvements += improvements;
        if improvements == 0 {
            self.stats.converged = true;
        }
        debug!(
            round = self.stats.rounds,
            improvements,
            max_rounds = self.max_rounds(),
            "relaxation round"
        );
        improvements > 0
    }

    /// Drives rounds until convergence (when early exit is enabled) or the round cap.
    pub fn run(mut self) -> ShortestPaths {
        while !self.is_finished() {
            self.step();
        }
        debug!(
            rounds = self.stats.rounds,
            improvements = self.stats.improvements,
            converged = self.stats.converged,
            "bellman-ford finished"
        );
        ShortestPaths {
            dist: self.dist,
            paths: self.paths,
            stats: self.stats,
        }
    }

    fn relax_round(&mut self) -> usize {
        let graph = self.graph;
        let mut improvements = 0;
        for (u, edges) in graph.iter() {
            for e in edges {
                // Re-read per edge: a negative self-loop may lower `u` mid-scan.
                let du = self.dist[u];
                if du == INF {
                    break;
                }
                let Some(candidate) = du.checked_add(e.weight) else {
                    continue;
                };
                if candidate >= self.dist[e.to] {
                    continue;
                }
                let Some(prefix) = self.paths[u].as_deref() else {
                    panic!("vertex {u} has finite distance {du} but no recorded path");
                };
                let mut path = Vec::with_capacity(prefix.len() + 1);
                path.extend_from_slice(prefix);
                path.push(u);
                trace!(from = u, to = e.to, distance = candidate, "improved");
                self.dist[e.to] = candidate;
                self.paths[e.to] = Some(path);
                improvements += 1;
            }
        }
        improvements
    }
}

/// Final distance and path tables of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    dist: Vec<i64>,
    paths: Vec<Option<Vec<VertexId>>>,
    stats: RelaxStats,
}

impl ShortestPaths {
    pub fn vertex_count(&self) -> usize {
        self.dist.len()
    }

    /// Raw distance table; unreachable vertices hold [`INF`].
    pub fn distances(&self) -> &[i64] {
        &self.dist
    }

    /// Distance to `v`, or `None` if `v` was never reached.
    pub fn distance(&self, v: VertexId) -> Option<i64> {
        match self.dist[v] {
            INF => None,
            d => Some(d),
        }
    }

    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.dist[v] != INF
    }

    /// Vertices leading from the source up to, but not including, `v`.
    ///
    /// `Some(&[])` for the source; `None` for vertices that were never improved.
    pub fn path(&self, v: VertexId) -> Option<&[VertexId]> {
        self.paths[v].as_deref()
    }

    /// Recorded path entries in id order.
    pub fn paths(&self) -> impl Iterator<Item = (VertexId, &[VertexId])> {
        self.paths
            .iter()
            .enumerate()
            .filter_map(|(v, p)| p.as_deref().map(|p| (v, p)))
    }

    pub fn stats(&self) -> RelaxStats {
        self.stats
    }
}

pub fn bellman_ford(graph: &Graph) -> ShortestPaths {
    BellmanFord::new(graph).run()
}

pub fn bellman_ford_with_options(graph: &Graph, options: BellmanFordOptions) -> ShortestPaths {
    BellmanFord::with_options(graph, options).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_has_nothing_to_do() {
        let g = Graph::with_vertex_count(0);
        let mut bf = BellmanFord::new(&g);
        assert!(bf.is_finished());
        assert!(!bf.step());
        let out = bf.run();
        assert_eq!(out.vertex_count(), 0);
        assert_eq!(out.paths().count(), 0);
    }

    #[test]
    fn overflowing_candidates_are_skipped() {
        let mut g = Graph::with_vertex_count(3);
        g.add_edge(0, 1, i64::MAX - 1).add_edge(1, 2, 5);
        let out = bellman_ford(&g);
        assert_eq!(out.distance(1), Some(i64::MAX - 1));
        assert_eq!(out.distance(2), None);
        assert_eq!(out.path(2), None);
    }
}

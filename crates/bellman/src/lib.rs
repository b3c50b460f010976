#![forbid(unsafe_code)]

//! Single-source shortest paths over labelled, weighted, directed graphs.
//!
//! The pipeline is: [`load`] interns labels and builds the adjacency list, [`bellman_ford`]
//! relaxes from the first declared vertex, and [`output`] renders distances and paths back to
//! labels.

pub use bellman_graphlib as graphlib;

pub mod bellman_ford;
pub mod error;
pub mod load;
pub mod output;

pub use bellman_ford::{
    BellmanFord, BellmanFordOptions, INF, RelaxStats, ShortestPaths, bellman_ford,
    bellman_ford_with_options,
};
pub use error::{Error, Result};
pub use load::LoadedGraph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A loaded graph together with its shortest-path tables.
#[derive(Debug, Clone)]
pub struct Solution {
    pub loaded: LoadedGraph,
    pub result: ShortestPaths,
}

impl Solution {
    pub fn distances(&self) -> output::Distances<'_> {
        output::distances(&self.loaded.symbols, &self.result)
    }

    pub fn paths(&self) -> output::Paths<'_> {
        output::paths(&self.loaded.symbols, &self.result)
    }
}

/// Parses `input` and runs Bellman-Ford from its first vertex.
pub fn solve(input: &str, options: BellmanFordOptions) -> Result<Solution> {
    let loaded = load::parse(input)?;
    let result = bellman_ford_with_options(&loaded.graph, options);
    Ok(Solution { loaded, result })
}

#![forbid(unsafe_code)]

//! Graph container APIs used by `bellman`.
//!
//! Vertices are dense `usize` ids handed out by a [`SymbolTable`] in first-seen order; the
//! [`Graph`] store only ever sees those ids.

mod graph;
mod symbols;

pub use graph::{AdjacencyDisplay, Edge, Graph};
pub use symbols::SymbolTable;

/// Dense, zero-based vertex id. Id `0` is the source vertex.
pub type VertexId = usize;

/// Weight of a single directed edge. May be negative.
pub type Weight = i64;

//! Adjacency-list graph store over dense vertex ids.

use crate::{SymbolTable, VertexId, Weight};
use std::fmt;

/// A single outgoing edge, stored on its tail vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: VertexId,
    pub weight: Weight,
}

/// Directed multigraph stored as one ordered edge list per vertex.
///
/// The vertex count is fixed at construction. Edges keep insertion order; self-loops and
/// parallel edges are stored as independent entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Builds a graph from one edge list per vertex, in id order.
    ///
    /// # Panics
    ///
    /// Panics if more than `vertex_count` lists are supplied or an edge points outside
    /// `0..vertex_count`.
    pub fn build<I, L>(vertex_count: usize, edge_lists: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = (VertexId, Weight)>,
    {
        let mut g = Self::with_vertex_count(vertex_count);
        for (from, edges) in edge_lists.into_iter().enumerate() {
            for (to, weight) in edges {
                g.add_edge(from, to, weight);
            }
        }
        g
    }

    /// Appends `from -> to` with `weight` to `from`'s edge list.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is outside `0..vertex_count`.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> &mut Self {
        let n = self.adj.len();
        assert!(to < n, "edge destination {to} out of range for {n} vertices");
        let Some(out) = self.adj.get_mut(from) else {
            panic!("edge source {from} out of range for {n} vertices");
        };
        out.push(Edge { to, weight });
        self.edge_count += 1;
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Outgoing edges of `v` in insertion order.
    pub fn edges(&self, v: VertexId) -> &[Edge] {
        &self.adj[v]
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &[Edge])> {
        self.adj.iter().enumerate().map(|(v, es)| (v, es.as_slice()))
    }

    /// Renders the adjacency list with labels resolved through `symbols`.
    pub fn display<'a>(&'a self, symbols: &'a SymbolTable) -> AdjacencyDisplay<'a> {
        AdjacencyDisplay {
            graph: self,
            symbols,
        }
    }
}

/// `Display` adapter returned by [`Graph::display`].
///
/// One line per vertex: `A->B:4,C:1,`.
pub struct AdjacencyDisplay<'a> {
    graph: &'a Graph,
    symbols: &'a SymbolTable,
}

impl fmt::Display for AdjacencyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, edges) in self.graph.iter() {
            write!(f, "{}->", self.symbols.resolve(v))?;
            for e in edges {
                write!(f, "{}:{},", self.symbols.resolve(e.to), e.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Loader for the whitespace-delimited adjacency-list input format.
//!
//! ```text
//! <num_vertices>
//! <label> <num_edges> <dest> <weight> <dest> <weight> ...
//! ```
//!
//! Exactly `num_vertices` vertex records follow the count, one per vertex, even for vertices
//! without outgoing edges. The first record's label becomes the source (id `0`). Tokens after
//! the last record are ignored.

use crate::error::{Error, Result};
use crate::graphlib::{Graph, SymbolTable, VertexId};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};
use tracing::debug;

/// Symbol table and graph store built together by the loader.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub symbols: SymbolTable,
    pub graph: Graph,
}

impl LoadedGraph {
    pub fn source_label(&self) -> &str {
        self.symbols.resolve(0)
    }
}

pub fn load_file(path: impl AsRef<Path>) -> Result<LoadedGraph> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

pub fn parse(text: &str) -> Result<LoadedGraph> {
    let mut tokens = Tokens::new(text);

    let count: i64 = tokens.integer("vertex count")?;
    if count <= 0 {
        return Err(Error::NonPositiveVertexCount { count });
    }
    let n = usize::try_from(count).map_err(|_| Error::InvalidInteger {
        line: tokens.line(),
        token: count.to_string(),
        expected: "vertex count",
    })?;

    // Every record needs at least a label and an edge count; reject counts the input cannot
    // satisfy before sizing anything from them.
    if tokens.clone().remaining() / 2 < n {
        return Err(Error::UnexpectedEof {
            expected: "vertex label",
        });
    }

    let mut symbols = SymbolTable::with_capacity(n);
    let mut graph = Graph::with_vertex_count(n);
    let mut declared = vec![false; n];

    for _ in 0..n {
        let label = tokens.next_or("vertex label")?;
        let line = tokens.line();
        let from = intern_bounded(&mut symbols, label, n, line)?;
        if std::mem::replace(&mut declared[from], true) {
            return Err(Error::DuplicateVertex {
                line,
                label: label.to_string(),
            });
        }

        let edge_count: usize = tokens.integer("edge count")?;
        for _ in 0..edge_count {
            let dest = tokens.next_or("edge destination")?;
            let to = intern_bounded(&mut symbols, dest, n, tokens.line())?;
            let weight: i64 = tokens.integer("edge weight")?;
            graph.add_edge(from, to, weight);
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(LoadedGraph { symbols, graph })
}

// `n` distinct records each intern their own label, so once the table is full every further
// new label is one too many.
fn intern_bounded(
    symbols: &mut SymbolTable,
    label: &str,
    declared: usize,
    line: usize,
) -> Result<VertexId> {
    if symbols.get(label).is_none() && symbols.len() == declared {
        return Err(Error::TooManyVertices {
            line,
            label: label.to_string(),
            declared,
        });
    }
    Ok(symbols.intern(label))
}

/// Whitespace tokenizer that remembers the 1-based line of the last token it returned.
#[derive(Clone)]
struct Tokens<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    words: Option<SplitWhitespace<'a>>,
    current_line: usize,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            words: None,
            current_line: 0,
            line: 0,
        }
    }

    fn line(&self) -> usize {
        self.line
    }

    fn next_token(&mut self) -> Option<&'a str> {
        loop {
            if let Some(tok) = self.words.as_mut().and_then(Iterator::next) {
                self.line = self.current_line;
                return Some(tok);
            }
            let (idx, text) = self.lines.next()?;
            self.current_line = idx + 1;
            self.words = Some(text.split_whitespace());
        }
    }

    fn remaining(mut self) -> usize {
        let mut count = 0;
        while self.next_token().is_some() {
            count += 1;
        }
        count
    }

    fn next_or(&mut self, expected: &'static str) -> Result<&'a str> {
        self.next_token().ok_or(Error::UnexpectedEof { expected })
    }

    fn integer<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let tok = self.next_or(expected)?;
        tok.parse().map_err(|_| Error::InvalidInteger {
            line: self.line,
            token: tok.to_string(),
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Tokens;

    #[test]
    fn tokens_track_line_numbers_across_blank_lines() {
        let mut t = Tokens::new("3\n\n  a 1\tb -2\n");
        assert_eq!(t.next_token(), Some("3"));
        assert_eq!(t.line(), 1);
        assert_eq!(t.next_token(), Some("a"));
        assert_eq!(t.line(), 3);
        assert_eq!(t.next_token(), Some("1"));
        assert_eq!(t.next_token(), Some("b"));
        assert_eq!(t.next_token(), Some("-2"));
        assert_eq!(t.line(), 3);
        assert_eq!(t.next_token(), None);
    }

    #[test]
    fn remaining_counts_without_advancing_the_original() {
        let mut t = Tokens::new("2\nA 1 B 3\nB 0\n");
        assert_eq!(t.next_token(), Some("2"));
        assert_eq!(t.clone().remaining(), 6);
        assert_eq!(t.next_token(), Some("A"));
    }
}

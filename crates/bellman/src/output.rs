//! Text renderings of a [`ShortestPaths`] result.
//!
//! Distances: one `label:distance` line per vertex in id order, `INF` for unreachable vertices.
//! Paths: one `label:a,b,c` line per vertex with a recorded path, in id order; the source line
//! is `label:`.

use crate::bellman_ford::ShortestPaths;
use crate::error::{Error, Result};
use crate::graphlib::SymbolTable;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DEFAULT_DISTANCES_FILE: &str = "output.txt";
pub const DEFAULT_PATHS_FILE: &str = "paths.txt";

pub struct Distances<'a> {
    symbols: &'a SymbolTable,
    result: &'a ShortestPaths,
}

pub fn distances<'a>(symbols: &'a SymbolTable, result: &'a ShortestPaths) -> Distances<'a> {
    Distances { symbols, result }
}

impl fmt::Display for Distances<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in 0..self.result.vertex_count() {
            let label = self.symbols.resolve(v);
            match self.result.distance(v) {
                Some(d) => writeln!(f, "{label}:{d}")?,
                None => writeln!(f, "{label}:INF")?,
            }
        }
        Ok(())
    }
}

pub struct Paths<'a> {
    symbols: &'a SymbolTable,
    result: &'a ShortestPaths,
}

pub fn paths<'a>(symbols: &'a SymbolTable, result: &'a ShortestPaths) -> Paths<'a> {
    Paths { symbols, result }
}

impl fmt::Display for Paths<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, path) in self.result.paths() {
            write!(f, "{}:", self.symbols.resolve(v))?;
            for (i, &hop) in path.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                f.write_str(self.symbols.resolve(hop))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn write_distances<W: Write>(
    mut w: W,
    symbols: &SymbolTable,
    result: &ShortestPaths,
) -> std::io::Result<()> {
    write!(w, "{}", distances(symbols, result))?;
    w.flush()
}

pub fn write_paths<W: Write>(
    mut w: W,
    symbols: &SymbolTable,
    result: &ShortestPaths,
) -> std::io::Result<()> {
    write!(w, "{}", paths(symbols, result))?;
    w.flush()
}

/// Writes both output files, truncating existing ones.
pub fn write_files(
    distances_path: impl AsRef<Path>,
    paths_path: impl AsRef<Path>,
    symbols: &SymbolTable,
    result: &ShortestPaths,
) -> Result<()> {
    write_to(distances_path.as_ref(), |w| {
        write_distances(w, symbols, result)
    })?;
    write_to(paths_path.as_ref(), |w| write_paths(w, symbols, result))
}

fn write_to(
    path: &Path,
    f: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> Result<()> {
    let wrap = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(wrap)?);
    f(&mut w).map_err(wrap)
}

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("line {line}: expected {expected}, found `{token}`")]
    InvalidInteger {
        line: usize,
        token: String,
        expected: &'static str,
    },

    #[error("vertex count must be positive, got {count}")]
    NonPositiveVertexCount { count: i64 },

    #[error("line {line}: vertex `{label}` is declared more than once")]
    DuplicateVertex { line: usize, label: String },

    #[error("line {line}: label `{label}` exceeds the {declared} declared vertices")]
    TooManyVertices {
        line: usize,
        label: String,
        declared: usize,
    },
}

//! Crate-wide error type and result alias.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Instance file could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The instance text never declared a node count.
    #[error("instance has no `p` header line")]
    MissingHeader,

    /// A `p` line whose third token is missing or not an integer.
    #[error("unparsable `p` header line: {0:?}")]
    MalformedHeader(String),

    /// A weight line that is not three whitespace-separated integers.
    #[error("line {line}: expected `a b w` integer triple, got {text:?}")]
    MalformedTriple { line: usize, text: String },

    /// A triple references a node index outside [0, node_qty).
    #[error("triple references node {node} but the instance declares {node_qty} nodes")]
    NodeOutOfRange { node: usize, node_qty: usize },

    /// The update rule is undefined at non-positive temperature.
    #[error("temperature must be strictly positive, got {0}")]
    NonPositiveTemperature(f64),
}

//! Problem-instance text format.
//!
//! Lines are trimmed and blank lines dropped. A line starting with `c` is
//! a comment. A line starting with `p` is the problem header; its third
//! whitespace-separated token is the node count. Every other line is an
//! integer triple `a b w`: a coupling of weight `w` between nodes `a` and
//! `b`, or a field weight on node `a` when `a == b`.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// A parsed problem instance: node count plus raw weight triples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub node_qty: usize,
    pub weights: Vec<(usize, usize, i64)>,
}

impl Instance {
    /// Parse instance text. Triples may appear before the header line;
    /// if several headers are present the last one wins.
    pub fn parse(text: &str) -> Result<Self> {
        let mut node_qty = None;
        let mut weights = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('c') {
                continue;
            }
            if line.starts_with('p') {
                let qty = line
                    .split_whitespace()
                    .nth(2)
                    .and_then(|tok| tok.parse().ok())
                    .ok_or_else(|| Error::MalformedHeader(line.to_string()))?;
                node_qty = Some(qty);
                continue;
            }

            let mut tokens = line.split_whitespace();
            let triple = (
                tokens.next().and_then(|t| t.parse().ok()),
                tokens.next().and_then(|t| t.parse().ok()),
                tokens.next().and_then(|t| t.parse().ok()),
            );
            match (triple, tokens.next()) {
                ((Some(a), Some(b), Some(w)), None) => weights.push((a, b, w)),
                _ => {
                    return Err(Error::MalformedTriple {
                        line: idx + 1,
                        text: line.to_string(),
                    })
                }
            }
        }

        match node_qty {
            Some(node_qty) => Ok(Self { node_qty, weights }),
            None => Err(Error::MissingHeader),
        }
    }

    /// Read and parse an instance file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }
}

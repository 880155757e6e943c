//! Line-oriented topology input.
//!
//! The format is the one the mesh configuration files ship in:
//!
//! ```text
//! units links
//! a b weight     (one line per link, 1-based unit numbers)
//! ...
//! source         (1-based unit number)
//! ```
//!
//! Parsing fails closed: a malformed or truncated file never produces a
//! partial topology. Range checking of unit numbers happens when the parsed
//! spec is turned into a mesh. Content after the source line is ignored.

use crate::mesh::{CacheMesh, Cost, LinkSpec, TopologyError};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors from reading or parsing a topology source.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading the underlying file failed.
    #[error("failed to read topology: {0}")]
    Io(#[from] io::Error),
    /// The input ended before a required line.
    #[error("line {line}: expected {expected}, found end of input")]
    MissingLine {
        /// 1-based number of the missing line.
        line: usize,
        /// What the line was supposed to hold.
        expected: &'static str,
    },
    /// A line held fewer fields than required.
    #[error("line {line}: missing {expected}")]
    MissingField {
        /// 1-based number of the short line.
        line: usize,
        /// The field that was not found.
        expected: &'static str,
    },
    /// A field did not parse as a non-negative integer.
    #[error("line {line}: invalid number {token:?}")]
    Token {
        /// 1-based number of the offending line.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },
}

/// A parsed topology: unit count, link list, and 1-based source unit.
///
/// The declared link count is consumed during parsing (it fixes how many link
/// lines are read) and is not carried further; the intent constraint that it
/// stay within `n * (n - 1) / 2` is not enforced, duplicates being tolerated
/// downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologySpec {
    /// Number of cache units.
    pub units: usize,
    /// Undirected links in file order, 1-based endpoints.
    pub links: Vec<LinkSpec>,
    /// External 1-based source unit number.
    pub source: usize,
}

impl TopologySpec {
    /// Parses the line-oriented topology format.
    ///
    /// # Errors
    /// Any missing line, missing field, or non-numeric token fails the whole
    /// parse with the offending 1-based line number.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut reader = Reader::new(text);

        let header = reader.next_line("unit and link counts")?;
        let mut fields = header.split_whitespace();
        let units: usize = field(&mut fields, reader.line, "unit count")?;
        let link_count: usize = field(&mut fields, reader.line, "link count")?;

        let mut links = Vec::with_capacity(link_count);
        for _ in 0..link_count {
            let line = reader.next_line("a link")?;
            let mut fields = line.split_whitespace();
            let a: usize = field(&mut fields, reader.line, "first link endpoint")?;
            let b: usize = field(&mut fields, reader.line, "second link endpoint")?;
            let weight: Cost = field(&mut fields, reader.line, "link weight")?;
            links.push(LinkSpec { a, b, weight });
        }

        let line = reader.next_line("the source unit")?;
        let mut fields = line.split_whitespace();
        let source: usize = field(&mut fields, reader.line, "source unit")?;

        debug!(units, links = links.len(), source, "parsed topology");
        Ok(Self {
            units,
            links,
            source,
        })
    }

    /// Reads and parses a topology file.
    ///
    /// # Errors
    /// I/O failures and every [`TopologySpec::parse`] error.
    pub fn load(path: &Path) -> Result<Self, ParseError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Builds the mesh this spec describes.
    ///
    /// # Errors
    /// See [`CacheMesh::new`].
    pub fn into_mesh(self) -> Result<CacheMesh, TopologyError> {
        CacheMesh::new(self.units, &self.links, self.source)
    }
}

struct Reader<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> Reader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self, expected: &'static str) -> Result<&'a str, ParseError> {
        self.line += 1;
        self.lines.next().ok_or(ParseError::MissingLine {
            line: self.line,
            expected,
        })
    }
}

fn field<T: std::str::FromStr>(
    fields: &mut std::str::SplitWhitespace<'_>,
    line: usize,
    expected: &'static str,
) -> Result<T, ParseError> {
    let token = fields.next().ok_or(ParseError::MissingField { line, expected })?;
    token.parse().map_err(|_| ParseError::Token {
        line,
        token: token.to_owned(),
    })
}

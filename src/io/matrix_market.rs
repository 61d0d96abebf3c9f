//! # MatrixMarket
//!
//! The sparse coordinate format: lines starting with `%` are comments, the
//! first non-comment line is the header `rows cols nonzeros` (`rows` is
//! taken as the node count), and every following non-comment line holds one
//! 1-based index pair `u v` representing the edge `{u - 1, v - 1}`. An
//! optional third numeric token on an entry line is the edge weight.

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines, Result},
    path::Path,
};

use tracing::debug;

use super::{io_error, parse_next_value, raise_error_unless, GraphReader};
use crate::{edge::Weight, node::*, ops::*};

/// A GraphReader for the MatrixMarket coordinate format
#[derive(Debug, Clone)]
pub struct MatrixMarketReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for MatrixMarketReader {
    fn default() -> Self {
        Self {
            comment_identifier: "%".to_string(),
        }
    }
}

impl MatrixMarketReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphNew + GraphEdgeInsertion> GraphReader<G> for MatrixMarketReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut lines = NonCommentLines::new(reader, &self.comment_identifier);

        let header = lines
            .try_next()?
            .ok_or_else(|| io_error!(ErrorKind::NotFound, "header not found"))?;
        let (rows, _cols, nonzeros) = parse_header(&header)?;
        debug!(rows, nonzeros, "parsed coordinate header");

        let mut graph = G::new(rows);
        while let Some(line) = lines.try_next()? {
            let (u, v, weight) = parse_entry(&line)?;
            // duplicate entries are an insertion no-op
            match weight {
                Some(w) => graph.try_add_weighted_edge(u, v, w),
                None => graph.try_add_edge(u, v),
            }
            .map_err(|e| io_error!(ErrorKind::InvalidData, e.to_string()))?;
        }

        Ok(graph)
    }
}

/// Trait for creating graphs from the MatrixMarket format.
/// Used as shorthand for default [`MatrixMarketReader`] settings.
pub trait MatrixMarketRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_matrix_market<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_matrix_market_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_matrix_market(BufReader::new(File::open(path)?))
    }
}

impl<G: GraphNew + GraphEdgeInsertion> MatrixMarketRead for G {
    fn try_read_matrix_market<R: BufRead>(reader: R) -> Result<Self> {
        MatrixMarketReader::default().try_read_graph(reader)
    }
}

/// Iterates over the non-comment, non-blank lines of a reader
struct NonCommentLines<'a, R> {
    lines: Lines<R>,
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> NonCommentLines<'a, R> {
    fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            comment_identifier,
        }
    }

    /// Returns the next relevant line if one exists or propagates the
    /// underlying read error
    fn try_next(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.starts_with(self.comment_identifier) => continue,
                Some(Ok(line)) if line.trim().is_empty() => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }
}

/// Parses the header line `rows cols nonzeros`
fn parse_header(line: &str) -> Result<(NumNodes, NumNodes, u64)> {
    let mut parts = line.split_ascii_whitespace();

    let rows = parse_next_value!(parts, "header>rows");
    let cols = parse_next_value!(parts, "header>cols");
    let nonzeros = parse_next_value!(parts, "header>nonzeros");

    Ok((rows, cols, nonzeros))
}

/// Parses an entry line `u v [weight]` with 1-based indices and converts
/// the endpoints to 0-based node ids
fn parse_entry(line: &str) -> Result<(Node, Node, Option<Weight>)> {
    let mut parts = line.split_ascii_whitespace();

    let u: Node = parse_next_value!(parts, "entry>first endpoint");
    let v: Node = parse_next_value!(parts, "entry>second endpoint");
    raise_error_unless!(
        u >= 1 && v >= 1,
        ErrorKind::InvalidData,
        "entry endpoints are 1-based, found 0"
    );

    let weight = match parts.next() {
        None => None,
        Some(token) => match token.parse::<Weight>() {
            Ok(w) => Some(w),
            Err(_) => {
                return Err(io_error!(ErrorKind::InvalidData, "invalid entry weight"));
            }
        },
    };

    Ok((u - 1, v - 1, weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::*, repr::GraphStore};
    use itertools::Itertools;

    fn read(input: &str) -> Result<GraphStore> {
        GraphStore::try_read_matrix_market(input.as_bytes())
    }

    #[test]
    fn reads_a_symmetric_coordinate_file() {
        let graph = read(
            "%%MatrixMarket matrix coordinate pattern symmetric\n\
             % a 3-cycle\n\
             3 3 3\n\
             1 2\n\
             2 3\n\
             3 1\n",
        )
        .unwrap();

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1, 2]);
        assert!(graph.is_connected());
        assert!(graph.contains_cycle());
    }

    #[test]
    fn duplicate_entries_are_idempotent() {
        let graph = read("3 3 3\n1 2\n2 1\n1 2\n").unwrap();

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1]);
    }

    #[test]
    fn weight_column_produces_weighted_edges() {
        let graph = read("2 2 2\n1 2 1.5\n2 2\n").unwrap();

        assert!(graph.has_weighted_edges());
        assert_eq!(graph.edge_records()[0].weight(), Some(1.5));
        assert_eq!(graph.edge_records()[1].weight(), None);
    }

    #[test]
    fn header_must_be_complete_and_numeric() {
        for input in ["", "% only comments\n", "3 3\n", "three 3 3\n1 2\n"] {
            assert!(read(input).is_err());
        }

        // a header without entries is a valid edgeless graph
        let graph = read("4 4 0\n").unwrap();
        assert_eq!(graph.number_of_nodes(), 4);
        assert!(graph.is_singleton());
    }

    #[test]
    fn out_of_range_entries_are_format_errors() {
        let err = read("2 2 1\n1 3\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        // indices are 1-based, so 0 is invalid
        let err = read("2 2 1\n0 1\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn custom_comment_identifier() {
        let graph: GraphStore = MatrixMarketReader::new()
            .comment_identifier("#")
            .try_read_graph("# header\n2 2 1\n1 2\n".as_bytes())
            .unwrap();

        assert_eq!(graph.number_of_edges(), 1);
    }
}

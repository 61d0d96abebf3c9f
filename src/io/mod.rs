/*!
# IO

Utilities for reading graphs from input files.

Currently supported input format:
- **MatrixMarket**: the sparse coordinate format; `%`-comment lines, a
  `rows cols nonzeros` header and one 1-based index pair (with an
  optional weight) per line.

All parse failures surface as [`std::io::Error`] with
[`std::io::ErrorKind::InvalidData`], including indices the graph itself
rejects as out of range.
*/

pub mod matrix_market;

use std::{
    fs::File,
    io::{BufRead, BufReader, Result},
    path::Path,
};

pub use matrix_market::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond: expr, $kind: expr, $info: expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next token of an iterator and returns early if there
/// is none or it does not parse
macro_rules! parse_next_value {
    ($iterator: expr, $name: expr) => {{
        match $iterator.next().map(|token| token.parse()) {
            Some(Ok(value)) => value,
            Some(Err(_)) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("invalid value, cannot parse {}", $name)
                ));
            }
            None => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("premature end of line when parsing {}", $name)
                ));
            }
        }
    }};
}

pub(crate) use io_error;
pub(crate) use parse_next_value;
pub(crate) use raise_error_unless;

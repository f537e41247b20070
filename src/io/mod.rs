/*!
# IO

Utilities for reading and writing graphs and formulas from and to text.

## Formats

- **EdgeList**: a line with the number of nodes, a line with the number of edges and then one
  line `u v [weight]` per edge with 0-based vertices. See [`edge_list`].
- **2-CNF**: one clause `a b` per line where a literal is a variable index, optionally prefixed
  by `-` for negation. See [`cnf`].

Blank lines are skipped in both formats. Malformed input is reported as
[`GraphError::Parse`] together with the 1-based line number.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers.
- [`EdgeListRead`] and [`EdgeListWrite`] are shorthands with default settings implemented on the graphs.
*/

pub mod cnf;
pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::prelude::*;

pub use edge_list::*;

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
    /// Returns [`GraphError::Io`] if the file cannot be opened and otherwise
    /// the errors of [`GraphReader::try_read_graph`].
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Lines of a text input with their 1-based numbers, skipping blank lines and,
/// optionally, lines starting with a comment identifier.
pub(crate) struct ContentLines<'a, R> {
    lines: std::io::Lines<R>,
    line_number: usize,
    comment_identifier: Option<&'a str>,
}

impl<'a, R: BufRead> ContentLines<'a, R> {
    pub(crate) fn new(reader: R, comment_identifier: Option<&'a str>) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            comment_identifier,
        }
    }

    /// Number of the last line read, `0` before the first one
    pub(crate) fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns the next line with content and its number or propagates an IO error
    pub(crate) fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line_number += 1;

            if line.trim().is_empty() {
                continue;
            }
            if self
                .comment_identifier
                .is_some_and(|c| line.starts_with(c))
            {
                continue;
            }

            return Ok(Some((self.line_number, line)));
        }
        Ok(None)
    }
}

/// Shorthand for creating a new parse error at a given line
macro_rules! parse_error {
    ($line: expr, $reason: expr) => {
        GraphError::Parse {
            line: $line,
            reason: $reason.into(),
        }
    };
}

/// Shorthand for returning `Err(GraphError::Parse)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $line : expr, $reason : expr) => {
        if !($cond) {
            return Err(parse_error!($line, $reason));
        }
    };
}

/// Tries to parse the next token of an iterator and returns early if it is missing or malformed
macro_rules! parse_next_value {
    ($iterator : expr, $line : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            $line,
            format!("Premature end of line when parsing {}.", $name)
        );

        match next.unwrap_or_default().parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(parse_error!(
                    $line,
                    format!("Invalid value found. Cannot parse {}.", $name)
                ));
            }
        }
    }};
}

use parse_error;
use parse_next_value;
use raise_error_unless;

//! # EdgeList
//!
//! The EdgeList-Format starts with a line containing the number of nodes `n` and a line
//! containing the number of edges `m`, followed by `m` lines `u v` (or `u v w` if weighted)
//! each representing an edge `Edge(u, v)` with 0-based endpoints.
//!
//! ```text
//! 3
//! 2
//! 0 1 2.5
//! 1 2 0.5
//! ```
//!
//! Blank lines are skipped everywhere, as are lines starting with the comment identifier if one
//! is configured. Tokens after the expected ones are ignored.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListReader {
    /// Read a weight as third token of every edge line
    weighted: bool,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: Option<String>,
}

impl EdgeListReader {
    /// Creates a new (default) reader: unweighted and without comments
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether edge lines carry a weight
    pub fn weighted(mut self, weighted: bool) -> EdgeListReader {
        self.weighted = weighted;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = Some(c.into());
        self
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut lines = ContentLines::new(reader, self.comment_identifier.as_deref());

        let number_of_nodes: NumNodes = parse_header_value(&mut lines, "number of nodes")?;
        let number_of_edges: NumEdges = parse_header_value(&mut lines, "number of edges")?;

        // the header may claim more edges than there are lines
        let mut edges = Vec::with_capacity((number_of_edges as usize).min(1 << 16));
        for i in 0..number_of_edges {
            let Some((line, content)) = lines.next_line()? else {
                return Err(parse_error!(
                    lines.line_number() + 1,
                    format!("Expected {number_of_edges} edges, but found only {i}")
                ));
            };

            let mut parts = content.split_whitespace();
            let u = parse_vertex(&mut parts, line, "source node")?;
            let v = parse_vertex(&mut parts, line, "target node")?;
            let weight: Weight = if self.weighted {
                parse_next_value!(parts, line, "weight")
            } else {
                0.0
            };

            tracing::trace!("Read edge ({u}, {v}) with weight {weight} in line {line}");
            edges.push((u, v, weight));
        }

        tracing::debug!("Read graph with {number_of_nodes} nodes and {number_of_edges} edges");
        G::from_weighted_edges(number_of_nodes, edges)
    }
}

/// Parses the first token of the next content line
fn parse_header_value<R: BufRead, T: std::str::FromStr>(
    lines: &mut ContentLines<'_, R>,
    name: &str,
) -> Result<T> {
    let Some((line, content)) = lines.next_line()? else {
        return Err(parse_error!(
            lines.line_number() + 1,
            format!("Header not found: missing {name}")
        ));
    };

    let mut parts = content.split_whitespace();
    Ok(parse_next_value!(parts, line, name))
}

/// Parses a 0-based vertex and reports negative ones as [`GraphError::NegativeVertex`]
fn parse_vertex<'a, I: Iterator<Item = &'a str>>(
    parts: &mut I,
    line: usize,
    name: &str,
) -> Result<Node> {
    let value: i64 = parse_next_value!(parts, line, name);
    if value < 0 {
        return Err(GraphError::NegativeVertex { value, line });
    }

    Node::try_from(value).map_err(|_| parse_error!(line, format!("{name} {value} is too large")))
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// Write the weight of every edge as third token
    weighted: bool,
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether weights are written
    pub fn weighted(mut self, weighted: bool) -> EdgeListWriter {
        self.weighted = weighted;
        self
    }
}

impl<G: WeightedAdjacencyList + GraphEdgeOrder + GraphType> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_nodes())?;
        writeln!(writer, "{}", graph.number_of_edges())?;

        for u in graph.vertices() {
            for (v, weight) in graph.weighted_neighbors_of(u) {
                // undirected edges are stored at both endpoints
                if G::is_undirected() && v < u {
                    continue;
                }

                if self.weighted {
                    writeln!(writer, "{u} {v} {weight}")?;
                } else {
                    writeln!(writer, "{u} {v}")?;
                }
            }
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: WeightedAdjacencyList + GraphEdgeOrder + GraphType> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

//! # EdgeList
//!
//! The EdgeList-Format consists of the number of vertices `V`, the number of edges `E`, followed by
//! `E` records `u v [w]` with 0-based endpoints. The weight column is present exactly for weighted
//! edge kinds; for flow networks it holds the capacity.

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use log::debug;

use super::*;
use crate::prelude::*;

/// Edge kinds that can be stored as a record `u v [w]`
pub trait EdgeListRecord: GraphEdge {
    /// Whether records carry a third column
    const WEIGHTED: bool;

    /// Creates an edge from a record; `weight` is `0` for unweighted kinds
    fn from_record(u: Node, v: Node, weight: Weight) -> Self;

    /// Returns the value of the third column, if any
    fn weight_column(&self) -> Option<Weight>;
}

impl EdgeListRecord for Edge {
    const WEIGHTED: bool = false;

    fn from_record(u: Node, v: Node, _: Weight) -> Self {
        Edge(u, v)
    }

    fn weight_column(&self) -> Option<Weight> {
        None
    }
}

impl EdgeListRecord for WeightedEdge {
    const WEIGHTED: bool = true;

    fn from_record(u: Node, v: Node, weight: Weight) -> Self {
        WeightedEdge::new(u, v, weight)
    }

    fn weight_column(&self) -> Option<Weight> {
        Some(self.weight())
    }
}

impl EdgeListRecord for DirectedEdge {
    const WEIGHTED: bool = true;

    fn from_record(u: Node, v: Node, weight: Weight) -> Self {
        DirectedEdge::new(u, v, weight)
    }

    fn weight_column(&self) -> Option<Weight> {
        Some(self.weight())
    }
}

/// Flow is not stored: networks are read without flow
impl EdgeListRecord for FlowEdge {
    const WEIGHTED: bool = true;

    fn from_record(u: Node, v: Node, capacity: Weight) -> Self {
        FlowEdge::new(u, v, capacity)
    }

    fn weight_column(&self) -> Option<Weight> {
        Some(self.capacity())
    }
}

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: Option<String>,
}

impl EdgeListReader {
    /// Creates a new reader without comment lines
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = Some(c.into());
        self
    }
}

/// Parses a non-negative count that fits into `T`
fn parse_count<R, T>(tokens: &mut TokenReader<'_, R>, name: &str) -> Result<T>
where
    R: BufRead,
    T: TryFrom<i64>,
{
    let count: i64 = tokens.parse_next(name)?;
    raise_error_unless!(
        count >= 0,
        tokens.line(),
        "{name} must be non-negative, got {count}"
    );
    T::try_from(count).map_err(|_| parse_error!(tokens.line(), "{name} {count} is too large"))
}

fn parse_vertex<R: BufRead>(tokens: &mut TokenReader<'_, R>, n: NumNodes) -> Result<Node> {
    let v: i64 = tokens.parse_next("endpoint")?;
    raise_error_unless!(
        (0..n as i64).contains(&v),
        tokens.line(),
        "{}",
        GraphError::vertex_out_of_range(v, n)
    );
    Ok(v as Node)
}

impl<G> GraphReader<G> for EdgeListReader
where
    G: GraphEdgeEditing,
    G::Edge: EdgeListRecord,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut tokens = TokenReader::new(reader, self.comment_identifier.as_deref());

        let n: NumNodes = parse_count(&mut tokens, "number of vertices")?;
        let m: NumEdges = parse_count(&mut tokens, "number of edges")?;

        let mut graph = G::new(n);
        for _ in 0..m {
            let u = parse_vertex(&mut tokens, n)?;
            let v = parse_vertex(&mut tokens, n)?;
            let weight = if G::Edge::WEIGHTED {
                tokens.parse_next("weight")?
            } else {
                0.0
            };

            graph
                .add_edge(G::Edge::from_record(u, v, weight))
                .map_err(|err| parse_error!(tokens.line(), "{err}"))?;
        }
        tokens.expect_end()?;

        debug!("read edge list with {n} vertices and {m} edges");
        Ok(graph)
    }
}

/// Trait for creating graphs from an EdgeListReader.
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
    G: GraphEdgeEditing,
    G::Edge: EdgeListRecord,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

impl<E, D> FromStr for EdgeListGraph<E, D>
where
    E: EdgeListRecord,
    D: Direction,
{
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_read_edge_list(s.as_bytes())
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// Lines written before the counts, each prefixed by its comment identifier
    comments: Vec<String>,
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a comment line; read it back with a reader using the same `identifier`
    pub fn comment<S: Display>(mut self, identifier: &str, text: S) -> EdgeListWriter {
        self.comments.push(format!("{identifier} {text}"));
        self
    }
}

impl<G> GraphWriter<G> for EdgeListWriter
where
    G: AdjacencyList,
    G::Edge: EdgeListRecord,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        for comment in &self.comments {
            writeln!(writer, "{comment}")?;
        }
        writeln!(writer, "{}", graph.number_of_nodes())?;
        writeln!(writer, "{}", graph.number_of_edges())?;

        for edge in graph.edges() {
            let (u, v) = edge.endpoints();
            match edge.weight_column() {
                Some(w) => writeln!(writer, "{u} {v} {w}")?,
                None => writeln!(writer, "{u} {v}")?,
            }
        }

        writer.flush()?;
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

impl<G> EdgeListWrite for G
where
    G: AdjacencyList,
    G::Edge: EdgeListRecord,
{
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

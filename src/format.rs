//! Graph rendering
//!
//! Two formats:
//! - human: each vertex on its own line followed by its out-neighbors,
//!   indented two spaces. Paths are double-quoted with Rust string escapes,
//!   so newlines, leading spaces and non-UTF-8 bytes stay unambiguous
//! - json: `{"vertices": [{"path": .., "neighbors": [..]}]}`
//!
//! Both list vertices in canonical order and neighbors in insertion order, so
//! the output is byte-identical across runs for the same graph.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DirGraphError, Result};
use crate::graph::GraphProvider;
use crate::path::NodePath;

/// Output format for rendered graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented adjacency listing (default)
    #[default]
    Human,
    /// JSON document for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = DirGraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(DirGraphError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct VertexRecord<'a> {
    path: &'a NodePath,
    neighbors: &'a [NodePath],
}

#[derive(Debug, Serialize)]
struct GraphRecord<'a> {
    vertices: Vec<VertexRecord<'a>>,
}

/// Write the human rendering of `graph` to `sink`
pub fn print<G, W>(graph: &G, sink: &mut W) -> std::io::Result<()>
where
    G: GraphProvider + ?Sized,
    W: Write + ?Sized,
{
    for vertex in graph.vertex_ids() {
        writeln!(sink, "{:?}:", vertex.as_path())?;
        for neighbor in graph.get_outbound(vertex) {
            writeln!(sink, "  {:?}", neighbor.as_path())?;
        }
    }
    Ok(())
}

/// JSON value for `graph`
pub fn to_json<G: GraphProvider + ?Sized>(graph: &G) -> Result<serde_json::Value> {
    let record = GraphRecord {
        vertices: graph
            .vertex_ids()
            .map(|path| VertexRecord {
                path,
                neighbors: graph.get_outbound(path),
            })
            .collect(),
    };
    Ok(serde_json::to_value(record)?)
}

/// Write `graph` to `sink` in the requested format
pub fn render<G, W>(graph: &G, format: OutputFormat, sink: &mut W) -> Result<()>
where
    G: GraphProvider + ?Sized,
    W: Write + ?Sized,
{
    match format {
        OutputFormat::Human => print(graph, sink)?,
        OutputFormat::Json => {
            let value = to_json(graph)?;
            serde_json::to_writer_pretty(&mut *sink, &value)?;
            writeln!(sink)?;
        }
    }
    Ok(())
}

/// Render into a `String`
pub fn render_to_string<G: GraphProvider + ?Sized>(graph: &G, format: OutputFormat) -> Result<String> {
    let mut buf = Vec::new();
    render(graph, format, &mut buf)?;
    String::from_utf8(buf).map_err(|e| DirGraphError::Other(format!("rendered graph is not UTF-8: {}", e)))
}

//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality: every block of a
//! [`CactusReport`] is drawn as a cluster and offending vertices are colored.
//!
//! Note that a node shared by several clusters is drawn in the first cluster that mentions it.
use std::{fmt::Display, io::Write};

use itertools::Itertools;

use super::*;
use crate::{
    algo::{Cactus, CactusReport},
    graph::Graph,
    node::VertexId,
};

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Prefix of a node (default: 'v')
    prefix: String,
    /// Color of vertices violating the cactus property
    highlight: DotColor,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            prefix: "v".to_string(),
            highlight: DotColor::Red,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix of a node (`v` by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// Set the color of offending vertices (red by default)
    pub fn highlight(mut self, color: DotColor) -> Self {
        self.highlight = color;
        self
    }

    fn format_node(&self, u: VertexId) -> String {
        format!("{}{u}", self.prefix)
    }

    /// Writes the edges of `graph` on a single line
    fn write_edges<W: Write>(&self, writer: &mut W, graph: &Graph) -> std::io::Result<()> {
        for (u, v) in graph.id_edges() {
            write!(writer, "{}--{};", self.format_node(u), self.format_node(v))?;
        }
        writeln!(writer)
    }

    /// Writes a list of colored nodes to `writer`
    fn color_nodes<W, I>(&self, writer: &mut W, nodes: I, color: DotColor) -> std::io::Result<()>
    where
        W: Write,
        I: IntoIterator<Item = VertexId>,
    {
        for u in nodes {
            write!(writer, "{}[style=filled, color={color}];", self.format_node(u))?;
        }
        writeln!(writer)
    }
}

impl GraphWriter<Graph> for DotWriter {
    fn try_write<W: Write>(&self, graph: &Graph, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "graph {{")?;
        for id in graph.sorted_vertex_ids() {
            write!(writer, "{};", self.format_node(id))?;
        }
        writeln!(writer)?;
        self.write_edges(&mut writer, graph)?;
        writeln!(writer, "}}")
    }
}

impl GraphWriter<CactusReport> for DotWriter {
    fn try_write<W: Write>(&self, report: &CactusReport, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "graph {{")?;
        for (k, block) in report.blocks().iter().enumerate() {
            writeln!(
                writer,
                "subgraph cluster_{} {{ label=\"block {} ({})\";",
                k + 1,
                k + 1,
                block_kind_name(block.block_kind())
            )?;
            self.write_edges(&mut writer, block)?;
            writeln!(writer, "}}")?;
        }
        self.color_nodes(
            &mut writer,
            report.offending_vertices().iter().copied().unique(),
            self.highlight,
        )?;
        writeln!(writer, "}}")
    }
}

/// The colors available for highlighting
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Gray,
    Green,
    Orange,
    Red,
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DotColor::Black => "black",
            DotColor::Blue => "blue",
            DotColor::Gray => "gray",
            DotColor::Green => "green",
            DotColor::Orange => "orange",
            DotColor::Red => "red",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::graph_from_edges;

    #[test]
    fn writes_plain_graph() {
        let graph = graph_from_edges(&[(2, 1), (2, 3)]);
        let mut out = Vec::new();
        DotWriter::new().try_write(&graph, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "graph {\nv1;v2;v3;\nv1--v2;v2--v3;\n}\n"
        );
    }

    #[test]
    fn writes_blocks_and_highlights() {
        let report = graph_from_edges(&[(1, 2), (2, 3), (3, 1), (2, 4), (4, 3)])
            .cactus_report()
            .unwrap();
        let mut out = Vec::new();
        DotWriter::new()
            .node_prefix("u")
            .try_write(&report, &mut out)
            .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("graph {\nsubgraph cluster_1 { label=\"block 1 (other)\";\n"));
        assert!(out.contains("u1--u2;u1--u3;u2--u3;u2--u4;u3--u4;\n"));
        assert!(out.contains("u2[style=filled, color=red];u3[style=filled, color=red];\n"));
        assert!(out.ends_with("}\n"));
    }
}

//! # Report
//!
//! Human-readable output of a [`CactusReport`]:
//! ```text
//! The graph is a cactus.
//! Every block is an edge or a cycle (3 blocks: 1 bridge, 2 cycles).
//! ```
//! or
//! ```text
//! The graph is not a cactus.
//! Vertices [2, 3] have degree greater than 2 within a block, i.e. lie on more than one cycle.
//! ```
//! In verbose mode every block is listed afterwards with the adjacency of its vertices.

use std::io::Write;

use itertools::Itertools;

use super::*;
use crate::{
    algo::{BlockKind, Cactus, CactusReport},
    graph::Graph,
};

/// A writer for the human-readable report
#[derive(Debug, Clone, Default)]
pub struct ReportWriter {
    /// List every block after the verdict
    verbose: bool,
}

impl ReportWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, every block is listed after the verdict
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Writes the adjacency of every vertex of `graph`, one vertex per line, sorted by id
    pub fn write_adjacency<W: Write>(&self, graph: &Graph, writer: &mut W) -> std::io::Result<()> {
        for id in graph.sorted_vertex_ids() {
            let neighbors = graph
                .neighbor_ids_of(id)
                .into_iter()
                .flatten()
                .sorted_unstable()
                .join(" ");
            writeln!(writer, "Vertex {id}, neighbors: {neighbors}")?;
        }
        Ok(())
    }
}

impl GraphWriter<CactusReport> for ReportWriter {
    fn try_write<W: Write>(&self, report: &CactusReport, mut writer: W) -> std::io::Result<()> {
        let bridges = report.number_of_blocks_of_kind(BlockKind::Bridge);
        let cycles = report.number_of_blocks_of_kind(BlockKind::Cycle);

        if report.is_cactus() {
            writeln!(writer, "The graph is a cactus.")?;
            writeln!(
                writer,
                "Every block is an edge or a cycle ({} {}: {bridges} {}, {cycles} {}).",
                report.blocks().len(),
                plural(report.blocks().len(), "block", "blocks"),
                plural(bridges, "bridge", "bridges"),
                plural(cycles, "cycle", "cycles"),
            )?;
        } else {
            writeln!(writer, "The graph is not a cactus.")?;
            writeln!(
                writer,
                "Vertices [{}] have degree greater than 2 within a block, i.e. lie on more than one cycle.",
                report.offending_vertices().iter().join(", ")
            )?;
        }

        if self.verbose {
            for (k, block) in report.blocks().iter().enumerate() {
                writeln!(writer)?;
                writeln!(
                    writer,
                    "-- Block {} ({}) --",
                    k + 1,
                    block_kind_name(block.block_kind())
                )?;
                self.write_adjacency(block, &mut writer)?;
            }
        }

        Ok(())
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

/// Returns the lowercase name of a block kind as used in reports
pub fn block_kind_name(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Bridge => "bridge",
        BlockKind::Cycle => "cycle",
        BlockKind::Other => "other",
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::graph_from_edges;

    fn render(edges: &[(u32, u32)], verbose: bool) -> String {
        let report = graph_from_edges(edges).cactus_report().unwrap();
        let mut out = Vec::new();
        ReportWriter::new()
            .verbose(verbose)
            .try_write(&report, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn cactus_verdict() {
        let out = render(&[(1, 2), (2, 3), (3, 1), (3, 4)], false);
        assert_eq!(
            out,
            "The graph is a cactus.\nEvery block is an edge or a cycle (2 blocks: 1 bridge, 1 cycle).\n"
        );
    }

    #[test]
    fn non_cactus_verdict() {
        let out = render(&[(1, 2), (2, 3), (3, 1), (2, 4), (4, 3)], false);
        assert_eq!(
            out,
            "The graph is not a cactus.\nVertices [2, 3] have degree greater than 2 within a block, i.e. lie on more than one cycle.\n"
        );
    }

    #[test]
    fn verbose_lists_blocks() {
        let out = render(&[(1, 2), (2, 3), (3, 1)], true);
        assert!(out.contains("\n-- Block 1 (cycle) --\n"));
        assert!(out.contains("Vertex 1, neighbors: 2 3\n"));
        assert!(out.contains("Vertex 3, neighbors: 1 2\n"));
        assert!(!out.contains("Block 2"));
    }
}

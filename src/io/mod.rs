/*!
# IO

Utilities for reading graphs and writing analysis results.

## Input Format

- **AdjacencyList**: one record per line, `<vertex> = <neighbor1> <neighbor2> ...`, e.g. `1 = 2 3 4`.
  Records for the same vertex accumulate. See [`AdjacencyListReader`].

## Output Formats

- **Report**: human-readable verdict, optionally listing every block. See [`ReportWriter`].
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/),
  drawing every block as a cluster and highlighting offending vertices. See [`DotWriter`].

## Traits

[`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
*/

pub mod adjacency;
pub mod dot;
pub mod report;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::error::Result;

pub use adjacency::*;
pub use dot::*;
pub use report::*;

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if reading fails, if the input is not a valid representation
    /// of a graph in the expected format, or if the graph it describes is not simple.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Additionally returns an error if the file cannot be opened.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write `T` (a graph or an analysis result) in a specific format.
pub trait GraphWriter<T> {
    /// Writes `value` to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write<W>(&self, value: &T, writer: W) -> std::io::Result<()>
    where
        W: Write;

    /// Writes `value` to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_file<P>(&self, value: &T, path: P) -> std::io::Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write(value, &mut writer)?;
        writer.flush()
    }
}

/// Shorthand for returning `Err(GraphError)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $err : expr) => {
        if !($cond) {
            return Err($err);
        }
    };
}

use raise_error_unless;

//! Report generator abstraction.
//!
//! A [`Generator`] turns a [`ModelGraph`] into rows and the rows into text.
//! [`generate`] drives one run: build, serialize, then write exactly once.
//! A generator that aborts leaves the sink untouched.

use std::{fmt, path::Path, str::FromStr};

use log::{info, trace};

use cartograph_core::graph::ModelGraph;

use crate::{
    error::CartographError,
    serialize::{self, Row},
    sink::OutputSink,
};

/// Builds and serializes one report.
pub trait Generator {
    type Row: Row;

    /// Stable generator name, e.g. `relationships-csv`.
    fn name(&self) -> &'static str;

    /// Output path relative to the project root.
    fn output_path(&self) -> &Path;

    /// Header line of the rendered report.
    fn header(&self) -> &'static str;

    /// Build the report rows in output order.
    ///
    /// # Errors
    ///
    /// Returns [`CartographError::Aborted`] when the generator refuses to
    /// produce a report for this graph.
    fn build_rows<G: ModelGraph>(&self, graph: &G) -> Result<Vec<Self::Row>, CartographError>;

    /// Render rows as text.
    fn serialize(&self, rows: &[Self::Row]) -> String {
        serialize::render(self.header(), rows)
    }
}

/// Available generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// One row per relationship with its declaration site.
    Relationships,
    /// Components rolled up under their products and subdomains.
    ProductComponents,
}

impl GeneratorKind {
    /// Every generator, in default run order.
    pub const ALL: [GeneratorKind; 2] = [Self::Relationships, Self::ProductComponents];

    /// Returns the stable generator name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Relationships => "relationships-csv",
            Self::ProductComponents => "product-components-csv",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|k| k.name()).collect();
                format!(
                    "unknown generator `{s}` (expected one of: {})",
                    known.join(", ")
                )
            })
    }
}

/// Run `generator` against `graph` and write its output to `sink`.
///
/// # Errors
///
/// Returns the generator's abort, or the sink's I/O error.
pub fn generate<Gen, G, S>(generator: &Gen, graph: &G, sink: &mut S) -> Result<(), CartographError>
where
    Gen: Generator,
    G: ModelGraph,
    S: OutputSink + ?Sized,
{
    let content = render(generator, graph)?;
    let path = generator.output_path();

    sink.write(path, &content)?;

    info!(
        generator = generator.name(),
        path = path.display().to_string();
        "Report written"
    );

    Ok(())
}

/// Build and serialize without writing.
///
/// # Errors
///
/// Returns the generator's abort.
pub fn render<Gen, G>(generator: &Gen, graph: &G) -> Result<String, CartographError>
where
    Gen: Generator,
    G: ModelGraph,
{
    info!(generator = generator.name(); "Generating report");

    let rows = generator.build_rows(graph)?;
    info!(generator = generator.name(), rows = rows.len(); "Rows built");

    let content = generator.serialize(&rows);
    trace!(generator = generator.name(), content; "Serialized report");

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in GeneratorKind::ALL {
            assert_eq!(kind.name().parse::<GeneratorKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "pdf".parse::<GeneratorKind>().unwrap_err();

        assert!(err.contains("unknown generator `pdf`"));
        assert!(err.contains("relationships-csv"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            GeneratorKind::ProductComponents.to_string(),
            "product-components-csv"
        );
    }
}

//! Flat export of every relationship with its declaration site.

use std::path::{Path, PathBuf};

use cartograph_core::graph::ModelGraph;

use crate::{
    error::CartographError,
    generator::{Generator, GeneratorKind},
    serialize::Row,
};

pub const HEADER: &str = "relationship,title,location";

/// One relationship, formatted for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipRow {
    /// `"<source> -> <target>"`.
    pub edge: String,
    pub title: String,
    /// `"<relativePath> [Ln <line>, Col <column>]"`.
    pub location: String,
}

impl Row for RelationshipRow {
    fn fields(&self) -> Vec<&str> {
        vec![
            self.edge.as_str(),
            self.title.as_str(),
            self.location.as_str(),
        ]
    }
}

/// Emits one row per relationship in the graph's iteration order.
///
/// A graph without relationships aborts the run: an empty relationship
/// export almost always means the model failed to load.
#[derive(Debug, Clone)]
pub struct RelationshipReport {
    output_path: PathBuf,
}

impl RelationshipReport {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

impl Generator for RelationshipReport {
    type Row = RelationshipRow;

    fn name(&self) -> &'static str {
        GeneratorKind::Relationships.name()
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn header(&self) -> &'static str {
        HEADER
    }

    fn build_rows<G: ModelGraph>(&self, graph: &G) -> Result<Vec<Self::Row>, CartographError> {
        let rows: Vec<_> = graph
            .relationships()
            .map(|relationship| RelationshipRow {
                edge: format!("{} -> {}", relationship.source(), relationship.target()),
                title: relationship.title().unwrap_or_default().to_string(),
                location: graph.locate(relationship).to_string(),
            })
            .collect();

        if rows.is_empty() {
            return Err(CartographError::aborted(
                self.name(),
                "No relationships found",
            ));
        }

        Ok(rows)
    }
}

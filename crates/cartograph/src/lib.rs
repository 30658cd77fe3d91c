//! Cartograph - tabular reports over architecture model graphs.
//!
//! Two reports are available:
//!
//! - `relationships-csv`: every relationship with its declaration site.
//! - `product-components-csv`: components rolled up under their products and
//!   subdomains, derived from the dot-delimited identifier hierarchy.
//!
//! Reports read a graph through [`ModelGraph`] and write through an
//! [`OutputSink`](sink::OutputSink).

pub mod config;
pub mod generator;
pub mod hierarchy;
pub mod product_components;
pub mod relationships;
pub mod serialize;
pub mod sink;

mod error;

pub use cartograph_core::{graph, identifier, model, snapshot};

pub use error::CartographError;

use std::path::PathBuf;

use log::info;

use cartograph_core::graph::ModelGraph;

use config::AppConfig;
use generator::{Generator, GeneratorKind};
use product_components::ProductComponentReport;
use relationships::RelationshipReport;
use sink::OutputSink;

/// A rendered report ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Output path relative to the project root.
    pub path: PathBuf,
    pub content: String,
}

/// Builder for generating Cartograph reports.
///
/// # Examples
///
/// ```rust
/// use cartograph::{
///     ReportBuilder,
///     config::AppConfig,
///     generator::GeneratorKind,
///     graph::Model,
///     identifier::Id,
///     model::{Element, Relationship, SourceLocation},
/// };
///
/// let model = Model::new(
///     [Element::new(Id::new("cp.billing"), "subdomain").with_title("Billing")],
///     [Relationship::new(
///         Id::new("cp.billing"),
///         Id::new("cp.payments"),
///         SourceLocation::new("model.c4", 3, 2),
///     )],
/// )
/// .expect("valid model");
///
/// let builder = ReportBuilder::new(AppConfig::default());
/// let report = builder
///     .render(GeneratorKind::Relationships, &model)
///     .expect("relationships present");
///
/// assert_eq!(
///     report.content,
///     "relationship,title,location\n\"cp.billing -> cp.payments\",\"\",\"model.c4 [Ln 3, Col 2]\""
/// );
/// ```
#[derive(Debug, Default)]
pub struct ReportBuilder {
    config: AppConfig,
}

impl ReportBuilder {
    /// Create a new report builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Render the report `kind` without writing it.
    ///
    /// # Errors
    ///
    /// Returns [`CartographError::Aborted`] if the generator refuses to
    /// produce a report for `graph`.
    pub fn render<G: ModelGraph>(
        &self,
        kind: GeneratorKind,
        graph: &G,
    ) -> Result<Report, CartographError> {
        match kind {
            GeneratorKind::Relationships => self.render_with(&self.relationships(), graph),
            GeneratorKind::ProductComponents => {
                self.render_with(&self.product_components(), graph)
            }
        }
    }

    /// Render the report `kind` and write it to `sink`.
    ///
    /// Nothing is written when the generator aborts.
    ///
    /// # Errors
    ///
    /// Returns the generator's abort or the sink's I/O error.
    pub fn generate<G, S>(
        &self,
        kind: GeneratorKind,
        graph: &G,
        sink: &mut S,
    ) -> Result<(), CartographError>
    where
        G: ModelGraph,
        S: OutputSink + ?Sized,
    {
        match kind {
            GeneratorKind::Relationships => generator::generate(&self.relationships(), graph, sink),
            GeneratorKind::ProductComponents => {
                generator::generate(&self.product_components(), graph, sink)
            }
        }
    }

    fn relationships(&self) -> RelationshipReport {
        RelationshipReport::new(self.config.output().relationships())
    }

    fn product_components(&self) -> ProductComponentReport {
        ProductComponentReport::new(
            self.config.hierarchy().clone(),
            self.config.output().product_components(),
        )
    }

    fn render_with<Gen: Generator, G: ModelGraph>(
        &self,
        generator: &Gen,
        graph: &G,
    ) -> Result<Report, CartographError> {
        let content = generator::render(generator, graph)?;
        info!(generator = generator.name(), bytes = content.len(); "Report rendered");

        Ok(Report {
            path: generator.output_path().to_path_buf(),
            content,
        })
    }
}

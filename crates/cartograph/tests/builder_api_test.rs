//! Integration tests for the ReportBuilder API
//!
//! These tests drive both generators end to end against an in-memory model
//! and a recording sink.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use cartograph::{
    CartographError, ReportBuilder,
    config::{AppConfig, HierarchyConfig, OutputConfig, ProjectConfig},
    generator::GeneratorKind,
    graph::Model,
    identifier::Id,
    model::{Element, Relationship, SourceLocation},
    sink::{FileSink, OutputSink},
};

#[derive(Default)]
struct RecordingSink {
    writes: Vec<(PathBuf, String)>,
}

impl OutputSink for RecordingSink {
    fn write(&mut self, path: &Path, content: &str) -> io::Result<()> {
        self.writes.push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}

struct FailingSink;

impl OutputSink for FailingSink {
    fn write(&mut self, _path: &Path, _content: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }
}

fn element(id: &str, kind: &str, title: &str) -> Element {
    Element::new(Id::new(id), kind).with_title(title)
}

fn billing_model() -> Model {
    Model::new(
        [
            element("cp.billing", "subdomain", "Billing"),
            element("cp.billing.invoicing", "product", "Invoicing"),
            element("cp.billing.invoicing.api", "service", "API").with_technology("Go"),
            element("cp.billing.ledger", "shared-component", "Ledger"),
            element("other.x.y.z", "service", "Stray"),
        ],
        [
            Relationship::new(
                Id::new("cp.billing.invoicing.api"),
                Id::new("cp.billing.ledger"),
                SourceLocation::new("model/billing.c4", 21, 6),
            )
            .with_title("posts \"entries\""),
            Relationship::new(
                Id::new("other.x.y.z"),
                Id::new("cp.billing.invoicing.api"),
                SourceLocation::new("model/other.c4", 3, 2),
            ),
        ],
    )
    .expect("valid model")
}

#[test]
fn test_builder_api_exists() {
    let _builder = ReportBuilder::default();
}

#[test]
fn test_product_components_scenario() {
    let builder = ReportBuilder::default();
    let mut sink = RecordingSink::default();

    builder
        .generate(GeneratorKind::ProductComponents, &billing_model(), &mut sink)
        .expect("product components generated");

    assert_eq!(sink.writes.len(), 1);
    let (path, content) = &sink.writes[0];
    assert_eq!(path, Path::new("product-components.csv"));
    assert_eq!(
        content,
        "Subdomain,Product,Product Type,Component Name,Component Type,Technology\n\
         \"Billing\",\"Invoicing\",\"Product\",\"API\",\"Service\",\"Go\"\n\
         \"Billing\",\"Ledger\",\"Shared Component\",\"\",\"\",\"\""
    );
}

#[test]
fn test_relationships_scenario() {
    let builder = ReportBuilder::default();
    let mut sink = RecordingSink::default();

    builder
        .generate(GeneratorKind::Relationships, &billing_model(), &mut sink)
        .expect("relationships generated");

    assert_eq!(sink.writes.len(), 1);
    let (path, content) = &sink.writes[0];
    assert_eq!(path, Path::new("relationships.csv"));

    let lines: Vec<_> = content.lines().collect();
    assert_eq!(
        lines,
        [
            "relationship,title,location",
            r#""cp.billing.invoicing.api -> cp.billing.ledger","posts \"entries\"","model/billing.c4 [Ln 21, Col 6]""#,
            r#""other.x.y.z -> cp.billing.invoicing.api","","model/other.c4 [Ln 3, Col 2]""#,
        ]
    );
}

#[test]
fn test_relationships_abort_suppresses_write() {
    let model = Model::new([element("cp.billing", "subdomain", "Billing")], []).unwrap();
    let builder = ReportBuilder::default();
    let mut sink = RecordingSink::default();

    let err = builder
        .generate(GeneratorKind::Relationships, &model, &mut sink)
        .unwrap_err();

    assert!(matches!(err, CartographError::Aborted { .. }));
    assert!(sink.writes.is_empty());
}

#[test]
fn test_empty_product_components_writes_header_only() {
    let model = Model::default();
    let builder = ReportBuilder::default();
    let mut sink = RecordingSink::default();

    builder
        .generate(GeneratorKind::ProductComponents, &model, &mut sink)
        .expect("header-only report");

    assert_eq!(
        sink.writes[0].1,
        "Subdomain,Product,Product Type,Component Name,Component Type,Technology\n"
    );
}

#[test]
fn test_sink_failure_propagates() {
    let builder = ReportBuilder::default();

    let err = builder
        .generate(
            GeneratorKind::ProductComponents,
            &billing_model(),
            &mut FailingSink,
        )
        .unwrap_err();

    assert!(matches!(err, CartographError::Io(_)));
}

#[test]
fn test_custom_config_paths_and_root() {
    let config = AppConfig::new(
        ProjectConfig::default(),
        HierarchyConfig::new("acme", vec!["system".to_string()]),
        OutputConfig::new("out/edges.csv", "out/systems.csv"),
    );
    let model = Model::new(
        [
            element("acme.ops", "subdomain", "Ops"),
            element("acme.ops.monitor", "system", "Monitor"),
            element("cp.billing", "subdomain", "Billing"),
            element("cp.billing.ledger", "product", "Ledger"),
        ],
        [],
    )
    .unwrap();
    let dir = tempdir().unwrap();
    let mut sink = FileSink::new(dir.path());

    ReportBuilder::new(config)
        .generate(GeneratorKind::ProductComponents, &model, &mut sink)
        .expect("report written");

    let content = fs::read_to_string(dir.path().join("out/systems.csv")).unwrap();
    assert_eq!(
        content.lines().collect::<Vec<_>>(),
        [
            "Subdomain,Product,Product Type,Component Name,Component Type,Technology",
            r#""Ops","Monitor","System","","","""#,
        ]
    );
}

#[test]
fn test_render_matches_generate() {
    let builder = ReportBuilder::default();
    let model = billing_model();
    let mut sink = RecordingSink::default();

    for kind in GeneratorKind::ALL {
        let report = builder.render(kind, &model).unwrap();
        builder.generate(kind, &model, &mut sink).unwrap();

        let (path, content) = sink.writes.last().unwrap();
        assert_eq!(&report.path, path);
        assert_eq!(&report.content, content);
    }
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use cartograph::generator::GeneratorKind;
use cartograph_cli::{Args, run};

/// Fixtures live at the workspace root, not in the crate
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("fixtures")
}

/// Collects all .toml files from a directory
fn collect_snapshots(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &Path, output_dir: &Path, generators: Vec<GeneratorKind>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output_dir: output_dir.to_string_lossy().to_string(),
        generators,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_snapshots() {
    let valid_snapshots = collect_snapshots(fixtures_path());

    assert!(
        !valid_snapshots.is_empty(),
        "No valid snapshots found in fixtures/"
    );

    let mut failed = Vec::new();

    for snapshot in &valid_snapshots {
        let temp_dir = tempdir().expect("Failed to create temp directory");

        if let Err(e) = run(&args(snapshot, temp_dir.path(), Vec::new())) {
            failed.push((snapshot.clone(), e));
            continue;
        }

        for name in ["relationships.csv", "product-components.csv"] {
            assert!(
                temp_dir.path().join(name).is_file(),
                "{} did not produce {name}",
                snapshot.display()
            );
        }
    }

    if !failed.is_empty() {
        eprintln!("\nValid snapshots that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid snapshot(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_error_snapshots() {
    let error_snapshots = collect_snapshots(fixtures_path().join("errors"));

    assert!(
        !error_snapshots.is_empty(),
        "No error snapshots found in fixtures/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for snapshot in &error_snapshots {
        let temp_dir = tempdir().expect("Failed to create temp directory");

        if run(&args(snapshot, temp_dir.path(), Vec::new())).is_ok() {
            unexpectedly_succeeded.push(snapshot.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError snapshots that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error snapshot(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_common_platform_reports() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let snapshot = fixtures_path().join("common-platform.toml");

    run(&args(&snapshot, temp_dir.path(), Vec::new())).expect("reports generated");

    let product_components =
        fs::read_to_string(temp_dir.path().join("product-components.csv")).unwrap();
    assert_eq!(
        product_components.lines().collect::<Vec<_>>(),
        [
            "Subdomain,Product,Product Type,Component Name,Component Type,Technology",
            r#""Billing","Invoicing","Product","API","Service","Go""#,
            r#""Billing","Invoicing","Product","Invoice Store","Database","PostgreSQL""#,
            r#""Billing","Ledger","Shared Component","","","""#,
            r#""Identity","Accounts","Product","Session Cache","Cache","Redis""#,
            r#""Identity","Accounts","Product","Sessions","Shared Component","""#,
        ]
    );

    let relationships = fs::read_to_string(temp_dir.path().join("relationships.csv")).unwrap();
    assert_eq!(
        relationships.lines().collect::<Vec<_>>(),
        [
            "relationship,title,location",
            r#""cp.billing.invoicing.api -> cp.billing.invoicing.db","reads and writes","model/billing.c4 [Ln 14, Col 4]""#,
            r#""cp.billing.invoicing.api -> cp.billing.ledger","posts \"journal\" entries","model/billing.c4 [Ln 18, Col 4]""#,
            r#""cp.billing.invoicing.api -> partner.bank.gateway.api","","model/partners.c4 [Ln 3, Col 2]""#,
        ]
    );
}

#[test]
fn e2e_abort_writes_nothing_but_other_generators_run() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let snapshot = fixtures_path().join("errors").join("no-relationships.toml");

    let err = run(&args(&snapshot, temp_dir.path(), Vec::new())).unwrap_err();

    assert_eq!(err.failures().len(), 1);
    assert!(err.failures()[0].is_abort());
    assert!(!temp_dir.path().join("relationships.csv").exists());
    assert!(temp_dir.path().join("product-components.csv").is_file());
}

#[test]
fn e2e_selected_generator_only() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let snapshot = fixtures_path().join("single-relationship.toml");

    run(&args(
        &snapshot,
        temp_dir.path(),
        vec![GeneratorKind::Relationships],
    ))
    .expect("relationships generated");

    assert!(temp_dir.path().join("relationships.csv").is_file());
    assert!(!temp_dir.path().join("product-components.csv").exists());
}

#[test]
fn release_metadata_files_exist() {
    let workspace = fixtures_path().parent().unwrap().to_path_buf();

    for crate_dir in ["cartograph", "cartograph-core", "cartograph-cli"] {
        let readme = workspace.join("crates").join(crate_dir).join("README.md");
        assert!(readme.is_file(), "missing {}", readme.display());
    }

    let changelog = fs::read_to_string(workspace.join("CHANGELOG.md")).unwrap();
    assert_eq!(changelog.matches("## [Unreleased]").count(), 1);
    assert!(changelog.lines().any(|line| {
        line.starts_with("[Unreleased]: https://github.com/")
            && line.contains("/compare/")
            && line.ends_with("...HEAD")
    }));
}

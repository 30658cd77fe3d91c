//! Configuration types for Cartograph report generation.
//!
//! All types implement [`serde::Deserialize`] and every section falls back to
//! its defaults when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`ProjectConfig`] - Descriptive project metadata.
//! - [`HierarchyConfig`] - Root namespace and product kinds used for classification.
//! - [`OutputConfig`] - Output paths, relative to the project root.
//!
//! # Example
//!
//! ```
//! # use cartograph::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.hierarchy().root(), "cp");
//! assert!(config.hierarchy().is_product_kind("shared-component"));
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Project metadata section.
    #[serde(default)]
    project: ProjectConfig,

    /// Hierarchy classification section.
    #[serde(default)]
    hierarchy: HierarchyConfig,

    /// Output paths section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(project: ProjectConfig, hierarchy: HierarchyConfig, output: OutputConfig) -> Self {
        Self {
            project,
            hierarchy,
            output,
        }
    }

    /// Returns the project metadata.
    pub fn project(&self) -> &ProjectConfig {
        &self.project
    }

    /// Returns the hierarchy configuration.
    pub fn hierarchy(&self) -> &HierarchyConfig {
        &self.hierarchy
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Descriptive project metadata. Only used for logging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    title: Option<String>,
}

impl ProjectConfig {
    pub fn new(name: Option<String>, title: Option<String>) -> Self {
        Self { name, title }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Controls which elements the product-component report considers.
///
/// Only identifiers whose first segment equals [`HierarchyConfig::root`] are
/// classified. Elements whose kind appears in
/// [`HierarchyConfig::product_kinds`] are treated as products.
#[derive(Debug, Clone, Deserialize)]
pub struct HierarchyConfig {
    #[serde(default = "default_root")]
    root: String,

    #[serde(default = "default_product_kinds")]
    product_kinds: Vec<String>,
}

impl HierarchyConfig {
    /// Creates a new [`HierarchyConfig`].
    ///
    /// # Arguments
    ///
    /// * `root` - Namespace token every classified identifier must start with.
    /// * `product_kinds` - Element kinds treated as products or shared components.
    pub fn new(root: impl Into<String>, product_kinds: Vec<String>) -> Self {
        Self {
            root: root.into(),
            product_kinds,
        }
    }

    /// Returns the root namespace token.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Returns the recognized product kinds.
    pub fn product_kinds(&self) -> &[String] {
        &self.product_kinds
    }

    /// Returns `true` if `kind` is one of the recognized product kinds.
    pub fn is_product_kind(&self, kind: &str) -> bool {
        self.product_kinds.iter().any(|k| k == kind)
    }
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            product_kinds: default_product_kinds(),
        }
    }
}

fn default_root() -> String {
    "cp".to_string()
}

fn default_product_kinds() -> Vec<String> {
    vec!["product".to_string(), "shared-component".to_string()]
}

/// Output file locations, relative to the project root.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_relationships_path")]
    relationships: PathBuf,

    #[serde(default = "default_product_components_path")]
    product_components: PathBuf,
}

impl OutputConfig {
    pub fn new(relationships: impl Into<PathBuf>, product_components: impl Into<PathBuf>) -> Self {
        Self {
            relationships: relationships.into(),
            product_components: product_components.into(),
        }
    }

    /// Path of the relationship report.
    pub fn relationships(&self) -> &Path {
        &self.relationships
    }

    /// Path of the product-component report.
    pub fn product_components(&self) -> &Path {
        &self.product_components
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            relationships: default_relationships_path(),
            product_components: default_product_components_path(),
        }
    }
}

fn default_relationships_path() -> PathBuf {
    PathBuf::from("relationships.csv")
}

fn default_product_components_path() -> PathBuf {
    PathBuf::from("product-components.csv")
}

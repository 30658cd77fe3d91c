//! Rollup of components under their owning products and subdomains.
//!
//! Every component that passes [`HierarchyClassifier::classify`] yields one
//! row. Products that end up with no qualifying component get a single
//! fallback row with empty component columns, so each reportable product is
//! listed at least once. Rows are sorted by subdomain, product and component
//! title.

use std::{
    cmp::Ordering,
    collections::HashSet,
    path::{Path, PathBuf},
};

use icu_collator::{
    Collator, CollatorBorrowed, CollatorPreferences,
    options::{CollatorOptions, Strength},
};
use indexmap::IndexMap;
use log::debug;

use cartograph_core::{graph::ModelGraph, model::Element};

use crate::{
    config::HierarchyConfig,
    error::CartographError,
    generator::{Generator, GeneratorKind},
    hierarchy::{HierarchyClassifier, Placement},
    serialize::Row,
};

pub const HEADER: &str = "Subdomain,Product,Product Type,Component Name,Component Type,Technology";

/// One component (or fallback product) row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductComponentRow {
    pub subdomain: String,
    pub product: String,
    pub product_type: String,
    pub component: String,
    pub component_type: String,
    pub technology: String,
}

impl ProductComponentRow {
    fn component(subdomain: &Element, product: &Element, component: &Element) -> Self {
        Self {
            subdomain: subdomain.title().to_string(),
            product: product.title().to_string(),
            product_type: kind_label(product.kind()),
            component: component.title().to_string(),
            component_type: kind_label(component.kind()),
            technology: component.technology().unwrap_or_default().to_string(),
        }
    }

    fn fallback(subdomain: &Element, product: &Element) -> Self {
        Self {
            subdomain: subdomain.title().to_string(),
            product: product.title().to_string(),
            product_type: kind_label(product.kind()),
            component: String::new(),
            component_type: String::new(),
            technology: String::new(),
        }
    }
}

impl Row for ProductComponentRow {
    fn fields(&self) -> Vec<&str> {
        vec![
            self.subdomain.as_str(),
            self.product.as_str(),
            self.product_type.as_str(),
            self.component.as_str(),
            self.component_type.as_str(),
            self.technology.as_str(),
        ]
    }
}

/// Turn a kind tag into a display label.
///
/// Hyphen-separated words are capitalized and joined with spaces.
///
/// # Examples
///
/// ```
/// use cartograph::product_components::kind_label;
///
/// assert_eq!(kind_label("shared-component"), "Shared Component");
/// assert_eq!(kind_label("service"), "Service");
/// ```
pub fn kind_label(kind: &str) -> String {
    kind.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Orders display titles the way a human-facing listing does.
///
/// Uses the Unicode root collation at tertiary strength: base letters
/// decide first, then accents, then case (lowercase ahead of uppercase).
/// Punctuation and symbols sort before digits, digits before letters.
pub struct TitleCollator {
    collator: CollatorBorrowed<'static>,
}

impl TitleCollator {
    pub fn new() -> Result<Self, CartographError> {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Tertiary);

        let collator = Collator::try_new(CollatorPreferences::default(), options)
            .map_err(|err| CartographError::Collation(err.to_string()))?;
        Ok(Self { collator })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }

    fn compare_rows(&self, a: &ProductComponentRow, b: &ProductComponentRow) -> Ordering {
        self.compare(&a.subdomain, &b.subdomain)
            .then_with(|| self.compare(&a.product, &b.product))
            .then_with(|| self.compare(&a.component, &b.component))
    }
}

/// Generator for the product-component rollup.
#[derive(Debug, Clone)]
pub struct ProductComponentReport {
    hierarchy: HierarchyConfig,
    output_path: PathBuf,
}

impl ProductComponentReport {
    pub fn new(hierarchy: HierarchyConfig, output_path: impl Into<PathBuf>) -> Self {
        Self {
            hierarchy,
            output_path: output_path.into(),
        }
    }
}

impl Generator for ProductComponentReport {
    type Row = ProductComponentRow;

    fn name(&self) -> &'static str {
        GeneratorKind::ProductComponents.name()
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn header(&self) -> &'static str {
        HEADER
    }

    /// Never aborts; an empty result renders as a header-only report.
    fn build_rows<G: ModelGraph>(&self, graph: &G) -> Result<Vec<Self::Row>, CartographError> {
        let classifier = HierarchyClassifier::new(&self.hierarchy);
        let collator = TitleCollator::new()?;

        let mut products = IndexMap::new();
        let mut with_components = HashSet::new();
        let mut rows = Vec::new();

        for element in graph.elements() {
            match classifier.classify(graph, element) {
                Some(Placement::Product { product, subdomain }) => {
                    products.insert(product.id(), (product, subdomain));
                }
                Some(Placement::Component {
                    component,
                    product,
                    subdomain,
                }) => {
                    with_components.insert(product.id());
                    rows.push(ProductComponentRow::component(
                        subdomain, product, component,
                    ));
                }
                None => {}
            }
        }

        let component_rows = rows.len();
        rows.extend(
            products
                .iter()
                .filter(|(id, _)| !with_components.contains(*id))
                .map(|(_, (product, subdomain))| ProductComponentRow::fallback(subdomain, product)),
        );

        debug!(
            products = products.len(),
            component_rows,
            fallback_rows = rows.len() - component_rows;
            "Product components collected"
        );

        rows.sort_by(|a, b| collator.compare_rows(a, b));
        Ok(rows)
    }
}

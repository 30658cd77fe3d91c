//! Hierarchy classification of namespaced elements.
//!
//! Identifiers under the configured root namespace encode a fixed hierarchy:
//!
//! ```text
//! <root>.<subdomain>                         subdomain
//! <root>.<subdomain>.<product>               product or shared component
//! <root>.<subdomain>.<product>.<component>   component (any deeper level too)
//! ```
//!
//! [`HierarchyClassifier::path`] derives ancestor identifiers from the
//! identifier alone. [`HierarchyClassifier::classify`] then resolves those
//! ancestors in a [`ModelGraph`] and applies the kind rules. Elements failing
//! any check are excluded silently; the rollup is best-effort over a graph
//! that may be incomplete.

use log::{debug, trace};

use cartograph_core::{
    graph::ModelGraph,
    identifier::{Id, SEPARATOR},
    model::Element,
};

use crate::config::HierarchyConfig;

/// Depth of a product-level identifier.
const PRODUCT_DEPTH: usize = 3;

/// Ancestor identifiers derived from an element identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyPath {
    /// A depth-3 identifier; the element itself is the product candidate.
    Product { subdomain: Id },

    /// A depth-4-or-deeper identifier.
    Component {
        subdomain: Id,
        product: Id,
        /// Identifier without its last segment. Equals `product` at depth 4.
        parent: Id,
    },
}

/// A reportable element together with its resolved ancestors.
#[derive(Debug, Clone, Copy)]
pub enum Placement<'g> {
    Product {
        product: &'g Element,
        subdomain: &'g Element,
    },
    Component {
        component: &'g Element,
        product: &'g Element,
        subdomain: &'g Element,
    },
}

/// Decides which elements are products or components.
#[derive(Debug, Clone, Copy)]
pub struct HierarchyClassifier<'c> {
    config: &'c HierarchyConfig,
}

impl<'c> HierarchyClassifier<'c> {
    pub fn new(config: &'c HierarchyConfig) -> Self {
        Self { config }
    }

    /// Derive the ancestor identifiers of `id`.
    ///
    /// Returns `None` for identifiers outside the root namespace or with
    /// fewer than three segments.
    pub fn path(&self, id: Id) -> Option<HierarchyPath> {
        // Resolve once; every ancestor is a byte prefix of this text.
        let text = id.as_string();
        let separators: Vec<usize> = text.match_indices(SEPARATOR).map(|(at, _)| at).collect();

        let depth = separators.len() + 1;
        if depth < PRODUCT_DEPTH || &text[..separators[0]] != self.config.root() {
            return None;
        }

        // The first `len` segments end at the `len`-th separator.
        let prefix = |len: usize| Id::new(&text[..separators[len - 1]]);

        let subdomain = prefix(2);
        if depth == PRODUCT_DEPTH {
            return Some(HierarchyPath::Product { subdomain });
        }

        Some(HierarchyPath::Component {
            subdomain,
            product: prefix(PRODUCT_DEPTH),
            parent: prefix(depth - 1),
        })
    }

    /// Classify `element` against `graph`.
    ///
    /// A depth-3 element is a product when its kind is a product kind and its
    /// subdomain exists. A deeper element is a component when its subdomain
    /// exists, and both its top-level product and its immediate parent exist
    /// with a product kind. The parent rule admits components nested under a
    /// shared component that itself sits inside a product.
    pub fn classify<'g, G: ModelGraph>(
        &self,
        graph: &'g G,
        element: &'g Element,
    ) -> Option<Placement<'g>> {
        let id = element.id();
        let Some(path) = self.path(id) else {
            trace!(element = id.to_string(); "Outside classified hierarchy");
            return None;
        };

        match path {
            HierarchyPath::Product { subdomain } => {
                if !self.config.is_product_kind(element.kind()) {
                    trace!(element = id.to_string(), kind = element.kind(); "Not a product kind");
                    return None;
                }
                let subdomain = self.lookup(graph, id, subdomain, "subdomain")?;
                Some(Placement::Product {
                    product: element,
                    subdomain,
                })
            }
            HierarchyPath::Component {
                subdomain,
                product,
                parent,
            } => {
                let subdomain = self.lookup(graph, id, subdomain, "subdomain")?;
                let product = self.lookup(graph, id, product, "product")?;
                if !self.config.is_product_kind(product.kind()) {
                    trace!(element = id.to_string(), product_kind = product.kind(); "Owner is not a product kind");
                    return None;
                }
                let parent = self.lookup(graph, id, parent, "parent")?;
                if !self.config.is_product_kind(parent.kind()) {
                    trace!(element = id.to_string(), parent_kind = parent.kind(); "Parent is not a product kind");
                    return None;
                }
                Some(Placement::Component {
                    component: element,
                    product,
                    subdomain,
                })
            }
        }
    }

    fn lookup<'g, G: ModelGraph>(
        &self,
        graph: &'g G,
        element: Id,
        ancestor: Id,
        role: &'static str,
    ) -> Option<&'g Element> {
        let found = graph.element(ancestor);
        if found.is_none() {
            debug!(
                element = element.to_string(),
                ancestor = ancestor.to_string(),
                role;
                "Ancestor not found, element excluded"
            );
        }
        found
    }
}

//! Read access to an architecture model graph.
//!
//! Report generators consume a graph only through the [`ModelGraph`] trait.
//! [`Model`] is the in-memory implementation used by the CLI and by tests.

use indexmap::IndexMap;
use log::debug;

use crate::{
    error::ModelError,
    identifier::Id,
    model::{Element, Relationship, SourceLocation},
};

/// Read-only view over elements and relationships.
///
/// # Iteration order
///
/// Generators that do not sort their rows emit them in the order returned by
/// [`ModelGraph::relationships`], so implementations must document the order
/// they provide. [`Model`] yields both collections in insertion order.
pub trait ModelGraph {
    /// Iterate over every element.
    fn elements(&self) -> impl Iterator<Item = &Element>;

    /// Iterate over every relationship.
    fn relationships(&self) -> impl Iterator<Item = &Relationship>;

    /// Look up an element by identifier.
    fn element(&self, id: Id) -> Option<&Element>;

    /// Resolve where a relationship is declared.
    fn locate<'a>(&'a self, relationship: &'a Relationship) -> &'a SourceLocation;
}

/// In-memory snapshot of a model.
#[derive(Debug, Clone, Default)]
pub struct Model {
    elements: IndexMap<Id, Element>,
    relationships: Vec<Relationship>,
}

impl Model {
    /// Create a model from its elements and relationships.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateElement`] if two elements share an
    /// identifier. Relationship endpoints are not checked.
    pub fn new(
        elements: impl IntoIterator<Item = Element>,
        relationships: impl IntoIterator<Item = Relationship>,
    ) -> Result<Self, ModelError> {
        let mut by_id = IndexMap::new();
        for element in elements {
            let id = element.id();
            if by_id.insert(id, element).is_some() {
                return Err(ModelError::DuplicateElement(id.to_string()));
            }
        }

        let model = Self {
            elements: by_id,
            relationships: relationships.into_iter().collect(),
        };

        debug!(
            elements = model.elements.len(),
            relationships = model.relationships.len();
            "Model created"
        );

        Ok(model)
    }

    /// Number of elements in the model.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Number of relationships in the model.
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}

impl ModelGraph for Model {
    fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.iter()
    }

    fn element(&self, id: Id) -> Option<&Element> {
        self.elements.get(&id)
    }

    fn locate<'a>(&'a self, relationship: &'a Relationship) -> &'a SourceLocation {
        relationship.location()
    }
}

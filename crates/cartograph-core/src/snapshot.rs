//! Serializable snapshot of a model as exported by a modeling engine.
//!
//! The snapshot mirrors [`Model`] with plain strings so it can be
//! deserialized from any serde format. The CLI reads it from TOML:
//!
//! ```toml
//! [[elements]]
//! id = "cp.billing.invoicing"
//! kind = "product"
//! title = "Invoicing"
//!
//! [[relationships]]
//! source = "cp.billing.invoicing"
//! target = "cp.billing.ledger"
//! title = "posts entries"
//! location = { path = "model/billing.c4", line = 12, column = 4 }
//! ```

use serde::Deserialize;

use crate::{
    error::ModelError,
    graph::Model,
    identifier::Id,
    model::{Element, Relationship, SourceLocation},
};

/// Root of a model snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub elements: Vec<ElementRecord>,

    #[serde(default)]
    pub relationships: Vec<RelationshipRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElementRecord {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub technology: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelationshipRecord {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: LocationRecord,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationRecord {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}

fn parse_id(text: &str) -> Result<Id, ModelError> {
    if text.is_empty() {
        return Err(ModelError::EmptyIdentifier);
    }
    Ok(Id::new(text))
}

impl TryFrom<ElementRecord> for Element {
    type Error = ModelError;

    fn try_from(record: ElementRecord) -> Result<Self, Self::Error> {
        let mut element = Element::new(parse_id(&record.id)?, record.kind);
        if let Some(title) = record.title {
            element = element.with_title(title);
        }
        if let Some(technology) = record.technology {
            element = element.with_technology(technology);
        }
        Ok(element)
    }
}

impl TryFrom<RelationshipRecord> for Relationship {
    type Error = ModelError;

    fn try_from(record: RelationshipRecord) -> Result<Self, Self::Error> {
        let location = SourceLocation::new(
            record.location.path,
            record.location.line,
            record.location.column,
        );
        let relationship = Relationship::new(
            parse_id(&record.source)?,
            parse_id(&record.target)?,
            location,
        );
        Ok(match record.title {
            Some(title) => relationship.with_title(title),
            None => relationship,
        })
    }
}

impl TryFrom<Snapshot> for Model {
    type Error = ModelError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let elements = snapshot
            .elements
            .into_iter()
            .map(Element::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let relationships = snapshot
            .relationships
            .into_iter()
            .map(Relationship::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Model::new(elements, relationships)
    }
}

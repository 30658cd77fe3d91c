//! Element and relationship types of an architecture model.

use std::fmt;

use crate::identifier::Id;

/// A node in the architecture graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: Id,
    kind: String,
    title: Option<String>,
    technology: Option<String>,
}

impl Element {
    /// Create a new Element.
    pub fn new(id: Id, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            title: None,
            technology: None,
        }
    }

    /// Set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the technology label.
    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = Some(technology.into());
        self
    }

    /// Get the element identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the kind tag, e.g. `product` or `shared-component`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the display title, or an empty string when none is set.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Get the technology label, if any.
    pub fn technology(&self) -> Option<&str> {
        self.technology.as_deref()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Where a relationship is declared in the source model.
///
/// The path is relative to the project root. Line and column are reported
/// exactly as the modeling engine resolved them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    relative_path: String,
    line: u32,
    column: u32,
}

impl SourceLocation {
    /// Create a new SourceLocation.
    pub fn new(relative_path: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            relative_path: relative_path.into(),
            line,
            column,
        }
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for SourceLocation {
    /// Renders `"<relativePath> [Ln <line>, Col <column>]"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [Ln {}, Col {}]",
            self.relative_path, self.line, self.column
        )
    }
}

/// A directed edge between two elements.
///
/// Endpoints are plain identifiers; they are not required to resolve to an
/// element of the same model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    source: Id,
    target: Id,
    title: Option<String>,
    location: SourceLocation,
}

impl Relationship {
    /// Create a new Relationship declared at `location`.
    pub fn new(source: Id, target: Id, location: SourceLocation) -> Self {
        Self {
            source,
            target,
            title: None,
            location,
        }
    }

    /// Set the relationship label.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Get the source element Id.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target element Id.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Get the relationship label, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Get the declaration site.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

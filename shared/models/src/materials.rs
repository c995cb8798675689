//! Materials domain models for Banana Couture designs.
//!
//! A design's materials field arrives in one of three shapes: free text
//! produced by the design assistant, the same text split into lines, or a
//! structured bill of materials. All three normalize to the same canonical
//! text before scoring.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Upper bound on structured BOM rows accepted over the wire
pub const MAX_BOM_ITEMS: usize = 200;

/// Upper bound on production notes accepted over the wire
pub const MAX_PRODUCTION_NOTES: usize = 100;

/// Any materials representation a product or draft may carry.
///
/// Deserialization is untagged and resolved in declaration order, so a
/// JSON object is only treated as [`StructuredBom`] when it has an `items`
/// field. Everything that matches none of the known shapes lands in
/// [`MaterialsInput::Other`] instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MaterialsInput {
    Text(String),
    Lines(Vec<String>),
    Structured(StructuredBom),
    Other(serde_json::Value),
}

/// Structured bill of materials
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructuredBom {
    #[validate(length(max = 200, message = "A BOM may list at most 200 items"))]
    pub items: Vec<BomItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "A BOM may carry at most 100 production notes"))]
    pub production_notes: Option<Vec<String>>,
}

/// One row of a structured BOM.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct BomItem {
    pub category: String,
    pub name: String,
    pub composition: String,
    pub estimated_qty: String,
}

impl BomItem {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        composition: impl Into<String>,
        estimated_qty: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            composition: composition.into(),
            estimated_qty: estimated_qty.into(),
        }
    }
}

impl StructuredBom {
    pub fn new(items: Vec<BomItem>) -> Self {
        Self {
            items,
            production_notes: None,
        }
    }

    /// Attaches production notes, replacing any already present
    pub fn with_notes<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.production_notes = Some(notes.into_iter().map(Into::into).collect());
        self
    }

    /// Notes that should be rendered, empty when absent
    pub fn notes(&self) -> &[String] {
        self.production_notes.as_deref().unwrap_or(&[])
    }
}

impl MaterialsInput {
    /// Checks request-size limits. Only structured BOMs carry limits; the
    /// other shapes are bounded by the request body limit alone.
    pub fn validate_limits(&self) -> Result<(), ValidationErrors> {
        match self {
            Self::Structured(bom) => bom.validate(),
            _ => Ok(()),
        }
    }

    /// Short shape label used in logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Lines(_) => "lines",
            Self::Structured(_) => "structured",
            Self::Other(_) => "other",
        }
    }
}

impl From<String> for MaterialsInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for MaterialsInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<String>> for MaterialsInput {
    fn from(lines: Vec<String>) -> Self {
        Self::Lines(lines)
    }
}

impl From<StructuredBom> for MaterialsInput {
    fn from(bom: StructuredBom) -> Self {
        Self::Structured(bom)
    }
}

use serde::{Deserialize, Serialize};

/// One selectable choice within a field: a stable id plus a display label.
/// Host-supplied, immutable snapshot per render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub id: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A selected option as display templates see it after `format_value`:
/// the stored option plus the mapped image URL, when one matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl SelectedOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            image: None,
        }
    }
}

impl From<&FieldOption> for SelectedOption {
    fn from(option: &FieldOption) -> Self {
        Self::new(option.id.clone(), option.label.clone())
    }
}

/// Stored value of a field, by arity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Empty,
    Single(SelectedOption),
    Multiple(Vec<SelectedOption>),
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Single(_) => false,
            FieldValue::Multiple(options) => options.is_empty(),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::image_map::ImageMap;
use crate::option::FieldOption;

/// The finite set of form-control kinds the fieldtype adapter recognizes.
///
/// `SinglePlain`/`MultiPlain` cover both underlying generic renderings
/// (dropdown or button group), since only the selection arity matters to
/// substitution. Anything else is `Unrecognized` and passes through
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    SinglePlain,
    MultiPlain,
    SingleImage,
    MultiImage,
    Unrecognized,
}

impl InputKind {
    /// The image-aware kind this kind should be swapped to, if any.
    ///
    /// Image-aware kinds map to themselves; `Unrecognized` maps to `None`,
    /// meaning "leave the control alone". That is a compatibility path,
    /// not an error.
    pub fn image_target(self) -> Option<InputKind> {
        match self {
            InputKind::SinglePlain => Some(InputKind::SingleImage),
            InputKind::MultiPlain => Some(InputKind::MultiImage),
            InputKind::SingleImage | InputKind::MultiImage => Some(self),
            InputKind::Unrecognized => None,
        }
    }

    pub fn is_image_aware(self) -> bool {
        matches!(self, InputKind::SingleImage | InputKind::MultiImage)
    }

    /// Whether this kind accepts multiple selections.
    pub fn is_multiple(self) -> bool {
        matches!(self, InputKind::MultiPlain | InputKind::MultiImage)
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InputKind::SinglePlain => "singlePlain",
            InputKind::MultiPlain => "multiPlain",
            InputKind::SingleImage => "singleImage",
            InputKind::MultiImage => "multiImage",
            InputKind::Unrecognized => "unrecognized",
        };
        f.write_str(name)
    }
}

/// Current value held by a control instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    #[default]
    None,
    Single(String),
    Multiple(Vec<String>),
}

impl InputValue {
    /// Single-choice check: the option id must equal the scalar value.
    pub fn selected_single(&self, id: &str) -> bool {
        matches!(self, InputValue::Single(value) if value == id)
    }

    /// Multi-choice check: the option id must appear in the value
    /// sequence. A non-sequence value is normalized to an empty set.
    pub fn selected_multi(&self, id: &str) -> bool {
        matches!(self, InputValue::Multiple(values) if values.iter().any(|v| v == id))
    }
}

/// Identity and presentation attributes shared by every control kind.
///
/// Constructed once from a source control and applied wholesale to a
/// substitution target, so the copied attribute set has a single source
/// of truth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonAttributes {
    pub name: String,
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_width: Option<u8>,
    pub required: bool,
    pub collapsed: bool,
    pub value: InputValue,
}

/// A form-control instance, built transiently per form display.
///
/// Holds the option list, the current value, and, once the fieldtype
/// adapter has run, the raw image-map text plus the resolved render
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inputfield {
    pub kind: InputKind,
    pub attrs: CommonAttributes,
    options: Vec<FieldOption>,
    /// Raw `optionImages` text attached by the fieldtype adapter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_images: Option<String>,
    /// Resolved configuration attached by the fieldtype adapter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<RenderConfig>,
}

impl Default for InputKind {
    fn default() -> Self {
        InputKind::Unrecognized
    }
}

impl Inputfield {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Append an option, preserving insertion order.
    pub fn add_option(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.options.push(FieldOption::new(id, label));
    }

    /// Options in the order they were added.
    pub fn options(&self) -> &[FieldOption] {
        &self.options
    }

    /// Overwrite this control's common attributes with another control's.
    pub fn apply_attributes(&mut self, attrs: CommonAttributes) {
        self.attrs = attrs;
    }

    /// The configuration this control renders with: the one the adapter
    /// attached, or the same defaults the resolver would produce. Both
    /// paths agree by construction.
    pub fn effective_config(&self) -> RenderConfig {
        self.config.clone().unwrap_or_default()
    }

    /// Parse the attached image-map text. Recomputed fresh per render.
    pub fn image_map(&self) -> ImageMap {
        self.option_images
            .as_deref()
            .map(ImageMap::parse)
            .unwrap_or_default()
    }
}

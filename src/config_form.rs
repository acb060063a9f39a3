use serde::{Deserialize, Serialize};

use crate::inputfield::Inputfield;

/// The concrete control a configuration field renders as in the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigControl {
    Textarea,
    Integer,
    Text,
    Checkbox,
}

/// One field of the admin configuration form, as handed to the host's
/// generic configuration-form builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInputfield {
    pub name: String,
    pub control: ConfigControl,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Currently stored (or default-displayed) value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    pub collapsed: bool,
    pub checked: bool,
}

impl ConfigInputfield {
    pub fn new(name: impl Into<String>, control: ConfigControl, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            control,
            label: label.into(),
            description: None,
            notes: None,
            value: None,
            min: None,
            collapsed: false,
            checked: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn min(mut self, min: u32) -> Self {
        self.min = Some(min);
        self
    }

    pub fn collapsed(mut self) -> Self {
        self.collapsed = true;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

impl Inputfield {
    /// Control-level admin configuration. The image settings live on the
    /// field (see the fieldtype adapter), not on the control, to avoid
    /// conflicts when the control class is set explicitly; nothing is
    /// added beyond the host's base set.
    pub fn get_config_inputfields(&self) -> Vec<ConfigInputfield> {
        Vec::new()
    }
}

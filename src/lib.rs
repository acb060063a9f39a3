//! # Image Label Option Fields
//!
//! A form-field rendering extension for option ("select one/many") fields:
//! every option can display an associated image instead of, or alongside,
//! its plain text label.
//!
//! ## Features
//! - Newline-delimited `key=value` mapping from option id/value to image URL
//! - Per-field render configuration (desktop/mobile widths, aspect ratio,
//!   caption flag) merged against documented defaults
//! - Runtime substitution of generic single/multi-choice controls with
//!   image-aware variants, preserving attributes, value, and option order
//! - Markup emission for radio and checkbox controls with responsive
//!   CSS custom properties
//! - Read-side value formatting that decorates selected options with their
//!   mapped image URL
//!
//! ## Example — render an image-aware control
//! ```ignore
//! use optionfield_imagelabel::{
//!     DefaultSanitizer, FieldSettings, ImageLabelFieldtype, InputKind, Inputfield,
//! };
//!
//! let mut base = Inputfield::new(InputKind::SinglePlain);
//! base.attrs.name = "color".into();
//! base.attrs.id = "Inputfield_color".into();
//! base.add_option("1", "Red");
//! base.add_option("2", "Blue");
//!
//! let settings = FieldSettings {
//!     option_images: Some("1=/site/assets/red.png".into()),
//!     ..Default::default()
//! };
//!
//! let control = ImageLabelFieldtype::new().get_inputfield(base, &settings);
//! let html = control.render(&DefaultSanitizer);
//! ```
//!
//! ## Example — decorate a formatted value
//! ```ignore
//! use optionfield_imagelabel::{FieldValue, ImageLabelFieldtype, SelectedOption};
//!
//! let value = FieldValue::Single(SelectedOption::new("1", "Red"));
//! let formatted = ImageLabelFieldtype::new().format_value(&settings, value);
//! // formatted option now carries `.image` when the map has an entry
//! ```

pub mod config;
pub mod config_form;
pub mod error;
pub mod fieldtype;
pub mod image_map;
pub mod inputfield;
pub mod option;
pub mod render;
pub mod sanitize;

// --- Core types ---
pub use config::{AspectRatio, FieldSettings, RenderConfig};
pub use config_form::{ConfigControl, ConfigInputfield};
pub use error::{FieldError, FieldResult};
pub use fieldtype::{
    inputfield_module_info, BuiltinModules, ImageLabelFieldtype, ModuleInfo, ModuleLocator,
    OptionsProvider,
};
pub use image_map::ImageMap;
pub use inputfield::{CommonAttributes, InputKind, InputValue, Inputfield};
pub use option::{FieldOption, FieldValue, SelectedOption};
pub use sanitize::{DefaultSanitizer, Sanitizer};

/// Parse a field's raw `optionImages` text into an ordered map.
pub fn parse_image_map(text: &str) -> ImageMap {
    ImageMap::parse(text)
}

/// Resolve raw field settings against the documented defaults.
pub fn resolve_config(settings: &FieldSettings) -> RenderConfig {
    RenderConfig::resolve(settings)
}

/// Render a control with the built-in sanitizer.
pub fn render_inputfield(field: &Inputfield) -> String {
    render::render(field, &DefaultSanitizer)
}

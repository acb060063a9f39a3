use serde::Serialize;

use crate::config::{FieldSettings, DEFAULT_DESKTOP_WIDTH, DEFAULT_MIN_WIDTH, DEFAULT_MOBILE_WIDTH};
use crate::config_form::{ConfigControl, ConfigInputfield};
use crate::error::{FieldError, FieldResult};
use crate::image_map::ImageMap;
use crate::inputfield::{InputKind, Inputfield};
use crate::option::{FieldOption, FieldValue, SelectedOption};

/// Module metadata, as reported to the host's module registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    pub title: &'static str,
    pub version: u32,
    pub summary: &'static str,
    pub requires: &'static [&'static str],
}

/// Host seam: instantiate a control for a kind.
///
/// Returning `None` means the variant is unavailable; the adapter then
/// keeps the original control as-is rather than failing the form render.
pub trait ModuleLocator {
    fn get(&self, kind: InputKind) -> Option<Inputfield>;

    /// Like [`get`](Self::get), but for callers that cannot degrade.
    fn require(&self, kind: InputKind) -> FieldResult<Inputfield> {
        self.get(kind).ok_or_else(|| FieldError::ModuleNotFound {
            kind: kind.to_string(),
        })
    }
}

/// Default locator covering the two built-in image-aware variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinModules;

impl ModuleLocator for BuiltinModules {
    fn get(&self, kind: InputKind) -> Option<Inputfield> {
        match kind {
            InputKind::SingleImage | InputKind::MultiImage => Some(Inputfield::new(kind)),
            _ => None,
        }
    }
}

/// Host seam: ordered id → label pairs for a field.
pub trait OptionsProvider {
    fn options(&self) -> Vec<FieldOption>;
}

impl OptionsProvider for Vec<FieldOption> {
    fn options(&self) -> Vec<FieldOption> {
        self.clone()
    }
}

impl OptionsProvider for &[FieldOption] {
    fn options(&self) -> Vec<FieldOption> {
        self.to_vec()
    }
}

impl Inputfield {
    /// Populate options from a host options provider, preserving order.
    pub fn add_options_from(&mut self, provider: &impl OptionsProvider) {
        for option in provider.options() {
            self.add_option(option.id, option.label);
        }
    }
}

/// Fieldtype adapter: swaps generically-built option controls for their
/// image-aware variants, attaches per-field render settings, describes
/// the admin configuration form, and decorates formatted values with
/// mapped image URLs.
#[derive(Debug, Clone, Default)]
pub struct ImageLabelFieldtype<L: ModuleLocator = BuiltinModules> {
    locator: L,
}

impl ImageLabelFieldtype<BuiltinModules> {
    pub fn new() -> Self {
        Self {
            locator: BuiltinModules,
        }
    }
}

impl<L: ModuleLocator> ImageLabelFieldtype<L> {
    /// Use a host-supplied module locator instead of the built-in one.
    pub fn with_locator(locator: L) -> Self {
        Self { locator }
    }

    pub fn module_info(&self) -> ModuleInfo {
        ModuleInfo {
            title: "Image Label Options",
            version: 101,
            summary: "Select options that map to images/labels.",
            requires: &[
                "FieldtypeOptions",
                "InputfieldRadiosImageLabel",
                "InputfieldCheckboxesImageLabel",
            ],
        }
    }

    /// Produce the editing control for a field.
    ///
    /// Takes the control the base options machinery built (options
    /// populated, value set) and swaps it for the image-aware variant
    /// when its kind calls for one, copying common attributes and every
    /// option in order. Unrecognized kinds, already-image-aware kinds,
    /// and kinds whose target variant the locator cannot supply all pass
    /// through unchanged. Finally attaches the raw image-map text and
    /// the resolved render configuration.
    pub fn get_inputfield(&self, base: Inputfield, settings: &FieldSettings) -> Inputfield {
        let mut inputfield = match base.kind.image_target() {
            Some(target) if target != base.kind => match self.locator.get(target) {
                Some(mut swapped) => {
                    swapped.apply_attributes(base.attrs.clone());
                    for option in base.options() {
                        swapped.add_option(option.id.clone(), option.label.clone());
                    }
                    swapped
                }
                // Variant unavailable: keep the original control rather
                // than failing the whole form render.
                None => base,
            },
            _ => base,
        };

        inputfield.option_images = settings.option_images.clone();
        inputfield.config = Some(settings.resolve());
        inputfield
    }

    /// Extra choices this fieldtype adds to the host's `inputfieldClass`
    /// selector.
    pub fn inputfield_class_options(&self) -> Vec<(InputKind, &'static str)> {
        vec![
            (InputKind::SingleImage, "Image Label Radios"),
            (InputKind::MultiImage, "Image Label Checkboxes"),
        ]
    }

    /// Describe the field-level admin configuration form.
    pub fn get_config_inputfields(&self, settings: &FieldSettings) -> Vec<ConfigInputfield> {
        let min_width = settings
            .option_image_min_width
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_MIN_WIDTH);
        let desktop_width = settings
            .option_image_desktop_width
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_DESKTOP_WIDTH);
        let mobile_width = settings
            .option_image_mobile_width
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_MOBILE_WIDTH);

        vec![
            ConfigInputfield::new("optionImages", ConfigControl::Textarea, "Option Images")
                .description(
                    "Enter one per line in the format: option_id=image_url (or option_value=image_url)",
                )
                .notes("Example: \n1=/site/assets/red.png\nmy_val=/site/assets/blue.png")
                .value(settings.option_images.clone().unwrap_or_default()),
            ConfigInputfield::new(
                "optionImageMinWidth",
                ConfigControl::Integer,
                "Minimum Image Width",
            )
            .description(
                "Minimum width in pixels for rendered images. Default is 100px. (Deprecated: Use Desktop Width instead)",
            )
            .value(min_width.to_string())
            .min(1)
            .collapsed(),
            ConfigInputfield::new(
                "optionImageDesktopWidth",
                ConfigControl::Integer,
                "Desktop Image Width",
            )
            .description("Width in pixels for images on desktop screens. Default is 150px.")
            .value(desktop_width.to_string())
            .min(1),
            ConfigInputfield::new(
                "optionImageMobileWidth",
                ConfigControl::Integer,
                "Mobile Image Width",
            )
            .description("Width in pixels for images on mobile screens. Default is 100px.")
            .value(mobile_width.to_string())
            .min(1),
            ConfigInputfield::new(
                "optionImageAspectRatio",
                ConfigControl::Text,
                "Image Aspect Ratio",
            )
            .description(
                "Aspect ratio for images in format \"width:height\" (e.g., \"16:9\", \"1:1\", \"4:3\"). Leave empty for no aspect ratio constraint.",
            )
            .notes("Examples: 16:9, 1:1, 4:3, 3:2")
            .value(settings.option_image_aspect_ratio.clone().unwrap_or_default()),
            ConfigInputfield::new(
                "optionImageShowLabel",
                ConfigControl::Checkbox,
                "Show Label Below Image",
            )
            .description("If checked, the option label text will be displayed below the image.")
            .checked(settings.option_image_show_label.unwrap_or(false)),
        ]
    }

    /// Decorate a formatted value for output: each selected option gains
    /// an `image` attribute when the field's image map has an entry for
    /// its id (or, failing that, its display value). Options without a
    /// match, and fields with an empty map, pass through untouched.
    pub fn format_value(&self, settings: &FieldSettings, value: FieldValue) -> FieldValue {
        let map = settings.image_map();
        if map.is_empty() {
            return value;
        }
        match value {
            FieldValue::Empty => FieldValue::Empty,
            FieldValue::Single(mut option) => {
                inject_image(&mut option, &map);
                FieldValue::Single(option)
            }
            FieldValue::Multiple(mut options) => {
                for option in &mut options {
                    inject_image(option, &map);
                }
                FieldValue::Multiple(options)
            }
        }
    }
}

// Id takes precedence over display value on conflict.
fn inject_image(option: &mut SelectedOption, map: &ImageMap) {
    if let Some(url) = map.get_for_option(&option.id, &option.label) {
        option.image = Some(url.to_string());
    }
}

/// Module metadata for the image-aware control variants.
pub fn inputfield_module_info(kind: InputKind) -> Option<ModuleInfo> {
    match kind {
        InputKind::SingleImage => Some(ModuleInfo {
            title: "Inputfield Radios Image Label",
            version: 100,
            summary: "Radios that use images/labels instead of standard radio buttons, suitable for FieldtypeOptions.",
            requires: &["FieldtypeOptions"],
        }),
        InputKind::MultiImage => Some(ModuleInfo {
            title: "Inputfield Checkboxes Image Label",
            version: 100,
            summary: "Checkboxes that use images/labels instead of standard checkboxes, suitable for FieldtypeOptions.",
            requires: &["FieldtypeOptions"],
        }),
        _ => None,
    }
}

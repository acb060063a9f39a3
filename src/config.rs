use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::image_map::ImageMap;

/// Default desktop image width in pixels.
pub const DEFAULT_DESKTOP_WIDTH: u32 = 150;
/// Default mobile image width in pixels.
pub const DEFAULT_MOBILE_WIDTH: u32 = 100;
/// Default for the deprecated single min-width setting.
pub const DEFAULT_MIN_WIDTH: u32 = 100;

/// Raw per-field settings as stored by the host. Everything is optional;
/// [`RenderConfig`] supplies the documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSettings {
    /// Newline-delimited `key=value` image mapping text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_images: Option<String>,
    /// Deprecated single width; feeds the desktop width when no explicit
    /// desktop width is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_image_min_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_image_desktop_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_image_mobile_width: Option<u32>,
    /// `"W:H"` string, e.g. `"16:9"`. Anything else means no constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_image_aspect_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_image_show_label: Option<bool>,
}

impl FieldSettings {
    /// Resolve against the documented defaults. Pure and total.
    pub fn resolve(&self) -> RenderConfig {
        RenderConfig::resolve(self)
    }

    /// Parse the image mapping text. Recomputed on every call; the raw
    /// string stays the source of truth.
    pub fn image_map(&self) -> ImageMap {
        self.option_images
            .as_deref()
            .map(ImageMap::parse)
            .unwrap_or_default()
    }
}

/// Fully defaulted visual parameters used when drawing options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    pub desktop_width_px: u32,
    pub mobile_width_px: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<AspectRatio>,
    pub show_label_below_image: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            desktop_width_px: DEFAULT_DESKTOP_WIDTH,
            mobile_width_px: DEFAULT_MOBILE_WIDTH,
            aspect_ratio: None,
            show_label_below_image: false,
        }
    }
}

fn positive(value: Option<u32>) -> Option<u32> {
    value.filter(|&n| n > 0)
}

impl RenderConfig {
    /// Merge raw settings with defaults:
    ///
    /// 1. desktop width = explicit desktop width, else the legacy
    ///    min-width, else 150
    /// 2. mobile width = explicit mobile width, else 100
    /// 3. aspect ratio = strict `"W:H"` parse, else absent
    /// 4. show-label flag = explicit flag, else false
    ///
    /// A configured zero counts as unset, so widths are always positive.
    pub fn resolve(settings: &FieldSettings) -> Self {
        Self {
            desktop_width_px: positive(settings.option_image_desktop_width)
                .or_else(|| positive(settings.option_image_min_width))
                .unwrap_or(DEFAULT_DESKTOP_WIDTH),
            mobile_width_px: positive(settings.option_image_mobile_width)
                .unwrap_or(DEFAULT_MOBILE_WIDTH),
            aspect_ratio: settings
                .option_image_aspect_ratio
                .as_deref()
                .and_then(AspectRatio::parse),
            show_label_below_image: settings.option_image_show_label.unwrap_or(false),
        }
    }
}

impl From<&FieldSettings> for RenderConfig {
    fn from(settings: &FieldSettings) -> Self {
        Self::resolve(settings)
    }
}

/// A parsed `"W:H"` aspect-ratio pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

fn aspect_ratio_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+(?:\.\d+)?):(\d+(?:\.\d+)?)$").expect("aspect ratio pattern is valid")
    })
}

impl AspectRatio {
    /// Parse a `"W:H"` string, e.g. `"16:9"` or `"1.85:1"`.
    ///
    /// Both numbers must be positive. Any malformed or non-positive input
    /// yields `None` ("no constraint"), never an error.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = aspect_ratio_pattern().captures(text.trim())?;
        let width: f64 = caps[1].parse().ok()?;
        let height: f64 = caps[2].parse().ok()?;
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self { width, height })
    }

    /// Derived decimal ratio `W/H`.
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }
}

use std::fmt::Write;

use crate::inputfield::Inputfield;
use crate::sanitize::Sanitizer;

/// CSS custom-property namespace shared with the accompanying stylesheet.
const CSS_VAR_PREFIX: &str = "--inputfield-image-label-options";

/// Render a control instance to markup.
///
/// Image-aware kinds emit the image-label markup contract: a wrapper div
/// carrying the responsive width/ratio CSS variables, then one
/// `<label><input/><span class='content'>…</span></label>` block per
/// option, with an `<img>` standing in for the text label whenever the
/// image map has an entry for the option id. Plain kinds fall back to the
/// same structure without image chrome or CSS variables, so an
/// unsubstituted control stays usable.
///
/// Never fails: unmapped options degrade to their escaped text label, and
/// mapped URLs are emitted as given (after sanitizing) whether or not the
/// resource exists.
pub fn render(field: &Inputfield, sanitizer: &dyn Sanitizer) -> String {
    let multiple = field.kind.is_multiple();
    let image_aware = field.kind.is_image_aware();
    let config = field.effective_config();
    let image_map = field.image_map();

    let mut out = String::new();
    if image_aware {
        let mut css_vars = format!(
            "{prefix}-desktop-width: {desktop}px; {prefix}-mobile-width: {mobile}px;",
            prefix = CSS_VAR_PREFIX,
            desktop = config.desktop_width_px,
            mobile = config.mobile_width_px,
        );
        if let Some(ratio) = config.aspect_ratio {
            let _ = write!(css_vars, " {}-aspect-ratio: {};", CSS_VAR_PREFIX, ratio.ratio());
        }
        let wrapper_class = if multiple {
            "InputfieldCheckboxesImageLabelWrapper"
        } else {
            "InputfieldRadiosImageLabelWrapper"
        };
        let _ = write!(out, "<div class='{}' style='{}'>", wrapper_class, css_vars);
    } else {
        let wrapper_class = if multiple {
            "InputfieldCheckboxes"
        } else {
            "InputfieldRadios"
        };
        let _ = write!(out, "<div class='{}'>", wrapper_class);
    }

    let input_type = if multiple { "checkbox" } else { "radio" };
    // Multi-choice inputs submit as an array
    let name = if multiple {
        format!("{}[]", field.attrs.name)
    } else {
        field.attrs.name.clone()
    };

    for option in field.options() {
        let checked = if multiple {
            field.attrs.value.selected_multi(&option.id)
        } else {
            field.attrs.value.selected_single(&option.id)
        };
        let checked_attr = if checked { " checked='checked'" } else { "" };
        let dom_id = format!("{}_{}", field.attrs.id, sanitizer.name(&option.id));
        let text_label = sanitizer.entities(&option.label);

        let content = match image_map.get(&option.id).filter(|_| image_aware) {
            Some(url) => {
                let img_url = sanitizer.url(url);
                let wrapper_class = if config.aspect_ratio.is_some() {
                    "image-wrapper has-aspect-ratio"
                } else {
                    "image-wrapper"
                };
                let mut label = format!(
                    "<span class='{}'><img src='{}' alt='{}' class='image-label-img' /></span>",
                    wrapper_class, img_url, text_label
                );
                if config.show_label_below_image {
                    let _ = write!(label, "<span class='image-label-text'>{}</span>", text_label);
                }
                label
            }
            None => text_label.clone(),
        };

        let _ = write!(
            out,
            "<label for='{id}' class='image-label-option'>\
             <input type='{input_type}' name='{name}' id='{id}' value='{value}'{checked} />\
             <span class='content'>{content}</span>\
             </label>",
            id = dom_id,
            input_type = input_type,
            name = name,
            value = sanitizer.entities(&option.id),
            checked = checked_attr,
            content = content,
        );
    }

    out.push_str("</div>");
    out
}

impl Inputfield {
    /// Render this control to markup. See [`render`].
    pub fn render(&self, sanitizer: &dyn Sanitizer) -> String {
        render(self, sanitizer)
    }
}

use optionfield_imagelabel::{
    DefaultSanitizer, FieldError, FieldOption, FieldSettings, FieldValue, ImageLabelFieldtype,
    InputKind, InputValue, Inputfield, SelectedOption,
};
use serde::Deserialize;
use std::env;
use std::fs;
use std::process;

/// YAML description of a field to preview: raw settings, options, and the
/// current value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PreviewDoc {
    settings: FieldSettings,
    options: Vec<PreviewOption>,
    value: InputValue,
    multiple: bool,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PreviewOption {
    id: String,
    label: String,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let (format_value, files): (bool, Vec<&String>) = {
        let mut format_value = false;
        let mut files = Vec::new();
        for arg in &args[1..] {
            if arg == "--format-value" {
                format_value = true;
            } else {
                files.push(arg);
            }
        }
        (format_value, files)
    };

    if files.is_empty() {
        eprintln!("Usage: imagefield-preview [--format-value] <field.yaml>");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  imagefield-preview field.yaml");
        eprintln!("  imagefield-preview --format-value field.yaml");
        process::exit(1);
    }

    let mut exit_code = 0;

    for file_path in files {
        match preview_file(file_path, format_value) {
            Ok(output) => {
                println!("{}", output);
            }
            Err(e) => {
                eprintln!("✗ {} failed:", file_path);
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn preview_file(path: &str, format_value: bool) -> Result<String, FieldError> {
    let content = fs::read_to_string(path).map_err(|e| FieldError::FileRead {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    let doc: PreviewDoc = serde_yaml::from_str(&content)?;

    if format_value {
        format_stored_value(&doc)
    } else {
        render_markup(&doc)
    }
}

fn render_markup(doc: &PreviewDoc) -> Result<String, FieldError> {
    let kind = if doc.multiple {
        InputKind::MultiPlain
    } else {
        InputKind::SinglePlain
    };

    let name = doc.name.clone().unwrap_or_else(|| "field".to_string());
    let mut base = Inputfield::new(kind);
    base.attrs.id = format!("Inputfield_{}", name);
    base.attrs.name = name;
    base.attrs.value = doc.value.clone();
    let options: Vec<FieldOption> = doc
        .options
        .iter()
        .map(|o| FieldOption::new(o.id.clone(), o.label.clone()))
        .collect();
    base.add_options_from(&options);

    let control = ImageLabelFieldtype::new().get_inputfield(base, &doc.settings);
    Ok(control.render(&DefaultSanitizer))
}

fn format_stored_value(doc: &PreviewDoc) -> Result<String, FieldError> {
    // Resolve the current value against the option list to build the
    // stored-value objects the host would hand to format_value.
    let options: Vec<FieldOption> = doc
        .options
        .iter()
        .map(|o| FieldOption::new(o.id.clone(), o.label.clone()))
        .collect();
    let selected = |id: &str| -> Option<SelectedOption> {
        options.iter().find(|o| o.id == id).map(SelectedOption::from)
    };

    let value = match &doc.value {
        InputValue::None => FieldValue::Empty,
        InputValue::Single(id) => selected(id)
            .map(FieldValue::Single)
            .ok_or_else(|| FieldError::InvalidPreview(format!("value '{}' is not an option", id)))?,
        InputValue::Multiple(ids) => {
            let mut options = Vec::new();
            for id in ids {
                options.push(selected(id).ok_or_else(|| {
                    FieldError::InvalidPreview(format!("value '{}' is not an option", id))
                })?);
            }
            FieldValue::Multiple(options)
        }
    };

    let formatted = ImageLabelFieldtype::new().format_value(&doc.settings, value);
    Ok(serde_yaml::to_string(&formatted)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_reports_read_error() {
        let result = preview_file("/nonexistent/field.yaml", false);
        assert!(matches!(result, Err(FieldError::FileRead { .. })));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let path = write_temp("imagefield-preview-malformed.yaml", "settings:\n  - [unclosed");
        let result = preview_file(path.to_str().unwrap(), false);
        assert!(matches!(result, Err(FieldError::YamlError(_))));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_value_outside_option_list_is_rejected() {
        let doc = PreviewDoc {
            options: vec![PreviewOption {
                id: "1".to_string(),
                label: "Red".to_string(),
            }],
            value: InputValue::Single("9".to_string()),
            ..Default::default()
        };
        let result = format_stored_value(&doc);
        assert!(matches!(result, Err(FieldError::InvalidPreview(_))));
    }

    #[test]
    fn test_valid_document_renders_markup() {
        let path = write_temp(
            "imagefield-preview-valid.yaml",
            "settings:\n  optionImages: \"1=/red.png\"\noptions:\n  - id: \"1\"\n    label: Red\nvalue: \"1\"\n",
        );
        let html = preview_file(path.to_str().unwrap(), false).unwrap();
        assert!(html.contains("<img src='/red.png' alt='Red'"));
        let _ = fs::remove_file(path);
    }
}

fn print_error(error: &FieldError) {
    match error {
        FieldError::FileRead { path, reason } => {
            eprintln!("  Failed to read '{}':", path);
            eprintln!("    {}", reason);
        }
        FieldError::YamlError(msg) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", msg);
        }
        FieldError::InvalidPreview(msg) => {
            eprintln!("  Invalid preview document:");
            eprintln!("    {}", msg);
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}

use htmlize::escape_attribute;

/// Text/URL sanitizing seam consumed by the renderers.
///
/// The host platform normally injects its own sanitizer; the crate ships
/// [`DefaultSanitizer`] so rendering works stand-alone.
pub trait Sanitizer {
    /// HTML entity-encode text for safe use in markup and attribute values.
    fn entities(&self, text: &str) -> String;

    /// Sanitize a URL for embedding in an `src` attribute. Must not
    /// validate that the resource exists, only that the string is safe
    /// to emit.
    fn url(&self, url: &str) -> String;

    /// Reduce arbitrary text to an identifier-safe name usable in DOM ids.
    fn name(&self, text: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSanitizer;

impl Sanitizer for DefaultSanitizer {
    fn entities(&self, text: &str) -> String {
        escape_attribute(text).into_owned()
    }

    fn url(&self, url: &str) -> String {
        let url = url.trim();
        let lower = url.to_ascii_lowercase();
        // Relative paths and http(s) pass through; script-bearing schemes
        // (javascript:, data:) are dropped entirely.
        let allowed = !lower.contains(':')
            || lower.starts_with("http://")
            || lower.starts_with("https://");
        if !allowed {
            return String::new();
        }
        escape_attribute(url).into_owned()
    }

    fn name(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_entities_escapes_markup() {
        let s = DefaultSanitizer;
        assert_eq!(s.entities("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_url_passes_relative_and_http() {
        let s = DefaultSanitizer;
        assert_eq!(s.url("/site/assets/red.png"), "/site/assets/red.png");
        assert_eq!(s.url("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
    }

    #[test]
    fn test_url_drops_script_schemes() {
        let s = DefaultSanitizer;
        assert_eq!(s.url("javascript:alert(1)"), "");
        assert_eq!(s.url("data:text/html;base64,xx"), "");
    }

    #[test]
    fn test_url_escapes_quotes() {
        let s = DefaultSanitizer;
        assert_eq!(s.url("/a'b.png"), "/a&#39;b.png");
    }

    #[test]
    fn test_name_keeps_identifier_chars_only() {
        let s = DefaultSanitizer;
        assert_eq!(s.name("my_val-2.png"), "my_val-2.png");
        assert_eq!(s.name("my val!"), "my_val_");
    }
}

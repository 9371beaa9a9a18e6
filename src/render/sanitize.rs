use ammonia::Builder;
use once_cell::sync::Lazy;

// default allowlist plus `class`, which the backend uses for its styled sections
static SANITIZER: Lazy<Builder<'static>> = Lazy::new(|| {
    let mut builder = Builder::default();
    builder.add_generic_attributes(["class"]);
    builder
});

/// Backend output made safe to place in the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Markup that survived allowlist sanitization.
    Html(String),
    /// A plain message, already HTML-escaped.
    Text(String),
}

impl Rendered {
    pub fn into_fragment(self) -> String {
        match self {
            Rendered::Html(html) => format!(r#"<article class="reading">{html}</article>"#),
            Rendered::Text(text) => format!(r#"<p class="reading-message">{text}</p>"#),
        }
    }
}

/// Anything starting with `<` is treated as markup and sanitized; everything
/// else is a literal message and escaped.
pub fn render_response(raw: &str) -> Rendered {
    if raw.starts_with('<') {
        Rendered::Html(SANITIZER.clean(raw).to_string())
    } else {
        Rendered::Text(ammonia::clean_text(raw))
    }
}

use crate::config::Theme;
use crate::models::zodiac::ZodiacSign;

const TEMPLATE: &str = include_str!("../../static/index.html");

/// Full page with both forms, the featured sign and an optional reading.
///
/// `result` must already be sanitized markup.
pub fn render_page(theme: Theme, featured: ZodiacSign, result: Option<&str>) -> String {
    let info = featured.info();
    TEMPLATE
        .replace("{{theme}}", theme.as_str())
        .replace("{{featured_color}}", info.color)
        .replace("{{featured_symbol}}", info.symbol)
        .replace("{{featured_name}}", info.name)
        .replace("{{featured_element}}", info.element.as_str())
        .replace("{{sign_options}}", &sign_options())
        .replace("{{result}}", result.unwrap_or_default())
}

fn sign_options() -> String {
    ZodiacSign::ALL
        .into_iter()
        .map(|sign| format!(r#"<option value="{}">{}</option>"#, sign.slug(), sign))
        .collect()
}

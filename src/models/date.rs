use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date pattern"));

/// True for `yyyy-mm-dd` shaped input. No calendar check is made.
pub fn is_iso_date(value: &str) -> bool {
    ISO_DATE.is_match(value)
}

/// Reorders `yyyy-mm-dd` into the backend's `dd-mm-yyyy`.
///
/// Purely mechanical: `2024-13-99` becomes `99-13-2024`. Input without the two
/// separators comes out garbled rather than rejected, so check it with
/// [`is_iso_date`] first.
pub fn normalize_date(iso: &str) -> String {
    let mut parts = iso.splitn(3, '-');
    let year = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let day = parts.next().unwrap_or_default();
    format!("{day}-{month}-{year}")
}

//! Formatting and export utilities shared by the info panels

use crate::fetch::MetaValue;

/// Magnitude below which numbers switch to scientific notation
const SCI_LOWER: f64 = 1e-3;
/// Magnitude above which numbers switch to scientific notation
const SCI_UPPER: f64 = 1e6;

/// Format a numeric metadata value for table display.
///
/// Zero renders as `"0"`; magnitudes below 1e-3 or above 1e6 render in
/// scientific notation with three fraction digits; everything else renders as
/// plain decimal text.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude < SCI_LOWER || magnitude > SCI_UPPER {
        format!("{:.3e}", value)
    } else {
        format!("{}", value)
    }
}

/// Format a mixed metadata value: numbers via [`format_number`], text as-is
pub fn format_meta(value: &MetaValue) -> String {
    match value {
        MetaValue::Num(v) => format_number(*v),
        MetaValue::Text(s) => s.clone(),
    }
}

/// Shorten a provenance/source string for the signature-info header.
///
/// Takes the basename after the last `/`, then truncates to a 30-character
/// budget (27 characters plus an ellipsis).
pub fn shorten_source(source: &str) -> String {
    let basename = match source.rfind('/') {
        Some(idx) => &source[idx + 1..],
        None => source,
    };
    if basename.chars().count() > 30 {
        let head: String = basename.chars().take(27).collect();
        format!("{}...", head)
    } else {
        basename.to_string()
    }
}

/// Make a selection name filesystem-safe: non-alphanumerics become `_`
pub fn slugify(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

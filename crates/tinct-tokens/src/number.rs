//! Number formatting shared by the CSS renderers.

/// Round to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Shortest decimal form with at most `decimals` places: `1.5`, `2`, `0.0625`.
pub(crate) fn format_number(value: f64, decimals: i32) -> String {
    let rounded = round_to(value, decimals);
    // Avoid "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let width = usize::try_from(decimals).unwrap_or(0);
    let text = format!("{rounded:.width$}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

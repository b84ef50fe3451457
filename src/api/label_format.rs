/// Formats a Y-axis row value; whole values drop the fractional part.
#[must_use]
pub fn format_y_axis_label(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = value as i64;
        return whole.to_string();
    }
    value.to_string()
}

/// Formats a bar value as thousands of currency units, e.g. `$0.25K`.
#[must_use]
pub fn format_currency_k(value: f64) -> String {
    format!("${}K", value / 1000.0)
}

/// Formats the raw value drawn next to a plot marker.
#[must_use]
pub fn format_marker_value(value: f64) -> String {
    value.to_string()
}

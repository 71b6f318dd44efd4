//! Number formatting for the NEO table.

/// Placeholder for values the feed did not supply.
pub const MISSING_VALUE: &str = "—";

/// Format with thousands separators and at most three fraction digits,
/// trailing zeros dropped (`1234567.891` → `1,234,567.891`).
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = format!("{:.3}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Format an optional measurement, using a dash when it is missing.
pub fn format_measurement(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), format_grouped)
}

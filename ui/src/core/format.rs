//! Formatting helpers for presenting metrics.

/// Fixed-point rendering with `decimals` digits after the point. Ties round away from zero.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let scaled = (value * factor).round() / factor;
    let rounded = if scaled.is_finite() { scaled } else { value };
    format!("{rounded:.decimals$}")
}

/// Animated readouts whose key mentions fuel carry one decimal; the rest are whole numbers.
pub fn decimals_for_slot(key: &str) -> usize {
    if key.contains("fuel") {
        1
    } else {
        0
    }
}

/// Shortest natural rendering (`7` rather than `7.0`, `201.4` as is).
pub fn format_plain(value: f64) -> String {
    format!("{value}")
}

/// Parse a displayed readout back into a number, tolerating thousands separators.
pub fn parse_display(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

//! Terminal chart primitives
//!
//! Pure string builders used by the reports: proportional bars, percentages,
//! separators, and label truncation. Reports own their table layout; this
//! module only owns the pieces.

/// Render a horizontal bar proportional to `value / max`
///
/// The bar is `width` characters, filled with `█` and padded with spaces so
/// stacked bars stay aligned. Non-positive values or an empty scale render an
/// all-padding bar.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), " ".repeat(width - filled))
}

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

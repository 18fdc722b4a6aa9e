//! Text formatting helpers shared by the metric row, chart labels and the
//! JSON payloads.

/// Format an integer with `,` as the thousands separator (`1,243,103`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Thousands-grouped axis tick for a floating point value. Ticks are
/// truncated toward zero the same way the metric values are.
pub fn format_axis_tick(value: f64) -> String {
    if value.is_finite() && value >= 0.0 {
        format_thousands(value as u64)
    } else if value.is_finite() {
        format!("-{}", format_thousands((-value) as u64))
    } else {
        String::new()
    }
}

/// Escape text for inclusion in HTML element content or quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

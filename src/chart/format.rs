// ---------------------------------------------------------------------------
// Number formatting and label truncation
// ---------------------------------------------------------------------------

/// Default maximum label length.
pub const MAX_LABEL_LEN: usize = 12;
/// Tighter limit used on chart axes.
pub const AXIS_LABEL_LEN: usize = 10;

/// Magnitude-aware tick-label formatting:
/// millions and thousands abbreviate to one decimal plus `M`/`K`, sub-unit
/// magnitudes keep two decimals, everything else one.
pub fn format_number(v: f64) -> String {
    let mag = v.abs();
    if mag >= 1e6 {
        format!("{:.1}M", v / 1e6)
    } else if mag >= 1e3 {
        format!("{:.1}K", v / 1e3)
    } else if mag > 0.0 && mag < 1.0 {
        format!("{v:.2}")
    } else {
        format!("{v:.1}")
    }
}

/// Shorten a label that exceeds `max_len` characters: the first `max_len - 3`
/// characters are kept and `".."` appended. Labels at or under the limit pass
/// through untouched.
pub fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        return label.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let mut out: String = label.chars().take(keep).collect();
    out.push_str("..");
    out
}

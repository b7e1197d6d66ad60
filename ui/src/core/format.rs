//! Formatting helpers for presenting report numbers.

/// Grouped digits, e.g. `12480` -> `"12,480"`.
pub fn format_count(value: u64) -> String {
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

/// Whole-percent share, e.g. `0.348` -> `"35%"`.
pub fn format_share(fraction: f32) -> String {
    format!("{:.0}%", fraction * 100.0)
}

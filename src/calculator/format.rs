//! Number ↔ buffer text conversion

/// Render a running total as buffer text.
///
/// Uses the shortest representation that reads back to the same value, with
/// no trailing `.0` on integers. Negative zero is shown as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return String::from("0");
    }
    format!("{}", value)
}

/// Whether `text` reads back as a finite number
pub fn is_numeral(text: &str) -> bool {
    text.parse::<f64>().is_ok_and(f64::is_finite)
}

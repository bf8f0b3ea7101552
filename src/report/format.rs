/// Percentage cell: fixed decimals and a trailing `%`.
///
/// Ties round away from zero (`6.25` is `6.3` at one decimal), where `format!`
/// alone would round them to even.
pub fn percent(value: f64, precision: usize) -> String {
    let rounded = round_half_away(value, precision);
    format!("{rounded:.precision$}%")
}

fn round_half_away(value: f64, precision: usize) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Percentage cell that is blank when the value is missing.
pub fn optional_percent(value: Option<f64>, precision: usize) -> String {
    value.map(|v| percent(v, precision)).unwrap_or_default()
}

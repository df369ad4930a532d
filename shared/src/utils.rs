// Display helpers shared by the console and desktop front ends.

/// Formats a value with a fixed number of decimals, e.g. `70.1` -> `70.10`.
pub fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}", value, decimals = decimals)
}

/// Formats a price in dollars with two decimals, e.g. `70.449` -> `$70.45`.
pub fn format_price(value: f64) -> String {
    format!("${}", format_decimal(value, 2))
}

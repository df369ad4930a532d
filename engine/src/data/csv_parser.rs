use crate::error::EngineError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// Number handling for price exports such as the investing.com WTI history,
// where large values carry thousands separators ("1,234.50").
pub mod price_format {
    use anyhow::{anyhow, Result};
    use std::str::FromStr;

    pub fn parse_price(s: &str) -> Result<f64> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != ',' && *c != '$')
            .collect();
        if normalized.is_empty() {
            return Err(anyhow!("empty value"));
        }

        let value = f64::from_str(&normalized)
            .map_err(|e| anyhow!("Failed to parse number '{}': {}", s, e))?;
        if !value.is_finite() {
            return Err(anyhow!("Non-finite number '{}'", s));
        }
        Ok(value)
    }

}

/// Header row plus the numeric values of the selected columns, one inner
/// vector per data row in file order.
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

pub struct PriceCsvParser;

impl PriceCsvParser {
    // Header: "Date","Price","Open","High","Low","Vol.","Change %"
    // Row:    "06/02/2025","72.70","73.16","73.16","72.23","284.51K","-0.44%"
    // Only the selected columns must be numeric; the rest are not inspected.
    pub fn read_columns(path: &Path, columns: &[String]) -> Result<ParsedCsv, EngineError> {
        let file = File::open(path)?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(BufReader::new(file));

        let headers = rdr.headers()?.clone();
        let positions = Self::column_positions(&headers, columns)?;

        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(idx as u64 + 2);

            let mut values = Vec::with_capacity(positions.len());
            for (name, pos) in columns.iter().zip(positions.iter()) {
                let raw = record.get(*pos).ok_or_else(|| {
                    EngineError::Schema(format!("Missing '{}' value at line {}", name, line))
                })?;
                let value = price_format::parse_price(raw).map_err(|e| {
                    EngineError::Schema(format!("Error parsing '{}' at line {}: {}", name, line, e))
                })?;
                values.push(value);
            }
            rows.push(values);
        }

        Ok(ParsedCsv {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        })
    }

    fn column_positions(headers: &StringRecord, columns: &[String]) -> Result<Vec<usize>, EngineError> {
        let missing: Vec<&str> = columns
            .iter()
            .filter(|name| !headers.iter().any(|h| h == name.as_str()))
            .map(|name| name.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(EngineError::Schema(format!(
                "CSV file must contain these columns: {} (missing: {})",
                columns.join(", "),
                missing.join(", ")
            )));
        }

        Ok(columns
            .iter()
            .filter_map(|name| headers.iter().position(|h| h == name.as_str()))
            .collect())
    }
}

// Form input checks. Nothing here touches the model.
use crate::error::EngineError;
use shared::models::{is_valid_price, FeatureRecord, PriceInput};
use std::str::FromStr;

/// Turns raw form text into numbers. Only surrounding whitespace is
/// tolerated; separators such as `,` are rejected rather than dropped.
pub fn parse_price_input(open: &str, high: &str, low: &str) -> Result<PriceInput, EngineError> {
    let parse = |label: &str, raw: &str| {
        f64::from_str(raw.trim()).map_err(|e| {
            EngineError::InputValidation(format!("{} Price is not a number: '{}' ({})", label, raw, e))
        })
    };
    Ok(PriceInput::new(parse("Open", open)?, parse("High", high)?, parse("Low", low)?))
}

/// Every price must be finite and strictly greater than zero.
pub fn validate_input(input: &PriceInput) -> Result<FeatureRecord, EngineError> {
    FeatureRecord::try_new(input.open, input.high, input.low).ok_or_else(|| {
        let offending: Vec<&str> = input
            .labelled()
            .iter()
            .filter(|(_, value)| !is_valid_price(*value))
            .map(|(label, _)| *label)
            .collect();
        EngineError::InputValidation(format!(
            "All prices must be greater than zero (check: {})",
            offending.join(", ")
        ))
    })
}

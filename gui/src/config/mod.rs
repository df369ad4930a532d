// GUI configuration module
pub mod theme; // Palette and stylesheet for the predictor window

pub const WINDOW_TITLE: &str = "Oil Price Predictor";

mod config;
mod insights;
#[cfg(test)]
mod tests;

pub use config::{InsightsConfig, DEFAULT_AMOUNT_THRESHOLD, DEFAULT_FOCUS_CITY};
pub use insights::{BusinessInsights, GrowthWindow, TrendDirection};

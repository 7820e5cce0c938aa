use crate::types::MonthBucket;
use rust_decimal::Decimal;

pub const DEFAULT_FOCUS_CITY: &str = "Amman";
pub const DEFAULT_AMOUNT_THRESHOLD: i64 = 200;

/// Parameters for the insights report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightsConfig {
    /// City used for the category popularity challenge.
    pub focus_city: String,
    /// Orders strictly above this amount count as large.
    pub amount_threshold: Decimal,
    /// Months to measure growth between; first and last month present when unset.
    pub growth_window: Option<(MonthBucket, MonthBucket)>
}

impl InsightsConfig {
    pub fn new() -> Self {
        Self {
            focus_city: DEFAULT_FOCUS_CITY.to_string(),
            amount_threshold: Decimal::from(DEFAULT_AMOUNT_THRESHOLD),
            growth_window: None
        }
    }

    pub fn with_focus_city(mut self, city: impl Into<String>) -> Self {
        self.focus_city = city.into();
        self
    }

    pub fn with_amount_threshold(mut self, threshold: Decimal) -> Self {
        self.amount_threshold = threshold;
        self
    }

    pub fn with_growth_window(mut self, from: MonthBucket, to: MonthBucket) -> Self {
        self.growth_window = Some((from, to));
        self
    }
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self::new()
    }
}

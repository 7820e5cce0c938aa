use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::analysis::AnalysisError;
use crate::models::{GroupKey, GroupLabel};
use crate::types::{MonthBucket, OrderId};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Represents a single row from the input CSV file.
///
/// Categorical fields are optional because an empty cell is a legitimate
/// (missing) category rather than a load failure. The order date is kept as
/// loaded and parsed on demand, so only the queries that need a date can fail
/// on a bad one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionRecord {
    /// Unique order identifier.
    pub order_id: OrderId,
    /// City the order was shipped to.
    pub city: Option<String>,
    /// Product category of the order.
    pub product_category: Option<String>,
    /// Order value in currency units, never negative.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
    /// How the customer paid.
    pub payment_method: Option<String>,
    /// Raw order date or timestamp.
    pub order_date: String
}

impl TransactionRecord {
    /// Parses the order date, accepting plain dates, naive timestamps and RFC 3339.
    ///
    /// # Errors
    /// Returns `AnalysisError::DateParse` naming this record when no format matches.
    pub fn order_date(&self) -> Result<NaiveDate, AnalysisError> {
        let value = self.order_date.trim();

        if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
            return Ok(date);
        }

        for format in DATE_TIME_FORMATS {
            if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
                return Ok(timestamp.date());
            }
        }

        DateTime::parse_from_rfc3339(value)
            .map(|timestamp| timestamp.date_naive())
            .map_err(|_| AnalysisError::date_parse(self))
    }

    /// The month bucket this order falls into.
    pub fn month(&self) -> Result<MonthBucket, AnalysisError> {
        self.order_date().map(MonthBucket::from)
    }

    /// Projects the record onto a grouping key.
    pub fn label(&self, key: GroupKey) -> Result<GroupLabel, AnalysisError> {
        let value = match key {
            GroupKey::City => &self.city,
            GroupKey::ProductCategory => &self.product_category,
            GroupKey::PaymentMethod => &self.payment_method,
            GroupKey::Month => return self.month().map(GroupLabel::Month)
        };

        Ok(GroupLabel::from(value.as_deref()))
    }
}

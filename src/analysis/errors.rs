use crate::models::{GroupKey, TransactionRecord};
use crate::types::{MonthBucket, OrderId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Order [{order_id}] has an unparseable order date [{value}]")]
    DateParse {
        order_id: OrderId,
        value: String
    },
    #[error("Division by zero while computing {operation}")]
    DivisionByZero {
        operation: &'static str
    },
    #[error("Insufficient data: {operation} requires at least {required} values but found {actual}")]
    InsufficientData {
        operation: &'static str,
        required: usize,
        actual: usize
    },
    #[error("Numeric overflow occurred while computing {operation}")]
    Overflow {
        operation: &'static str
    },
    #[error("Group [{label}] is not present in the [{key}] result")]
    UnknownGroup {
        key: GroupKey,
        label: String
    },
    #[error("Unknown group key [{0}]")]
    UnknownGroupKey(String),
    #[error("Month [{0}] is not present in the trend")]
    UnknownMonth(MonthBucket)
}

impl AnalysisError {
    pub fn date_parse(record: &TransactionRecord) -> Self {
        Self::DateParse {
            order_id: record.order_id.clone(),
            value: record.order_date.clone()
        }
    }

    pub fn division_by_zero(operation: &'static str) -> Self {
        Self::DivisionByZero { operation }
    }

    pub fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    pub fn unknown_group(key: GroupKey, label: impl Into<String>) -> Self {
        Self::UnknownGroup { key, label: label.into() }
    }

    pub fn insufficient_data(operation: &'static str, required: usize, actual: usize) -> Self {
        Self::InsufficientData { operation, required, actual }
    }

    /// True when the failure means "undefined" rather than bad input.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. } | Self::InsufficientData { .. })
    }
}

use crate::analysis::aggregate::{average_order_by, order_counts_by, AggregationResult};
use crate::analysis::errors::AnalysisError;
use crate::analysis::ratio::ratio;
use crate::models::{GroupKey, TransactionDataset, TransactionRecord};
use rust_decimal::Decimal;
use tracing::debug;

/// A row selector for `filter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// The record's value for `key` equals `value`. Missing values never match.
    Equals {
        key: GroupKey,
        value: String
    },
    /// `total_amount > threshold`
    AmountAbove(Decimal),
    /// `total_amount <= threshold`
    AmountAtMost(Decimal)
}

impl Predicate {
    pub fn equals(key: GroupKey, value: impl Into<String>) -> Self {
        Self::Equals { key, value: value.into() }
    }

    pub fn matches(&self, record: &TransactionRecord) -> Result<bool, AnalysisError> {
        match self {
            Predicate::Equals { key, value } => Ok(record.label(*key)?.matches(value)),
            Predicate::AmountAbove(threshold) => Ok(record.total_amount > *threshold),
            Predicate::AmountAtMost(threshold) => Ok(record.total_amount <= *threshold)
        }
    }
}

/// Keeps the records matching `predicate`, preserving their order.
///
/// # Errors
/// `DateParse` when filtering on `GroupKey::Month` meets an unparseable date.
pub fn filter(dataset: &TransactionDataset, predicate: &Predicate) -> Result<TransactionDataset, AnalysisError> {
    let mut records = Vec::new();

    for record in dataset {
        if predicate.matches(record)? {
            records.push(record.clone());
        }
    }

    debug!("Filter {predicate:?} kept {} of {} records", records.len(), dataset.len());

    Ok(TransactionDataset::from_subset(records))
}

/// Order counts per product category within one city, most popular first.
pub fn top_category_in_city(dataset: &TransactionDataset, city: &str) -> Result<AggregationResult, AnalysisError> {
    let in_city = filter(dataset, &Predicate::equals(GroupKey::City, city))?;
    order_counts_by(&in_city, GroupKey::ProductCategory)
}

/// Percentage of all orders whose amount is strictly above `threshold`.
///
/// # Errors
/// `DivisionByZero` for an empty dataset.
pub fn share_above_threshold(dataset: &TransactionDataset, threshold: Decimal) -> Result<Decimal, AnalysisError> {
    let above = filter(dataset, &Predicate::AmountAbove(threshold))?;
    ratio(above.len(), dataset.len())
}

/// Mean order value per city, highest first.
pub fn average_order_by_city(dataset: &TransactionDataset) -> Result<AggregationResult, AnalysisError> {
    average_order_by(dataset, GroupKey::City)
}

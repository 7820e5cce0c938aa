use crate::analysis::AnalysisError;
use crate::models::errors::DatasetError;
use crate::models::TransactionRecord;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::slice::Iter;

/// An ordered, read-only collection of transactions for one analysis session.
///
/// Queries never mutate a dataset. Filtering produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDataset {
    records: Vec<TransactionRecord>
}

impl TransactionDataset {
    /// Builds a dataset, enforcing non-negative amounts and unique order ids.
    ///
    /// # Errors
    /// Returns `DatasetError` for the first record that breaks either rule.
    pub fn new(records: Vec<TransactionRecord>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(records.len());

        for record in &records {
            if record.total_amount < Decimal::ZERO {
                return Err(DatasetError::negative_amount(record));
            }

            if !seen.insert(record.order_id.as_str()) {
                return Err(DatasetError::duplicate_order(record));
            }
        }

        Ok(Self { records })
    }

    /// Subsets of a valid dataset are valid, so they skip re-validation.
    pub(crate) fn from_subset(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    pub fn iter(&self) -> Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn amounts(&self) -> Vec<Decimal> {
        self.records.iter().map(|record| record.total_amount).collect()
    }

    /// # Errors
    /// `AnalysisError::Overflow` when the amounts do not sum within the `Decimal` range.
    pub fn total_revenue(&self) -> Result<Decimal, AnalysisError> {
        self.records.iter()
            .try_fold(Decimal::ZERO, |total, record| total.checked_add(record.total_amount))
            .ok_or_else(|| AnalysisError::overflow("total revenue"))
    }
}

impl<'a> IntoIterator for &'a TransactionDataset {
    type Item = &'a TransactionRecord;
    type IntoIter = Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

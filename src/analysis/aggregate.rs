use crate::analysis::errors::AnalysisError;
use crate::analysis::ratio::percentage;
use crate::models::{GroupKey, GroupLabel, TransactionDataset, TransactionRecord};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::slice::Iter;
use tracing::debug;

/// Which per-record value feeds an aggregation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Metric {
    TotalAmount,
    /// Every record contributes 1.
    RecordCount
}

impl Metric {
    fn value_of(&self, record: &TransactionRecord) -> Decimal {
        match self {
            Metric::TotalAmount => record.total_amount,
            Metric::RecordCount => Decimal::ONE
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Operation {
    Sum,
    Mean,
    Count
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SortOrder {
    Ascending,
    Descending
}

#[derive(Default)]
struct Partition {
    sum: Decimal,
    count: u64
}

/// Grouped metric values, already sorted for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationResult {
    pub group_key: GroupKey,
    pub operation: Operation,
    entries: Vec<(GroupLabel, Decimal)>
}

impl AggregationResult {
    pub fn iter(&self) -> Iter<'_, (GroupLabel, Decimal)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks a group up by the caller's text, e.g. `"Amman"` or `"2024-08"`.
    ///
    /// Text never matches `GroupLabel::Missing`; use `get_label` for that group.
    pub fn get(&self, label: &str) -> Option<Decimal> {
        self.entries.iter()
            .find(|(group, _)| group.matches(label))
            .map(|(_, value)| *value)
    }

    pub fn get_label(&self, label: &GroupLabel) -> Option<Decimal> {
        self.entries.iter()
            .find(|(group, _)| group == label)
            .map(|(_, value)| *value)
    }

    /// The first entry in the result's sort order.
    pub fn top(&self) -> Option<&(GroupLabel, Decimal)> {
        self.entries.first()
    }

    /// # Errors
    /// `Overflow` when the group values do not sum within the `Decimal` range.
    pub fn total(&self) -> Result<Decimal, AnalysisError> {
        self.entries.iter()
            .try_fold(Decimal::ZERO, |total, (_, value)| total.checked_add(*value))
            .ok_or_else(|| AnalysisError::overflow("result total"))
    }

    /// Percentage of the result total held by the group named `label`.
    ///
    /// # Errors
    /// `UnknownGroup` when no group matches, `DivisionByZero` when the total
    /// is zero.
    pub fn share_of(&self, label: &str) -> Result<Decimal, AnalysisError> {
        let value = self.get(label)
            .ok_or_else(|| AnalysisError::unknown_group(self.group_key, label))?;

        percentage(value, self.total()?, "share of total")
    }

    /// Percentage of the result total held by one exact group.
    pub fn share_of_label(&self, label: &GroupLabel) -> Result<Decimal, AnalysisError> {
        let value = self.get_label(label)
            .ok_or_else(|| AnalysisError::unknown_group(self.group_key, label.to_string()))?;

        percentage(value, self.total()?, "share of total")
    }

    /// Every group as a percentage of the total, in the same order.
    pub fn percentages(&self) -> Result<Vec<(GroupLabel, Decimal)>, AnalysisError> {
        let total = self.total()?;

        self.entries.iter()
            .map(|(group, value)| Ok((group.clone(), percentage(*value, total, "share of total")?)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a AggregationResult {
    type Item = &'a (GroupLabel, Decimal);
    type IntoIter = Iter<'a, (GroupLabel, Decimal)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Partitions the dataset by `group_key` and reduces each partition.
///
/// Records with a missing group value form their own `GroupLabel::Missing`
/// group. Values are sorted by `order`; ties fall back to ascending label.
///
/// # Errors
/// Grouping by `GroupKey::Month` fails with `DateParse` on the first record
/// whose date cannot be parsed. A group sum outside the `Decimal` range fails
/// with `Overflow`.
pub fn aggregate(
    dataset: &TransactionDataset,
    group_key: GroupKey,
    metric: Metric,
    operation: Operation,
    order: SortOrder
) -> Result<AggregationResult, AnalysisError> {
    let mut partitions = HashMap::<GroupLabel, Partition>::new();

    for record in dataset {
        let partition = partitions.entry(record.label(group_key)?).or_default();
        partition.sum = partition.sum.checked_add(metric.value_of(record))
            .ok_or_else(|| AnalysisError::overflow("group sum"))?;
        partition.count += 1;
    }

    let mut entries: Vec<(GroupLabel, Decimal)> = partitions.into_iter()
        .map(|(group, partition)| {
            let value = match operation {
                Operation::Sum => partition.sum,
                Operation::Count => Decimal::from(partition.count),
                //NOTE: Partitions only exist once a record lands in them, so count is never zero here
                Operation::Mean => partition.sum.checked_div(Decimal::from(partition.count))
                    .ok_or_else(|| AnalysisError::overflow("group mean"))?
            };
            Ok((group, value))
        })
        .collect::<Result<_, AnalysisError>>()?;

    entries.sort_by(|(left_group, left), (right_group, right)| {
        let by_value = match order {
            SortOrder::Ascending => left.cmp(right),
            SortOrder::Descending => right.cmp(left)
        };
        match by_value {
            Ordering::Equal => left_group.cmp(right_group),
            other => other
        }
    });

    debug!("Aggregated {} records into {} [{}] groups with {:?}({:?})", dataset.len(), entries.len(), group_key, operation, metric);

    Ok(AggregationResult { group_key, operation, entries })
}

/// Total amount per group, highest first.
pub fn revenue_by(dataset: &TransactionDataset, group_key: GroupKey) -> Result<AggregationResult, AnalysisError> {
    aggregate(dataset, group_key, Metric::TotalAmount, Operation::Sum, SortOrder::Descending)
}

/// Number of orders per group, most frequent first.
pub fn order_counts_by(dataset: &TransactionDataset, group_key: GroupKey) -> Result<AggregationResult, AnalysisError> {
    aggregate(dataset, group_key, Metric::RecordCount, Operation::Count, SortOrder::Descending)
}

/// Mean order value per group, highest first.
pub fn average_order_by(dataset: &TransactionDataset, group_key: GroupKey) -> Result<AggregationResult, AnalysisError> {
    aggregate(dataset, group_key, Metric::TotalAmount, Operation::Mean, SortOrder::Descending)
}

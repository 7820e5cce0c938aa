use crate::analysis::errors::AnalysisError;
use crate::analysis::ratio::percentage;
use crate::models::TransactionDataset;
use crate::types::MonthBucket;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::slice::Iter;
use tracing::debug;

/// Revenue per calendar month, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTrend {
    buckets: Vec<(MonthBucket, Decimal)>
}

impl MonthlyTrend {
    pub fn iter(&self) -> Iter<'_, (MonthBucket, Decimal)> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn revenue(&self, month: MonthBucket) -> Option<Decimal> {
        self.buckets.iter()
            .find(|(bucket, _)| *bucket == month)
            .map(|(_, revenue)| *revenue)
    }

    pub fn first(&self) -> Option<&(MonthBucket, Decimal)> {
        self.buckets.first()
    }

    pub fn last(&self) -> Option<&(MonthBucket, Decimal)> {
        self.buckets.last()
    }

    /// Growth from the `from` bucket to the `to` bucket.
    ///
    /// # Errors
    /// `UnknownMonth` if either bucket has no orders, `DivisionByZero` if the
    /// `from` bucket's revenue is zero.
    pub fn growth_between(&self, from: MonthBucket, to: MonthBucket) -> Result<Decimal, AnalysisError> {
        let earlier = self.revenue(from).ok_or(AnalysisError::UnknownMonth(from))?;
        let later = self.revenue(to).ok_or(AnalysisError::UnknownMonth(to))?;

        growth_rate(earlier, later)
    }

    /// Growth between each pair of adjacent buckets.
    pub fn month_over_month(&self) -> Vec<(MonthBucket, Result<Decimal, AnalysisError>)> {
        self.buckets.windows(2)
            .map(|pair| (pair[1].0, growth_rate(pair[0].1, pair[1].1)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a MonthlyTrend {
    type Item = &'a (MonthBucket, Decimal);
    type IntoIter = Iter<'a, (MonthBucket, Decimal)>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

/// Sums order amounts per calendar month.
///
/// # Errors
/// `DateParse` naming the first order whose date cannot be parsed; no
/// partial trend is returned.
pub fn monthly_trend(dataset: &TransactionDataset) -> Result<MonthlyTrend, AnalysisError> {
    let mut buckets = BTreeMap::<MonthBucket, Decimal>::new();

    for record in dataset {
        let revenue = buckets.entry(record.month()?).or_default();
        *revenue = revenue.checked_add(record.total_amount)
            .ok_or_else(|| AnalysisError::overflow("monthly revenue"))?;
    }

    debug!("Bucketed {} records into {} months", dataset.len(), buckets.len());

    Ok(MonthlyTrend {
        buckets: buckets.into_iter().collect()
    })
}

/// `(later - earlier) / earlier * 100`.
///
/// # Errors
/// `DivisionByZero` when `earlier` is zero, `Overflow` when the rate does not
/// fit in a `Decimal`.
pub fn growth_rate(earlier: Decimal, later: Decimal) -> Result<Decimal, AnalysisError> {
    let change = later.checked_sub(earlier)
        .ok_or_else(|| AnalysisError::overflow("growth rate"))?;

    percentage(change, earlier, "growth rate")
}

/// Earliest and latest order date, `None` for an empty dataset.
pub fn date_range(dataset: &TransactionDataset) -> Result<Option<(NaiveDate, NaiveDate)>, AnalysisError> {
    let mut range: Option<(NaiveDate, NaiveDate)> = None;

    for record in dataset {
        let date = record.order_date()?;
        range = Some(match range {
            Some((earliest, latest)) => (earliest.min(date), latest.max(date)),
            None => (date, date)
        });
    }

    Ok(range)
}

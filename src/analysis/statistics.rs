use crate::analysis::errors::AnalysisError;
use rust_decimal::prelude::MathematicalOps;
use rust_decimal::Decimal;
use tracing::debug;

/// Descriptive statistics over a sequence of amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub mean: Decimal,
    pub median: Decimal,
    pub min: Decimal,
    pub max: Decimal,
    /// Sample standard deviation, `None` below two values.
    standard_deviation: Option<Decimal>
}

impl Summary {
    /// # Errors
    /// `InsufficientData` when the summary was built from fewer than two values.
    pub fn standard_deviation(&self) -> Result<Decimal, AnalysisError> {
        self.standard_deviation
            .ok_or_else(|| AnalysisError::insufficient_data("standard deviation", 2, self.count))
    }
}

/// Computes count, mean, median, min, max and sample standard deviation.
///
/// The input is copied before sorting, so the caller's order is untouched and
/// the result does not depend on it.
///
/// # Errors
/// `InsufficientData` for an empty input, `Overflow` when an intermediate
/// value leaves the `Decimal` range.
pub fn summarize(values: &[Decimal]) -> Result<Summary, AnalysisError> {
    if values.is_empty() {
        return Err(AnalysisError::insufficient_data("summary", 1, 0));
    }

    let mut sorted = values.to_vec();
    sorted.sort();

    let count = sorted.len();
    let mean = mean(&sorted)?;
    let middle = count / 2;
    let median = if count % 2 == 0 {
        //NOTE: Halving first keeps the midpoint of two near-MAX values in range
        (sorted[middle - 1] / Decimal::TWO)
            .checked_add(sorted[middle] / Decimal::TWO)
            .ok_or_else(|| AnalysisError::overflow("median"))?
    } else {
        sorted[middle]
    };

    let summary = Summary {
        count,
        mean,
        median,
        min: sorted[0],
        max: sorted[count - 1],
        standard_deviation: sample_deviation(&sorted, mean)?
    };

    debug!("Summarized {count} values: mean [{}] median [{}]", summary.mean, summary.median);

    Ok(summary)
}

/// Sample standard deviation (denominator n - 1).
///
/// # Errors
/// `InsufficientData` for fewer than two values, `Overflow` for values whose
/// squared deviations do not fit in a `Decimal`.
pub fn standard_deviation(values: &[Decimal]) -> Result<Decimal, AnalysisError> {
    if values.len() < 2 {
        return Err(AnalysisError::insufficient_data("standard deviation", 2, values.len()));
    }

    sample_deviation(values, mean(values)?)?
        .ok_or_else(|| AnalysisError::insufficient_data("standard deviation", 2, values.len()))
}

fn mean(values: &[Decimal]) -> Result<Decimal, AnalysisError> {
    let total = values.iter()
        .try_fold(Decimal::ZERO, |total, value| total.checked_add(*value))
        .ok_or_else(|| AnalysisError::overflow("mean"))?;

    total.checked_div(Decimal::from(values.len()))
        .ok_or_else(|| AnalysisError::overflow("mean"))
}

fn sample_deviation(values: &[Decimal], mean: Decimal) -> Result<Option<Decimal>, AnalysisError> {
    if values.len() < 2 {
        return Ok(None);
    }

    let squared = values.iter()
        .try_fold(Decimal::ZERO, |total, value| {
            let deviation = value.checked_sub(mean)?;
            total.checked_add(deviation.checked_mul(deviation)?)
        })
        .ok_or_else(|| AnalysisError::overflow("standard deviation"))?;

    let variance = squared.checked_div(Decimal::from(values.len() - 1))
        .ok_or_else(|| AnalysisError::overflow("standard deviation"))?;

    Ok(variance.sqrt())
}

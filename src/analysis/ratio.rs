use crate::analysis::errors::AnalysisError;
use rust_decimal::Decimal;

/// `subset_count` as a percentage of `total_count`.
///
/// # Errors
/// `DivisionByZero` when `total_count` is zero, e.g. for an empty dataset.
pub fn ratio(subset_count: usize, total_count: usize) -> Result<Decimal, AnalysisError> {
    percentage(Decimal::from(subset_count), Decimal::from(total_count), "ratio")
}

pub(crate) fn percentage(part: Decimal, whole: Decimal, operation: &'static str) -> Result<Decimal, AnalysisError> {
    if whole.is_zero() {
        return Err(AnalysisError::division_by_zero(operation));
    }

    part.checked_div(whole)
        .and_then(|fraction| fraction.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| AnalysisError::overflow(operation))
}

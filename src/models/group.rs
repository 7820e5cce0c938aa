use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::analysis::AnalysisError;
use crate::types::MonthBucket;

const MISSING_LABEL: &str = "(missing)";

/// The closed set of fields a dataset can be grouped or filtered by.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum GroupKey {
    City,
    ProductCategory,
    PaymentMethod,
    Month
}

impl GroupKey {
    pub fn name(&self) -> &'static str {
        match self {
            GroupKey::City => "city",
            GroupKey::ProductCategory => "product_category",
            GroupKey::PaymentMethod => "payment_method",
            GroupKey::Month => "month"
        }
    }
}

impl Display for GroupKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for GroupKey {
    type Err = AnalysisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "city" => Ok(GroupKey::City),
            "product_category" => Ok(GroupKey::ProductCategory),
            "payment_method" => Ok(GroupKey::PaymentMethod),
            "month" => Ok(GroupKey::Month),
            _ => Err(AnalysisError::UnknownGroupKey(value.to_string()))
        }
    }
}

/// The value a single record takes for a `GroupKey`.
///
/// `Missing` is a group of its own so that grouped totals always reconcile
/// with the ungrouped total.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum GroupLabel {
    Value(String),
    Month(MonthBucket),
    Missing
}

impl GroupLabel {
    /// Compares against caller-supplied text, trimmed like stored values.
    /// A missing value never matches.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            GroupLabel::Value(label) => label == value.trim(),
            GroupLabel::Month(month) => month.to_string() == value.trim(),
            GroupLabel::Missing => false
        }
    }
}

impl From<Option<&str>> for GroupLabel {
    fn from(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(value) if !value.is_empty() => GroupLabel::Value(value.to_string()),
            _ => GroupLabel::Missing
        }
    }
}

impl Display for GroupLabel {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GroupLabel::Value(label) => formatter.pad(label),
            GroupLabel::Month(month) => formatter.pad(&month.to_string()),
            GroupLabel::Missing => formatter.pad(MISSING_LABEL)
        }
    }
}

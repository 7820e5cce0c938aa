use crate::types::errors::MonthBucketError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A calendar month (year + month) used to bucket orders over time.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MonthBucket {
    year: i32,
    month: u32
}

impl MonthBucket {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthBucketError> {
        if !(1..=12).contains(&month) {
            return Err(MonthBucketError::MonthOutOfRange(month));
        }

        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl From<NaiveDate> for MonthBucket {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month()
        }
    }
}

impl Display for MonthBucket {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.pad(&format!("{:04}-{:02}", self.year, self.month))
    }
}

impl FromStr for MonthBucket {
    type Err = MonthBucketError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        let Some((year, month)) = value.split_once('-') else {
            return Err(MonthBucketError::InvalidFormat(format!("Expected YYYY-MM but found '{value}'")));
        };

        if year.len() != 4 || month.len() != 2 {
            return Err(MonthBucketError::InvalidFormat(format!("Expected YYYY-MM but found '{value}'")));
        }

        MonthBucket::new(year.parse()?, month.parse()?)
    }
}

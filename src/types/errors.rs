use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonthBucketError {
    #[error("Month bucket error: {0}")]
    InvalidFormat(String),
    #[error("Month bucket error: {0}")]
    ParseInt(#[from] ParseIntError),
    #[error("Month bucket error: month [{0}] is out of range")]
    MonthOutOfRange(u32)
}

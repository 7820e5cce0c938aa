mod errors;
mod month;

pub use errors::MonthBucketError;
pub use month::MonthBucket;

pub type OrderId = String;

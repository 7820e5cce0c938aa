mod dataset;
mod errors;
mod group;
#[cfg(test)]
mod tests;
mod transaction;

pub use dataset::TransactionDataset;
pub use errors::DatasetError;
pub use group::{GroupKey, GroupLabel};
pub use transaction::TransactionRecord;

use crate::loader::errors::LoadError;
use crate::models::{TransactionDataset, TransactionRecord};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{error, info};

/// Header names every input file must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "order_id",
    "city",
    "product_category",
    "total_amount",
    "payment_method",
    "order_date"
];

/// Loads a transaction dataset from a CSV file on disk.
///
/// # Errors
/// Any `LoadError` is fatal: the file cannot be opened, a required column is
/// absent, a row fails to deserialize, or the rows break a dataset invariant.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<TransactionDataset, LoadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| {
        error!("Error opening CSV at path: {} | {source}", path.display());
        LoadError::Io { path: path.display().to_string(), source }
    })?;

    let dataset = read_dataset(BufReader::new(file))?;

    info!("Loaded {} transactions from {}", dataset.len(), path.display());

    Ok(dataset)
}

/// Reads a transaction dataset from any CSV source with a header row.
pub fn read_dataset<R: Read>(source: R) -> Result<TransactionDataset, LoadError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();

    if let Some(column) = REQUIRED_COLUMNS.iter().copied().find(|column| !headers.iter().any(|header| header == *column)) {
        error!("CSV header is missing required column [{column}]");
        return Err(LoadError::MissingColumn { column });
    }

    let mut records = Vec::new();

    for result in reader.deserialize::<TransactionRecord>() {
        let record = result.inspect_err(|error| error!("CSV deserialization error: {error}"))?;
        records.push(record);
    }

    Ok(TransactionDataset::new(records)?)
}

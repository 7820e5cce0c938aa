mod csv_loader;
mod errors;

pub use csv_loader::{load_dataset, read_dataset, REQUIRED_COLUMNS};
pub use errors::LoadError;

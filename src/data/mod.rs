//! Data module - CSV fetching and row parsing

mod fetcher;
mod parser;

pub use fetcher::{DataFetcher, FetchError};
pub use parser::{Record, RowParser};

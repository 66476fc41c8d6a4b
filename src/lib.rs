//! Daily min/max temperature reports.
//!
//! Reads a CSV of `date,min,max` rows (Fahrenheit, ISO 8601 dates) and renders
//! an overview of the whole period plus one block per day, in Celsius.

pub mod convert;
pub mod loader;
pub mod stats;
pub mod summary;

pub use convert::{
    fahrenheit_to_celsius, format_date, format_temperature, DateError, Reading, DEGREE_SYMBOL,
};
pub use loader::{load_dataset, Dataset, LoadError};
pub use stats::{find_max, find_min, mean, EmptyInput};
pub use summary::{generate_daily_summary, generate_overview_summary};

/// One row of the input file. Temperatures are in Fahrenheit.
///
/// Nothing checks that `min_temp <= max_temp`, rows are kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub date: String,
    pub min_temp: i32,
    pub max_temp: i32,
}

impl DayRecord {
    pub fn new(date: impl Into<String>, min_temp: i32, max_temp: i32) -> Self {
        Self {
            date: date.into(),
            min_temp,
            max_temp,
        }
    }
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    EmptyInput(#[from] EmptyInput),
}

use thiserror::Error;

use rab_model::RawVocabulary;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error(
        "raw data does not match any known RAB vocabulary\n  actual columns: {actual:?}\n  expected (csv): {expected_csv:?}\n  expected (json): {expected_json:?}"
    )]
    SchemaMismatch {
        actual: Vec<String>,
        expected_csv: Vec<&'static str>,
        expected_json: Vec<&'static str>,
    },

    #[error("column {column}: cannot coerce {value:?} to an integer without truncation")]
    FractionalInt { column: String, value: String },

    #[error("tax id has {got} digits, expected {expected}: {value:?}")]
    TaxIdDigits {
        expected: usize,
        got: usize,
        value: String,
    },

    #[error("invalid classifier pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),
}

impl CleanError {
    /// Schema error naming the offending column set against both vocabularies.
    pub fn schema_mismatch(actual: Vec<String>) -> Self {
        Self::SchemaMismatch {
            actual,
            expected_csv: RawVocabulary::Csv.raw_columns(),
            expected_json: RawVocabulary::Json.raw_columns(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanError>;

//! DataFrame column helpers for the cleaning stages.
//!
//! Stages read a whole column into a `Vec`, transform it, and write it
//! back under the same name; `DataFrame::with_column` replaces by name,
//! which also handles dtype changes during coercion.

use polars::prelude::{DataFrame, IntoSeries, Series, StringChunkedBuilder};

use crate::error::Result;

/// Read a string column as owned optional values.
pub fn str_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let ca = df.column(name)?.str()?;
    Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect())
}

/// Read a boolean column, treating nulls as false.
pub fn bool_column(df: &DataFrame, name: &str) -> Result<Vec<bool>> {
    let ca = df.column(name)?.bool()?;
    Ok(ca.into_iter().map(|v| v.unwrap_or(false)).collect())
}

/// Read a nullable integer column.
pub fn i64_column(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    let ca = df.column(name)?.i64()?;
    Ok(ca.into_iter().collect())
}

/// Build a nullable string series.
pub fn str_series(name: &str, values: &[Option<String>]) -> Series {
    let mut builder = StringChunkedBuilder::new(name.into(), values.len());
    for value in values {
        match value {
            Some(v) => builder.append_value(v),
            None => builder.append_null(),
        }
    }
    builder.finish().into_series()
}

/// Replace (or append) a nullable string column.
pub fn set_str_column(df: &mut DataFrame, name: &str, values: &[Option<String>]) -> Result<()> {
    df.with_column(str_series(name, values))?;
    Ok(())
}

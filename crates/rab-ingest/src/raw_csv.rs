//! Raw registry CSV decoding.
//!
//! The ANAC file is Latin-1, semicolon separated, and carries one junk
//! title line before the header. Every column is read as a string;
//! empty cells become nulls so the pipeline sees one consistent missing
//! encoding.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use polars::prelude::{DataFrame, IntoSeries, StringChunkedBuilder};
use tracing::debug;

/// Reads the raw registry file into an all-string DataFrame.
pub fn read_raw_csv(path: &Path) -> Result<DataFrame> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let text = decode_latin1(&bytes);

    // Skip the title line above the header
    let Some(newline) = text.find('\n') else {
        bail!("{}: no header line found", path.display());
    };
    let body = &text[newline + 1..];

    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .context("read csv header")?
        .iter()
        .map(|h| h.trim().trim_matches('\u{feff}').to_string())
        .collect();

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.context("read csv record")?;
        for (idx, column) in columns.iter_mut().enumerate() {
            // Short records pad with nulls
            let cell = record.get(idx).map(str::trim).unwrap_or("");
            column.push(if cell.is_empty() {
                None
            } else {
                Some(cell.to_string())
            });
        }
    }

    debug!(
        rows = columns.first().map_or(0, Vec::len),
        columns = headers.len(),
        "decoded raw registry csv"
    );

    let series = headers
        .iter()
        .zip(columns)
        .map(|(name, values)| {
            let mut builder = StringChunkedBuilder::new(name.as_str().into(), values.len());
            for value in &values {
                match value {
                    Some(v) => builder.append_value(v),
                    None => builder.append_null(),
                }
            }
            builder.finish().into_series().into()
        })
        .collect();
    DataFrame::new(series).context("assemble raw table")
}

/// Latin-1 bytes map 1:1 onto the first 256 Unicode code points.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

//! Cleaned-table serialization.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

/// Writes the cleaned table as a comma CSV.
pub fn write_clean_csv(df: &DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir {}", parent.display()))?;
    }
    let mut file =
        File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut df = df.clone();
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), rows = df.height(), "wrote cleaned table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    #[test]
    fn writes_csv_round_trip() {
        let df = DataFrame::new(vec![
            Series::new("tail_number".into(), vec!["PT-AAA", "PT-BBB"]).into(),
            Series::new("age".into(), vec![Some(24i64), None]).into(),
        ])
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/clean.csv");
        write_clean_csv(&df, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("tail_number,age\n"));
        assert!(written.contains("PT-AAA,24"));
    }
}

//! Command implementations: fetch, clean, reshape, write.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::info;

use rab_clean::data_utils::str_column;
use rab_clean::{clean, customer_view_for, melt_by_customer};
use rab_ingest::{RAB_CSV_URL, fetch_raw, read_raw_csv, write_clean_csv};
use rab_model::canonical_columns;

use crate::cli::{CleanArgs, MeltArgs};

/// Outcome of a `clean` run, for the summary table.
pub struct CleanResult {
    pub output: PathBuf,
    pub raw_rows: usize,
    pub rows: usize,
    pub agaircraft: usize,
    pub owned_operated: usize,
    pub owner_kinds: BTreeMap<String, usize>,
    pub operator_kinds: BTreeMap<String, usize>,
}

fn load_raw(data_dir: &Path, input: Option<&PathBuf>, update: bool) -> Result<DataFrame> {
    let path = match input {
        Some(path) => path.clone(),
        None => fetch_raw(RAB_CSV_URL, data_dir, "raw.csv", update)?,
    };
    read_raw_csv(&path)
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let raw = load_raw(&args.data_dir, args.input.as_ref(), args.update)?;
    let raw_rows = raw.height();

    let df = clean(&raw).context("clean registry")?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.data_dir.join("clean.csv"));
    write_clean_csv(&df, &output)?;

    Ok(CleanResult {
        output,
        raw_rows,
        rows: df.height(),
        agaircraft: count_true(&df, "agaircraft")?,
        owned_operated: count_true(&df, "owned_operated")?,
        owner_kinds: kind_counts(&df, "owner_tax_id_type")?,
        operator_kinds: kind_counts(&df, "operator_tax_id_type")?,
    })
}

pub fn run_melt(args: &MeltArgs) -> Result<PathBuf> {
    let raw = load_raw(&args.data_dir, args.input.as_ref(), args.update)?;
    let df = clean(&raw).context("clean registry")?;

    let reshaped = match &args.role {
        Some(role) => customer_view_for(&df, role)?,
        None => melt_by_customer(&df)?,
    };
    info!(rows = reshaped.height(), "reshaped by customer role");

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.data_dir.join("customers.csv"));
    write_clean_csv(&reshaped, &output)?;
    Ok(output)
}

pub fn run_fields() {
    for column in canonical_columns() {
        println!("{column}");
    }
}

fn count_true(df: &DataFrame, column: &str) -> Result<usize> {
    let ca = df.column(column)?.bool()?;
    Ok(ca.into_iter().flatten().filter(|v| *v).count())
}

fn kind_counts(df: &DataFrame, column: &str) -> Result<BTreeMap<String, usize>> {
    let mut counts = BTreeMap::new();
    for value in str_column(df, column)? {
        if let Some(kind) = value {
            *counts.entry(kind).or_insert(0) += 1;
        }
    }
    Ok(counts)
}

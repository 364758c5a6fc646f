//! End-to-end cleaning pipeline for the raw registry table.
//!
//! Stage order is a strict total order: later stages consume columns
//! produced by earlier ones (engine-type derivation reads the normalized
//! manufacturer, the cross-compare flag reads the nulled tax ids).

use chrono::Datelike;
use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use tracing::{debug, info};

use rab_model::{DATE_COLUMNS, INT_COLUMNS, RawVocabulary, TAIL_NUMBER, WEIGHT_COLUMNS};

use crate::classify::{ag_aircraft_rules, classify_and_normalize, derive_engine_type};
use crate::coerce::{coerce_int, coerce_weight, derive_age, reformat_dates};
use crate::data_utils::str_column;
use crate::enrich::{enrich_tax_ids, owned_and_operated};
use crate::error::{CleanError, Result};

/// Runs the whole cleaning pipeline, aging aircraft against the current
/// local year.
pub fn clean(raw: &DataFrame) -> Result<DataFrame> {
    clean_with_year(raw, chrono::Local::now().year())
}

/// Runs the whole cleaning pipeline with an explicit reference year.
///
/// Fails fast with a schema error naming the offending column set when
/// the raw headers match neither known vocabulary; no partial output is
/// produced.
pub fn clean_with_year(raw: &DataFrame, current_year: i32) -> Result<DataFrame> {
    let actual: Vec<String> = raw
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let vocab = RawVocabulary::detect(&actual)
        .ok_or_else(|| CleanError::schema_mismatch(actual))?;
    info!(?vocab, rows = raw.height(), "cleaning raw registry table");

    let mut df = rename_columns(raw.clone(), vocab)?;
    let before = df.height();
    df = dedupe_by_tail_number(&df)?;
    debug!(dropped = before - df.height(), "deduplicated tail numbers");

    reformat_dates(&mut df, DATE_COLUMNS)?;
    coerce_int(&mut df, INT_COLUMNS)?;
    coerce_weight(&mut df, WEIGHT_COLUMNS)?;
    derive_age(&mut df, current_year)?;

    enrich_tax_ids(&mut df)?;
    owned_and_operated(&mut df)?;

    classify_and_normalize(&mut df, &ag_aircraft_rules()?)?;
    derive_engine_type(&mut df)?;

    info!(rows = df.height(), "cleaned registry table");
    Ok(df)
}

/// Renames raw headers to canonical field names for the detected
/// vocabulary. Columns outside the map pass through unchanged.
pub fn rename_columns(mut df: DataFrame, vocab: RawVocabulary) -> Result<DataFrame> {
    for (raw, canonical) in vocab.column_map() {
        if df.column(raw).is_ok() {
            df.rename(raw, (*canonical).into())?;
        }
    }
    Ok(df)
}

/// Drops duplicate tail numbers, keeping the first occurrence.
pub fn dedupe_by_tail_number(df: &DataFrame) -> Result<DataFrame> {
    let mut seen = std::collections::HashSet::new();
    let keep: Vec<bool> = str_column(df, TAIL_NUMBER)?
        .into_iter()
        .map(|tail| seen.insert(tail))
        .collect();
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

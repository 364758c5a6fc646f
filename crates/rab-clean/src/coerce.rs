//! Column-parameterized field coercions.
//!
//! Each function receives and returns the whole table, transforming the
//! named columns in place. Parse failures are non-fatal for dates (cell
//! kept verbatim) and weights (sentinel -1); integer coercion rejects
//! fractional input instead of truncating.

use chrono::NaiveDate;
use polars::prelude::{DataFrame, NamedFrom, Series};

use crate::data_utils::{i64_column, set_str_column, str_column};
use crate::error::{CleanError, Result};

/// Year-of-manufacture values below this are registry noise, not years.
pub const MIN_VALID_YEAR: i64 = 1910;

/// Sentinel for weights that could not be parsed.
pub const WEIGHT_SENTINEL: f64 = -1.0;

/// Reformats `DDMMYY`/`DDMMYYYY` cells to `YYYY-MM-DD`.
///
/// Cells that do not look like an integer are kept verbatim, so the
/// column stays string-typed. Two-digit years below 20 land in the
/// 2000s, the rest in the 1900s. Day and month are never range-checked;
/// this mirrors the registry's own permissive encoding.
pub fn reformat_dates(df: &mut DataFrame, columns: &[&str]) -> Result<()> {
    for column in columns {
        let values: Vec<Option<String>> = str_column(df, column)?
            .into_iter()
            .map(|cell| cell.map(|v| reformat_date_cell(&v)))
            .collect();
        set_str_column(df, column, &values)?;
    }
    Ok(())
}

fn reformat_date_cell(value: &str) -> String {
    if value.parse::<i64>().is_err() {
        return value.to_string();
    }
    let day = value.get(0..2).unwrap_or("");
    let month = value.get(2..4).unwrap_or("");
    let mut year = value.get(4..).unwrap_or("").to_string();
    if year.len() == 2 {
        let century = if year.parse::<u32>().unwrap_or(0) < 20 {
            "20"
        } else {
            "19"
        };
        year = format!("{century}{year}");
    }
    format!("{year}-{month}-{day}")
}

/// Coerces string columns to nullable Int64.
///
/// Empty or non-numeric cells become null. A cell that parses as a
/// number but carries a fractional part fails the stage rather than
/// being silently truncated.
pub fn coerce_int(df: &mut DataFrame, columns: &[&str]) -> Result<()> {
    for column in columns {
        let mut values = Vec::with_capacity(df.height());
        for cell in str_column(df, column)? {
            values.push(match cell {
                None => None,
                Some(v) => parse_int_cell(column, &v)?,
            });
        }
        df.with_column(Series::new((*column).into(), values))?;
    }
    Ok(())
}

fn parse_int_cell(column: &str, value: &str) -> Result<Option<i64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(Some(n));
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
            Ok(Some(f as i64))
        }
        Ok(_) => Err(CleanError::FractionalInt {
            column: column.to_string(),
            value: value.to_string(),
        }),
        Err(_) => Ok(None),
    }
}

/// Coerces weight columns (kg strings) to Float64 with a -1 sentinel.
///
/// Keeps only digits, comma and dot, normalizes the comma decimal
/// separator, and falls back to the sentinel for empty or unparseable
/// cells.
pub fn coerce_weight(df: &mut DataFrame, columns: &[&str]) -> Result<()> {
    for column in columns {
        let values: Vec<f64> = str_column(df, column)?
            .into_iter()
            .map(|cell| cell.as_deref().map_or(WEIGHT_SENTINEL, parse_weight_cell))
            .collect();
        df.with_column(Series::new((*column).into(), values))?;
    }
    Ok(())
}

fn parse_weight_cell(value: &str) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned.trim().parse::<f64>().unwrap_or(WEIGHT_SENTINEL)
}

/// Derives the `age` column from `year_mfg`.
///
/// Years before [`MIN_VALID_YEAR`] are nulled first; age is
/// `current_year - year_mfg` with null propagation.
pub fn derive_age(df: &mut DataFrame, current_year: i32) -> Result<()> {
    let years: Vec<Option<i64>> = i64_column(df, "year_mfg")?
        .into_iter()
        .map(|y| y.filter(|y| *y >= MIN_VALID_YEAR))
        .collect();
    let ages: Vec<Option<i64>> = years
        .iter()
        .map(|y| y.map(|y| i64::from(current_year) - y))
        .collect();
    df.with_column(Series::new("year_mfg".into(), years))?;
    df.with_column(Series::new("age".into(), ages))?;
    Ok(())
}

/// Whether an ISO `YYYY-MM-DD` date lies strictly before `today`.
///
/// Non-ISO input yields `None` rather than an error.
pub fn is_past_due(date: Option<&str>, today: NaiveDate) -> Option<bool> {
    let parsed = NaiveDate::parse_from_str(date?, "%Y-%m-%d").ok()?;
    Some(parsed < today)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_cells() {
        // 2-digit year below 20 lands in the 2000s
        assert_eq!(reformat_date_cell("010203"), "2003-02-01");
        assert_eq!(reformat_date_cell("010299"), "1999-02-01");
        assert_eq!(reformat_date_cell("01021999"), "1999-02-01");
        // non-numeric cells pass through verbatim
        assert_eq!(reformat_date_cell("ABC"), "ABC");
        assert_eq!(reformat_date_cell(""), "");
    }

    #[test]
    fn int_cells() {
        assert_eq!(parse_int_cell("seats", "12").unwrap(), Some(12));
        assert_eq!(parse_int_cell("seats", "  7 ").unwrap(), Some(7));
        assert_eq!(parse_int_cell("seats", "").unwrap(), None);
        assert_eq!(parse_int_cell("seats", "n/a").unwrap(), None);
        assert_eq!(parse_int_cell("seats", "2000.0").unwrap(), Some(2000));
        assert!(matches!(
            parse_int_cell("seats", "2.5"),
            Err(CleanError::FractionalInt { .. })
        ));
    }

    #[test]
    fn weight_cells() {
        assert_eq!(parse_weight_cell("1,234.5 kg"), 1234.5);
        assert_eq!(parse_weight_cell("750"), 750.0);
        assert_eq!(parse_weight_cell(""), WEIGHT_SENTINEL);
        assert_eq!(parse_weight_cell("unknown"), WEIGHT_SENTINEL);
    }

    #[test]
    fn weight_comma_decimal() {
        assert_eq!(parse_weight_cell("1250,5"), 1250.5);
    }

    #[test]
    fn past_due() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(is_past_due(Some("2024-05-31"), today), Some(true));
        assert_eq!(is_past_due(Some("2024-06-01"), today), Some(false));
        assert_eq!(is_past_due(Some("31/05/2024"), today), None);
        assert_eq!(is_past_due(None, today), None);
    }
}

//! Tax-identifier enrichment for the owner and operator roles.
//!
//! For each role the raw id is nulled when it is the all-zero
//! placeholder, classified into a [`TaxIdKind`], and given a display
//! string: canonical punctuation for valid ids, the raw value verbatim
//! for invalid ones, null when empty.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use rab_model::{CustomerRole, TaxIdKind};

use crate::data_utils::{set_str_column, str_column};
use crate::error::Result;
use crate::taxid::{format_cnpj, format_cpf, strip_non_digits, valid_cnpj, valid_cpf};

/// Classifies and formats the tax ids of both customer roles.
///
/// Adds `{role}_tax_id_type` and `{role}_tax_id_print` and rewrites
/// `{role}_tax_id` with placeholders nulled.
pub fn enrich_tax_ids(df: &mut DataFrame) -> Result<()> {
    for role in CustomerRole::ALL {
        enrich_role(df, role)?;
    }
    Ok(())
}

fn enrich_role(df: &mut DataFrame, role: CustomerRole) -> Result<()> {
    let id_col = format!("{}_tax_id", role.prefix());

    let mut ids = Vec::with_capacity(df.height());
    let mut kinds = Vec::with_capacity(df.height());
    let mut prints = Vec::with_capacity(df.height());

    for raw in str_column(df, &id_col)? {
        // The registry codes missing ids as strings of zeros
        let raw = raw.filter(|v| !is_placeholder(v));
        let (kind, print) = match raw.as_deref() {
            None => (TaxIdKind::Empty, None),
            Some(v) if valid_cnpj(Some(v)) => (TaxIdKind::Cnpj, Some(format_cnpj(v)?)),
            Some(v) if valid_cpf(Some(v)) => (TaxIdKind::Cpf, Some(format_cpf(v)?)),
            Some(v) => (TaxIdKind::Invalid, Some(v.to_string())),
        };
        ids.push(raw);
        kinds.push(Some(kind.as_str().to_string()));
        prints.push(print);
    }

    let invalid = kinds
        .iter()
        .filter(|k| k.as_deref() == Some(TaxIdKind::Invalid.as_str()))
        .count();
    debug!(role = %role, invalid, "classified tax ids");

    set_str_column(df, &id_col, &ids)?;
    set_str_column(df, &format!("{id_col}_type"), &kinds)?;
    set_str_column(df, &format!("{id_col}_print"), &prints)?;
    Ok(())
}

/// All-zero after stripping (or no digits at all).
fn is_placeholder(value: &str) -> bool {
    strip_non_digits(value).chars().all(|c| c == '0')
}

/// Adds the `owned_operated` flag: true iff both tax ids are present
/// and equal. Comparisons against a missing id are false, never null.
pub fn owned_and_operated(df: &mut DataFrame) -> Result<()> {
    let owners = str_column(df, "owner_tax_id")?;
    let operators = str_column(df, "operator_tax_id")?;
    let flags: Vec<bool> = owners
        .iter()
        .zip(&operators)
        .map(|(owner, operator)| match (owner, operator) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        })
        .collect();
    df.with_column(Series::new("owned_operated".into(), flags))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_detection() {
        assert!(is_placeholder("00000000000"));
        assert!(is_placeholder("0"));
        // no digits at all counts as missing
        assert!(is_placeholder(""));
        assert!(is_placeholder("n/a"));
        assert!(!is_placeholder("00000000001"));
    }
}

//! Rule-based agricultural-aircraft classification.
//!
//! Rules are declarative: an ordered list of case-insensitive regex
//! predicates over named columns, combined per rule with `All` or `Any`.
//! Rules are applied in declared order and are not mutually exclusive;
//! a later rule may overwrite the manufacturer set by an earlier one for
//! overlapping rows. The engine-type pass runs strictly after
//! normalization because it matches on the normalized manufacturer.

use polars::prelude::{DataFrame, NamedFrom, Series};
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::data_utils::{bool_column, set_str_column, str_column};
use crate::error::Result;

/// How a rule combines its predicate masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Every predicate must match the row.
    All,
    /// At least one predicate must match the row.
    Any,
}

/// A compiled classification rule.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Display name; written into `mfg` when `normalize` is set.
    pub name: String,
    /// Overwrite `mfg` with `name` for matching rows.
    pub normalize: bool,
    pub combinator: Combinator,
    /// (column, pattern) pairs, evaluated independently per row.
    pub predicates: Vec<(String, Regex)>,
}

impl Rule {
    pub fn new(
        name: &str,
        normalize: bool,
        combinator: Combinator,
        predicates: &[(&str, &str)],
    ) -> Result<Self> {
        let predicates = predicates
            .iter()
            .map(|(column, pattern)| {
                let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
                Ok(((*column).to_string(), regex))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            name: name.to_string(),
            normalize,
            combinator,
            predicates,
        })
    }

    /// Row-selection mask for this rule against the current table state.
    ///
    /// Null cells never match.
    fn selection(&self, df: &DataFrame) -> Result<Vec<bool>> {
        let mut mask: Option<Vec<bool>> = None;
        for (column, regex) in &self.predicates {
            let hits: Vec<bool> = str_column(df, column)?
                .iter()
                .map(|cell| cell.as_deref().is_some_and(|v| regex.is_match(v)))
                .collect();
            mask = Some(match (mask, self.combinator) {
                (None, _) => hits,
                (Some(acc), Combinator::Any) => {
                    acc.iter().zip(&hits).map(|(a, b)| *a || *b).collect()
                }
                (Some(acc), Combinator::All) => {
                    acc.iter().zip(&hits).map(|(a, b)| *a && *b).collect()
                }
            });
        }
        Ok(mask.unwrap_or_else(|| vec![false; df.height()]))
    }
}

/// The known agricultural aircraft, as manufacturer/model patterns.
pub fn ag_aircraft_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::new(
            "AG-CAT",
            true,
            Combinator::Any,
            &[
                ("mfg", r"(AG){1}[-_\s]*(CAT){1}"),
                ("model", r"G{1}[-_\s]*(164){1}A?"),
            ],
        )?,
        Rule::new(
            "THRUSH AIRCRAFT",
            true,
            Combinator::Any,
            &[("mfg", "(THRUSH)"), ("model", "(S2R-)")],
        )?,
        Rule::new(
            "CESSNA AIRCRAFT",
            true,
            Combinator::All,
            &[("mfg", "(CESSNA)"), ("model", "(188){1}")],
        )?,
        Rule::new(
            "PIPER AIRCRAFT",
            false,
            Combinator::Any,
            &[("model", r"(PA){1}[-_\s]*(25){1}")],
        )?,
        Rule::new(
            "EMBRAER",
            true,
            Combinator::Any,
            &[("model", r"(EMB){1}[-_\s]*(2){1}")],
        )?,
        Rule::new(
            "AIR TRACTOR",
            true,
            Combinator::Any,
            &[
                ("mfg", "AIR TRACTOR"),
                ("model", r"(AT){1}[-_\s](40|50|60|80){1}"),
            ],
        )?,
    ])
}

/// Applies the rules in order, normalizing `mfg` where requested, and
/// adds the `agaircraft` flag as the OR of all rule selections.
///
/// Idempotent once `mfg` is normalized: re-running produces no further
/// changes.
pub fn classify_and_normalize(df: &mut DataFrame, rules: &[Rule]) -> Result<()> {
    let mut union = vec![false; df.height()];
    for rule in rules {
        // Evaluated against the current state: earlier rules may already
        // have rewritten mfg for overlapping rows.
        let mask = rule.selection(df)?;
        let matched = mask.iter().filter(|m| **m).count();
        debug!(rule = %rule.name, matched, "applied classification rule");
        if rule.normalize {
            let mfg: Vec<Option<String>> = str_column(df, "mfg")?
                .into_iter()
                .zip(&mask)
                .map(|(v, hit)| if *hit { Some(rule.name.clone()) } else { v })
                .collect();
            set_str_column(df, "mfg", &mfg)?;
        }
        for (acc, hit) in union.iter_mut().zip(&mask) {
            *acc |= *hit;
        }
    }
    df.with_column(Series::new("agaircraft".into(), union))?;
    Ok(())
}

/// Derives the ICAO engine-type code for agricultural aircraft.
///
/// AIR TRACTOR model 401s are radial and excluded; the remaining AIR
/// TRACTOR rows and THRUSH AIRCRAFT are turbine (`L1T`). Agricultural
/// rows not flagged turbine get the piston code (`L1P`). Requires the
/// normalized `mfg` written by [`classify_and_normalize`].
pub fn derive_engine_type(df: &mut DataFrame) -> Result<()> {
    let radial = Rule::new(
        "AIR TRACTOR 401",
        false,
        Combinator::All,
        &[("mfg", "AIR TRACTOR"), ("model", "(401){1}")],
    )?;
    let radial_mask = radial.selection(df)?;

    let mfg = str_column(df, "mfg")?;
    let agaircraft = bool_column(df, "agaircraft")?;
    let mut icao = str_column(df, "icao_type_desc")?;

    for (idx, cell) in icao.iter_mut().enumerate() {
        let name = mfg[idx].as_deref();
        let turbine = (name == Some("AIR TRACTOR") && !radial_mask[idx])
            || name == Some("THRUSH AIRCRAFT");
        if turbine {
            *cell = Some("L1T".to_string());
        } else if agaircraft[idx] {
            *cell = Some("L1P".to_string());
        }
    }
    set_str_column(df, "icao_type_desc", &icao)?;
    Ok(())
}

//! End-to-end tests for the cleaning pipeline.

use polars::prelude::{DataFrame, DataType, NamedFrom, Series};

use rab_clean::{CleanError, ag_aircraft_rules, classify_and_normalize, clean_with_year};
use rab_model::RawVocabulary;

/// Builds a raw CSV-vocabulary table; unset columns default to "".
fn raw_table(overrides: &[(&str, Vec<&str>)], height: usize) -> DataFrame {
    let columns: Vec<_> = RawVocabulary::Csv
        .raw_columns()
        .into_iter()
        .map(|raw| {
            let values = overrides
                .iter()
                .find(|(name, _)| *name == raw)
                .map_or_else(|| vec![""; height], |(_, values)| values.clone());
            Series::new(raw.into(), values).into()
        })
        .collect();
    DataFrame::new(columns).expect("build raw table")
}

fn str_at(df: &DataFrame, column: &str, idx: usize) -> Option<String> {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .get(idx)
        .map(str::to_string)
}

#[test]
fn full_pipeline() {
    let raw = raw_table(
        &[
            ("MARCA", vec!["PT-AAA", "PT-BBB", "PT-AAA", "PT-CCC"]),
            (
                "CPF_CNPJ_PROPRIETARIO",
                vec!["11444777000161", "52998224725", "11444777000161", "123"],
            ),
            (
                "CPF_CGC_OPERADOR",
                vec!["11444777000161", "00000000000", "x", "123"],
            ),
            (
                "NOME_FABRICANTE",
                vec!["AIR TRACTOR INC", "NEIVA", "dup", "CESSNA"],
            ),
            ("MODELO", vec!["AT-502B", "EMB-201A", "dup", "172"]),
            ("CLASSE", vec!["L1T", "", "dup", "L4T"]),
            ("ANO_FABRICACAO", vec!["2000", "1899", "1980", ""]),
            ("PMD", vec!["1,234.5 kg", "750", "1", ""]),
            ("VAL_CA", vec!["010203", "010299", "", "ABC"]),
            ("ASSENTOS", vec!["1", "2", "3", "4"]),
        ],
        4,
    );

    let df = clean_with_year(&raw, 2024).expect("pipeline succeeds");

    // Duplicate tail number dropped, first occurrence wins
    assert_eq!(df.height(), 3);
    assert_eq!(str_at(&df, "tail_number", 0), Some("PT-AAA".into()));

    // Dates: 2-digit years split at 20, non-numeric kept verbatim
    assert_eq!(str_at(&df, "exp_date_ca", 0), Some("2003-02-01".into()));
    assert_eq!(str_at(&df, "exp_date_ca", 1), Some("1999-02-01".into()));
    assert_eq!(str_at(&df, "exp_date_ca", 2), Some("ABC".into()));

    // Numeric coercions
    let year = df.column("year_mfg").unwrap().i64().unwrap();
    assert_eq!(year.get(0), Some(2000));
    assert_eq!(year.get(1), None); // 1899 is registry noise
    let age = df.column("age").unwrap().i64().unwrap();
    assert_eq!(age.get(0), Some(24));
    assert_eq!(age.get(1), None);
    let weight = df.column("max_takeoff_wgt").unwrap().f64().unwrap();
    assert_eq!(weight.get(0), Some(1234.5));
    assert_eq!(weight.get(2), Some(-1.0));

    // Tax-id enrichment
    assert_eq!(str_at(&df, "owner_tax_id_type", 0), Some("CNPJ".into()));
    assert_eq!(
        str_at(&df, "owner_tax_id_print", 0),
        Some("11.444.777/0001-61".into())
    );
    assert_eq!(str_at(&df, "owner_tax_id_type", 1), Some("CPF".into()));
    assert_eq!(
        str_at(&df, "owner_tax_id_print", 1),
        Some("529.982.247-25".into())
    );
    assert_eq!(str_at(&df, "operator_tax_id_type", 1), Some("EMPTY".into()));
    assert_eq!(str_at(&df, "operator_tax_id_print", 1), None);
    assert_eq!(str_at(&df, "owner_tax_id_type", 2), Some("INVALID".into()));
    assert_eq!(str_at(&df, "owner_tax_id_print", 2), Some("123".into()));

    // Cross-compare flag: equal valid ids true, anything missing false
    let owned = df.column("owned_operated").unwrap().bool().unwrap();
    assert_eq!(owned.get(0), Some(true));
    assert_eq!(owned.get(1), Some(false));

    // Classification and engine types
    assert_eq!(str_at(&df, "mfg", 0), Some("AIR TRACTOR".into()));
    assert_eq!(str_at(&df, "mfg", 1), Some("EMBRAER".into()));
    assert_eq!(str_at(&df, "mfg", 2), Some("CESSNA".into()));
    let ag = df.column("agaircraft").unwrap().bool().unwrap();
    assert_eq!(ag.get(0), Some(true));
    assert_eq!(ag.get(1), Some(true));
    assert_eq!(ag.get(2), Some(false));
    assert_eq!(str_at(&df, "icao_type_desc", 0), Some("L1T".into()));
    assert_eq!(str_at(&df, "icao_type_desc", 1), Some("L1P".into()));
    assert_eq!(str_at(&df, "icao_type_desc", 2), Some("L4T".into()));
}

#[test]
fn schema_mismatch_fails_fast() {
    let mut raw = raw_table(&[], 1);
    raw.rename("MARCA", "REGISTRATION".into()).unwrap();
    let result = clean_with_year(&raw, 2024);
    match result {
        Err(CleanError::SchemaMismatch { actual, .. }) => {
            assert!(actual.contains(&"REGISTRATION".to_string()));
        }
        other => panic!("expected schema mismatch, got {other:?}"),
    }
}

#[test]
fn json_vocabulary_is_accepted() {
    let columns: Vec<_> = RawVocabulary::Json
        .raw_columns()
        .into_iter()
        .map(|raw| Series::new(raw.into(), vec![""]).into())
        .collect();
    let raw = DataFrame::new(columns).unwrap();
    let df = clean_with_year(&raw, 2024).expect("json vocabulary cleans");
    assert!(df.column("tail_number").is_ok());
    assert_eq!(df.column("owned_operated").unwrap().dtype(), &DataType::Boolean);
}

#[test]
fn fractional_int_is_fatal() {
    let raw = raw_table(&[("MARCA", vec!["PT-AAA"]), ("ASSENTOS", vec!["2.5"])], 1);
    assert!(matches!(
        clean_with_year(&raw, 2024),
        Err(CleanError::FractionalInt { .. })
    ));
}

#[test]
fn classification_is_idempotent() {
    let raw = raw_table(
        &[
            ("MARCA", vec!["PT-AAA", "PT-BBB"]),
            ("NOME_FABRICANTE", vec!["AIR TRACTOR INC", "CESSNA"]),
            ("MODELO", vec!["AT-402", "188B"]),
        ],
        2,
    );
    let df = clean_with_year(&raw, 2024).unwrap();

    let mut again = df.clone();
    classify_and_normalize(&mut again, &ag_aircraft_rules().unwrap()).unwrap();
    assert!(df.equals_missing(&again));
}

#[test]
fn later_rules_overwrite_earlier_normalization() {
    // Matches THRUSH (rule 2) by mfg and EMBRAER (rule 5) by model;
    // the last matching rule in declaration order wins.
    let raw = raw_table(
        &[
            ("MARCA", vec!["PT-AAA"]),
            ("NOME_FABRICANTE", vec!["THRUSH"]),
            ("MODELO", vec!["EMB 201"]),
        ],
        1,
    );
    let df = clean_with_year(&raw, 2024).unwrap();
    assert_eq!(str_at(&df, "mfg", 0), Some("EMBRAER".into()));
    assert_eq!(
        df.column("agaircraft").unwrap().bool().unwrap().get(0),
        Some(true)
    );
}

//! Tests for the customer-role reshape.

use polars::prelude::{DataFrame, NamedFrom, Series};

use rab_clean::{customer_view, customer_view_for, melt_by_customer};
use rab_model::CustomerRole;

fn cleaned_stub() -> DataFrame {
    let columns = vec![
        Series::new("tail_number".into(), vec!["PT-AAA", "PT-BBB"]).into(),
        Series::new("owner_customer_name".into(), vec!["ALFA", "BRAVO"]).into(),
        Series::new("owner_tax_id".into(), vec!["1", "2"]).into(),
        Series::new("owner_tax_id_type".into(), vec!["CNPJ", "CPF"]).into(),
        Series::new("owner_tax_id_print".into(), vec!["1", "2"]).into(),
        Series::new("owner_other".into(), vec!["", ""]).into(),
        Series::new("operator_customer_name".into(), vec!["CHARLIE", "DELTA"]).into(),
        Series::new("operator_tax_id".into(), vec!["3", "4"]).into(),
        Series::new("operator_tax_id_type".into(), vec!["CPF", "EMPTY"]).into(),
        Series::new("operator_tax_id_print".into(), vec!["3", "4"]).into(),
        Series::new("operator_other".into(), vec!["", ""]).into(),
        Series::new("model".into(), vec!["AT-502B", "EMB-201A"]).into(),
    ];
    DataFrame::new(columns).expect("build cleaned stub")
}

#[test]
fn view_projects_one_role() {
    let df = cleaned_stub();
    let view = customer_view(&df, CustomerRole::Owner).unwrap();

    assert_eq!(view.height(), 2);
    let names = view.column("customer_name").unwrap().str().unwrap();
    assert_eq!(names.get(0), Some("ALFA"));
    // The other role's columns are gone
    assert!(view.column("operator_customer_name").is_err());
    assert!(view.column("owner_customer_name").is_err());
    let roles = view.column("customer_type").unwrap().str().unwrap();
    assert_eq!(roles.get(1), Some("owner"));
    // Shared columns pass through
    assert!(view.column("model").is_ok());
}

#[test]
fn melt_doubles_rows_owner_first() {
    let df = cleaned_stub();
    let melted = melt_by_customer(&df).unwrap();

    assert_eq!(melted.height(), 4);
    let roles = melted.column("customer_type").unwrap().str().unwrap();
    assert_eq!(roles.get(0), Some("owner"));
    assert_eq!(roles.get(1), Some("owner"));
    assert_eq!(roles.get(2), Some("operator"));
    assert_eq!(roles.get(3), Some("operator"));
    let names = melted.column("customer_name").unwrap().str().unwrap();
    assert_eq!(names.get(0), Some("ALFA"));
    assert_eq!(names.get(2), Some("CHARLIE"));
}

#[test]
fn invalid_role_returns_input_unchanged() {
    let df = cleaned_stub();
    let result = customer_view_for(&df, "lessee").unwrap();
    assert!(df.equals(&result));
}

#[test]
fn valid_role_string_projects() {
    let df = cleaned_stub();
    let result = customer_view_for(&df, "operator").unwrap();
    assert!(result.column("customer_type").is_ok());
}

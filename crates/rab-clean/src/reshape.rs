//! Customer-centric reshaping of the cleaned table.
//!
//! Splits the owner and operator perspectives into independent rows: the
//! role's prefixed columns are projected onto a generic customer column
//! set plus a `customer_type` discriminator, and the other role's
//! columns are dropped. Concatenating both views doubles the row count.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::warn;

use rab_model::CustomerRole;

use crate::error::Result;

/// Role-prefixed columns that become generic customer columns.
pub const CUSTOMER_COLUMNS: &[&str] = &[
    "customer_name",
    "tax_id",
    "tax_id_type",
    "tax_id_print",
    "other",
];

/// Projects one role's columns onto the generic customer set.
pub fn customer_view(df: &DataFrame, role: CustomerRole) -> Result<DataFrame> {
    let mut view = df.clone();
    for column in CUSTOMER_COLUMNS {
        view.rename(&format!("{}_{column}", role.prefix()), (*column).into())?;
    }
    for column in CUSTOMER_COLUMNS {
        view = view.drop(&format!("{}_{column}", role.other().prefix()))?;
    }
    let height = view.height();
    view.with_column(Series::new(
        "customer_type".into(),
        vec![role.prefix(); height],
    ))?;
    Ok(view)
}

/// String-argument boundary around [`customer_view`].
///
/// An unknown role name is not fatal: the input table is returned
/// unchanged and a warning is logged.
pub fn customer_view_for(df: &DataFrame, role: &str) -> Result<DataFrame> {
    match role.parse::<CustomerRole>() {
        Ok(role) => customer_view(df, role),
        Err(error) => {
            warn!(%error, "returning table unchanged");
            Ok(df.clone())
        }
    }
}

/// One row per (aircraft, role) pair: owner rows then operator rows.
pub fn melt_by_customer(df: &DataFrame) -> Result<DataFrame> {
    let owner = customer_view(df, CustomerRole::Owner)?;
    let order = owner.get_column_names_owned();
    let operator = customer_view(df, CustomerRole::Operator)?.select(order)?;
    Ok(owner.vstack(&operator)?)
}

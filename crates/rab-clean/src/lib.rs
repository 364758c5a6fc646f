//! Cleaning pipeline for the Registro Aeronáutico Brasileiro.
//!
//! The pipeline is a single-pass, in-memory batch transform over a
//! polars `DataFrame` of raw string columns:
//!
//! - **taxid**: CNPJ/CPF checksum validation and formatting
//! - **coerce**: date reformatting, nullable-int and weight coercion, age
//! - **enrich**: per-role tax-id classification and the owner/operator flag
//! - **classify**: declarative agricultural-aircraft rules and engine types
//! - **pipeline**: schema check, rename, dedupe, and the fixed stage order
//! - **reshape**: customer-role melt for downstream presentation

pub mod classify;
pub mod coerce;
pub mod data_utils;
pub mod enrich;
pub mod error;
pub mod pipeline;
pub mod reshape;
pub mod taxid;

pub use classify::{Combinator, Rule, ag_aircraft_rules, classify_and_normalize, derive_engine_type};
pub use coerce::{coerce_int, coerce_weight, derive_age, is_past_due, reformat_dates};
pub use enrich::{enrich_tax_ids, owned_and_operated};
pub use error::{CleanError, Result};
pub use pipeline::{clean, clean_with_year, dedupe_by_tail_number, rename_columns};
pub use reshape::{customer_view, customer_view_for, melt_by_customer};

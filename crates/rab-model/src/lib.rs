//! Data model for the Registro Aeronáutico Brasileiro (RAB) cleaner.
//!
//! Holds the fixed raw header vocabularies, the canonical field schema,
//! and the enums shared across the cleaning pipeline.

pub mod ids;
pub mod schema;

pub use ids::{CustomerRole, ParseRoleError, TaxIdKind};
pub use schema::{
    COLUMN_MAP_CSV, COLUMN_MAP_JSON, DATE_COLUMNS, INT_COLUMNS, RawVocabulary, TAIL_NUMBER,
    WEIGHT_COLUMNS, canonical_columns,
};

//! Raw header vocabularies for the two RAB distribution formats.
//!
//! ANAC publishes the Registro Aeronáutico Brasileiro both as a semicolon
//! CSV and as a JSON endpoint. The two use different raw header names for
//! the same fields, so each vocabulary carries its own raw→canonical map.
//! Detection compares the incoming column set as a multiset against each
//! known vocabulary; anything else is a schema mismatch.

use std::collections::BTreeMap;

/// Raw→canonical column map for the CSV distribution.
pub const COLUMN_MAP_CSV: &[(&str, &str)] = &[
    ("MARCA", "tail_number"),
    ("PROPRIETARIO", "owner_customer_name"),
    ("OUTROS_PROPRIETARIOS", "owner_other"),
    ("UF_PROPRIETARIO", "owner_state"),
    ("CPF_CNPJ_PROPRIETARIO", "owner_tax_id"),
    ("OPERADOR", "operator_customer_name"),
    ("OUTROS_OPERADORES", "operator_other"),
    ("UF_OPERADOR", "operator_state"),
    ("CPF_CGC_OPERADOR", "operator_tax_id"),
    ("MATRICULA", "certifate_num"),
    ("NUM_SERIE", "serial"),
    ("CATEGORIA", "opertion_type"),
    ("TIPO_CERT", "pilot_license_type"),
    ("MODELO", "model"),
    ("NOME_FABRICANTE", "mfg"),
    ("CLASSE", "icao_type_desc"),
    ("PMD", "max_takeoff_wgt"),
    ("TIPO_ICAO", "icao_type_code"),
    ("TRIP_MIN", "min_crew_size"),
    ("PAX_MAX", "max_passengers"),
    ("ASSENTOS", "seats"),
    ("ANO_FABRICACAO", "year_mfg"),
    ("VAL_CAV", "exp_date_iam"),
    ("VAL_CA", "exp_date_ca"),
    ("DATA_CANC", "unk_dtcanc"),
    ("MOTIVO", "unk_dsmotivocanc"),
    ("CD_INTERDICAO", "unk_cdinterdicao"),
    ("MARCA_NAC_1", "unk_cdmarcanac1"),
    ("MARCA_NAC_2", "unk_cdmarcanac2"),
    ("MARCA_NAC_3", "unk_cdmarcanac3"),
    ("MARCA_EST", "foreign_tail_number"),
    ("DESCRICAO_DO_GRAVAME", "unk_dsgravame"),
];

/// Raw→canonical column map for the JSON endpoint.
pub const COLUMN_MAP_JSON: &[(&str, &str)] = &[
    ("MARCA", "tail_number"),
    ("PROPRIETARIO", "owner_customer_name"),
    ("OUTROSPROPRIETARIOS", "owner_other"),
    ("SGUF", "owner_state"),
    ("CPFCNPJ", "owner_tax_id"),
    ("NMOPERADOR", "operator_customer_name"),
    ("OUTROSOPERADORES", "operator_other"),
    ("UFOPERADOR", "operator_state"),
    ("CPFCGC", "operator_tax_id"),
    ("NRCERTMATRICULA", "certifate_num"),
    ("NRSERIE", "serial"),
    ("CDCATEGORIA", "opertion_type"),
    ("CDTIPO", "pilot_license_type"),
    ("DSMODELO", "model"),
    ("NMFABRICANTE", "mfg"),
    ("CDCLS", "icao_type_desc"),
    ("NRPMD", "max_takeoff_wgt"),
    ("CDTIPOICAO", "icao_type_code"),
    ("NRTRIPULACAOMIN", "min_crew_size"),
    ("NRPASSAGEIROSMAX", "max_passengers"),
    ("NRASSENTOS", "seats"),
    ("NRANOFABRICACAO", "year_mfg"),
    ("DTVALIDADEIAM", "exp_date_iam"),
    ("DTVALIDADECA", "exp_date_ca"),
    ("DTCANC", "unk_dtcanc"),
    ("DSMOTIVOCANC", "unk_dsmotivocanc"),
    ("CDINTERDICAO", "unk_cdinterdicao"),
    ("CDMARCANAC1", "unk_cdmarcanac1"),
    ("CDMARCANAC2", "unk_cdmarcanac2"),
    ("CDMARCANAC3", "unk_cdmarcanac3"),
    ("CDMARCAESTRANGEIRA", "foreign_tail_number"),
    ("DSGRAVAME", "unk_dsgravame"),
];

/// Unique key for deduplication: the Brazilian registration mark.
pub const TAIL_NUMBER: &str = "tail_number";

/// Columns holding DDMMYY[YY] dates in the raw data.
pub const DATE_COLUMNS: &[&str] = &["exp_date_ca", "exp_date_iam"];

/// Columns coerced to nullable integers.
pub const INT_COLUMNS: &[&str] = &["year_mfg", "min_crew_size", "max_passengers", "seats"];

/// Columns holding weights in kg, coerced to floats with a -1 sentinel.
pub const WEIGHT_COLUMNS: &[&str] = &["max_takeoff_wgt"];

/// The two raw header vocabularies the registry is published with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RawVocabulary {
    /// Semicolon CSV distribution (`dados_aeronaves.csv`).
    Csv,
    /// JSON endpoint (`dados_aeronaves.json`).
    Json,
}

impl RawVocabulary {
    pub const ALL: [Self; 2] = [Self::Csv, Self::Json];

    /// The raw→canonical column map for this vocabulary.
    pub fn column_map(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Csv => COLUMN_MAP_CSV,
            Self::Json => COLUMN_MAP_JSON,
        }
    }

    /// Expected raw column names, in map order.
    pub fn raw_columns(self) -> Vec<&'static str> {
        self.column_map().iter().map(|(raw, _)| *raw).collect()
    }

    /// Canonical column name for a raw header, if the header is known.
    pub fn canonical(self, raw: &str) -> Option<&'static str> {
        self.column_map()
            .iter()
            .find(|(r, _)| *r == raw)
            .map(|(_, canonical)| *canonical)
    }

    /// True iff `columns` is exactly this vocabulary as a multiset.
    ///
    /// Order-independent, duplicate-sensitive.
    pub fn matches<S: AsRef<str>>(self, columns: &[S]) -> bool {
        counts(columns.iter().map(AsRef::as_ref)) == counts(self.raw_columns().into_iter())
    }

    /// Detect which vocabulary a column set belongs to, if any.
    pub fn detect<S: AsRef<str>>(columns: &[S]) -> Option<Self> {
        Self::ALL.into_iter().find(|vocab| vocab.matches(columns))
    }
}

/// Canonical column names shared by both vocabularies, in CSV map order.
pub fn canonical_columns() -> Vec<&'static str> {
    COLUMN_MAP_CSV
        .iter()
        .map(|(_, canonical)| *canonical)
        .collect()
}

fn counts<'a>(names: impl Iterator<Item = &'a str>) -> BTreeMap<&'a str, usize> {
    let mut counter = BTreeMap::new();
    for name in names {
        *counter.entry(name).or_insert(0) += 1;
    }
    counter
}

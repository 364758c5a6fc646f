//! Tax-identifier classification and customer-role enums.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Classification of a Brazilian tax identifier on a registry record.
///
/// Every record carries one of these for each of the owner and operator
/// roles; the column is never null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TaxIdKind {
    /// Missing, or an all-zero placeholder.
    Empty,
    /// Present but passes neither checksum.
    Invalid,
    /// Valid 14-digit organizational id (CNPJ).
    Cnpj,
    /// Valid 11-digit individual id (CPF).
    Cpf,
}

impl TaxIdKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::Invalid => "INVALID",
            Self::Cnpj => "CNPJ",
            Self::Cpf => "CPF",
        }
    }
}

impl fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two customer perspectives a registry record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CustomerRole {
    Owner,
    Operator,
}

impl CustomerRole {
    pub const ALL: [Self; 2] = [Self::Owner, Self::Operator];

    /// Column-name prefix for this role (`owner_*` / `operator_*`).
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Operator => "operator",
        }
    }

    /// The opposite role.
    pub fn other(self) -> Self {
        match self {
            Self::Owner => Self::Operator,
            Self::Operator => Self::Owner,
        }
    }
}

impl fmt::Display for CustomerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("not a valid customer role: {0:?} (expected \"owner\" or \"operator\")")]
pub struct ParseRoleError(pub String);

impl FromStr for CustomerRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "operator" => Ok(Self::Operator),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

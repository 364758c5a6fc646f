//! Brazilian tax-id (CNPJ, CPF) validation and formatting.
//!
//! Both identifiers end in two check digits computed as weighted sums
//! mod 11: a result below 2 maps to check digit 0, anything else to
//! `11 - result`. The predicates are total over optional input and never
//! error; the formatters expect pre-validated digit counts and return a
//! typed error otherwise.

use crate::error::{CleanError, Result};

/// CNPJ check weights; the first check digit uses positions 1.., the
/// second the full vector.
const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Removes all non-digit characters. Empty input yields an empty string.
pub fn strip_non_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

fn digit_values(s: &str) -> Vec<u32> {
    s.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn mod11(sum: u32) -> u32 {
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Check digit `n` (1 or 2) for a 14-digit CNPJ.
fn check_digit_cnpj(digits: &[u32], n: usize) -> u32 {
    let take = 11 + n;
    let weights = &CNPJ_WEIGHTS[2 - n..];
    mod11(weights.iter().zip(&digits[..take]).map(|(w, d)| w * d).sum())
}

/// Check digit `n` (1 or 2) for an 11-digit CPF.
///
/// Weights descend from `take + 1` down to 2 over the first `take`
/// digits, where `take` is 9 for the first digit and 10 for the second.
fn check_digit_cpf(digits: &[u32], n: usize) -> u32 {
    let take = 8 + n;
    mod11(
        digits[..take]
            .iter()
            .enumerate()
            .map(|(i, d)| (take + 1 - i) as u32 * d)
            .sum(),
    )
}

/// Whether the value is a valid CNPJ (14-digit organizational id).
pub fn valid_cnpj(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    let digits = digit_values(&strip_non_digits(value));
    digits.len() == 14
        && check_digit_cnpj(&digits, 1) == digits[12]
        && check_digit_cnpj(&digits, 2) == digits[13]
}

/// Whether the value is a valid CPF (11-digit individual id).
pub fn valid_cpf(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    let digits = digit_values(&strip_non_digits(value));
    digits.len() == 11
        && check_digit_cpf(&digits, 1) == digits[9]
        && check_digit_cpf(&digits, 2) == digits[10]
}

/// Formats a CNPJ as `XX.XXX.XXX/XXXX-XX`.
pub fn format_cnpj(value: &str) -> Result<String> {
    let digits = strip_non_digits(value);
    if digits.len() != 14 {
        return Err(CleanError::TaxIdDigits {
            expected: 14,
            got: digits.len(),
            value: value.to_string(),
        });
    }
    Ok(format!(
        "{}.{}.{}/{}-{}",
        &digits[..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14]
    ))
}

/// Formats a CPF as `XXX.XXX.XXX-XX`.
pub fn format_cpf(value: &str) -> Result<String> {
    let digits = strip_non_digits(value);
    if digits.len() != 11 {
        return Err(CleanError::TaxIdDigits {
            expected: 11,
            got: digits.len(),
            value: value.to_string(),
        });
    }
    Ok(format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation() {
        assert_eq!(strip_non_digits("11.444.777/0001-61"), "11444777000161");
        assert_eq!(strip_non_digits("no digits"), "");
        assert_eq!(strip_non_digits(""), "");
    }

    #[test]
    fn valid_cnpj_fixture() {
        assert!(valid_cnpj(Some("11444777000161")));
        assert!(valid_cnpj(Some("11.444.777/0001-61")));
        // Last digit incremented
        assert!(!valid_cnpj(Some("11444777000162")));
    }

    #[test]
    fn cnpj_rejects_empty_and_short() {
        assert!(!valid_cnpj(None));
        assert!(!valid_cnpj(Some("")));
        assert!(!valid_cnpj(Some("1144477700016")));
        assert!(!valid_cnpj(Some("not a number")));
    }

    #[test]
    fn valid_cpf_fixture() {
        assert!(valid_cpf(Some("52998224725")));
        assert!(valid_cpf(Some("529.982.247-25")));
        assert!(!valid_cpf(Some("52998224726")));
    }

    #[test]
    fn cpf_rejects_empty_and_wrong_length() {
        assert!(!valid_cpf(None));
        assert!(!valid_cpf(Some("")));
        assert!(!valid_cpf(Some("5299822472")));
    }

    #[test]
    fn format_round_trips_digits() {
        let formatted = format_cnpj("11444777000161").unwrap();
        assert_eq!(formatted, "11.444.777/0001-61");
        assert_eq!(strip_non_digits(&formatted), "11444777000161");

        let formatted = format_cpf("52998224725").unwrap();
        assert_eq!(formatted, "529.982.247-25");
        assert_eq!(strip_non_digits(&formatted), "52998224725");
    }

    #[test]
    fn format_rejects_wrong_length() {
        assert!(matches!(
            format_cnpj("1234"),
            Err(CleanError::TaxIdDigits { expected: 14, .. })
        ));
        assert!(matches!(
            format_cpf("1234"),
            Err(CleanError::TaxIdDigits { expected: 11, .. })
        ));
    }
}

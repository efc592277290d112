use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use super::error::{Error, Result};

/// Shape of a plain number: optional sign, digits, optional decimal fraction.
/// No thousands separators, no letters. Note the empty string also matches.
static NUMERIC_LOOKING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d*(\.\d+)?$").expect("hard-coded pattern"));

/// One row of the batch file, fields kept exactly as read.
///
/// The raw strings are what the return file reproduces, so nothing is
/// normalized here. Rows may come in short; absent columns become empty
/// strings and fail later, at normalization or at the service boundary,
/// instead of faulting the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub agencia: String,
    pub conta: String,
    pub saldo: String,
    pub status: String,
}

impl AccountRecord {
    pub fn from_fields(fields: &csv::StringRecord) -> Self {
        let field = |index| fields.get(index).unwrap_or_default().to_owned();

        Self {
            agencia: field(0),
            conta: field(1),
            saldo: field(2),
            status: field(3),
        }
    }

    /// Whether the agencia column looks numeric. Rows failing this check are
    /// dropped from the batch output altogether.
    pub fn has_numeric_agencia(&self) -> bool {
        NUMERIC_LOOKING.is_match(&self.agencia)
    }

    /// Derive the values the Receita service takes: conta without its
    /// check-digit separator and saldo with the decimal comma swapped for a
    /// point, parsed as an amount. Deterministic, so a given row always
    /// normalizes to the same values.
    pub fn normalize(&self) -> Result<NormalizedRecord> {
        let saldo = self
            .saldo
            .replace(',', ".")
            .parse::<Decimal>()
            .map_err(|_| Error::UnparsableSaldo {
                saldo: self.saldo.clone(),
            })?;

        Ok(NormalizedRecord {
            agencia: self.agencia.clone(),
            conta: self.conta.replace('-', ""),
            saldo,
            status: self.status.clone(),
        })
    }
}

/// Submission-ready values derived from an [`AccountRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub agencia: String,
    pub conta: String,
    pub saldo: Decimal,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn record(fields: &[&str]) -> AccountRecord {
        AccountRecord::from_fields(&csv::StringRecord::from(fields.to_vec()))
    }

    #[test]
    fn numeric_agencias_pass_the_gate() {
        for agencia in ["0101", "3202", "+12", "-7", "12.5", ""] {
            assert!(
                record(&[agencia, "1-1", "1,00", "A"]).has_numeric_agencia(),
                "{agencia:?} should look numeric"
            );
        }
    }

    #[test]
    fn non_numeric_agencias_fail_the_gate() {
        for agencia in ["abc", "12a", "1 2", "12,5", "1.2.3"] {
            assert!(
                !record(&[agencia, "1-1", "1,00", "A"]).has_numeric_agencia(),
                "{agencia:?} should not look numeric"
            );
        }
    }

    #[test]
    fn normalization_strips_the_conta_separator_and_parses_saldo() {
        let normalized = record(&["0101", "12225-6", "100,00", "A"])
            .normalize()
            .unwrap();

        assert_eq!(
            normalized,
            NormalizedRecord {
                agencia: "0101".to_owned(),
                conta: "122256".to_owned(),
                saldo: dec!(100.00),
                status: "A".to_owned(),
            }
        );
    }

    #[test]
    fn negative_saldos_keep_their_sign() {
        let normalized = record(&["3202", "40011-1", "-35,12", "I"])
            .normalize()
            .unwrap();

        assert_eq!(normalized.saldo, dec!(-35.12));
    }

    #[test]
    fn normalization_is_deterministic() {
        let row = record(&["3202", "54001-2", "0,00", "P"]);

        assert_eq!(row.normalize().unwrap(), row.normalize().unwrap());
    }

    #[test]
    fn unparsable_saldo_is_an_error() {
        assert!(record(&["3202", "00321-2", "not-a-number", "B"])
            .normalize()
            .is_err());
    }

    #[test]
    fn short_rows_pad_with_empty_fields_and_fail_normalization() {
        let row = record(&["3202"]);

        assert_eq!(row.conta, "");
        assert_eq!(row.status, "");
        assert!(row.normalize().is_err());
    }
}

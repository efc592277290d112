use serde::Serialize;

use super::record::AccountRecord;

/// One row of the return file: the original raw columns plus the submission
/// outcome, serialized in declaration order.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ReturnRow {
    pub agencia: String,
    pub conta: String,
    pub saldo: String,
    pub status: String,
    pub retorno: bool,
}

impl ReturnRow {
    pub fn annotate(record: AccountRecord, retorno: bool) -> Self {
        Self {
            agencia: record.agencia,
            conta: record.conta,
            saldo: record.saldo,
            status: record.status,
            retorno,
        }
    }
}

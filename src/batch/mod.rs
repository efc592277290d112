use std::io::Read;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::{
    domain::{record::AccountRecord, retorno::ReturnRow},
    error::Result,
    receita::ReceitaService,
};

/// What happened to the batch, for the operator log line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub skipped: usize,
}

/// Drive the whole batch: each row is fully resolved, parsed, submitted and
/// annotated, before the next one starts, and the return rows come out in
/// input order.
///
/// Rows whose agencia does not look numeric are dropped without a return
/// row. Every other row gets exactly one submission attempt; normalization
/// failures and service faults are collapsed into a `false` outcome for that
/// row and never abort the batch. Only reading the source itself can fail
/// here.
pub fn process(
    reader: impl Read,
    service: &impl ReceitaService,
) -> Result<(Vec<ReturnRow>, BatchSummary)> {
    let records = crate::csv::read(reader)?;

    let mut rows = Vec::with_capacity(records.len());
    let mut skipped = 0;

    for (index, fields) in records.iter().enumerate() {
        let record = AccountRecord::from_fields(fields);

        if !record.has_numeric_agencia() {
            skipped += 1;
            debug!(
                line = index + 1,
                agencia = %record.agencia,
                "dropping row with non-numeric agencia"
            );
            continue;
        }

        let retorno = submit(&record, service, index + 1);
        rows.push(ReturnRow::annotate(record, retorno));
    }

    let outcomes = rows.iter().counts_by(|row| row.retorno);
    let summary = BatchSummary {
        accepted: outcomes.get(&true).copied().unwrap_or_default(),
        rejected: outcomes.get(&false).copied().unwrap_or_default(),
        skipped,
    };

    Ok((rows, summary))
}

/// One submission attempt. Anything going wrong on the way to the service,
/// or inside it, is a `false` outcome for this row.
fn submit(record: &AccountRecord, service: &impl ReceitaService, line: usize) -> bool {
    let normalized = match record.normalize() {
        Ok(normalized) => normalized,
        Err(err) => {
            warn!(line, %err, "could not normalize row");
            return false;
        }
    };

    match service.atualizar_conta(
        &normalized.agencia,
        &normalized.conta,
        normalized.saldo,
        &normalized.status,
    ) {
        Ok(accepted) => accepted,
        Err(err) => {
            warn!(line, %err, "submission failed");
            false
        }
    }
}

use std::io::{Read, Write};

use csv::{ReaderBuilder, Result, StringRecord, WriterBuilder};

use crate::domain::retorno::ReturnRow;

/// Header of the return file. The original layout carries a trailing
/// delimiter, hence the empty last column.
const RETURN_HEADER: [&str; 6] = ["agencia", "conta", "saldo", "status", "retorno", ""];

/// Read the raw rows of a batch file.
///
/// The batch format has no header, uses `;` as its delimiter and makes no
/// promise about column counts, so rows are collected as raw records and
/// validated one by one downstream rather than deserialized here.
pub fn read(reader: impl Read) -> Result<Vec<StringRecord>> {
    ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
        .into_records()
        .collect()
}

/// Write the return file: header first, then one row per annotated record in
/// batch order.
pub fn write(rows: &[ReturnRow], writer: impl Write) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    writer.write_record(RETURN_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read the batch file")]
    FileError(#[from] std::io::Error),
    #[error("could not read CSV rows from the batch file")]
    CsvError(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

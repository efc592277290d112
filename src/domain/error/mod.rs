use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("saldo {saldo:?} is not a decimal amount")]
    UnparsableSaldo { saldo: String },
}

pub type Result<T> = std::result::Result<T, Error>;

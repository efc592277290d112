use std::{thread, time::Duration};

use rand::Rng;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("agencia and conta are required by the Receita service")]
    InvalidRecord,
}

pub type Result<T> = std::result::Result<T, Error>;

/// External registration capability, one synchronous call per record.
///
/// `Ok(true)` means the record was accepted, `Ok(false)` that it was
/// rejected. Faults come back as `Err`; the batch treats them the same way
/// as a rejection. Implementations must not panic for expected conditions,
/// which keeps a real network client swappable in without touching the
/// batch driver.
pub trait ReceitaService {
    fn atualizar_conta(
        &self,
        agencia: &str,
        conta: &str,
        saldo: Decimal,
        status: &str,
    ) -> Result<bool>;
}

/// Stand-in for the real Receita endpoint: answers after a short random
/// delay and accepts most records.
#[derive(Debug)]
pub struct SimulatedReceita;

impl ReceitaService for SimulatedReceita {
    fn atualizar_conta(
        &self,
        agencia: &str,
        conta: &str,
        _saldo: Decimal,
        _status: &str,
    ) -> Result<bool> {
        if agencia.is_empty() || conta.is_empty() {
            return Err(Error::InvalidRecord);
        }

        let mut rng = rand::thread_rng();
        thread::sleep(Duration::from_millis(rng.gen_range(10..=50)));

        Ok(rng.gen_bool(0.9))
    }
}

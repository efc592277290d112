mod batch;
mod csv;
mod domain;
mod error;
mod receita;
mod schedule;

use std::{env, fs::File, io::BufWriter, path::Path};

use chrono::Local;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{error::Result, receita::SimulatedReceita};

/// The return file lands in the directory the batch was started from.
const RETURN_FILE: &str = "retornoSincronia.csv";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let now = Local::now();
    if !schedule::before_cutoff(&now) {
        println!("The synchronization can only start before 10:00 in the morning.");
        return Ok(());
    }

    let Some(path) = env::args().nth(1) else {
        println!("Pass the path of the batch file to import:");
        println!("    receita-sync <input-file>");
        return Ok(());
    };

    if !schedule::is_business_day(&now) {
        println!("The synchronization only runs on business days, shutting down.");
        return Ok(());
    }

    if !Path::new(&path).exists() {
        println!("The batch file {path} was not found.");
        return Ok(());
    }

    println!("Starting the synchronization, please wait...");

    let source = File::open(&path)?;
    let (rows, summary) = batch::process(source, &SimulatedReceita)?;

    // The return file only comes into existence once the whole batch has
    // been resolved; an abort mid-batch leaves nothing behind.
    csv::write(&rows, BufWriter::new(File::create(RETURN_FILE)?))?;

    info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        skipped = summary.skipped,
        "batch finished"
    );

    println!("The file {RETURN_FILE} was created in the working directory.");
    println!("Synchronization finished.");

    Ok(())
}

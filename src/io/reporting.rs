// src/io/reporting.rs

use crate::simulation::engine::HistoryRecord;
use std::error::Error;
use std::path::Path;

/// Writes the booking history to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/run_1.csv").
/// * `data` - The per-request records from the booking simulation.
pub fn write_simulation_log(file_path: &str, data: &[HistoryRecord]) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);

    let mut wtr = csv::Writer::from_path(path)?;

    for record in data {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    println!(
        "Successfully exported {} rows to '{}'",
        data.len(),
        file_path
    );
    Ok(())
}

use epd_core::error::EpdError;
use epd_core::export::{to_csv, validate_record};
use epd_core::model::EpdRecord;
use std::path::PathBuf;

pub fn run(catalog: PathBuf, output_file: Option<PathBuf>) -> Result<(), EpdError> {
    let json_bytes = std::fs::read(&catalog)?;
    let records: Vec<EpdRecord> = serde_json::from_slice(&json_bytes)?;

    for record in &records {
        validate_record(record)?;
    }

    let csv = to_csv(&records)?;

    match output_file {
        Some(path) => {
            std::fs::write(&path, csv)?;
            eprintln!("Exported {} record(s) to {}", records.len(), path.display());
        }
        None => {
            println!("{csv}");
        }
    }

    Ok(())
}

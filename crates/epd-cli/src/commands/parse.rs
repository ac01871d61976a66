use epd_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), epd_core::error::EpdError> {
    let is_pdf = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    let parsed = if is_pdf {
        let pdf_bytes = std::fs::read(&input_file)?;
        let extractor = PdftotextExtractor::new();
        epd_core::parse_pdf(&pdf_bytes, &extractor)?
    } else {
        // Anything else is treated as already-extracted text.
        let bytes = std::fs::read(&input_file)?;
        let text = String::from_utf8_lossy(&bytes);
        epd_core::parse_epd(&text)
    };

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&parsed)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} impact value(s), written to {}",
                parsed.impacts.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&parsed)?,
            _ => println!("{}", output::table::format_parsed(&parsed)),
        },
    }

    Ok(())
}

pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;

pub use parsing::parse_epd;

use error::EpdError;
use extraction::PdfExtractor;
use model::ParsedEpd;

/// Main API entry point: extract a structured EPD record from a PDF.
///
/// Text extraction is the only fallible step; once text is available the
/// heuristics are total and every field is independently optional. The
/// caller decides whether a sparse result is acceptable before persisting.
pub fn parse_pdf(pdf_bytes: &[u8], extractor: &dyn PdfExtractor) -> Result<ParsedEpd, EpdError> {
    let text = extractor.extract_text(pdf_bytes)?;
    Ok(parse_epd(&text))
}

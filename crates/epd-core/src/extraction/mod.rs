pub mod pdftotext;

use crate::error::EpdError;

/// Trait for PDF text extraction backends.
///
/// The extraction heuristics only need the document's full text; encoding
/// and layout fidelity are the backend's concern.
pub trait PdfExtractor: Send + Sync {
    /// Extract the full text content from PDF bytes.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, EpdError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

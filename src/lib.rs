//! Page-range PDF text extraction
//!
//! This library opens a PDF document, extracts the plain text of an optional
//! page range, and renders the result as a sequence of page blocks. All PDF
//! decoding (cross-reference tables, stream filters, glyph mappings) is
//! delegated to `lopdf`.

mod error;
mod extract;
mod output;
mod range;

// Re-export error type
pub use error::ExtractError;

// Re-export extraction API
pub use extract::{PdfExtractor, PdfExtractorBuilder, from_bytes, from_path, from_reader};

// Re-export public types
pub use output::{ExtractedText, PageText};
pub use range::PageRange;

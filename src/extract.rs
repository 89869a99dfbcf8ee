use std::io::Read;
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::error::ExtractError;
use crate::output::{ExtractedText, PageText};
use crate::range::PageRange;

/// Builder for configuring PDF extraction options.
///
/// # Examples
///
/// ```no_run
/// use pagetext::{PageRange, PdfExtractor};
///
/// // Only pages 1-10 of an encrypted document
/// let output = PdfExtractor::builder()
///     .password("secret")
///     .page_range(PageRange::new(1, 10))
///     .build()
///     .from_path("encrypted.pdf")?;
/// # Ok::<(), pagetext::ExtractError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfExtractorBuilder {
    password: Option<String>,
    page_range: Option<PageRange>,
}

impl PdfExtractorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the password for encrypted PDFs.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Restrict extraction to a 1-based inclusive page range. Bounds outside
    /// the document are clamped, never rejected. Without a range the whole
    /// document is extracted.
    pub fn page_range(mut self, range: PageRange) -> Self {
        self.page_range = Some(range);
        self
    }

    /// Build the extractor configuration.
    pub fn build(self) -> PdfExtractor {
        PdfExtractor {
            password: self.password,
            page_range: self.page_range,
        }
    }
}

/// PDF page-text extractor with configuration options.
///
/// # Examples
///
/// ```no_run
/// use pagetext::PdfExtractor;
///
/// // Simple extraction of the full document
/// let output = PdfExtractor::default().from_path("file.pdf")?;
/// println!("{}", output);
///
/// // Access the per-page text
/// for page in output.pages() {
///     println!("page {}: {} bytes", page.number, page.text.len());
/// }
/// # Ok::<(), pagetext::ExtractError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    password: Option<String>,
    page_range: Option<PageRange>,
}

impl PdfExtractor {
    /// Create a builder for configuring extraction options.
    pub fn builder() -> PdfExtractorBuilder {
        PdfExtractorBuilder::new()
    }

    /// Extract text from a PDF file at the given path.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<ExtractedText, ExtractError> {
        let mut doc = Document::load(path)?;
        self.extract_from_document(&mut doc)
    }

    /// Extract text from a PDF in memory.
    pub fn from_bytes(self, bytes: &[u8]) -> Result<ExtractedText, ExtractError> {
        let mut doc = Document::load_mem(bytes)?;
        self.extract_from_document(&mut doc)
    }

    /// Extract text from a PDF reader.
    pub fn from_reader<R: Read>(self, mut reader: R) -> Result<ExtractedText, ExtractError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.from_bytes(&bytes)
    }

    fn extract_from_document(self, doc: &mut Document) -> Result<ExtractedText, ExtractError> {
        if doc.is_encrypted() {
            if let Some(password) = &self.password {
                doc.decrypt(password)?;
            } else {
                doc.decrypt("")?;
            }
        }

        let total_pages = doc.get_pages().len() as u32;
        let indices = match self.page_range {
            Some(range) => range.resolve(total_pages),
            None => PageRange::full(total_pages),
        };
        debug!(
            "extracting pages {}..{} of {}",
            indices.start, indices.end, total_pages
        );

        let mut pages = Vec::new();
        for index in indices {
            let page_number = index + 1;
            let text = doc.extract_text(&[page_number])?;
            // Pages without a text layer (e.g. scans) contribute nothing,
            // not even a header.
            if text.trim().is_empty() {
                debug!("page {} has no extractable text, skipping", page_number);
                continue;
            }
            pages.push(PageText {
                number: page_number,
                text,
            });
        }

        Ok(ExtractedText::new(pages, total_pages))
    }
}

/// Extract text from a PDF file at the given path using default settings.
///
/// This is a convenience function equivalent to `PdfExtractor::default().from_path(path)`.
///
/// # Examples
///
/// ```no_run
/// let output = pagetext::from_path("file.pdf")?;
/// println!("{}", output);
/// # Ok::<(), pagetext::ExtractError>(())
/// ```
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ExtractedText, ExtractError> {
    PdfExtractor::default().from_path(path)
}

/// Extract text from a PDF in memory using default settings.
///
/// This is a convenience function equivalent to `PdfExtractor::default().from_bytes(bytes)`.
///
/// # Examples
///
/// ```no_run
/// let bytes = std::fs::read("file.pdf")?;
/// let output = pagetext::from_bytes(&bytes)?;
/// println!("{}", output);
/// # Ok::<(), pagetext::ExtractError>(())
/// ```
pub fn from_bytes(bytes: &[u8]) -> Result<ExtractedText, ExtractError> {
    PdfExtractor::default().from_bytes(bytes)
}

/// Extract text from a PDF reader using default settings.
///
/// This is a convenience function equivalent to `PdfExtractor::default().from_reader(reader)`.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
///
/// let file = File::open("file.pdf")?;
/// let output = pagetext::from_reader(file)?;
/// println!("{}", output);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn from_reader<R: Read>(reader: R) -> Result<ExtractedText, ExtractError> {
    PdfExtractor::default().from_reader(reader)
}

use std::fmt;

// Width of the `=` rule that closes every page block. The header and
// separator tokens are kept byte-compatible with the original courseware
// tooling that consumes the extracted files.
const SEPARATOR_WIDTH: usize = 50;

/// Text recovered from a single page.
#[derive(Debug, Clone)]
pub struct PageText {
    /// 1-based page number within the source document.
    pub number: u32,
    /// Plain text of the page as returned by the PDF collaborator.
    pub text: String,
}

/// Output of a page-range extraction.
///
/// Holds one [`PageText`] per page that yielded non-empty text, in ascending
/// page order. The `Display` impl renders the page blocks: a header naming
/// the page, the page's text, and a fixed-width separator rule.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pages: Vec<PageText>,
    total_pages: u32,
}

impl ExtractedText {
    pub(crate) fn new(pages: Vec<PageText>, total_pages: u32) -> Self {
        ExtractedText { pages, total_pages }
    }

    /// Get a reference to the extracted pages.
    pub fn pages(&self) -> &[PageText] {
        &self.pages
    }

    /// Consume self and return the extracted pages.
    pub fn into_pages(self) -> Vec<PageText> {
        self.pages
    }

    /// Number of pages in the source document, regardless of how many were
    /// requested or yielded text.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// True when no page in the requested range produced any text.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for page in &self.pages {
            write!(f, "\n=== 第 {} 页 ===\n", page.number)?;
            write!(f, "{}", page.text)?;
            write!(f, "\n{}\n", "=".repeat(SEPARATOR_WIDTH))?;
        }
        Ok(())
    }
}

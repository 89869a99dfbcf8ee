use std::ops::Range;

/// A 1-based inclusive pair of page bounds used to restrict extraction.
///
/// Bounds outside the document are never an error: resolution clamps them
/// into `[1, total_pages]`, and a range whose start lies past its end simply
/// resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u32,
    end: u32,
}

impl PageRange {
    /// Create a range covering pages `start..=end` (1-based, inclusive).
    pub fn new(start: u32, end: u32) -> Self {
        PageRange { start, end }
    }

    /// First requested page (1-based, inclusive).
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last requested page (1-based, inclusive).
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Clamp the requested bounds against the document's page count,
    /// yielding zero-based half-open indices. A degenerate range resolves
    /// to an empty iteration rather than an error.
    pub(crate) fn resolve(self, total_pages: u32) -> Range<u32> {
        let start = self.start.saturating_sub(1).min(total_pages);
        let end = self.end.min(total_pages).max(start);
        start..end
    }

    /// The resolution of "no range given": every page of the document.
    pub(crate) fn full(total_pages: u32) -> Range<u32> {
        0..total_pages
    }
}

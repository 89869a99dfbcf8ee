use std::fmt::Formatter;

#[derive(Debug)]
pub enum ExtractError {
    IoError(std::io::Error),
    PdfError(lopdf::Error),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ExtractError::IoError(e) => write!(f, "IO error: {}", e),
            ExtractError::PdfError(e) => write!(f, "PDF error: {}", e),
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<std::io::Error> for ExtractError {
    fn from(e: std::io::Error) -> Self {
        ExtractError::IoError(e)
    }
}

impl From<lopdf::Error> for ExtractError {
    fn from(e: lopdf::Error) -> Self {
        ExtractError::PdfError(e)
    }
}

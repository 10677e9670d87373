//! Format Extractor — turns a saved resume file into one plain-text string.

pub mod doc;
pub mod docx;
pub mod pdf;

use std::path::Path;
use thiserror::Error;

/// Supported resume formats, keyed on the final dot-segment of the
/// filename, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Doc,
}

impl FileKind {
    pub fn from_filename(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(FileKind::Pdf),
            "docx" => Some(FileKind::Docx),
            "doc" => Some(FileKind::Doc),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("DOCX parse failed: {0}")]
    Docx(String),

    #[error("DOC conversion failed: {0}")]
    Conversion(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Extracts the full plain text of a saved upload. The whole document is
/// materialized in memory; no page or paragraph limits.
///
/// DOC inputs are first converted to a sibling `.docx` (written beside
/// the upload), then read through the DOCX path.
pub fn extract_text(path: &Path, kind: FileKind, soffice_bin: &str) -> Result<String, ExtractError> {
    match kind {
        FileKind::Pdf => pdf::extract(path),
        FileKind::Docx => docx::extract(path),
        FileKind::Doc => {
            let docx_path = doc::convert_to_docx(path, soffice_bin)?;
            docx::extract(&docx_path)
        }
    }
}

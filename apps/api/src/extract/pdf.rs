use std::path::Path;

use super::ExtractError;

/// Full document text, pages concatenated in page order.
pub fn extract(path: &Path) -> Result<String, ExtractError> {
    Ok(pdf_extract::extract_text(path)?)
}

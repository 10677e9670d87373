use std::fs;
use std::path::Path;

use super::ExtractError;

/// Sentence inserted by the trial build of a commercial DOC converter.
/// Stripped verbatim; everything else is preserved.
const WATERMARK: &str =
    "Evaluation Warning: The document was created with Spire.Doc for Python.";

/// Every paragraph's text joined by newline, in paragraph order.
pub fn extract(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path)?;
    extract_from_bytes(&bytes)
}

pub fn extract_from_bytes(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| ExtractError::Docx(format!("DOCX parse error: {e}")))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            text.push_str(&paragraph_text(paragraph));
            text.push('\n');
        }
    }

    Ok(text.replace(WATERMARK, ""))
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut content = String::new();
    for para_child in &paragraph.children {
        if let docx_rs::ParagraphChild::Run(run) = para_child {
            for run_child in &run.children {
                if let docx_rs::RunChild::Text(text) = run_child {
                    content.push_str(&text.text);
                }
            }
        }
    }
    content
}

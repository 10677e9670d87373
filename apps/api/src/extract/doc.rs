use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

use super::ExtractError;

/// Converts a legacy `.doc` upload to a sibling `.docx` by invoking the
/// configured converter binary (LibreOffice in headless mode). Returns
/// the converted file's path. Any failure here is surfaced as
/// `ExtractError::Conversion` so the batch collector can treat it as a
/// soft, per-file failure rather than a hard error.
pub fn convert_to_docx(path: &Path, soffice_bin: &str) -> Result<PathBuf, ExtractError> {
    let outdir = path.parent().unwrap_or_else(|| Path::new("."));

    let output = Command::new(soffice_bin)
        .arg("--headless")
        .arg("--convert-to")
        .arg("docx")
        .arg("--outdir")
        .arg(outdir)
        .arg(path)
        .output()
        .map_err(|e| ExtractError::Conversion(format!("failed to run {soffice_bin}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExtractError::Conversion(format!(
            "{soffice_bin} exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let docx_path = path.with_extension("docx");
    if !docx_path.exists() {
        return Err(ExtractError::Conversion(format!(
            "converter reported success but {} was not written",
            docx_path.display()
        )));
    }

    info!("Converted {} to {}", path.display(), docx_path.display());
    Ok(docx_path)
}

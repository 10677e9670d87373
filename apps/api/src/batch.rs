//! Batch Collector — validates, persists, and processes one upload batch.

use std::fs;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::extract::{self, FileKind};
use crate::fields::{FieldExtractor, ResumeRecord};

/// One uploaded file: the client-supplied filename plus body bytes.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Bytes,
}

/// Per-file processing outcome. Extraction and conversion failures are
/// soft: the file is logged and skipped, the batch continues. Only
/// batch-level validation produces an `AppError`.
#[derive(Debug)]
pub enum FileOutcome {
    Parsed(ResumeRecord),
    NoEmail,
    Unreadable { reason: String },
}

/// Processes an upload batch and returns the records to report, in
/// collection order (first-detected-email-first).
///
/// The whole batch is rejected up front when it is empty or contains a
/// file outside the allowed extensions; nothing is persisted in that
/// case. After validation each file is saved under a sanitized name and
/// run through extraction independently of its siblings.
pub fn collect_resumes(
    files: &[UploadedFile],
    fields: &FieldExtractor,
    upload_dir: &Path,
    soffice_bin: &str,
) -> Result<Vec<ResumeRecord>, AppError> {
    if files.is_empty() {
        return Err(AppError::NoFiles);
    }

    let mut batch = Vec::with_capacity(files.len());
    for file in files {
        match FileKind::from_filename(&file.filename) {
            Some(kind) => batch.push((kind, file)),
            None => return Err(AppError::UnsupportedFormat(file.filename.clone())),
        }
    }

    fs::create_dir_all(upload_dir)?;

    let mut records = Vec::new();
    for (kind, file) in batch {
        let path = save_upload(upload_dir, &file.filename, &file.bytes)?;
        match process_file(&path, kind, fields, soffice_bin) {
            FileOutcome::Parsed(record) => records.push(record),
            FileOutcome::NoEmail => {
                debug!("No email detected in {}, dropping", file.filename);
            }
            FileOutcome::Unreadable { reason } => {
                warn!("Skipping {}: {reason}", file.filename);
            }
        }
    }

    Ok(records)
}

/// Runs Format Extractor then Field Extractor for one saved file.
pub fn process_file(
    path: &Path,
    kind: FileKind,
    fields: &FieldExtractor,
    soffice_bin: &str,
) -> FileOutcome {
    let text = match extract::extract_text(path, kind, soffice_bin) {
        Ok(text) => text,
        Err(e) => {
            return FileOutcome::Unreadable {
                reason: e.to_string(),
            }
        }
    };

    match fields.email(&text) {
        Some(email) => FileOutcome::Parsed(ResumeRecord {
            email,
            phone: fields.phone(&text),
            text: text.trim().to_string(),
        }),
        None => FileOutcome::NoEmail,
    }
}

fn save_upload(upload_dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, AppError> {
    let path = upload_dir.join(sanitize_filename(filename));
    fs::write(&path, bytes)?;
    Ok(path)
}

/// Keeps only the final path segment and replaces anything outside
/// `[A-Za-z0-9._-]` so a crafted filename cannot escape the upload area.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('.');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    const NO_CONVERTER: &str = "/nonexistent/soffice-binary";

    fn extractor() -> FieldExtractor {
        FieldExtractor::new().unwrap()
    }

    fn docx_bytes(paragraphs: &[&str]) -> Bytes {
        let mut docx = Docx::new();
        for p in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*p)));
        }
        let mut buffer = Cursor::new(Vec::new());
        docx.build().pack(&mut buffer).unwrap();
        Bytes::from(buffer.into_inner())
    }

    fn upload(filename: &str, bytes: Bytes) -> UploadedFile {
        UploadedFile {
            filename: filename.to_string(),
            bytes,
        }
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = collect_resumes(&[], &extractor(), dir.path(), NO_CONVERTER).unwrap_err();
        assert!(matches!(err, AppError::NoFiles));
    }

    #[test]
    fn test_disallowed_extension_rejects_whole_batch() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            upload("ok.docx", docx_bytes(&["jane@example.com"])),
            upload("notes.txt", Bytes::from_static(b"plain text")),
        ];
        let err = collect_resumes(&files, &extractor(), dir.path(), NO_CONVERTER).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(name) if name == "notes.txt"));
        // Rejection happens before anything is persisted.
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_single_docx_with_email_yields_one_record() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![upload(
            "jane.docx",
            docx_bytes(&["Jane Doe", "jane.doe@example.com", "(415) 555-1234"]),
        )];
        let records = collect_resumes(&files, &extractor(), dir.path(), NO_CONVERTER).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "jane.doe@example.com");
        assert_eq!(records[0].phone.as_deref(), Some("(415) 555-1234"));
        assert_eq!(
            records[0].text,
            "Jane Doe\njane.doe@example.com\n(415) 555-1234"
        );
    }

    #[test]
    fn test_record_text_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![upload("cv.docx", docx_bytes(&["", "a@b.cd", ""]))];
        let records = collect_resumes(&files, &extractor(), dir.path(), NO_CONVERTER).unwrap();
        assert_eq!(records[0].text, "a@b.cd");
    }

    #[test]
    fn test_no_email_record_is_silently_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            upload("anon.docx", docx_bytes(&["No contact details here"])),
            upload("jane.docx", docx_bytes(&["jane@example.com"])),
        ];
        let records = collect_resumes(&files, &extractor(), dir.path(), NO_CONVERTER).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "jane@example.com");
    }

    #[test]
    fn test_unreadable_file_is_isolated_from_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            upload("corrupt.docx", Bytes::from_static(b"not a zip archive")),
            upload("jane.docx", docx_bytes(&["jane@example.com"])),
        ];
        let records = collect_resumes(&files, &extractor(), dir.path(), NO_CONVERTER).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "jane@example.com");
    }

    #[test]
    fn test_failed_doc_conversion_is_a_soft_failure() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            upload("legacy.doc", Bytes::from_static(b"legacy doc bytes")),
            upload("jane.docx", docx_bytes(&["jane@example.com"])),
        ];
        let records = collect_resumes(&files, &extractor(), dir.path(), NO_CONVERTER).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "jane@example.com");
    }

    #[test]
    fn test_records_keep_collection_order() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            upload("b.docx", docx_bytes(&["second@example.com"])),
            upload("a.docx", docx_bytes(&["first@example.com"])),
        ];
        let records = collect_resumes(&files, &extractor(), dir.path(), NO_CONVERTER).unwrap();
        let emails: Vec<_> = records.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(emails, ["second@example.com", "first@example.com"]);
    }

    #[test]
    fn test_uploads_are_persisted_under_sanitized_names() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![upload(
            "../jane doe.docx",
            docx_bytes(&["jane@example.com"]),
        )];
        collect_resumes(&files, &extractor(), dir.path(), NO_CONVERTER).unwrap();
        assert!(dir.path().join("jane_doe.docx").exists());
    }

    #[test]
    fn test_sanitize_strips_path_segments() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename(r"C:\evil\cv.docx"), "cv.docx");
    }

    #[test]
    fn test_sanitize_replaces_special_characters() {
        assert_eq!(sanitize_filename("my resume (final).pdf"), "my_resume__final_.pdf");
    }

    #[test]
    fn test_sanitize_never_returns_empty_or_dotfiles() {
        assert_eq!(sanitize_filename(".."), "upload");
        assert_eq!(sanitize_filename(""), "upload");
    }
}

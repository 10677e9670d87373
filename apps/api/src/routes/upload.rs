use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tracing::info;

use crate::batch::{collect_resumes, UploadedFile};
use crate::errors::AppError;
use crate::report::write_report;
use crate::state::AppState;

/// Multipart field name carrying the resume files.
const FILES_FIELD: &str = "files[]";
const REPORT_FILENAME: &str = "parsed_resumes.xlsx";
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// GET /
/// Renders the empty upload form.
pub async fn form_handler() -> Html<String> {
    Html(form_page(None))
}

/// POST /
/// Accepts a multipart batch under `files[]`, runs the extraction
/// pipeline synchronously within the request, and returns the report
/// spreadsheet as an attachment download. Rejections re-render the form.
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }
        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            // Browsers submit one empty part when no file was selected.
            _ => continue,
        };
        let bytes = field.bytes().await?;
        files.push(UploadedFile { filename, bytes });
    }

    let records = collect_resumes(
        &files,
        &state.fields,
        &state.config.upload_dir,
        &state.config.soffice_bin,
    )?;
    info!(
        "Parsed {} resume(s) from {} upload(s)",
        records.len(),
        files.len()
    );

    let report = write_report(&records, &state.config.output_path)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ],
        report,
    )
        .into_response())
}

/// Renders the upload form, optionally with an error banner.
pub fn form_page(error: Option<&str>) -> String {
    let banner = error
        .map(|msg| format!("<p class=\"error\">{}</p>\n", escape_html(msg)))
        .unwrap_or_default();
    format!(
        r#"<!doctype html>
<html>
<head><title>Resume Parser</title></head>
<body>
<h1>Upload resumes</h1>
{banner}<form method="post" enctype="multipart/form-data">
  <input type="file" name="files[]" multiple accept=".pdf,.docx,.doc">
  <button type="submit">Parse</button>
</form>
</body>
</html>
"#
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

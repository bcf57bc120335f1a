//! GET /download/code — hand a snippet back as a file attachment.

use axum::{
    extract::Query,
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};

use crate::{
    error_handler::{AppError, AppResult},
    routes::download::download_request::DownloadQuery,
};

/// Handler: GET /download/code?code=...&filename=snippet.py
///
/// The snippet is echoed back verbatim as `application/octet-stream` with an
/// attachment disposition; nothing is written to disk.
pub async fn download_code(Query(query): Query<DownloadQuery>) -> AppResult<Response> {
    let disposition = content_disposition(&query.filename)
        .ok_or_else(|| AppError::BadRequest("invalid filename".into()))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/octet-stream"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        query.code,
    )
        .into_response())
}

/// Attachment header for `filename`. Quotes and control characters are
/// rejected rather than escaped.
fn content_disposition(filename: &str) -> Option<HeaderValue> {
    if filename.contains('"') {
        return None;
    }
    HeaderValue::from_str(&format!("attachment; filename=\"{filename}\"")).ok()
}

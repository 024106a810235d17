//! Axum route handler for PDF export.

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::export::{export_filename, ExportConfig, ExportError};
use crate::layout::document::Block;
use crate::layout::handlers::{current_document, ThemeQuery};
use crate::layout::{render_html, RenderMode};
use crate::state::AppState;
use crate::studio::Activity;

/// POST /api/v1/book/export?theme=
///
/// Returns the PDF as an attachment. When no exporter is installed, serves the
/// print-ready HTML page instead so the reader can print to PDF from the browser.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> Result<Response, AppError> {
    let _busy = state
        .studio
        .try_begin(Activity::Export)
        .ok_or(AppError::Busy("export"))?;

    let doc = current_document(&state, &query).await?;
    let html = render_html(&doc, RenderMode::Preview);
    let filename = doc
        .blocks
        .first()
        .and_then(|b| match b {
            Block::Cover(c) => Some(export_filename(&c.title)),
            _ => None,
        })
        .unwrap_or_else(|| export_filename(""));

    match state.exporter.export(&html, &ExportConfig::default()).await {
        Ok(pdf) => {
            info!(
                "Exported {filename}: {} chapters, {} bytes",
                doc.chapters().count(),
                pdf.len()
            );
            Ok((
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, content_disposition(&filename)),
                ],
                Bytes::from(pdf),
            )
                .into_response())
        }
        Err(ExportError::Unavailable(reason)) => {
            warn!("{reason}; falling back to browser print");
            Ok(Html(render_html(&doc, RenderMode::Print)).into_response())
        }
        Err(e) => Err(AppError::Export(e)),
    }
}

/// `attachment` disposition with an ASCII fallback and an RFC 5987 UTF-8 name.
fn content_disposition(filename: &str) -> String {
    let fallback = if filename.is_ascii() {
        filename
            .chars()
            .map(|c| if c.is_ascii_control() || c == '"' || c == '\\' { '_' } else { c })
            .collect()
    } else {
        "book.pdf".to_string()
    };
    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}

//! Axum route handlers for themes, the formatted document and the HTML preview.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::layout::document::{format_document, Document};
use crate::layout::html::{render_html, RenderMode};
use crate::layout::theme::Theme;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ThemeQuery {
    pub theme: Option<String>,
}

impl ThemeQuery {
    pub fn resolve(&self) -> Theme {
        Theme::resolve(self.theme.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct ThemeEntry {
    pub id: Theme,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ThemesResponse {
    pub themes: Vec<ThemeEntry>,
    pub default: Theme,
}

/// GET /api/v1/themes
pub async fn handle_themes() -> Json<ThemesResponse> {
    let themes = Theme::ALL
        .into_iter()
        .map(|t| {
            let bundle = t.bundle();
            ThemeEntry {
                id: t,
                name: bundle.name,
                description: bundle.description,
            }
        })
        .collect();
    Json(ThemesResponse {
        themes,
        default: Theme::default(),
    })
}

/// Formats the current book with the requested theme.
pub(crate) async fn current_document(
    state: &AppState,
    query: &ThemeQuery,
) -> Result<Document, AppError> {
    let generated = state.studio.current().await.ok_or(AppError::NoBook)?;
    Ok(format_document(
        &generated.book,
        query.resolve(),
        generated.generated_at.date_naive(),
    ))
}

/// GET /api/v1/book/document?theme=
pub async fn handle_document(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> Result<Json<Document>, AppError> {
    Ok(Json(current_document(&state, &query).await?))
}

/// GET /api/v1/book/preview?theme=
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> Result<Html<String>, AppError> {
    let doc = current_document(&state, &query).await?;
    Ok(Html(render_html(&doc, RenderMode::Preview)))
}

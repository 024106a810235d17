//! Axum route handlers for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::params::{
    Audience, GenerateBookParams, LanguageStyle, MAX_CHAPTERS, MIN_CHAPTERS, PAGES_PER_CHAPTER,
};
use crate::models::book::GeneratedBook;
use crate::state::AppState;
use crate::studio::Activity;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct OptionEntry<T> {
    pub id: T,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub pages_per_chapter: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub generating: bool,
    pub exporting: bool,
    pub has_book: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub audiences: Vec<OptionEntry<Audience>>,
    pub language_styles: Vec<OptionEntry<LanguageStyle>>,
    pub chapter_count: ChapterRange,
    pub defaults: GenerateBookParams,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/options
///
/// The enumerated configuration surface of the generation form.
pub async fn handle_options() -> Json<OptionsResponse> {
    let audiences = Audience::ALL
        .into_iter()
        .map(|a| OptionEntry {
            id: a,
            label: a.label(),
        })
        .collect();
    let language_styles = LanguageStyle::ALL
        .into_iter()
        .map(|s| OptionEntry {
            id: s,
            label: s.label(),
        })
        .collect();

    Json(OptionsResponse {
        audiences,
        language_styles,
        chapter_count: ChapterRange {
            min: MIN_CHAPTERS,
            max: MAX_CHAPTERS,
            step: 1,
            pages_per_chapter: PAGES_PER_CHAPTER,
        },
        defaults: GenerateBookParams::default(),
    })
}

/// POST /api/v1/book/generate
///
/// Validates the form, runs one generation and stores the result as the
/// current book. A failed generation leaves the previous book in place.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateBookParams>, JsonRejection>,
) -> Result<Json<GeneratedBook>, AppError> {
    let Json(params) = payload?;
    params.validate()?;

    let _busy = state
        .studio
        .try_begin(Activity::Generation)
        .ok_or(AppError::Busy("generation"))?;

    let book = state.generator.generate(&params).await?;
    let generated = state.studio.store(book).await;
    info!("Stored generated book {:?}", generated.book.title);

    Ok(Json(generated))
}

/// GET /api/v1/book
pub async fn handle_get_book(
    State(state): State<AppState>,
) -> Result<Json<GeneratedBook>, AppError> {
    state.studio.current().await.map(Json).ok_or(AppError::NoBook)
}

/// GET /api/v1/status
///
/// Busy flags and whether a book exists, so a client can disable its buttons.
pub async fn handle_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        generating: state.studio.is_busy(Activity::Generation),
        exporting: state.studio.is_busy(Activity::Export),
        has_book: state.studio.current().await.is_some(),
    })
}

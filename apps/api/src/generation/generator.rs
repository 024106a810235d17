//! Book Generation — turns validated parameters into a typed `Book`.
//!
//! Flow: build prompt → declare response schema → one model call →
//!       strip fences → deserialize → chapter-count policy → Book.
//!
//! There is no retry and no cache: every call issues a fresh request and a
//! failed attempt surfaces directly as a `GenerationError`.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::generation::params::GenerateBookParams;
use crate::generation::prompts::BOOK_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{AUTHOR_PERSONA, JSON_ONLY_INSTRUCTION};
use crate::llm_client::schema::book_response_schema;
use crate::llm_client::{strip_json_fences, ContentModel, LlmError};
use crate::models::book::Book;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model request failed: {0}")]
    Model(#[from] LlmError),

    #[error("empty response")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("chapter count mismatch: requested {expected}, received {actual}")]
    ChapterCountMismatch { expected: u32, actual: usize },
}

/// What to do when the model returns a different number of chapters than requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChapterCountPolicy {
    /// Fail the generation with `ChapterCountMismatch`.
    #[default]
    Reject,
    /// Keep the Book as returned and log a warning.
    PassThrough,
}

impl std::str::FromStr for ChapterCountPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "pass_through" | "passthrough" => Ok(Self::PassThrough),
            other => Err(format!("unknown chapter count policy '{other}'")),
        }
    }
}

/// Generates books through an injected `ContentModel`.
#[derive(Clone)]
pub struct BookGenerator {
    model: Arc<dyn ContentModel>,
    policy: ChapterCountPolicy,
}

impl BookGenerator {
    pub fn new(model: Arc<dyn ContentModel>, policy: ChapterCountPolicy) -> Self {
        Self { model, policy }
    }

    pub fn policy(&self) -> ChapterCountPolicy {
        self.policy
    }

    /// Runs one generation request. Expects `params` to be validated already.
    pub async fn generate(&self, params: &GenerateBookParams) -> Result<Book, GenerationError> {
        info!(
            "Generating book: topic={:?}, chapters={}, audience={:?}, style={:?}",
            params.topic, params.chapter_count, params.audience, params.language_style
        );

        let prompt = build_book_prompt(params);
        let schema = book_response_schema(params.chapter_count);

        let text = self
            .model
            .generate_json(&prompt, &schema)
            .await?
            .ok_or(GenerationError::EmptyResponse)?;

        let book = parse_book(&text)?;
        let book = apply_chapter_policy(book, params.chapter_count, self.policy)?;

        info!(
            "Book generated: title={:?}, chapters={}",
            book.title,
            book.chapters.len()
        );
        Ok(book)
    }
}

/// Deserializes the model's text into a `Book`, rejecting any shape mismatch.
pub fn parse_book(text: &str) -> Result<Book, GenerationError> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    serde_json::from_str(text).map_err(GenerationError::MalformedResponse)
}

fn apply_chapter_policy(
    book: Book,
    expected: u32,
    policy: ChapterCountPolicy,
) -> Result<Book, GenerationError> {
    let actual = book.chapters.len();
    if actual == expected as usize {
        return Ok(book);
    }
    match policy {
        ChapterCountPolicy::Reject => Err(GenerationError::ChapterCountMismatch { expected, actual }),
        ChapterCountPolicy::PassThrough => {
            warn!("Model returned {actual} chapters, {expected} requested; keeping as is");
            Ok(book)
        }
    }
}

/// Fills `BOOK_PROMPT_TEMPLATE` from the request parameters.
pub fn build_book_prompt(params: &GenerateBookParams) -> String {
    let filled = BOOK_PROMPT_TEMPLATE
        .replace("{persona}", AUTHOR_PERSONA)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{audience}", params.audience.label())
        .replace("{style}", params.language_style.label())
        .replace("{chapter_count}", &params.chapter_count.to_string())
        .replace("{page_count}", &params.target_page_count().to_string());

    // Both user fields in one pass: template pieces get the details, the topic
    // joins them, so neither user text is ever scanned for placeholders.
    filled
        .split("{topic}")
        .map(|piece| piece.replace("{details}", params.details.trim()))
        .collect::<Vec<_>>()
        .join(params.topic.trim())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// A scripted model: returns the queued reply and records every prompt it saw.
    pub(crate) struct ScriptedModel {
        reply: Mutex<Option<Result<Option<String>, LlmError>>>,
        pub prompts: Mutex<Vec<String>>,
        pub schemas: Mutex<Vec<Value>>,
    }

    impl ScriptedModel {
        pub(crate) fn replying(text: impl Into<String>) -> Self {
            Self::with(Ok(Some(text.into())))
        }

        pub(crate) fn with(reply: Result<Option<String>, LlmError>) -> Self {
            Self {
                reply: Mutex::new(Some(reply)),
                prompts: Mutex::new(Vec::new()),
                schemas: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ContentModel for ScriptedModel {
        async fn generate_json(
            &self,
            prompt: &str,
            schema: &Value,
        ) -> Result<Option<String>, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.schemas.lock().unwrap().push(schema.clone());
            self.reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Ok(None))
        }
    }

    pub(crate) fn book_json(chapters: usize) -> String {
        let chapters: Vec<Value> = (1..=chapters)
            .map(|i| json!({"title": format!("الفصل رقم {i}"), "content": format!("فقرة {i}\nفقرة أخرى")}))
            .collect();
        json!({
            "title": "رحلة إلى المريخ",
            "author": "AI Author",
            "description": "مغامرة في الفضاء",
            "chapters": chapters
        })
        .to_string()
    }

    fn params(chapters: u32) -> GenerateBookParams {
        GenerateBookParams {
            topic: "رحلة إلى المريخ".to_string(),
            chapter_count: chapters,
            ..Default::default()
        }
    }

    fn generator(model: Arc<ScriptedModel>, policy: ChapterCountPolicy) -> BookGenerator {
        BookGenerator::new(model, policy)
    }

    #[tokio::test]
    async fn test_generate_returns_parsed_book() {
        let model = Arc::new(ScriptedModel::replying(book_json(5)));
        let book = generator(model.clone(), ChapterCountPolicy::Reject)
            .generate(&params(5))
            .await
            .unwrap();
        assert_eq!(book.chapters.len(), 5);
        assert_eq!(book.author, "AI Author");
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_every_valid_count_yields_that_many_chapters() {
        for n in 3..=15u32 {
            let model = Arc::new(ScriptedModel::replying(book_json(n as usize)));
            let book = generator(model, ChapterCountPolicy::Reject)
                .generate(&params(n))
                .await
                .unwrap();
            assert_eq!(book.chapters.len(), n as usize);
        }
    }

    #[tokio::test]
    async fn test_generate_declares_schema_with_requested_count() {
        let model = Arc::new(ScriptedModel::replying(book_json(7)));
        generator(model.clone(), ChapterCountPolicy::Reject)
            .generate(&params(7))
            .await
            .unwrap();
        let schemas = model.schemas.lock().unwrap();
        assert_eq!(schemas[0], book_response_schema(7));
    }

    #[tokio::test]
    async fn test_empty_response_is_generation_error() {
        let model = Arc::new(ScriptedModel::with(Ok(None)));
        let err = generator(model, ChapterCountPolicy::Reject)
            .generate(&params(5))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
        assert_eq!(err.to_string(), "empty response");
    }

    #[tokio::test]
    async fn test_non_json_response_is_malformed() {
        let model = Arc::new(ScriptedModel::replying("Once upon a time..."));
        let err = generator(model, ChapterCountPolicy::Reject)
            .generate(&params(5))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
        assert!(err.to_string().starts_with("malformed response"));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_malformed() {
        let model = Arc::new(ScriptedModel::replying(
            r#"{"title": "t", "author": "a", "description": "d", "chapters": [{"name": "x"}]}"#,
        ));
        let err = generator(model, ChapterCountPolicy::PassThrough)
            .generate(&params(3))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_surfaced_without_retry() {
        let model = Arc::new(ScriptedModel::with(Err(LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        })));
        let err = generator(model.clone(), ChapterCountPolicy::Reject)
            .generate(&params(5))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Model(LlmError::Api { status: 503, .. })));
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_reject_policy_fails_on_count_mismatch() {
        let model = Arc::new(ScriptedModel::replying(book_json(4)));
        let err = generator(model, ChapterCountPolicy::Reject)
            .generate(&params(5))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::ChapterCountMismatch { expected: 5, actual: 4 }
        ));
    }

    #[tokio::test]
    async fn test_pass_through_policy_keeps_mismatched_book() {
        let model = Arc::new(ScriptedModel::replying(book_json(6)));
        let book = generator(model, ChapterCountPolicy::PassThrough)
            .generate(&params(5))
            .await
            .unwrap();
        assert_eq!(book.chapters.len(), 6);
    }

    #[test]
    fn test_parse_book_strips_code_fences() {
        let fenced = format!("```json\n{}\n```", book_json(3));
        let book = parse_book(&fenced).unwrap();
        assert_eq!(book.chapters.len(), 3);
    }

    #[test]
    fn test_parse_book_blank_text_is_empty_response() {
        assert!(matches!(parse_book("   "), Err(GenerationError::EmptyResponse)));
    }

    #[test]
    fn test_prompt_embeds_every_parameter() {
        let p = GenerateBookParams {
            topic: "دليل التسويق الرقمي".to_string(),
            details: "أمثلة عملية".to_string(),
            chapter_count: 8,
            audience: crate::generation::params::Audience::Specialists,
            language_style: crate::generation::params::LanguageStyle::Academic,
        };
        let prompt = build_book_prompt(&p);
        assert!(prompt.contains("\"دليل التسويق الرقمي\""));
        assert!(prompt.contains("\"أمثلة عملية\""));
        assert!(prompt.contains("المتخصصين والخبراء"));
        assert!(prompt.contains("رسمي وأكاديمي (بحثي)"));
        assert!(prompt.contains("exactly 8 chapters"));
        assert!(prompt.contains("roughly 16 standard pages"));
        assert!(!prompt.contains("{topic}"));
        assert!(!prompt.contains("{json_only}"));
    }

    #[test]
    fn test_prompt_leaves_user_braces_alone() {
        let p = GenerateBookParams {
            topic: "{chapter_count} braces".to_string(),
            ..Default::default()
        };
        let prompt = build_book_prompt(&p);
        assert!(prompt.contains("\"{chapter_count} braces\""));
    }

    #[test]
    fn test_prompt_leaves_braces_in_details_alone() {
        let p = GenerateBookParams {
            topic: "MARS".to_string(),
            details: "see {topic} and {details} here".to_string(),
            ..Default::default()
        };
        let prompt = build_book_prompt(&p);
        assert!(prompt.contains("Specific Details/User Vision: \"see {topic} and {details} here\""));
        assert!(prompt.contains("Main Topic/Title Idea: \"MARS\""));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("reject".parse::<ChapterCountPolicy>(), Ok(ChapterCountPolicy::Reject));
        assert_eq!(
            "PASS_THROUGH".parse::<ChapterCountPolicy>(),
            Ok(ChapterCountPolicy::PassThrough)
        );
        assert!("truncate".parse::<ChapterCountPolicy>().is_err());
    }
}

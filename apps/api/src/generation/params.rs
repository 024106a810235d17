//! Generation parameters — the user-supplied input of one generation request.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inclusive chapter-count range offered by the form slider (step 1).
pub const MIN_CHAPTERS: u32 = 3;
pub const MAX_CHAPTERS: u32 = 15;
pub const DEFAULT_CHAPTERS: u32 = 5;

/// Each chapter is expected to fill roughly this many printed pages.
pub const PAGES_PER_CHAPTER: u32 = 2;

/// Target reader group. Accepts a stable snake_case id or the Arabic label shown on the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    #[serde(alias = "الجميع")]
    General,
    #[serde(alias = "الأطفال (3-8 سنوات)")]
    Children,
    #[serde(alias = "اليافعين (9-15 سنة)")]
    YoungReaders,
    #[serde(alias = "الشباب والبالغين")]
    YouthAndAdults,
    #[serde(alias = "المتخصصين والخبراء")]
    Specialists,
}

impl Audience {
    pub const ALL: [Audience; 5] = [
        Audience::General,
        Audience::Children,
        Audience::YoungReaders,
        Audience::YouthAndAdults,
        Audience::Specialists,
    ];

    /// Display label, also used verbatim in the prompt.
    pub fn label(self) -> &'static str {
        match self {
            Audience::General => "الجميع",
            Audience::Children => "الأطفال (3-8 سنوات)",
            Audience::YoungReaders => "اليافعين (9-15 سنة)",
            Audience::YouthAndAdults => "الشباب والبالغين",
            Audience::Specialists => "المتخصصين والخبراء",
        }
    }
}

/// Tone of the generated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageStyle {
    // "مشوق وسهل" is the form's initial value before the user picks an option.
    #[default]
    #[serde(alias = "سردي ومشوق (قصصي)", alias = "مشوق وسهل")]
    Narrative,
    #[serde(alias = "بسيط وتعليمي (شرح)")]
    Educational,
    #[serde(alias = "رسمي وأكاديمي (بحثي)")]
    Academic,
    #[serde(alias = "أدبي وشاعري (نصوص)")]
    Literary,
    #[serde(alias = "تحفيزي وحماسي (تطوير ذات)")]
    Motivational,
}

impl LanguageStyle {
    pub const ALL: [LanguageStyle; 5] = [
        LanguageStyle::Narrative,
        LanguageStyle::Educational,
        LanguageStyle::Academic,
        LanguageStyle::Literary,
        LanguageStyle::Motivational,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LanguageStyle::Narrative => "سردي ومشوق (قصصي)",
            LanguageStyle::Educational => "بسيط وتعليمي (شرح)",
            LanguageStyle::Academic => "رسمي وأكاديمي (بحثي)",
            LanguageStyle::Literary => "أدبي وشاعري (نصوص)",
            LanguageStyle::Motivational => "تحفيزي وحماسي (تطوير ذات)",
        }
    }
}

/// Request body for book generation. Missing optional fields take the form defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBookParams {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub details: String,
    #[serde(default = "default_chapter_count")]
    pub chapter_count: u32,
    #[serde(default)]
    pub audience: Audience,
    #[serde(default)]
    pub language_style: LanguageStyle,
}

fn default_chapter_count() -> u32 {
    DEFAULT_CHAPTERS
}

impl Default for GenerateBookParams {
    fn default() -> Self {
        Self {
            topic: String::new(),
            details: String::new(),
            chapter_count: DEFAULT_CHAPTERS,
            audience: Audience::default(),
            language_style: LanguageStyle::default(),
        }
    }
}

/// Rejected before any generation call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("الرجاء إدخال عنوان أو موضوع للكتاب")]
    EmptyTopic,

    #[error("عدد الفصول يجب أن يكون بين {min} و {max} (القيمة المرسلة: {value})")]
    ChapterCountOutOfRange { value: u32, min: u32, max: u32 },
}

impl GenerateBookParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.topic.trim().is_empty() {
            return Err(ValidationError::EmptyTopic);
        }
        if !(MIN_CHAPTERS..=MAX_CHAPTERS).contains(&self.chapter_count) {
            return Err(ValidationError::ChapterCountOutOfRange {
                value: self.chapter_count,
                min: MIN_CHAPTERS,
                max: MAX_CHAPTERS,
            });
        }
        Ok(())
    }

    /// Approximate printed length requested from the model. A prompt hint only.
    pub fn target_page_count(&self) -> u32 {
        self.chapter_count * PAGES_PER_CHAPTER
    }
}

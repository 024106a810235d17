//! Document Formatter — maps a `Book` and a `Theme` to an ordered list of layout blocks.
//!
//! # Layout rules
//! - Cover first, always followed by a page break.
//! - One chapter block per chapter, in book order, each starting a new page.
//! - A divider between consecutive chapters, never after the last one.
//! - Chapter bodies are split on newlines; blank segments are dropped and
//!   every remaining paragraph must not be split across pages.
//! - A single footer closes the document.
//!
//! Formatting is pure: the date stamp is an input, nothing is read from the clock.

use chrono::NaiveDate;
use serde::Serialize;

use crate::layout::theme::{StyleBundle, Theme};
use crate::models::book::Book;

pub const AUTHOR_PREFIX: &str = "تأليف: ";
pub const CHAPTER_LABEL: &str = "الفصل";
pub const PLATFORM_CREDIT: &str = "تم الإنشاء بواسطة منصة مؤلف";
pub const END_OF_BOOK: &str = "نهاية الكتاب";

// ────────────────────────────────────────────────────────────────────────────
// Document model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub theme: Theme,
    pub style: &'static StyleBundle,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Cover(CoverBlock),
    Chapter(ChapterBlock),
    Divider,
    Footer(FooterBlock),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverBlock {
    pub title: String,
    pub author_line: String,
    pub description: String,
    pub credit: String,
    pub date_stamp: String,
    /// Chapter content never shares the cover's page.
    pub break_after: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterBlock {
    /// 1-based position in the book.
    pub number: usize,
    pub label: String,
    pub title: String,
    pub paragraphs: Vec<Paragraph>,
    pub break_before: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub text: String,
    pub break_inside_avoid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterBlock {
    pub text: String,
}

impl Document {
    pub fn chapters(&self) -> impl Iterator<Item = &ChapterBlock> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Chapter(c) => Some(c),
            _ => None,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Formatting
// ────────────────────────────────────────────────────────────────────────────

/// Lays out `book` with `theme`. Never fails and never alters the text content.
pub fn format_document(book: &Book, theme: Theme, issued_on: NaiveDate) -> Document {
    let mut blocks = Vec::with_capacity(book.chapters.len() * 2 + 1);

    blocks.push(Block::Cover(CoverBlock {
        title: book.title.clone(),
        author_line: format!("{AUTHOR_PREFIX}{}", book.author),
        description: book.description.clone(),
        credit: PLATFORM_CREDIT.to_string(),
        date_stamp: issued_on.format("%Y-%m-%d").to_string(),
        break_after: true,
    }));

    let last = book.chapters.len().saturating_sub(1);
    for (index, chapter) in book.chapters.iter().enumerate() {
        blocks.push(Block::Chapter(ChapterBlock {
            number: index + 1,
            label: format!("{CHAPTER_LABEL} {}", index + 1),
            title: chapter.title.clone(),
            paragraphs: split_paragraphs(&chapter.content)
                .map(|text| Paragraph {
                    text: text.to_string(),
                    break_inside_avoid: true,
                })
                .collect(),
            break_before: true,
        }));
        if index < last {
            blocks.push(Block::Divider);
        }
    }

    blocks.push(Block::Footer(FooterBlock {
        text: END_OF_BOOK.to_string(),
    }));

    Document {
        theme,
        style: theme.bundle(),
        blocks,
    }
}

/// Splits chapter text on line boundaries, dropping blank segments.
pub fn split_paragraphs(content: &str) -> impl Iterator<Item = &str> {
    content.lines().map(str::trim).filter(|p| !p.is_empty())
}

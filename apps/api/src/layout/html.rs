//! HTML rendering of a formatted `Document`.
//!
//! Produces a standalone right-to-left page sized for A4. Pagination hints from
//! the document become CSS break properties (both the modern `break-*` and the
//! legacy `page-break-*` forms, so older HTML→PDF engines honour them too).

use html_escape::encode_text;

use crate::layout::document::{Block, ChapterBlock, CoverBlock, Document, FooterBlock};
use crate::layout::theme::StyleBundle;

const PAGE_WIDTH: &str = "210mm";
const PAGE_HEIGHT: &str = "297mm";
/// Inner padding of every page; the PDF margin adds to it.
const PAGE_PADDING: &str = "12mm";

const BASE_CSS: &str = "\
*{box-sizing:border-box;}\
body{margin:0;}\
p{margin:0 0 1.5rem;}\
.break-before{break-before:page;page-break-before:always;}\
.break-after{break-after:page;page-break-after:always;}\
.avoid-break{break-inside:avoid;page-break-inside:avoid;}\
@page{size:A4 portrait;}";

/// Whether the page should open the browser's print dialog on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Preview,
    /// Degraded export path: the reader prints to PDF from the browser.
    Print,
}

pub fn render_html(doc: &Document, mode: RenderMode) -> String {
    let style = doc.style;
    let title = doc
        .blocks
        .iter()
        .find_map(|b| match b {
            Block::Cover(c) => Some(c.title.as_str()),
            _ => None,
        })
        .unwrap_or_default();

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"ar\" dir=\"rtl\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", encode_text(title)));
    html.push_str(&format!("<style>{BASE_CSS}</style>\n</head>\n<body>\n"));
    html.push_str(&format!(
        "<div id=\"book-content\" data-theme=\"{}\" style=\"width:100%;max-width:{PAGE_WIDTH};margin:0 auto;{}\">\n",
        style.id, style.container
    ));

    // Chapters share one padded content wrapper, as they flow across pages.
    let mut in_chapters = false;
    for block in &doc.blocks {
        let is_flow = matches!(block, Block::Chapter(_) | Block::Divider);
        if is_flow && !in_chapters {
            html.push_str(&format!("<div style=\"padding:{PAGE_PADDING};\">\n"));
            in_chapters = true;
        } else if !is_flow && in_chapters {
            html.push_str("</div>\n");
            in_chapters = false;
        }

        match block {
            Block::Cover(cover) => render_cover(&mut html, cover, style),
            Block::Chapter(chapter) => render_chapter(&mut html, chapter, style),
            Block::Divider => html.push_str(&format!(
                "<div style=\"margin:3rem auto;width:33%;border-bottom:2px dashed;{}\"></div>\n",
                style.divider
            )),
            Block::Footer(footer) => render_footer(&mut html, footer, style),
        }
    }
    if in_chapters {
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n");
    if mode == RenderMode::Print {
        html.push_str("<script>window.addEventListener('load',function(){window.print();});</script>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}

fn render_cover(html: &mut String, cover: &CoverBlock, style: &StyleBundle) {
    let break_class = if cover.break_after { " class=\"break-after\"" } else { "" };
    html.push_str(&format!(
        "<section{break_class} style=\"min-height:{PAGE_HEIGHT};padding:{PAGE_PADDING};display:flex;\
         flex-direction:column;justify-content:space-between;align-items:center;text-align:center;\
         position:relative;overflow:hidden;\">\n"
    ));
    if let Some(ornament) = style.cover_ornament {
        html.push_str(&format!("<div style=\"{ornament}\"></div>\n"));
    }
    html.push_str(
        "<div style=\"flex:1;display:flex;flex-direction:column;justify-content:center;width:100%;z-index:10;\">\n",
    );
    html.push_str(&format!(
        "<h1 style=\"{}\">{}</h1>\n",
        style.title,
        encode_text(&cover.title)
    ));
    html.push_str(&format!(
        "<div style=\"width:8rem;height:4px;margin:2rem auto;border-radius:9999px;{}\"></div>\n",
        style.cover_accent
    ));
    html.push_str(&format!(
        "<p style=\"{}\">{}</p>\n</div>\n",
        style.author,
        encode_text(&cover.author_line)
    ));
    html.push_str(&format!(
        "<div style=\"max-width:28rem;margin:0 auto;opacity:.8;z-index:10;\">\n\
         <p style=\"font-size:1.125rem;margin-bottom:2rem;\">{}</p>\n\
         <div style=\"font-size:.875rem;opacity:.5;\">{}<br>{}</div>\n</div>\n</section>\n",
        encode_text(&cover.description),
        encode_text(&cover.credit),
        encode_text(&cover.date_stamp)
    ));
}

fn render_chapter(html: &mut String, chapter: &ChapterBlock, style: &StyleBundle) {
    let break_class = if chapter.break_before { " class=\"break-before\"" } else { "" };
    html.push_str(&format!(
        "<article{break_class} data-chapter=\"{}\" style=\"margin-bottom:4rem;\">\n",
        chapter.number
    ));
    html.push_str(&format!(
        "<h2 style=\"{}\"><span style=\"font-size:.875rem;font-weight:400;margin-left:1rem;{}\">{}</span><br>{}</h2>\n",
        style.chapter_title,
        style.page_number,
        encode_text(&chapter.label),
        encode_text(&chapter.title)
    ));
    html.push_str(&format!("<div style=\"{}\">\n", style.body));
    for paragraph in &chapter.paragraphs {
        let class = if paragraph.break_inside_avoid { " class=\"avoid-break\"" } else { "" };
        html.push_str(&format!("<p{class}>{}</p>\n", encode_text(&paragraph.text)));
    }
    html.push_str("</div>\n</article>\n");
}

fn render_footer(html: &mut String, footer: &FooterBlock, style: &StyleBundle) {
    html.push_str(&format!(
        "<footer style=\"text-align:center;padding:2rem 0;font-size:.875rem;opacity:.4;\
         border-top:1px solid;margin:0 20mm;{}\">{}</footer>\n",
        style.divider,
        encode_text(&footer.text)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::document::format_document;
    use crate::layout::theme::Theme;
    use crate::models::book::{Book, Chapter};
    use chrono::NaiveDate;

    fn make_doc(theme: Theme, chapters: usize) -> Document {
        let book = Book {
            title: "كتاب <تجريبي>".to_string(),
            author: "AI Author".to_string(),
            description: "وصف & ملخص".to_string(),
            chapters: (1..=chapters)
                .map(|i| Chapter {
                    title: format!("فصل {i}"),
                    content: "سطر أول\n\nسطر ثان".to_string(),
                })
                .collect(),
        };
        format_document(&book, theme, NaiveDate::from_ymd_opt(2026, 1, 2).unwrap())
    }

    #[test]
    fn test_html_is_rtl_arabic() {
        let html = render_html(&make_doc(Theme::Modern, 1), RenderMode::Preview);
        assert!(html.contains("<html lang=\"ar\" dir=\"rtl\">"));
        assert!(html.contains("data-theme=\"modern\""));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_html(&make_doc(Theme::Modern, 1), RenderMode::Preview);
        assert!(html.contains("كتاب &lt;تجريبي&gt;"));
        assert!(html.contains("وصف &amp; ملخص"));
        assert!(!html.contains("<تجريبي>"));
    }

    #[test]
    fn test_break_annotations_are_rendered() {
        let html = render_html(&make_doc(Theme::Classic, 3), RenderMode::Preview);
        assert_eq!(html.matches("<article class=\"break-before\"").count(), 3);
        assert_eq!(html.matches("<p class=\"avoid-break\">").count(), 6);
        assert_eq!(html.matches("<section class=\"break-after\"").count(), 1);
        assert_eq!(html.matches("border-bottom:2px dashed").count(), 2);
    }

    #[test]
    fn test_classic_cover_ornament_is_rendered() {
        let html = render_html(&make_doc(Theme::Classic, 1), RenderMode::Preview);
        assert!(html.contains("20px double"));
        let html = render_html(&make_doc(Theme::Minimal, 1), RenderMode::Preview);
        assert!(!html.contains("20px double"));
    }

    #[test]
    fn test_print_mode_opens_print_dialog() {
        let preview = render_html(&make_doc(Theme::Kids, 1), RenderMode::Preview);
        let print = render_html(&make_doc(Theme::Kids, 1), RenderMode::Print);
        assert!(!preview.contains("window.print()"));
        assert!(print.contains("window.print()"));
    }

    #[test]
    fn test_footer_closes_document() {
        let html = render_html(&make_doc(Theme::Modern, 0), RenderMode::Preview);
        assert!(html.contains("نهاية الكتاب"));
        assert!(!html.contains("<article"));
    }
}

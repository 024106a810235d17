// PDF export: page setup, output naming, and the external HTML→PDF collaborator.
// The collaborator is a trait so the handler can be exercised without the binary.

pub mod exporter;
pub mod handlers;

pub use exporter::{CommandExporter, ExportError, PdfExporter};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    A4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
}

/// How the exporter may place page breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageBreakMode {
    /// Never cut an element across pages if it can be avoided.
    AvoidAll,
    /// Honour CSS `break-*` properties.
    Css,
    /// Honour legacy `page-break-*` properties.
    Legacy,
}

/// Settings handed to the PDF exporter alongside the rendered HTML.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportConfig {
    pub format: PageFormat,
    pub orientation: Orientation,
    /// Uniform margin on all four sides.
    pub margin_mm: u8,
    /// Rasterization scale factor.
    pub scale: f32,
    /// JPEG quality for rasterized content, 0.0..=1.0.
    pub image_quality: f32,
    pub page_break_modes: Vec<PageBreakMode>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: PageFormat::A4,
            orientation: Orientation::Portrait,
            margin_mm: 15,
            scale: 2.0,
            image_quality: 0.98,
            page_break_modes: vec![
                PageBreakMode::AvoidAll,
                PageBreakMode::Css,
                PageBreakMode::Legacy,
            ],
        }
    }
}

/// Output file name for a book: whitespace runs collapse to `_`, `.pdf` appended.
pub fn export_filename(title: &str) -> String {
    let stem = title.split_whitespace().collect::<Vec<_>>().join("_");
    if stem.is_empty() {
        return "book.pdf".to_string();
    }
    format!("{stem}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_collapses_whitespace() {
        assert_eq!(export_filename("رحلة  إلى\tالمريخ"), "رحلة_إلى_المريخ.pdf");
    }

    #[test]
    fn test_filename_trims_edges() {
        assert_eq!(export_filename("  My Book \n"), "My_Book.pdf");
    }

    #[test]
    fn test_filename_single_word() {
        assert_eq!(export_filename("Mars"), "Mars.pdf");
    }

    #[test]
    fn test_blank_title_gets_generic_name() {
        assert_eq!(export_filename("   "), "book.pdf");
    }

    #[test]
    fn test_default_export_config() {
        let config = ExportConfig::default();
        assert_eq!(config.format, PageFormat::A4);
        assert_eq!(config.orientation, Orientation::Portrait);
        assert_eq!(config.margin_mm, 15);
        assert_eq!(config.scale, 2.0);
        assert_eq!(config.page_break_modes.len(), 3);
    }

    #[test]
    fn test_page_break_modes_serialize_kebab_case() {
        let json = serde_json::to_string(&ExportConfig::default().page_break_modes).unwrap();
        assert_eq!(json, r#"["avoid-all","css","legacy"]"#);
    }
}

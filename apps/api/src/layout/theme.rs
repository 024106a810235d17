//! Book themes and their static style bundles.
//!
//! A theme only affects presentation. Each variant maps to exactly one
//! immutable `StyleBundle` through the `STYLE_BUNDLES` table; adding a theme
//! means adding a variant and one table row.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Theme enum
// ────────────────────────────────────────────────────────────────────────────

/// The four selectable book themes. Discriminants index `STYLE_BUNDLES`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Amiri serif on cream paper, traditional layout.
    Classic = 0,
    /// Tajawal, soft colours, clean layout.
    #[default]
    Modern = 1,
    /// Black and white, high contrast.
    Minimal = 2,
    /// Bright colours, large type.
    Kids = 3,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Classic, Theme::Modern, Theme::Minimal, Theme::Kids];

    /// Resolves a theme name, case-insensitively. Anything unrecognized,
    /// including no value at all, falls back to `Modern`.
    pub fn resolve(name: Option<&str>) -> Theme {
        let Some(name) = name else {
            return Theme::default();
        };
        let name = name.trim();
        Theme::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    pub fn id(self) -> &'static str {
        self.bundle().id
    }

    pub fn bundle(self) -> &'static StyleBundle {
        &STYLE_BUNDLES[self as usize]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Style bundle
// ────────────────────────────────────────────────────────────────────────────

/// Typography and layout rules for one theme, as CSS declaration lists.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct StyleBundle {
    pub theme: Theme,
    pub id: &'static str,
    /// Display name and blurb shown by the theme picker.
    pub name: &'static str,
    pub description: &'static str,
    pub container: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub chapter_title: &'static str,
    pub body: &'static str,
    /// Used for the chapter index label.
    pub page_number: &'static str,
    pub divider: &'static str,
    /// Short accent bar between title and author on the cover.
    pub cover_accent: &'static str,
    /// Optional full-cover decoration layer.
    pub cover_ornament: Option<&'static str>,
}

pub static STYLE_BUNDLES: [StyleBundle; 4] = [
    StyleBundle {
        theme: Theme::Classic,
        id: "classic",
        name: "كلاسيكي",
        description: "خط أميري، ورق كريمي، تصميم تقليدي",
        container: "background:#fdfbf7;color:#0f172a;font-family:'Amiri',serif;",
        title: "font-size:3rem;color:#78350f;font-weight:700;margin-bottom:1rem;\
                border-bottom:4px solid rgba(120,53,15,.2);padding-bottom:1.5rem;display:inline-block;",
        author: "font-size:1.5rem;color:#92400e;font-style:italic;",
        chapter_title: "font-size:1.875rem;color:#78350f;font-weight:700;margin:2rem 0 1.5rem;\
                        text-decoration:underline;text-decoration-color:rgba(245,158,11,.3);\
                        text-decoration-thickness:4px;text-underline-offset:8px;",
        body: "font-size:1.125rem;line-height:2.2;color:#1e293b;text-align:justify;",
        page_number: "color:rgba(120,53,15,.5);",
        divider: "border-color:rgba(120,53,15,.1);",
        cover_accent: "background:currentColor;opacity:.2;",
        cover_ornament: Some(
            "position:absolute;inset:0;margin:2rem;border:20px double rgba(120,53,15,.1);\
             pointer-events:none;",
        ),
    },
    StyleBundle {
        theme: Theme::Modern,
        id: "modern",
        name: "عصري",
        description: "خط تجوال، ألوان مريحة، تصميم نظيف",
        container: "background:#ffffff;color:#1e293b;font-family:'Tajawal',sans-serif;",
        title: "font-size:3rem;color:#1e40af;font-weight:700;margin-bottom:.5rem;",
        author: "font-size:1.25rem;color:#64748b;font-weight:500;",
        chapter_title: "font-size:1.875rem;color:#1e293b;font-weight:700;margin:2.5rem 0 1.5rem;\
                        border-right:8px solid #0ea5e9;padding-right:.75rem;",
        body: "font-size:1.125rem;line-height:2;color:#475569;text-align:justify;",
        page_number: "color:#cbd5e1;",
        divider: "border-color:#f1f5f9;",
        cover_accent: "background:currentColor;opacity:.2;",
        cover_ornament: None,
    },
    StyleBundle {
        theme: Theme::Minimal,
        id: "minimal",
        name: "بسيط",
        description: "أبيض وأسود، تباين عالي للقراءة",
        container: "background:#ffffff;color:#000000;font-family:'Noto Kufi Arabic',sans-serif;",
        title: "font-size:3.75rem;font-weight:900;letter-spacing:-.05em;margin-bottom:1rem;",
        author: "font-size:1.25rem;color:#4b5563;text-transform:uppercase;letter-spacing:.1em;",
        chapter_title: "font-size:2.25rem;font-weight:700;margin:3rem 0 2rem;\
                        border-left:8px solid #000000;padding-left:1rem;",
        body: "font-size:1.125rem;line-height:1.625;color:#111827;text-align:justify;font-weight:300;",
        page_number: "color:#d1d5db;",
        divider: "border-color:#f3f4f6;",
        cover_accent: "background:currentColor;opacity:.2;",
        cover_ornament: None,
    },
    StyleBundle {
        theme: Theme::Kids,
        id: "kids",
        name: "مرح",
        description: "ألوان زاهية، خطوط كبيرة وواضحة",
        container: "background:#f0f9ff;color:#312e81;font-family:'Tajawal',sans-serif;",
        title: "font-size:3.75rem;color:#4f46e5;font-weight:800;margin-bottom:1rem;\
                text-shadow:0 1px 2px rgba(0,0,0,.05);",
        author: "font-size:1.5rem;color:#ec4899;font-weight:700;",
        chapter_title: "font-size:2.25rem;color:#6366f1;font-weight:700;margin:2rem 0 1.5rem;\
                        background:rgba(255,255,255,.5);display:inline-block;padding:.5rem 1.5rem;\
                        border-radius:9999px;box-shadow:0 1px 2px rgba(0,0,0,.05);",
        body: "font-size:1.25rem;line-height:2;color:#312e81;text-align:right;",
        page_number: "color:#a5b4fc;",
        divider: "border-color:#e0e7ff;",
        cover_accent: "background:#f472b6;",
        cover_ornament: Some(
            "position:absolute;top:-5rem;right:-5rem;width:16rem;height:16rem;\
             background:#fde047;border-radius:9999px;filter:blur(64px);opacity:.3;",
        ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_maps_to_its_own_bundle() {
        for theme in Theme::ALL {
            assert_eq!(theme.bundle().theme, theme);
        }
    }

    #[test]
    fn test_resolve_known_names() {
        assert_eq!(Theme::resolve(Some("classic")), Theme::Classic);
        assert_eq!(Theme::resolve(Some("KIDS")), Theme::Kids);
        assert_eq!(Theme::resolve(Some(" minimal ")), Theme::Minimal);
    }

    #[test]
    fn test_resolve_falls_back_to_modern() {
        assert_eq!(Theme::resolve(None), Theme::Modern);
        assert_eq!(Theme::resolve(Some("")), Theme::Modern);
        assert_eq!(Theme::resolve(Some("gothic")), Theme::Modern);
    }

    #[test]
    fn test_only_classic_and_kids_have_cover_ornaments() {
        assert!(Theme::Classic.bundle().cover_ornament.is_some());
        assert!(Theme::Kids.bundle().cover_ornament.is_some());
        assert!(Theme::Modern.bundle().cover_ornament.is_none());
        assert!(Theme::Minimal.bundle().cover_ornament.is_none());
    }

    #[test]
    fn test_theme_serde_uses_lowercase_ids() {
        assert_eq!(serde_json::to_string(&Theme::Kids).unwrap(), r#""kids""#);
        let t: Theme = serde_json::from_str(r#""classic""#).unwrap();
        assert_eq!(t, Theme::Classic);
    }
}

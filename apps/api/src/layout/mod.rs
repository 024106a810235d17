// Document formatting: themes, the block layout of a book, and its HTML rendering.
// Everything here is synchronous and pure; handlers only add the current book.

pub mod document;
pub mod handlers;
pub mod html;
pub mod theme;

// Re-export the renderer consumed by the export module.
pub use html::{render_html, RenderMode};

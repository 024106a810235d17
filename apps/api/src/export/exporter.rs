//! HTML→PDF exporter backed by an external command (wkhtmltopdf-compatible CLI).

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

use crate::export::{ExportConfig, Orientation, PageFormat};

/// Screen resolution the layout is designed at; scaled by `ExportConfig::scale`.
const BASE_DPI: f32 = 96.0;

#[derive(Debug, Error)]
pub enum ExportError {
    /// No exporter is installed. Callers fall back to the browser print path.
    #[error("PDF exporter unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF exporter exited with {code:?}: {stderr}")]
    Failed { code: Option<i32>, stderr: String },

    #[error("PDF exporter produced an empty file")]
    EmptyOutput,
}

#[async_trait]
pub trait PdfExporter: Send + Sync {
    /// Converts a complete HTML page to PDF bytes.
    async fn export(&self, html: &str, config: &ExportConfig) -> Result<Vec<u8>, ExportError>;
}

/// Runs an external HTML→PDF command on a temporary copy of the page.
#[derive(Debug, Clone)]
pub struct CommandExporter {
    program: PathBuf,
}

impl CommandExporter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Translates the export settings into command-line flags.
    pub fn args(config: &ExportConfig) -> Vec<String> {
        let margin = format!("{}mm", config.margin_mm);
        let page_size = match config.format {
            PageFormat::A4 => "A4",
        };
        let orientation = match config.orientation {
            Orientation::Portrait => "Portrait",
        };
        let mut args: Vec<String> = vec![
            "--quiet".into(),
            "--encoding".into(),
            "utf-8".into(),
            "--enable-local-file-access".into(),
            "--page-size".into(),
            page_size.into(),
            "--orientation".into(),
            orientation.into(),
        ];
        for side in ["--margin-top", "--margin-right", "--margin-bottom", "--margin-left"] {
            args.push(side.into());
            args.push(margin.clone());
        }
        args.push("--dpi".into());
        args.push(((BASE_DPI * config.scale).round() as u32).to_string());
        args.push("--image-quality".into());
        args.push(((config.image_quality * 100.0).round() as u32).min(100).to_string());
        args
    }
}

#[async_trait]
impl PdfExporter for CommandExporter {
    async fn export(&self, html: &str, config: &ExportConfig) -> Result<Vec<u8>, ExportError> {
        let input = tempfile::Builder::new()
            .prefix("muallif-")
            .suffix(".html")
            .tempfile()?;
        tokio::fs::write(input.path(), html).await?;

        let output = tempfile::Builder::new()
            .prefix("muallif-")
            .suffix(".pdf")
            .tempfile()?;

        debug!("Running {:?} on {:?}", self.program, input.path());
        let result = Command::new(&self.program)
            .args(Self::args(config))
            .arg(input.path())
            .arg(output.path())
            .output()
            .await;

        let result = match result {
            Ok(r) => r,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ExportError::Unavailable(format!(
                    "{} not found",
                    self.program.display()
                )));
            }
            Err(e) => return Err(ExportError::Io(e)),
        };

        if !result.status.success() {
            return Err(ExportError::Failed {
                code: result.status.code(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        let pdf = tokio::fs::read(output.path()).await?;
        if pdf.is_empty() {
            return Err(ExportError::EmptyOutput);
        }
        info!("PDF exported: {} bytes", pdf.len());
        Ok(pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_carry_page_setup() {
        let args = CommandExporter::args(&ExportConfig::default());
        let joined = args.join(" ");
        assert!(joined.contains("--page-size A4"));
        assert!(joined.contains("--orientation Portrait"));
        assert!(joined.contains("--margin-top 15mm"));
        assert!(joined.contains("--margin-left 15mm"));
        assert!(joined.contains("--dpi 192"));
        assert!(joined.contains("--image-quality 98"));
    }

    #[tokio::test]
    async fn test_missing_program_is_unavailable() {
        let exporter = CommandExporter::new("/nonexistent/muallif-html-to-pdf");
        let err = exporter
            .export("<html></html>", &ExportConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Unavailable(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_program_is_export_failure() {
        let exporter = CommandExporter::new("false");
        let err = exporter
            .export("<html></html>", &ExportConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Failed { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_program_writing_nothing_is_empty_output() {
        // `true` succeeds without touching the output file.
        let exporter = CommandExporter::new("true");
        let err = exporter
            .export("<html></html>", &ExportConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::EmptyOutput));
    }
}

use anyhow::{anyhow, Context, Result};

use crate::generation::generator::ChapterCountPolicy;

const DEFAULT_PDF_EXPORTER: &str = "wkhtmltopdf";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub chapter_count_policy: ChapterCountPolicy,
    pub pdf_exporter_bin: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            chapter_count_policy: match std::env::var("CHAPTER_COUNT_POLICY") {
                Ok(raw) => raw
                    .parse::<ChapterCountPolicy>()
                    .map_err(|e: String| anyhow!(e))?,
                Err(_) => ChapterCountPolicy::default(),
            },
            pdf_exporter_bin: std::env::var("PDF_EXPORTER_BIN")
                .unwrap_or_else(|_| DEFAULT_PDF_EXPORTER.to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

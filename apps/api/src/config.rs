use anyhow::{Context, Result};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
/// Upload and report locations are carried here and passed explicitly
/// into the pipeline rather than read as ambient globals, so parallel
/// report runs only need a differently-parameterized `Config`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where uploaded resumes are persisted (created on demand).
    pub upload_dir: PathBuf,
    /// Fixed report path, overwritten on every run.
    pub output_path: PathBuf,
    /// Binary used to convert legacy `.doc` uploads to `.docx`.
    pub soffice_bin: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            upload_dir: env_or("UPLOAD_DIR", "uploads").into(),
            output_path: env_or("OUTPUT_PATH", "parsed_resumes.xlsx").into(),
            soffice_bin: env_or("SOFFICE_BIN", "soffice"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

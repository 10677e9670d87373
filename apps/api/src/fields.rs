//! Field Extractor — pulls an email address and phone number out of
//! extracted resume text with fixed patterns.

use regex::Regex;
use serde::Serialize;

/// The three extracted fields for one input file. Immutable once built;
/// only files with a detected email produce a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeRecord {
    pub email: String,
    pub phone: Option<String>,
    /// Full extracted text, trimmed at both ends. No other normalization.
    pub text: String,
}

/// Email and phone patterns, compiled once and reused for every file.
pub struct FieldExtractor {
    email: Regex,
    phone: Regex,
}

impl FieldExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(r"[\w.-]+@[\w.-]+\.\w+")?,
            phone: Regex::new(r"(\+\d{1,3}[\s-]?)?\(?\d{3}\)?[\s.-]?\d{2,5}[\s.-]?\d{4}")?,
        })
    }

    /// Leftmost email-shaped substring. Syntactic shape only, no
    /// deliverability or domain validation.
    pub fn email(&self, text: &str) -> Option<String> {
        self.email.find(text).map(|m| m.as_str().to_string())
    }

    /// Leftmost phone-shaped digit run: optional `+` country code,
    /// optional parenthesized area code, separator-tolerant groups.
    /// Best-effort heuristic — misses exotic layouts and can capture
    /// non-phone digit runs that happen to match the shape.
    pub fn phone(&self, text: &str) -> Option<String> {
        self.phone.find(text).map(|m| m.as_str().to_string())
    }
}

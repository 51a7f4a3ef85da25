//! Text normalization
//!
//! Cleans extraction noise out of raw document text before segmentation:
//! page-number lines, URLs, repeated terminal punctuation and runs of
//! whitespace. Normalization is deterministic and idempotent.

use std::sync::OnceLock;

use regex::Regex;

fn url_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("static URL regex"))
}

fn page_number_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?mi)^[ \t]*(?:page[ \t]+|sayfa[ \t]+)?\d{1,4}(?:[ \t]*/[ \t]*\d{1,4})?[ \t]*$")
            .expect("static page number regex")
    })
}

fn repeated_terminal_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([.!?])(?:\s*[.!?])+").expect("static punctuation regex"))
}

fn space_before_punct_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+([.,!?:;])").expect("static spacing regex"))
}

fn whitespace_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static whitespace regex"))
}

/// Configurable text normalizer
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer {
    /// Remove `http(s)://` and `www.` links
    pub strip_urls: bool,
    /// Drop lines that contain only a page number
    pub strip_page_numbers: bool,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self {
            strip_urls: true,
            strip_page_numbers: true,
        }
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strip_urls(mut self, strip: bool) -> Self {
        self.strip_urls = strip;
        self
    }

    pub fn with_strip_page_numbers(mut self, strip: bool) -> Self {
        self.strip_page_numbers = strip;
        self
    }

    /// Normalize `text`; empty input yields empty output
    pub fn normalize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let mut out = text
            .replace("\r\n", "\n")
            .replace(['\r', '\u{000C}'], "\n");

        if self.strip_page_numbers {
            out = page_number_pattern().replace_all(&out, "").into_owned();
        }
        if self.strip_urls {
            out = url_pattern().replace_all(&out, " ").into_owned();
        }

        let out = repeated_terminal_pattern().replace_all(&out, "$1");
        let out = whitespace_pattern().replace_all(&out, " ");
        let out = space_before_punct_pattern().replace_all(&out, "$1");

        out.trim().to_string()
    }
}

/// Normalize `text` with the default settings
pub fn normalize(text: &str) -> String {
    TextNormalizer::default().normalize(text)
}

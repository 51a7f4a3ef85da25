//! Linguistic model
//!
//! Bundles the read-only language resources every stage needs: stopwords,
//! connectives, abbreviations, tokenizer and tagger. [`LinguisticModel::shared`]
//! builds one instance per language on first use and hands out `&'static`
//! references afterwards; components take the model as an explicit argument
//! so tests can pass a custom one.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::locale;
use super::stopwords::StopwordFilter;
use super::tagger::PosTagger;
use super::tokenizer::Tokenizer;
use crate::types::Token;

/// Languages with bundled resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en", alias = "english")]
    English,
    #[serde(rename = "tr", alias = "turkish")]
    Turkish,
    #[serde(rename = "de", alias = "german")]
    German,
    #[serde(rename = "fr", alias = "french")]
    French,
    #[serde(rename = "es", alias = "spanish")]
    Spanish,
    #[serde(rename = "it", alias = "italian")]
    Italian,
    #[serde(rename = "pt", alias = "portuguese")]
    Portuguese,
    #[serde(rename = "nl", alias = "dutch")]
    Dutch,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::Turkish,
        Language::German,
        Language::French,
        Language::Spanish,
        Language::Italian,
        Language::Portuguese,
        Language::Dutch,
    ];

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Turkish => "tr",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Dutch => "nl",
        }
    }

    /// Parse a language code or English name, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "tr" | "turkish" => Some(Language::Turkish),
            "de" | "german" => Some(Language::German),
            "fr" | "french" => Some(Language::French),
            "es" | "spanish" => Some(Language::Spanish),
            "it" | "italian" => Some(Language::Italian),
            "pt" | "portuguese" => Some(Language::Portuguese),
            "nl" | "dutch" => Some(Language::Dutch),
            _ => None,
        }
    }

    /// Lowercase `word` with this language's casing rules
    ///
    /// Turkish maps dotted `İ` to `i` and dotless `I` to `ı`; every other
    /// language uses the default Unicode mapping.
    pub fn lowercase(&self, word: &str) -> String {
        match self {
            Language::Turkish => word
                .chars()
                .map(|c| match c {
                    'İ' => 'i',
                    'I' => 'ı',
                    c => c,
                })
                .flat_map(char::to_lowercase)
                .collect(),
            _ => word.to_lowercase(),
        }
    }

    fn slot(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a language string is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language \"{0}\"")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Language::parse(value).ok_or_else(|| UnsupportedLanguage(value.to_string()))
    }
}

static SHARED: [OnceLock<LinguisticModel>; Language::ALL.len()] =
    [const { OnceLock::new() }; Language::ALL.len()];

/// Read-only language resources
#[derive(Debug, Clone)]
pub struct LinguisticModel {
    language: Language,
    stopwords: StopwordFilter,
    connectives: FxHashSet<String>,
    abbreviations: FxHashSet<String>,
    tokenizer: Tokenizer,
    tagger: PosTagger,
}

impl LinguisticModel {
    /// Build a fresh model for `language`
    pub fn new(language: Language) -> Self {
        Self {
            language,
            stopwords: StopwordFilter::new(language),
            connectives: to_set(locale::connectives(language)),
            abbreviations: to_set(locale::abbreviations(language)),
            tokenizer: Tokenizer::new(),
            tagger: PosTagger::new(language),
        }
    }

    /// The process-wide model for `language`, built on first use
    pub fn shared(language: Language) -> &'static LinguisticModel {
        SHARED[language.slot()].get_or_init(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(language = %language, "loading linguistic model");
            LinguisticModel::new(language)
        })
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Replace the connective list
    pub fn with_connectives(mut self, words: &[&str]) -> Self {
        self.connectives = words.iter().map(|w| self.language.lowercase(w)).collect();
        self
    }

    /// Replace the abbreviation list
    pub fn with_abbreviations(mut self, words: &[&str]) -> Self {
        self.abbreviations = words.iter().map(|w| self.language.lowercase(w)).collect();
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.is_stopword(word)
    }

    /// Lowercase `word` for lookups in this model's word lists
    pub fn lowercase(&self, word: &str) -> String {
        self.language.lowercase(word)
    }

    /// `word` must already be lowercase
    pub fn is_connective(&self, word: &str) -> bool {
        self.connectives.contains(word)
    }

    /// `word` must already be lowercase and without its final period
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(word)
    }

    /// Tokenize and tag `text`
    pub fn analyze(&self, text: &str) -> Vec<Token> {
        self.tokenizer
            .words(text)
            .enumerate()
            .map(|(position, (start, word))| {
                let norm = self.language.lowercase(word);
                let is_stopword = self.stopwords.is_stopword(&norm);
                let pos = self.tagger.tag(word, &norm, position, is_stopword);
                Token::new(word, norm, pos, start, start + word.len(), is_stopword)
            })
            .collect()
    }
}

fn to_set(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

//! Stopword filtering
//!
//! Stopword lists come from the `stop-words` crate and are extended with a
//! curated per-language set of conjunctions and discourse connectives.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use super::locale;
use super::model::Language;

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
    /// Casing rules used to lowercase lookups
    language: Language,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl StopwordFilter {
    /// Create the stopword filter for a language, including its connectives
    pub fn new(language: Language) -> Self {
        let mut stopwords = Self::load_stopwords(language);
        stopwords.extend(
            locale::extra_stopwords(language)
                .iter()
                .map(|w| w.to_string()),
        );
        Self {
            stopwords,
            language,
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            language: Language::default(),
        }
    }

    /// Create a stopword filter from a custom list in `language`
    pub fn from_list(language: Language, words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| language.lowercase(w)).collect(),
            language,
        }
    }

    /// Check if a word is a stopword, ignoring case
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word) || self.stopwords.contains(&self.language.lowercase(word))
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: Language) -> FxHashSet<String> {
        let lang = match language {
            Language::English => LANGUAGE::English,
            Language::Turkish => LANGUAGE::Turkish,
            Language::German => LANGUAGE::German,
            Language::French => LANGUAGE::French,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Italian => LANGUAGE::Italian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Dutch => LANGUAGE::Dutch,
        };

        get(lang).iter().map(|s| language.lowercase(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new(Language::English);

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("summarization"));
    }

    #[test]
    fn test_connectives_are_stopwords() {
        let filter = StopwordFilter::new(Language::English);

        assert!(filter.is_stopword("however"));
        assert!(filter.is_stopword("moreover"));
        assert!(filter.is_stopword("because"));
        assert!(filter.is_stopword("and"));
    }

    #[test]
    fn test_turkish_curated_additions() {
        let filter = StopwordFilter::new(Language::Turkish);

        assert!(filter.is_stopword("ve"));
        assert!(filter.is_stopword("çünkü"));
        assert!(filter.is_stopword("dolayısıyla"));
        assert!(!filter.is_stopword("zeka"));
    }

    #[test]
    fn test_custom_stopwords() {
        let filter = StopwordFilter::from_list(Language::English, &["Custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("WORDS"));
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_turkish_casing() {
        let filter = StopwordFilter::new(Language::Turkish);
        assert!(filter.is_stopword("İçin"));
        assert!(filter.is_stopword("İÇİN"));

        let custom = StopwordFilter::from_list(Language::Turkish, &["IŞIK"]);
        assert!(custom.is_stopword("ışık"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::new(Language::German);

        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(filter.is_stopword("jedoch"));
    }
}

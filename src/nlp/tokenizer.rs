//! Word tokenization
//!
//! Splits text on Unicode word boundaries (UAX #29). Punctuation and
//! whitespace never become tokens.

use unicode_segmentation::UnicodeSegmentation;

/// Unicode-aware word tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Words of `text` with their byte offsets
    pub fn words<'a>(&self, text: &'a str) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        text.unicode_word_indices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        Tokenizer::new().words(text).map(|(_, w)| w).collect()
    }

    #[test]
    fn test_punctuation_is_dropped() {
        assert_eq!(
            words("However, it needs more data."),
            vec!["However", "it", "needs", "more", "data"]
        );
    }

    #[test]
    fn test_offsets() {
        let words: Vec<_> = Tokenizer::new().words("AI helps doctors.").collect();
        assert_eq!(words, vec![(0, "AI"), (3, "helps"), (9, "doctors")]);
    }

    #[test]
    fn test_contractions_and_numbers() {
        assert_eq!(
            words("Don't pay 3.5 dollars!"),
            vec!["Don't", "pay", "3.5", "dollars"]
        );
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(
            words("Yapay zekâ, İstanbul'da gelişiyor."),
            vec!["Yapay", "zekâ", "İstanbul'da", "gelişiyor"]
        );
    }

    #[test]
    fn test_empty() {
        assert!(words("  ... !!").is_empty());
    }
}

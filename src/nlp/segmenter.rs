//! Sentence segmentation
//!
//! Splits normalized text at terminal punctuation. A period is not a boundary
//! when it follows a known abbreviation or a single-letter initial, and no
//! terminal mark is a boundary when the next word starts lowercase or with a
//! digit. Closing quotes and brackets stay attached to the sentence they
//! close.

use super::model::LinguisticModel;
use crate::types::Sentence;

const TERMINALS: [char; 3] = ['.', '!', '?'];

fn is_terminal(c: char) -> bool {
    TERMINALS.contains(&c)
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '»' | '\u{201D}' | '\u{2019}')
}

fn is_opening(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '{' | '«' | '\u{201C}' | '\u{2018}')
}

/// A candidate sentence before filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSentence<'a> {
    /// Trimmed sentence text
    pub text: &'a str,
    /// Byte offset of `text` in the source
    pub start: usize,
}

impl RawSentence<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Lazy iterator over candidate sentences
///
/// Cloning the iterator restarts from the clone point, so the sequence can be
/// walked as many times as needed.
#[derive(Debug, Clone)]
pub struct RawSentences<'a> {
    text: &'a str,
    pos: usize,
    model: &'a LinguisticModel,
}

impl<'a> RawSentences<'a> {
    pub fn new(text: &'a str, model: &'a LinguisticModel) -> Self {
        Self { text, pos: 0, model }
    }

    /// End of the run of terminal marks and closers starting at `at`
    fn run_end(&self, at: usize) -> usize {
        let mut end = at;
        let mut seen_closer = false;
        for c in self.text[at..].chars() {
            if is_terminal(c) && !seen_closer {
                end += c.len_utf8();
            } else if is_closing(c) {
                seen_closer = true;
                end += c.len_utf8();
            } else {
                break;
            }
        }
        end
    }

    /// Whether the terminal run `[at, end)` ends a sentence
    fn is_boundary(&self, at: usize, end: usize) -> bool {
        let rest = &self.text[end..];
        match rest.chars().next() {
            None => return true,
            Some(c) if !c.is_whitespace() => return false,
            Some(_) => {}
        }
        if rest
            .trim_start()
            .chars()
            .next()
            .is_some_and(|c| c.is_lowercase() || c.is_ascii_digit())
        {
            return false;
        }

        let run = &self.text[at..end];
        let single_period = run.starts_with('.') && !run[1..].starts_with(is_terminal);
        if single_period && self.is_abbreviation_before(at) {
            return false;
        }
        true
    }

    fn is_abbreviation_before(&self, at: usize) -> bool {
        let before = &self.text[..at];
        let word_start = before
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let word = self
            .model
            .lowercase(before[word_start..].trim_start_matches(is_opening));

        if word.is_empty() {
            return false;
        }
        let mut chars = word.chars();
        let is_initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
        is_initial || self.model.is_abbreviation(&word)
    }
}

impl<'a> Iterator for RawSentences<'a> {
    type Item = RawSentence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        while self.pos < text.len() {
            let start = self.pos;
            let mut skip_to = start;
            let mut boundary = None;

            for (offset, c) in text[start..].char_indices() {
                let i = start + offset;
                if i < skip_to || !is_terminal(c) {
                    continue;
                }
                let end = self.run_end(i);
                skip_to = end;
                if self.is_boundary(i, end) {
                    boundary = Some(end);
                    break;
                }
            }

            let end = boundary.unwrap_or(text.len());
            self.pos = end;

            let chunk = &text[start..end];
            let trimmed = chunk.trim();
            if trimmed.is_empty() {
                continue;
            }
            let lead = chunk.len() - chunk.trim_start().len();
            return Some(RawSentence {
                text: trimmed,
                start: start + lead,
            });
        }
        None
    }
}

/// Whether a candidate qualifies as a sentence
///
/// It must be longer than `min_chars` characters, contain a letter and end in
/// `.`, `!` or `?`.
pub fn qualifies(text: &str, min_chars: usize) -> bool {
    text.chars().count() > min_chars
        && text.chars().any(char::is_alphabetic)
        && text.chars().last().is_some_and(is_terminal)
}

/// Sentence segmenter bound to a linguistic model
#[derive(Debug, Clone, Copy)]
pub struct SentenceSegmenter<'m> {
    model: &'m LinguisticModel,
    min_chars: usize,
}

impl<'m> SentenceSegmenter<'m> {
    pub fn new(model: &'m LinguisticModel) -> Self {
        Self {
            model,
            min_chars: 10,
        }
    }

    /// Set the minimum sentence length (exclusive, in characters)
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Candidate sentences of `text`, unfiltered
    pub fn raw<'a>(&'a self, text: &'a str) -> RawSentences<'a> {
        RawSentences::new(text, self.model)
    }

    /// Qualifying sentences of `text`, numbered by their filtered position
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        self.raw(text)
            .filter(|raw| qualifies(raw.text, self.min_chars))
            .enumerate()
            .map(|(index, raw)| Sentence::new(raw.text, index, raw.start, raw.end()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::model::Language;

    fn english() -> &'static LinguisticModel {
        LinguisticModel::shared(Language::English)
    }

    fn raw_texts(text: &str) -> Vec<String> {
        SentenceSegmenter::new(english())
            .raw(text)
            .map(|r| r.text.to_string())
            .collect()
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(
            raw_texts("AI helps doctors. However, it needs more data. Is it ready? Yes!"),
            vec![
                "AI helps doctors.",
                "However, it needs more data.",
                "Is it ready?",
                "Yes!"
            ]
        );
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        assert_eq!(
            raw_texts("Dr. Smith met Prof. Jones today. They talked, e.g. about data."),
            vec![
                "Dr. Smith met Prof. Jones today.",
                "They talked, e.g. about data."
            ]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        assert_eq!(
            raw_texts("J. K. Rowling wrote books. Readers loved them."),
            vec!["J. K. Rowling wrote books.", "Readers loved them."]
        );
    }

    #[test]
    fn test_lowercase_continuation_does_not_split() {
        assert_eq!(
            raw_texts("The value is approx. three times higher. Next sentence here."),
            vec![
                "The value is approx. three times higher.",
                "Next sentence here."
            ]
        );
        assert_eq!(raw_texts("Wait... what happened here?"), vec!["Wait... what happened here?"]);
    }

    #[test]
    fn test_decimals_and_closing_quotes() {
        assert_eq!(
            raw_texts("Pi is 3.14 roughly. He said \"stop.\" Then he left."),
            vec!["Pi is 3.14 roughly.", "He said \"stop.\"", "Then he left."]
        );
    }

    #[test]
    fn test_trailing_fragment_without_terminal() {
        assert_eq!(
            raw_texts("A complete sentence. trailing words"),
            vec!["A complete sentence. trailing words"]
        );
        assert_eq!(
            raw_texts("A complete sentence. Trailing words"),
            vec!["A complete sentence.", "Trailing words"]
        );
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "First sentence here.  Second one follows.";
        for raw in SentenceSegmenter::new(english()).raw(text) {
            assert_eq!(&text[raw.start..raw.end()], raw.text);
        }
    }

    #[test]
    fn test_iterator_is_restartable() {
        let segmenter = SentenceSegmenter::new(english());
        let text = "One sentence here. Two sentences here.";
        let iter = segmenter.raw(text);
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_qualifies() {
        assert!(qualifies("AI helps doctors.", 10));
        assert!(!qualifies("Too short.", 10)); // exactly 10 chars
        assert!(!qualifies("12345678901234.", 10));
        assert!(!qualifies("No terminal punctuation", 10));
        assert!(!qualifies("He said \"stop.\"", 10));
    }

    #[test]
    fn test_segment_renumbers_after_filtering() {
        let text = "Tiny one. AI helps doctors. Ok. The results were promising.";
        let sentences = SentenceSegmenter::new(english()).segment(text);
        let indexed: Vec<_> = sentences.iter().map(|s| (s.index, s.text.as_str())).collect();
        assert_eq!(
            indexed,
            vec![(0, "AI helps doctors."), (1, "The results were promising.")]
        );
        assert_eq!(&text[sentences[1].start..sentences[1].end], sentences[1].text);
    }

    #[test]
    fn test_segment_empty() {
        assert!(SentenceSegmenter::new(english()).segment("").is_empty());
        assert!(SentenceSegmenter::new(english()).segment("no sentences").is_empty());
    }
}

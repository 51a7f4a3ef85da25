//! Top-k sentence selection
//!
//! Picks the `k = round(N * ratio)` best sentences by blended score (ties go
//! to the earlier sentence), then restores document order so the summary
//! reads in the same sequence as the source.

use crate::errors::{Result, SummarizerError};
use crate::types::{ScoreMap, SelectedSentence, Sentence};

/// Check that `ratio` lies in `(0, 1]`
pub fn validate_ratio(ratio: f64) -> Result<()> {
    if ratio > 0.0 && ratio <= 1.0 {
        Ok(())
    } else {
        Err(SummarizerError::InvalidRatio { ratio })
    }
}

/// Number of sentences to keep out of `n`, clamped to `[1, n]`
///
/// Rounds half away from zero. Returns 0 only when `n` is 0.
pub fn target_count(n: usize, ratio: f64) -> usize {
    if n == 0 {
        return 0;
    }
    ((n as f64 * ratio).round() as usize).clamp(1, n)
}

/// Selects and orders summary sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector;

impl SentenceSelector {
    pub fn new() -> Self {
        Self
    }

    /// Select the top sentences by `scores`, returned in document order
    ///
    /// Sentences without a score rank as 0.0.
    pub fn select(
        &self,
        sentences: &[Sentence],
        scores: &ScoreMap,
        ratio: f64,
    ) -> Result<Vec<SelectedSentence>> {
        validate_ratio(ratio)?;

        let k = target_count(sentences.len(), ratio);
        let full = ScoreMap::new((0..sentences.len()).map(|i| scores.get(i)).collect());

        let mut chosen: Vec<usize> = full.ranked_indices().into_iter().take(k).collect();
        chosen.sort_unstable();

        Ok(chosen
            .into_iter()
            .map(|i| SelectedSentence {
                index: sentences[i].index,
                text: sentences[i].text.clone(),
                score: full.get(i),
            })
            .collect())
    }

    /// Join selected sentences with single spaces
    pub fn assemble(&self, selected: &[SelectedSentence]) -> String {
        selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(texts: &[&str]) -> Vec<Sentence> {
        let mut offset = 0;
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let s = Sentence::new(*t, i, offset, offset + t.len());
                offset += t.len() + 1;
                s
            })
            .collect()
    }

    #[test]
    fn test_target_count() {
        assert_eq!(target_count(4, 0.5), 2);
        assert_eq!(target_count(10, 0.01), 1);
        assert_eq!(target_count(3, 1.0), 3);
        assert_eq!(target_count(3, 0.5), 2); // 1.5 rounds away from zero
        assert_eq!(target_count(7, 0.2), 1); // 1.4
        assert_eq!(target_count(0, 0.5), 0);
    }

    #[test]
    fn test_validate_ratio() {
        assert!(validate_ratio(1.0).is_ok());
        assert!(validate_ratio(0.001).is_ok());
        for bad in [0.0, -0.5, 1.0001, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                validate_ratio(bad),
                Err(SummarizerError::InvalidRatio { .. })
            ));
        }
    }

    #[test]
    fn test_select_restores_document_order() {
        let sents = sentences(&["First one.", "Second one.", "Third one.", "Fourth one."]);
        let scores = ScoreMap::new(vec![0.1, 0.9, 0.2, 0.8]);
        let selected = SentenceSelector::new().select(&sents, &scores, 0.5).unwrap();

        let indices: Vec<_> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 3]);
        assert_eq!(
            SentenceSelector::new().assemble(&selected),
            "Second one. Fourth one."
        );
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        let sents = sentences(&["Alpha here.", "Beta here.", "Gamma here."]);
        let scores = ScoreMap::new(vec![0.5, 0.5, 0.5]);
        let selected = SentenceSelector::new().select(&sents, &scores, 0.5).unwrap();

        let indices: Vec<_> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_full_ratio_keeps_everything() {
        let sents = sentences(&["One.", "Two.", "Three."]);
        let scores = ScoreMap::new(vec![0.3, 0.1, 0.2]);
        let selected = SentenceSelector::new().select(&sents, &scores, 1.0).unwrap();

        assert_eq!(SentenceSelector::new().assemble(&selected), "One. Two. Three.");
    }

    #[test]
    fn test_invalid_ratio_is_rejected() {
        let sents = sentences(&["One.", "Two."]);
        let scores = ScoreMap::new(vec![0.3, 0.1]);
        let err = SentenceSelector::new().select(&sents, &scores, 1.5).unwrap_err();

        assert!(matches!(err, SummarizerError::InvalidRatio { ratio } if ratio == 1.5));
    }

    #[test]
    fn test_missing_scores_rank_last() {
        let sents = sentences(&["One.", "Two.", "Three."]);
        let scores = ScoreMap::new(vec![0.3]);
        let selected = SentenceSelector::new().select(&sents, &scores, 0.34).unwrap();

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].index, 0);
        assert_eq!(selected[0].score, 0.3);
    }

    #[test]
    fn test_empty_input() {
        let selected = SentenceSelector::new()
            .select(&[], &ScoreMap::default(), 0.5)
            .unwrap();
        assert!(selected.is_empty());
        assert_eq!(SentenceSelector::new().assemble(&selected), "");
    }
}

use proptest::prelude::*;

use rapid_summarizer::summarizer::selector::target_count;
use rapid_summarizer::{
    CentralityRanker, LinguisticModel, SentenceSegmenter, SimilarityGraphBuilder, Summarizer,
    TextNormalizer,
};

const VOCABULARY: [&str; 24] = [
    "river", "engine", "garden", "signal", "doctor", "market", "planet", "system", "forest",
    "pattern", "network", "window", "harbor", "museum", "village", "battery", "library",
    "weather", "science", "student", "bridge", "council", "budget", "painter",
];

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A sentence of 3 to 9 vocabulary words, always long enough to qualify.
fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(0..VOCABULARY.len(), 3..10).prop_map(|ids| {
        let words: Vec<&str> = ids.iter().map(|&i| VOCABULARY[i]).collect();
        format!("{} {}.", capitalize(words[0]), words[1..].join(" "))
    })
}

fn document() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(sentence(), 2..16)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_summary_is_ordered_subsequence(sentences in document(), ratio in 0.05f64..=1.0) {
        let text = sentences.join(" ");
        let summary = Summarizer::default().summarize_detailed(&text, ratio).unwrap();

        let indices: Vec<usize> = summary.sentences.iter().map(|s| s.index).collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        for selected in &summary.sentences {
            prop_assert_eq!(&selected.text, &sentences[selected.index]);
        }
    }

    #[test]
    fn prop_summary_length_matches_ratio(sentences in document(), ratio in 0.05f64..=1.0) {
        let n = sentences.len();
        let text = sentences.join(" ");
        let summary = Summarizer::default().summarize_detailed(&text, ratio).unwrap();

        let expected = ((n as f64 * ratio).round() as usize).clamp(1, n);
        prop_assert_eq!(summary.sentences.len(), expected);
        prop_assert_eq!(target_count(n, ratio), expected);
    }

    #[test]
    fn prop_summarize_is_deterministic(sentences in document(), ratio in 0.05f64..=1.0) {
        let text = sentences.join(" ");
        let summarizer = Summarizer::default();
        prop_assert_eq!(
            summarizer.summarize(&text, ratio).unwrap(),
            summarizer.summarize(&text, ratio).unwrap()
        );
    }

    #[test]
    fn prop_similarity_matrix_invariants(sentences in document()) {
        let model = LinguisticModel::shared(Default::default());
        let text = TextNormalizer::default().normalize(&sentences.join(" "));
        let segmented = SentenceSegmenter::new(model).segment(&text);
        let matrix = SimilarityGraphBuilder::new(model).build(&segmented);

        prop_assert_eq!(matrix.size(), sentences.len());
        for i in 0..matrix.size() {
            prop_assert_eq!(matrix.get(i, i), 0.0);
            for j in 0..matrix.size() {
                let value = matrix.get(i, j);
                prop_assert!((0.0..=1.0).contains(&value));
                prop_assert_eq!(value, matrix.get(j, i));
            }
        }
    }

    #[test]
    fn prop_centrality_is_a_distribution(sentences in document()) {
        let model = LinguisticModel::shared(Default::default());
        let text = TextNormalizer::default().normalize(&sentences.join(" "));
        let segmented = SentenceSegmenter::new(model).segment(&text);
        let matrix = SimilarityGraphBuilder::new(model).build(&segmented);
        let centrality = CentralityRanker::new().rank(&matrix);

        prop_assert_eq!(centrality.len(), sentences.len());
        prop_assert!((centrality.sum() - 1.0).abs() < 1e-9);
        prop_assert!(centrality.scores.iter().all(|&s| s >= 0.0));
    }
}
